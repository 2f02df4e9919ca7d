use crate::radio::rf24::bit_fields::{Config, RfSetup, SetupRetry};
use crate::radio::rf24::{MAX_CHANNEL, MAX_PAYLOAD_SIZE};
use crate::{CrcLength, DataRate, PaLevel};

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use rf24::radio::RadioConfig;
///
/// let config = RadioConfig::default().with_channel(42);
/// assert_eq!(config.channel(), 42);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RadioConfig {
    pub(crate) config_reg: Config,
    pub(crate) auto_retries: SetupRetry,
    pub(crate) setup_rf: RfSetup,
    channel: u8,
    payload_size: u8,
    dynamic_payloads: bool,
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::channel()`] | `76` |
    /// | [`RadioConfig::pa_level()`] | [`PaLevel::Max`] |
    /// | [`RadioConfig::crc_length()`] | [`CrcLength::Bit16`] |
    /// | [`RadioConfig::data_rate()`] | [`DataRate::Mbps1`] |
    /// | [`RadioConfig::payload_size()`] | `32` |
    /// | [`RadioConfig::dynamic_payloads()`] | `false` |
    /// | [`RadioConfig::auto_retry_delay()`] | `4` |
    /// | [`RadioConfig::auto_retry_count()`] | `15` |
    fn default() -> Self {
        Self {
            config_reg: Config::new().with_crc_length(CrcLength::Bit16),
            /*
               - 4 * 250 + 250 = 1250 us delay between attempts
               - 15 max attempts
            */
            auto_retries: SetupRetry::new().with_ard(4).with_arc(15),
            setup_rf: RfSetup::new()
                .with_data_rate(DataRate::Mbps1)
                .with_pa_level(PaLevel::Max),
            channel: 76,
            payload_size: MAX_PAYLOAD_SIZE,
            dynamic_payloads: false,
        }
    }
}

impl RadioConfig {
    /// Returns the value set by [`RadioConfig::with_crc_length()`].
    pub const fn crc_length(&self) -> CrcLength {
        self.config_reg.crc_length()
    }

    /// The Cyclical Redundancy Checksum (CRC) length.
    ///
    /// See [`EsbCrcLength::set_crc_length()`](fn@crate::radio::prelude::EsbCrcLength::set_crc_length).
    pub fn with_crc_length(self, length: CrcLength) -> Self {
        Self {
            config_reg: self.config_reg.with_crc_length(length),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_data_rate()`].
    pub const fn data_rate(&self) -> DataRate {
        self.setup_rf.data_rate()
    }

    /// The Data Rate (over the air).
    ///
    /// See [`EsbDataRate::set_data_rate()`](fn@crate::radio::prelude::EsbDataRate::set_data_rate).
    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self {
            setup_rf: self.setup_rf.with_data_rate(data_rate),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_pa_level()`].
    pub const fn pa_level(&self) -> PaLevel {
        self.setup_rf.pa_level()
    }

    /// The Power Amplitude (PA) level.
    ///
    /// See [`EsbPaLevel::set_pa_level()`](fn@crate::radio::prelude::EsbPaLevel::set_pa_level).
    pub fn with_pa_level(self, level: PaLevel) -> Self {
        Self {
            setup_rf: self.setup_rf.with_pa_level(level),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_channel()`].
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Set the channel (over the air frequency).
    ///
    /// This value is clamped to range [0, 127].
    /// The radio's frequency can be determined by the following equation:
    /// ```text
    /// frequency (in MHz) = channel + 2400
    /// ```
    pub fn with_channel(self, value: u8) -> Self {
        Self {
            channel: value.min(MAX_CHANNEL),
            ..self
        }
    }

    /// The auto-retry feature's `delay` (set via [`RadioConfig::with_auto_retries()`])
    pub const fn auto_retry_delay(&self) -> u8 {
        self.auto_retries.ard()
    }

    /// The auto-retry feature's `count` (set via [`RadioConfig::with_auto_retries()`])
    pub const fn auto_retry_count(&self) -> u8 {
        self.auto_retries.arc()
    }

    /// Set the auto-retry feature's `delay` and `count` parameters.
    ///
    /// See [`EsbAutoAck::set_retries()`](fn@crate::radio::prelude::EsbAutoAck::set_retries).
    pub fn with_auto_retries(self, delay: u8, count: u8) -> Self {
        Self {
            auto_retries: self
                .auto_retries
                .with_ard(delay.min(15))
                .with_arc(count.min(15)),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_payload_size()`].
    pub const fn payload_size(&self) -> u8 {
        self.payload_size
    }

    /// The static payload size, used while dynamic payloads are disabled.
    ///
    /// This value is clamped to range [1, 32].
    pub fn with_payload_size(self, value: u8) -> Self {
        Self {
            payload_size: value.clamp(1, MAX_PAYLOAD_SIZE),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_dynamic_payloads()`].
    pub const fn dynamic_payloads(&self) -> bool {
        self.dynamic_payloads
    }

    /// Enable or disable dynamic payloads on all pipes.
    ///
    /// See [`EsbPayloadLength::set_dynamic_payloads()`](fn@crate::radio::prelude::EsbPayloadLength::set_dynamic_payloads).
    pub fn with_dynamic_payloads(self, enable: bool) -> Self {
        Self {
            dynamic_payloads: enable,
            ..self
        }
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    use super::RadioConfig;
    use crate::{CrcLength, DataRate, PaLevel};

    #[test]
    fn defaults() {
        let config = RadioConfig::default();
        assert_eq!(config.channel(), 76);
        assert_eq!(config.pa_level(), PaLevel::Max);
        assert_eq!(config.data_rate(), DataRate::Mbps1);
        assert_eq!(config.crc_length(), CrcLength::Bit16);
        assert_eq!(config.payload_size(), 32);
        assert!(!config.dynamic_payloads());
        assert_eq!(config.auto_retry_delay(), 4);
        assert_eq!(config.auto_retry_count(), 15);
        assert_eq!(config.auto_retries.into_bits(), 0x4F);
    }

    #[test]
    fn builder_clamps() {
        let config = RadioConfig::default()
            .with_channel(200)
            .with_payload_size(0)
            .with_auto_retries(20, 30);
        assert_eq!(config.channel(), 127);
        assert_eq!(config.payload_size(), 1);
        assert_eq!(config.auto_retry_delay(), 15);
        assert_eq!(config.auto_retry_count(), 15);
        assert_eq!(config.with_payload_size(64).payload_size(), 32);
    }

    #[test]
    fn builder_sets_fields() {
        let config = RadioConfig::default()
            .with_crc_length(CrcLength::Bit8)
            .with_data_rate(DataRate::Kbps250)
            .with_pa_level(PaLevel::Low)
            .with_dynamic_payloads(true);
        assert_eq!(config.crc_length(), CrcLength::Bit8);
        assert_eq!(config.data_rate(), DataRate::Kbps250);
        assert_eq!(config.pa_level(), PaLevel::Low);
        assert!(config.dynamic_payloads());
        // setting the data rate leaves the PA level alone
        assert_eq!(
            config.with_data_rate(DataRate::Mbps2).pa_level(),
            PaLevel::Low
        );
    }
}
