use super::{registers, Nrf24Error, RF24};
use crate::{
    radio::{
        prelude::{
            EsbAutoAck, EsbChannel, EsbCrcLength, EsbDataRate, EsbFifo, EsbInit, EsbPaLevel,
            EsbPayloadLength, EsbStatus,
        },
        RadioConfig,
    },
    DataRate, StatusFlags,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
use embedded_time::Clock;

impl<SPI, DO, DELAY, CLOCK> EsbInit for RF24<SPI, DO, DELAY, CLOCK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    type ConfigErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// Initialize the radio's hardware using the [`SpiDevice`] and [`OutputPin`] given
    /// to [`RF24::new()`].
    ///
    /// Returns [`Nrf24Error::BinaryCorruption`] if the CONFIG register does not
    /// read back what was written to it.
    fn init(&mut self) -> Result<(), Self::ConfigErrorType> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;

        // Technically we require 4.5ms + 14us as a worst case after power on reset.
        self._delay_impl.delay_ms(5);

        self.reset_config()?;
        self.with_config(&RadioConfig::default())
    }

    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType> {
        self.set_retries(config.auto_retry_delay(), config.auto_retry_count())?;
        self.set_pa_level(config.pa_level())?;

        // only the plus variant accepts 250 Kbps
        self._p_variant = self.set_data_rate(DataRate::Kbps250)?;
        #[cfg(feature = "defmt")]
        defmt::debug!("nRF24L01+ detected: {=bool}", self._p_variant);
        self.set_data_rate(config.data_rate())?;

        self.set_crc_length(config.crc_length())?;
        self.set_payload_size(config.payload_size());
        if config.dynamic_payloads() {
            self.set_dynamic_payloads(true)?;
        } else {
            self.write_register(registers::DYNPD, 0)?;
            self._dynamic_payloads = false;
        }

        self.clear_status_flags(StatusFlags::new())?;
        self.set_channel(config.channel())?;

        self.flush_rx()?;
        self.flush_tx()
    }
}
