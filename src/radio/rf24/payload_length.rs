use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
use embedded_time::Clock;

use super::{bit_fields::Feature, commands, registers, MAX_PAYLOAD_SIZE};
use crate::radio::{prelude::EsbPayloadLength, Nrf24Error, RF24};

impl<SPI, DO, DELAY, CLOCK> RF24<SPI, DO, DELAY, CLOCK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    /// Write the FEATURE register.
    ///
    /// Non-plus radios ignore FEATURE (and DYNPD) until they receive the
    /// ACTIVATE command, so a write that does not read back is retried once
    /// after sending it.
    fn write_feature(&mut self, feature: Feature) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.write_register(registers::FEATURE, feature.into_bits())?;
        if self.read_register(registers::FEATURE)? != feature.into_bits() {
            #[cfg(feature = "defmt")]
            defmt::debug!("FEATURE register is locked; sending ACTIVATE");
            self.toggle_features()?;
            self.write_register(registers::FEATURE, feature.into_bits())?;
        }
        Ok(())
    }
}

impl<SPI, DO, DELAY, CLOCK> EsbPayloadLength for RF24<SPI, DO, DELAY, CLOCK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    type PayloadLengthErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_payload_size(&mut self, size: u8) {
        self._payload_size = size.clamp(1, MAX_PAYLOAD_SIZE);
    }

    fn get_payload_size(&self) -> u8 {
        self._payload_size
    }

    fn set_dynamic_payloads(&mut self, enable: bool) -> Result<(), Self::PayloadLengthErrorType> {
        let feature = Feature::from_bits(self.read_register(registers::FEATURE)?)
            .with_dynamic_payloads(enable);
        self.write_feature(feature)?;
        self.write_register(registers::DYNPD, if enable { 0x3F } else { 0 })?;
        self._dynamic_payloads = enable;
        Ok(())
    }

    fn set_ack_payloads(&mut self, enable: bool) -> Result<(), Self::PayloadLengthErrorType> {
        let feature =
            Feature::from_bits(self.read_register(registers::FEATURE)?).with_ack_payloads(enable);
        self.write_feature(feature)?;
        if enable {
            // every pipe goes dynamic so reads never pad a static pipe
            self.write_register(registers::DYNPD, 0x3F)?;
            self._dynamic_payloads = true;
        }
        Ok(())
    }

    fn get_dynamic_payload_size(&mut self) -> Result<u8, Self::PayloadLengthErrorType> {
        self.spi_read(1, commands::R_RX_PL_WID)?;
        Ok(self._buf[1])
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, registers};
    use crate::radio::prelude::EsbPayloadLength;
    use crate::{spi_test_expects, test::mk_radio};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn payload_size_clamped() {
        let mocks = mk_radio(&[], &[]);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.get_payload_size(), 32);
        radio.set_payload_size(0);
        assert_eq!(radio.get_payload_size(), 1);
        radio.set_payload_size(33);
        assert_eq!(radio.get_payload_size(), 32);
        radio.set_payload_size(12);
        assert_eq!(radio.get_payload_size(), 12);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn dynamic_payloads_on_locked_chip() {
        let spi_expectations = spi_test_expects![
            (vec![registers::FEATURE, 0xFFu8], vec![0xEu8, 0u8]),
            (
                vec![registers::FEATURE | commands::W_REGISTER, 4u8],
                vec![0xEu8, 0u8],
            ),
            // the write was ignored
            (vec![registers::FEATURE, 0xFFu8], vec![0xEu8, 0u8]),
            (
                vec![commands::ACTIVATE, commands::ACTIVATE_KEY],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::FEATURE | commands::W_REGISTER, 4u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::DYNPD | commands::W_REGISTER, 0x3Fu8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_dynamic_payloads(true).unwrap();
        assert!(radio._dynamic_payloads);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn disable_dynamic_payloads() {
        let spi_expectations = spi_test_expects![
            (vec![registers::FEATURE, 0xFFu8], vec![0xEu8, 7u8]),
            // ACK payloads go with dynamic payloads
            (
                vec![registers::FEATURE | commands::W_REGISTER, 1u8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::FEATURE, 0xFFu8], vec![0xEu8, 1u8]),
            (
                vec![registers::DYNPD | commands::W_REGISTER, 0u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_dynamic_payloads(false).unwrap();
        assert!(!radio._dynamic_payloads);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn ack_payloads() {
        let spi_expectations = spi_test_expects![
            (vec![registers::FEATURE, 0xFFu8], vec![0xEu8, 0u8]),
            (
                vec![registers::FEATURE | commands::W_REGISTER, 6u8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::FEATURE, 0xFFu8], vec![0xEu8, 6u8]),
            (
                vec![registers::DYNPD | commands::W_REGISTER, 0x3Fu8],
                vec![0xEu8, 0u8],
            ),
            // disabling keeps dynamic payloads
            (vec![registers::FEATURE, 0xFFu8], vec![0xEu8, 6u8]),
            (
                vec![registers::FEATURE | commands::W_REGISTER, 4u8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::FEATURE, 0xFFu8], vec![0xEu8, 4u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_ack_payloads(true).unwrap();
        assert!(radio._dynamic_payloads);
        radio.set_ack_payloads(false).unwrap();
        assert!(radio._dynamic_payloads);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn get_dynamic_payload_size() {
        let spi_expectations =
            spi_test_expects![(vec![commands::R_RX_PL_WID, 0xFFu8], vec![0x40u8, 12u8]),];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.get_dynamic_payload_size(), Ok(12u8));
        spi.done();
        ce_pin.done();
    }
}
