use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
use embedded_time::Clock;

use super::{bit_fields::SetupRetry, registers};
use crate::radio::{prelude::EsbAutoAck, Nrf24Error, RF24};

impl<SPI, DO, DELAY, CLOCK> EsbAutoAck for RF24<SPI, DO, DELAY, CLOCK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    type AutoAckErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_retries(&mut self, delay: u8, count: u8) -> Result<(), Self::AutoAckErrorType> {
        let retries = SetupRetry::new()
            .with_ard(delay & 0xF)
            .with_arc(count & 0xF);
        self.write_register(registers::SETUP_RETR, retries.into_bits())?;
        Ok(())
    }

    fn set_auto_ack(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType> {
        self.write_register(registers::EN_AA, if enable { 0x3F } else { 0 })?;
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::registers;
    use crate::radio::prelude::EsbAutoAck;
    use crate::radio::rf24::commands;
    use crate::{spi_test_expects, test::mk_radio};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn set_retries() {
        let spi_expectations = spi_test_expects![
            (
                vec![registers::SETUP_RETR | commands::W_REGISTER, 0x4Fu8],
                vec![0xEu8, 0u8],
            ),
            // only the low nibble of each argument is used
            (
                vec![registers::SETUP_RETR | commands::W_REGISTER, 0x12u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_retries(4, 15).unwrap();
        radio.set_retries(0x31, 0xF2).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn set_auto_ack() {
        let spi_expectations = spi_test_expects![
            (
                vec![registers::EN_AA | commands::W_REGISTER, 0x3Fu8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::EN_AA | commands::W_REGISTER, 0u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_auto_ack(true).unwrap();
        radio.set_auto_ack(false).unwrap();
        spi.done();
        ce_pin.done();
    }
}
