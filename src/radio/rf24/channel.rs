use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
use embedded_time::Clock;

use super::{registers, MAX_CHANNEL};
use crate::radio::{prelude::EsbChannel, Nrf24Error, RF24};

impl<SPI, DO, DELAY, CLOCK> EsbChannel for RF24<SPI, DO, DELAY, CLOCK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    type ChannelErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        self.write_register(registers::RF_CH, channel.min(MAX_CHANNEL))?;
        Ok(())
    }

    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType> {
        self.read_register(registers::RF_CH)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::registers;
    use crate::radio::prelude::EsbChannel;
    use crate::radio::rf24::commands;
    use crate::{spi_test_expects, test::mk_radio};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn set_channel() {
        let spi_expectations = spi_test_expects![
            (
                vec![registers::RF_CH | commands::W_REGISTER, 76u8],
                vec![0xEu8, 0u8],
            ),
            // clamped to the highest channel
            (
                vec![registers::RF_CH | commands::W_REGISTER, 127u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_channel(76).unwrap();
        radio.set_channel(200).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn get_channel() {
        let spi_expectations = spi_test_expects![(vec![registers::RF_CH, 0xFFu8], vec![0xEu8, 76u8]),];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.get_channel(), Ok(76u8));
        spi.done();
        ce_pin.done();
    }
}
