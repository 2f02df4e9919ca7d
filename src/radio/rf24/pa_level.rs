use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
use embedded_time::Clock;

use super::{bit_fields::RfSetup, registers};
use crate::radio::{prelude::EsbPaLevel, Nrf24Error, RF24};
use crate::PaLevel;

impl<SPI, DO, DELAY, CLOCK> EsbPaLevel for RF24<SPI, DO, DELAY, CLOCK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    type PaLevelErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType> {
        Ok(RfSetup::from_bits(self.read_register(registers::RF_SETUP)?).pa_level())
    }

    /// Only the 2 `RF_PWR` bits are modified; the data rate and LNA bits are kept.
    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType> {
        let setup = RfSetup::from_bits(self.read_register(registers::RF_SETUP)?);
        self.write_register(registers::RF_SETUP, setup.with_pa_level(pa_level).into_bits())?;
        Ok(())
    }
}
