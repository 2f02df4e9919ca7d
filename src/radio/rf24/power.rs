use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
use embedded_time::Clock;

use super::{bit_fields::Config, registers};
use crate::radio::{prelude::EsbPower, Nrf24Error, RF24};

impl<SPI, DO, DELAY, CLOCK> EsbPower for RF24<SPI, DO, DELAY, CLOCK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    type PowerErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// In full power down mode (a sleep state), the radio will consume approximately
    /// 900nA (.0009mA). Register values are retained.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType> {
        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        self.write_register(registers::CONFIG, config.with_pwr_up(false).into_bits())?;
        Ok(())
    }

    /// The radio needs up to 1.5ms (depending on the crystal) to reach standby after this.
    /// Callers that go straight into RX or TX mode get that time covered by the
    /// settling delays of those operations.
    fn power_up(&mut self) -> Result<(), Self::PowerErrorType> {
        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        self.write_register(registers::CONFIG, config.with_pwr_up(true).into_bits())?;
        Ok(())
    }
}
