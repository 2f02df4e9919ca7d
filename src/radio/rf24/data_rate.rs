use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
use embedded_time::Clock;

use super::{bit_fields::RfSetup, registers};
use crate::radio::{prelude::EsbDataRate, Nrf24Error, RF24};
use crate::DataRate;

impl<SPI, DO, DELAY, CLOCK> EsbDataRate for RF24<SPI, DO, DELAY, CLOCK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    type DataRateErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType> {
        Ok(RfSetup::from_bits(self.read_register(registers::RF_SETUP)?).data_rate())
    }

    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<bool, Self::DataRateErrorType> {
        let setup = RfSetup::from_bits(self.read_register(registers::RF_SETUP)?)
            .with_data_rate(data_rate)
            .into_bits();
        self._wide_band = data_rate == DataRate::Mbps2;
        self.write_register(registers::RF_SETUP, setup)?;
        let accepted = self.read_register(registers::RF_SETUP)? == setup;
        if !accepted {
            self._wide_band = false;
            #[cfg(feature = "defmt")]
            defmt::debug!("data rate {} was refused", data_rate);
        }
        Ok(accepted)
    }
}
