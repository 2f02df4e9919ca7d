use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
use embedded_time::Clock;

use super::{commands, registers};
use crate::radio::{prelude::EsbStatus, Nrf24Error, RF24};
use crate::StatusFlags;

impl<SPI, DO, DELAY, CLOCK> EsbStatus for RF24<SPI, DO, DELAY, CLOCK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    type StatusErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_status_flags(&self) -> StatusFlags {
        self._status
    }

    fn get_status(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        self.spi_read(0, commands::NOP)
    }

    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        self.write_register(registers::STATUS, flags.into_bits() & StatusFlags::IRQ_MASK)?;
        Ok(())
    }

    fn what_happened(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        // the byte clocked out during this write is STATUS before the flags get cleared
        let flags = self.write_register(registers::STATUS, StatusFlags::IRQ_MASK)?;
        #[cfg(feature = "defmt")]
        defmt::debug!("what happened: {}", flags);
        Ok(flags)
    }
}
