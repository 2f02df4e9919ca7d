use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
use embedded_time::Clock;

use super::{registers, ADDRESS_WIDTH, MAX_PAYLOAD_SIZE, PIPE_COUNT};
use crate::radio::{prelude::EsbPipe, Nrf24Error, RF24};

/// Convert a most-significant-byte-first address into the on-air byte order.
///
/// Only the 5 least significant bytes are kept. Shorter addresses are zero padded.
fn reversed_address(address: &[u8]) -> [u8; ADDRESS_WIDTH] {
    let mut reversed = [0u8; ADDRESS_WIDTH];
    for (dest, src) in reversed.iter_mut().zip(address.iter().rev()) {
        *dest = *src;
    }
    reversed
}

impl<SPI, DO, DELAY, CLOCK> EsbPipe for RF24<SPI, DO, DELAY, CLOCK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    type PipeErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn open_reading_pipe(&mut self, pipe: u8, address: &[u8]) -> Result<(), Self::PipeErrorType> {
        if pipe >= PIPE_COUNT {
            return Ok(());
        }
        let address = reversed_address(address);
        if pipe == 0 {
            self._pipe0_rx_addr = Some(address);
        }
        // pipes 2 - 5 only store their least significant byte
        let width = if pipe < 2 { ADDRESS_WIDTH } else { 1 };
        self.write_register_buf(registers::RX_ADDR_P0 + pipe, &address, Some(width))?;
        self.write_register(
            registers::RX_PW_P0 + pipe,
            self._payload_size.min(MAX_PAYLOAD_SIZE),
        )?;
        let enabled = self.read_register(registers::EN_RXADDR)?;
        self.write_register(registers::EN_RXADDR, enabled | (1 << pipe))?;
        Ok(())
    }

    fn open_writing_pipe(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType> {
        let address = reversed_address(address);
        // auto-ack packets come back on pipe 0
        self.write_register_buf(registers::RX_ADDR_P0, &address, Some(ADDRESS_WIDTH))?;
        self.write_register_buf(registers::TX_ADDR, &address, Some(ADDRESS_WIDTH))?;
        self.write_register(
            registers::RX_PW_P0,
            self._payload_size.min(MAX_PAYLOAD_SIZE),
        )?;
        Ok(())
    }

    fn close_reading_pipe(&mut self, pipe: u8) -> Result<(), Self::PipeErrorType> {
        if pipe >= PIPE_COUNT {
            return Ok(());
        }
        let enabled = self.read_register(registers::EN_RXADDR)?;
        self.write_register(registers::EN_RXADDR, enabled & !(1 << pipe))?;
        if pipe == 0 {
            self._pipe0_rx_addr = None;
        }
        Ok(())
    }
}
