use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
use embedded_time::Clock;

use super::{bit_fields::FifoStatus, commands, registers};
use crate::radio::{
    prelude::{EsbFifo, EsbStatus},
    Nrf24Error, RF24,
};
use crate::{FifoState, StatusFlags};

impl<SPI, DO, DELAY, CLOCK> EsbFifo for RF24<SPI, DO, DELAY, CLOCK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    type FifoErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_read(0, commands::FLUSH_RX)?;
        Ok(())
    }

    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_read(0, commands::FLUSH_TX)?;
        Ok(())
    }

    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType> {
        let fifo = FifoStatus::from_bits(self.read_register(registers::FIFO_STATUS)?);
        let (full, empty) = if about_tx {
            (fifo.tx_full(), fifo.tx_empty())
        } else {
            (fifo.rx_full(), fifo.rx_empty())
        };
        Ok(match (full, empty) {
            (true, _) => FifoState::Full,
            (false, true) => FifoState::Empty,
            (false, false) => FifoState::Occupied,
        })
    }

    fn available(&mut self) -> Result<bool, Self::FifoErrorType> {
        let mut pipe = StatusFlags::RX_PIPE_EMPTY;
        self.available_pipe(&mut pipe)
    }

    fn available_pipe(&mut self, pipe: &mut u8) -> Result<bool, Self::FifoErrorType> {
        let status = self.get_status()?;
        if !status.rx_dr() {
            return Ok(false);
        }
        *pipe = status.rx_pipe();
        self.clear_status_flags(StatusFlags::default().with_rx_dr(true))?;
        if status.tx_ds() {
            // an ACK payload went out with the ACK for this packet
            self.clear_status_flags(StatusFlags::default().with_tx_ds(true))?;
        }
        Ok(true)
    }

    fn read_payload(&mut self, buf: &mut [u8]) -> Result<u8, Self::FifoErrorType> {
        let data_len = buf.len().min(self._payload_size as usize) as u8;
        let blank_len = if self._dynamic_payloads {
            0
        } else {
            self._payload_size - data_len
        };
        self.spi_read(data_len + blank_len, commands::R_RX_PAYLOAD)?;
        let len = data_len as usize;
        buf[..len].copy_from_slice(&self._buf[1..=len]);
        Ok(data_len)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(bool, u8), Self::FifoErrorType> {
        let len = self.read_payload(buf)?;
        let fifo = FifoStatus::from_bits(self.read_register(registers::FIFO_STATUS)?);
        Ok((fifo.rx_empty(), len))
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, registers};
    use crate::radio::prelude::{EsbFifo, EsbPayloadLength};
    use crate::{spi_test_expects, test::mk_radio, FifoState};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn flush() {
        let spi_expectations = spi_test_expects![
            (vec![commands::FLUSH_RX], vec![0xEu8]),
            (vec![commands::FLUSH_TX], vec![0xEu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.flush_rx().unwrap();
        radio.flush_tx().unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn get_fifo_state() {
        let spi_expectations = spi_test_expects![
            (vec![registers::FIFO_STATUS, 0xFFu8], vec![0xEu8, 0x11u8]),
            (vec![registers::FIFO_STATUS, 0xFFu8], vec![0xEu8, 0x20u8]),
            (vec![registers::FIFO_STATUS, 0xFFu8], vec![0xEu8, 0x00u8]),
            (vec![registers::FIFO_STATUS, 0xFFu8], vec![0xEu8, 0x02u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.get_fifo_state(true), Ok(FifoState::Empty));
        assert_eq!(radio.get_fifo_state(true), Ok(FifoState::Full));
        assert_eq!(radio.get_fifo_state(false), Ok(FifoState::Occupied));
        assert_eq!(radio.get_fifo_state(false), Ok(FifoState::Full));
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn available_clears_rx_dr() {
        let spi_expectations = spi_test_expects![
            // payload on pipe 0
            (vec![commands::NOP], vec![0x40u8]),
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x40u8],
                vec![0x40u8, 0u8],
            ),
            // payload on pipe 1 that also sent an ACK payload
            (vec![commands::NOP], vec![0x62u8]),
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x40u8],
                vec![0x62u8, 0u8],
            ),
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x20u8],
                vec![0x22u8, 0u8],
            ),
            // nothing received
            (vec![commands::NOP], vec![0x0Eu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.available(), Ok(true));
        let mut pipe = 9;
        assert_eq!(radio.available_pipe(&mut pipe), Ok(true));
        assert_eq!(pipe, 1);
        assert_eq!(radio.available_pipe(&mut pipe), Ok(false));
        // untouched when nothing was received
        assert_eq!(pipe, 1);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn read_static_payload() {
        let mut expected = vec![0xFFu8; 33];
        expected[0] = commands::R_RX_PAYLOAD;
        let mut response = vec![0u8; 33];
        response[0] = 0x40;
        for (i, byte) in response.iter_mut().enumerate().skip(1) {
            *byte = i as u8;
        }
        let spi_expectations = spi_test_expects![
            // the full 32 byte payload is clocked out
            (expected, response),
            (vec![registers::FIFO_STATUS, 0xFFu8], vec![0x40u8, 0x11u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let mut buf = [0u8; 8];
        assert_eq!(radio.read(&mut buf), Ok((true, 8u8)));
        assert_eq!(buf, [1, 2, 3, 4, 5, 6, 7, 8]);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn read_small_static_payload() {
        let spi_expectations = spi_test_expects![
            (
                vec![commands::R_RX_PAYLOAD, 0xFFu8, 0xFFu8, 0xFFu8, 0xFFu8],
                vec![0x40u8, 0xAu8, 0xBu8, 0xCu8, 0xDu8],
            ),
            (vec![registers::FIFO_STATUS, 0xFFu8], vec![0x40u8, 0x10u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_payload_size(4);
        // a larger buffer only receives the static payload size
        let mut buf = [0u8; 6];
        assert_eq!(radio.read(&mut buf), Ok((false, 4u8)));
        assert_eq!(buf, [0xA, 0xB, 0xC, 0xD, 0, 0]);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn read_dynamic_payload() {
        let spi_expectations = spi_test_expects![
            // enable dynamic payloads
            (vec![registers::FEATURE, 0xFFu8], vec![0xEu8, 0u8]),
            (
                vec![registers::FEATURE | commands::W_REGISTER, 4u8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::FEATURE, 0xFFu8], vec![0xEu8, 4u8]),
            (
                vec![registers::DYNPD | commands::W_REGISTER, 0x3Fu8],
                vec![0xEu8, 0u8],
            ),
            // no blank bytes are clocked out
            (
                vec![commands::R_RX_PAYLOAD, 0xFFu8, 0xFFu8],
                vec![0x40u8, 0x55u8, 0xAAu8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_dynamic_payloads(true).unwrap();
        let mut buf = [0u8; 2];
        assert_eq!(radio.read_payload(&mut buf), Ok(2u8));
        assert_eq!(buf, [0x55, 0xAA]);
        spi.done();
        ce_pin.done();
    }
}
