use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
use embedded_time::{duration::Milliseconds, Clock};

use super::{bit_fields::Config, commands, registers, Nrf24Error, PIPE_COUNT, RF24};
use crate::{
    radio::prelude::{EsbFifo, EsbPayloadLength, EsbPower, EsbRadio, EsbStatus},
    StatusFlags,
};

/// The longest [`EsbRadio::write()`] waits for the radio to report an outcome.
const TX_TIMEOUT: Milliseconds<u32> = Milliseconds(500);

impl<SPI, DO, DELAY, CLOCK> EsbRadio for RF24<SPI, DO, DELAY, CLOCK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLOCK: Clock,
    CLOCK::T: TryFrom<u32>,
{
    type RadioErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn start_listening(&mut self) -> Result<(), Self::RadioErrorType> {
        let config = Config::from_bits(self.read_register(registers::CONFIG)?)
            .with_pwr_up(true)
            .with_prim_rx(true);
        self.write_register(registers::CONFIG, config.into_bits())?;
        self.clear_status_flags(StatusFlags::new())?;

        // Restore the pipe0 address, if exists
        if let Some(address) = self._pipe0_rx_addr {
            self.write_register_buf(registers::RX_ADDR_P0, &address, Some(address.len()))?;
        }

        self.flush_rx()?;
        self.flush_tx()?;
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        // RX settling
        self._delay_impl.delay_us(130);
        Ok(())
    }

    fn stop_listening(&mut self) -> Result<(), Self::RadioErrorType> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self.flush_tx()?;
        self.flush_rx()
    }

    fn start_write(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType> {
        let config = Config::from_bits(self.read_register(registers::CONFIG)?)
            .with_pwr_up(true)
            .with_prim_rx(false);
        self.write_register(registers::CONFIG, config.into_bits())?;
        // covers the power up settling when coming out of power down
        self._delay_impl.delay_us(150);

        let data_len = buf.len().min(self._payload_size as usize);
        let len = if self._dynamic_payloads {
            data_len
        } else {
            self._payload_size as usize
        };
        self.spi_write_buf(commands::W_TX_PAYLOAD, &buf[..data_len], len)?;

        // a CE pulse of at least 10 us starts the transmission
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self._delay_impl.delay_us(15);
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> Result<bool, Self::RadioErrorType> {
        let deadline = self
            ._clock
            .try_now()
            .map_err(|_| Nrf24Error::Clock)?
            .checked_add(TX_TIMEOUT)
            .ok_or(Nrf24Error::Clock)?;

        self.start_write(buf)?;

        let mut observe_tx = [0u8];
        loop {
            let status = self.read_register_buf(registers::OBSERVE_TX, &mut observe_tx)?;
            if status.tx_finished() {
                break;
            }
            if self._clock.try_now().map_err(|_| Nrf24Error::Clock)? >= deadline {
                #[cfg(feature = "defmt")]
                defmt::warn!("TX timed out; {}", crate::decode_observe_tx(observe_tx[0]));
                break;
            }
        }

        let flags = self.what_happened()?;
        self._ack_payload_available = flags.rx_dr();
        self._ack_payload_length = if flags.rx_dr() {
            self.get_dynamic_payload_size()?
        } else {
            0
        };

        self.power_down()?;
        self.flush_tx()?;
        Ok(flags.tx_ds())
    }

    fn write_ack_payload(&mut self, pipe: u8, buf: &[u8]) -> Result<(), Self::RadioErrorType> {
        if pipe >= PIPE_COUNT {
            return Ok(());
        }
        self.spi_write_buf(commands::W_ACK_PAYLOAD | pipe, buf, buf.len())?;
        Ok(())
    }

    fn is_ack_payload_available(&self) -> bool {
        self._ack_payload_available
    }

    fn get_ack_payload_length(&self) -> u8 {
        self._ack_payload_length
    }
}
