use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
use embedded_time::Clock;
mod auto_ack;
pub(crate) mod bit_fields;
mod channel;
mod constants;
mod crc_length;
mod data_rate;
mod details;
mod fifo;
mod init;
mod pa_level;
mod payload_length;
mod pipe;
mod power;
mod radio;
mod status;
use bit_fields::Config;
pub use constants::{
    commands, mnemonics, registers, ADDRESS_WIDTH, MAX_CHANNEL, MAX_PAYLOAD_SIZE, PIPE_COUNT,
};
pub use details::Details;

use crate::StatusFlags;

/// An collection of error types to describe hardware malfunctions.
///
/// Radio-level outcomes (a lost packet, a refused data rate) are not errors;
/// they are reported through the return values of the corresponding functions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error.
    Gpo(DO),
    /// The clock used to bound [`EsbRadio::write()`](fn@crate::radio::prelude::EsbRadio::write)
    /// could not be read, or the timeout did not fit in its tick type.
    Clock,
    /// Represents a corruption of binary data (as it was transferred over the SPI bus' MISO)
    BinaryCorruption,
}

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// Additionally, there are some functions implemented that are specific to the nRF24L01.
pub struct RF24<SPI, DO, DELAY, CLOCK> {
    /// The CE pin for the radio.
    ///
    /// This really only exposed for advanced manipulation of active TX mode.
    /// It is strongly recommended to enter RX or TX mode using
    /// [`EsbRadio::start_listening()`](fn@crate::radio::prelude::EsbRadio::start_listening) and
    /// [`EsbRadio::write()`](fn@crate::radio::prelude::EsbRadio::write).
    pub ce_pin: DO,
    _spi: SPI,
    _delay_impl: DELAY,
    _clock: CLOCK,
    _buf: [u8; 33],
    _status: StatusFlags,
    _payload_size: u8,
    _dynamic_payloads: bool,
    _wide_band: bool,
    _p_variant: bool,
    _pipe0_rx_addr: Option<[u8; ADDRESS_WIDTH]>,
    _ack_payload_available: bool,
    _ack_payload_length: u8,
}

impl<SPI, DO, DELAY, CLOCK> RF24<SPI, DO, DELAY, CLOCK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    /// Instantiate an [`RF24`] object for use on the specified
    /// `spi` bus with the given `ce_pin`.
    ///
    /// The radio's CSN pin (aka Chip Select pin) shall be defined
    /// when instantiating the [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)
    /// object (passed to the `spi` parameter). It is asserted low for
    /// the duration of every command this driver sends.
    ///
    /// `delay_impl` provides the fixed settling times and `clock` measures the
    /// timeout of [`EsbRadio::write()`](fn@crate::radio::prelude::EsbRadio::write).
    pub fn new(
        ce_pin: DO,
        spi: SPI,
        delay_impl: DELAY,
        clock: CLOCK,
    ) -> RF24<SPI, DO, DELAY, CLOCK> {
        RF24 {
            ce_pin,
            _spi: spi,
            _delay_impl: delay_impl,
            _clock: clock,
            _buf: [0u8; 33],
            _status: StatusFlags::from_bits(0),
            _payload_size: MAX_PAYLOAD_SIZE,
            _dynamic_payloads: false,
            _wide_band: true,
            _p_variant: false,
            _pipe0_rx_addr: None,
            _ack_payload_available: false,
            _ack_payload_length: 0,
        }
    }

    fn spi_transfer(&mut self, len: usize) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        self._spi
            .transfer_in_place(&mut self._buf[..len])
            .map_err(Nrf24Error::Spi)?;
        self._status = StatusFlags::from_bits(self._buf[0]);
        Ok(self._status)
    }

    /// Send `command` followed by `len` NOP bytes.
    /// The response lands in `self._buf[1..=len]`.
    ///
    /// This is also used to send SPI commands that consist of 1 byte:
    /// ```ignore
    /// self.spi_read(0, commands::NOP)?;
    /// // STATUS register is now stored in self._status
    /// ```
    fn spi_read(
        &mut self,
        len: u8,
        command: u8,
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        let len = len.min(MAX_PAYLOAD_SIZE) as usize;
        self._buf[0] = command;
        self._buf[1..=len].fill(commands::NOP);
        self.spi_transfer(len + 1)
    }

    /// Send `command` followed by exactly `len` data bytes taken from `buf`.
    ///
    /// `buf` is truncated, or right-padded with zeros, to `len` bytes.
    fn spi_write_buf(
        &mut self,
        command: u8,
        buf: &[u8],
        len: usize,
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        let len = len.min(MAX_PAYLOAD_SIZE as usize);
        let data_len = buf.len().min(len);
        self._buf[0] = command;
        self._buf[1..=data_len].copy_from_slice(&buf[..data_len]);
        self._buf[(data_len + 1)..=len].fill(0);
        self.spi_transfer(len + 1)
    }

    /// Write a single byte to a register. Returns the STATUS byte clocked out
    /// while the command was sent.
    fn write_register(
        &mut self,
        register: u8,
        value: u8,
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = commands::write(register);
        self._buf[1] = value;
        let status = self.spi_transfer(2)?;
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "write_register(0x{=u8:x}, 0x{=u8:x}) => 0x{=u8:x}",
            register,
            value,
            status.into_bits()
        );
        Ok(status)
    }

    /// Write a multi-byte register.
    ///
    /// If `len` is given, `buf` is truncated or zero padded to that many bytes.
    fn write_register_buf(
        &mut self,
        register: u8,
        buf: &[u8],
        len: Option<usize>,
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        let status = self.spi_write_buf(commands::write(register), buf, len.unwrap_or(buf.len()))?;
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "write_register(0x{=u8:x}, {=[u8]:x}) => 0x{=u8:x}",
            register,
            &self._buf[1..=len.unwrap_or(buf.len()).min(MAX_PAYLOAD_SIZE as usize)],
            status.into_bits()
        );
        Ok(status)
    }

    fn read_register(&mut self, register: u8) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_read(1, commands::read(register))?;
        #[cfg(feature = "defmt")]
        defmt::trace!("read_register(0x{=u8:x}) => 0x{=u8:x}", register, self._buf[1]);
        Ok(self._buf[1])
    }

    /// Read `buf.len()` bytes from a multi-byte register into `buf`.
    fn read_register_buf(
        &mut self,
        register: u8,
        buf: &mut [u8],
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        let len = buf.len().min(MAX_PAYLOAD_SIZE as usize);
        let status = self.spi_read(len as u8, commands::read(register))?;
        buf[..len].copy_from_slice(&self._buf[1..=len]);
        #[cfg(feature = "defmt")]
        defmt::trace!("read_register(0x{=u8:x}, {=usize}) => {=[u8]:x}", register, len, &buf[..len]);
        Ok(status)
    }

    /// A private function to write a special SPI command specific to older
    /// non-plus variants of the nRF24L01 radio module. It has no effect on plus variants.
    fn toggle_features(&mut self) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = commands::ACTIVATE;
        self._buf[1] = commands::ACTIVATE_KEY;
        self.spi_transfer(2)?;
        Ok(())
    }

    /// Is this radio a nRF24L01+ variant?
    ///
    /// The bool that this function returns is only valid _after_ calling
    /// [`init()`](fn@crate::radio::prelude::EsbInit::init).
    pub fn is_plus_variant(&self) -> bool {
        self._p_variant
    }

    /// Is the 2 Mbps data rate in use?
    ///
    /// This is a cache kept in sync by
    /// [`EsbDataRate::set_data_rate()`](fn@crate::radio::prelude::EsbDataRate::set_data_rate).
    pub fn is_wide_band(&self) -> bool {
        self._wide_band
    }

    /// Write the power-on CONFIG value (`0x0F`) and verify it reads back.
    ///
    /// A mismatch means the SPI lines are not wired (or clocked) correctly.
    pub fn reset_config(&mut self) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let config = Config::new()
            .with_en_crc(true)
            .with_crco(true)
            .with_pwr_up(true)
            .with_prim_rx(true);
        self.write_register(registers::CONFIG, config.into_bits())?;
        if self.read_register(registers::CONFIG)? != config.into_bits() {
            #[cfg(feature = "defmt")]
            defmt::error!("CONFIG register did not read back as written");
            return Err(Nrf24Error::BinaryCorruption);
        }
        Ok(())
    }

    /// Is a carrier present on the current channel? (nRF24L01 Carrier Detect)
    pub fn test_carrier(&mut self) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(self.read_register(registers::CD)? & 1 == 1)
    }

    /// Was a signal stronger than -64 dBm received? (nRF24L01+ Received Power Detector)
    pub fn test_rpd(&mut self) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(self.read_register(registers::RPD)? & 1 == 1)
    }
}
