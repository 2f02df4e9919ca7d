//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use rf24::radio::prelude::*;
//! ```

use crate::types::{CrcLength, DataRate, FifoState, PaLevel, StatusFlags};

use super::{Details, RadioConfig};

/// A trait to represent manipulation of data pipes
/// for an ESB capable transceiver.
pub trait EsbPipe {
    type PipeErrorType;

    /// Open a specified `pipe` for receiving data when radio is in RX mode.
    ///
    /// If the specified `pipe` is not in range [0, 5], then this function does nothing.
    ///
    /// The `address` is given most significant byte first. It is reversed before
    /// it is written because the radio expects the least significant byte first.
    ///
    /// ### About pipe addresses
    /// Pipes 0 and 1 store a full 5-byte address. Pipes 2-5 only store a single
    /// byte (the least significant one), borrowing the other 4 bytes from pipe 1.
    /// ```ignore
    /// radio.open_reading_pipe(1, &[0xF0, 0xF0, 0xF0, 0xF0, 0xD2]).unwrap();
    /// radio.open_reading_pipe(2, &[0xC3]).unwrap(); // listens on F0:F0:F0:F0:C3
    /// ```
    ///
    /// <div class="warning">
    ///
    /// If pipe 0 is opened for receiving by this function, the `address` is
    /// restored at every call to [`EsbRadio::start_listening()`] because
    /// [`EsbPipe::open_writing_pipe()`] overwrites it.
    ///
    /// </div>
    fn open_reading_pipe(&mut self, pipe: u8, address: &[u8]) -> Result<(), Self::PipeErrorType>;

    /// Set the address used to transmit.
    ///
    /// The same address is written to RX pipe 0 so that auto-ack packets
    /// from the receiver are caught.
    fn open_writing_pipe(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType>;

    /// Close a specified pipe from receiving data when radio is in RX mode.
    ///
    /// If the specified `pipe` is not in range [0, 5], then this function does nothing.
    fn close_reading_pipe(&mut self, pipe: u8) -> Result<(), Self::PipeErrorType>;
}

/// A trait to represent manipulation of a channel (aka frequency)
/// for an ESB capable transceiver.
pub trait EsbChannel {
    type ChannelErrorType;

    /// Set the radio's currently selected channel.
    ///
    /// These channels translate to the RF frequency as an offset of MHz from 2400 MHz.
    /// Values above 127 are silently clamped to 127.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Get the radio's currently selected channel.
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType>;
}

/// A trait to represent manipulation of [`StatusFlags`]
/// for an ESB capable transceiver.
pub trait EsbStatus {
    type StatusErrorType;

    /// Get the [`StatusFlags`] state that was cached from the latest SPI transaction.
    fn get_status_flags(&self) -> StatusFlags;

    /// Fetch a fresh STATUS byte with a `NOP` command.
    fn get_status(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;

    /// Clear the radio's IRQ status flags.
    ///
    /// Set any member of [`StatusFlags`] to `true` to clear the corresponding
    /// event. Members set to `false` are left untouched.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;

    /// Report and acknowledge what happened since the flags were last cleared.
    ///
    /// This is a consuming read: the returned flags are the ones latched in the
    /// STATUS register right before all three of them (`RX_DR`, `TX_DS`, `MAX_RT`)
    /// get cleared by the same transaction. A flag reported here will not be
    /// reported again.
    fn what_happened(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;
}

/// A trait to represent manipulation of RX and TX FIFOs
/// for an ESB capable transceiver.
pub trait EsbFifo {
    type FifoErrorType;

    /// Flush the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Flush the radio's TX FIFO.
    ///
    /// This function is automatically called by [`EsbRadio::write()`].
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Get the state of the specified FIFO.
    ///
    /// - Pass `true` to `about_tx` parameter to get the state of the TX FIFO.
    /// - Pass `false` to `about_tx` parameter to get the state of the RX FIFO.
    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType>;

    /// Is there a payload available in the radio's RX FIFO?
    ///
    /// <div class="warning">
    ///
    /// This is not a pure query. When `RX_DR` is set, it is cleared (along with
    /// `TX_DS` because an ACK payload delivery also raises it).
    ///
    /// </div>
    fn available(&mut self) -> Result<bool, Self::FifoErrorType>;

    /// This is similar to [`EsbFifo::available()`] except the `pipe` parameter is given
    /// a mutable [`u8`] value, and the pipe number that received the data is stored to it.
    ///
    /// If there is no data ready to read in the RX FIFO, then the `pipe` parameter's
    /// value is untouched.
    fn available_pipe(&mut self, pipe: &mut u8) -> Result<bool, Self::FifoErrorType>;

    /// Fetch the payload at the top of the RX FIFO into `buf`.
    ///
    /// At most `min(buf.len(), payload_size)` bytes are copied, and that count is returned.
    /// With dynamic payloads disabled, the remaining bytes of the fixed length
    /// payload are clocked out and discarded, so the payload always leaves the FIFO.
    fn read_payload(&mut self, buf: &mut [u8]) -> Result<u8, Self::FifoErrorType>;

    /// Like [`EsbFifo::read_payload()`], but also reports whether the RX FIFO is
    /// now empty.
    ///
    /// Returns `(rx_fifo_empty, length)`.
    fn read(&mut self, buf: &mut [u8]) -> Result<(bool, u8), Self::FifoErrorType>;
}

/// A trait to represent manipulation of payload lengths (static or dynamic)
/// for an ESB capable transceiver.
pub trait EsbPayloadLength {
    type PayloadLengthErrorType;

    /// Set the static payload length used while dynamic payloads are disabled.
    ///
    /// The value is clamped to the range [1, 32]. It only affects pipes opened afterwards.
    fn set_payload_size(&mut self, size: u8);

    /// Get the static payload length.
    fn get_payload_size(&self) -> u8;

    /// Set the dynamic payloads feature for all pipes.
    ///
    /// Disabling dynamic payloads also disables ACK payloads.
    fn set_dynamic_payloads(&mut self, enable: bool) -> Result<(), Self::PayloadLengthErrorType>;

    /// Allow ACK payloads. Enabling them turns on dynamic payloads for all pipes.
    fn set_ack_payloads(&mut self, enable: bool) -> Result<(), Self::PayloadLengthErrorType>;

    /// Get the length of the next available payload in the RX FIFO.
    fn get_dynamic_payload_size(&mut self) -> Result<u8, Self::PayloadLengthErrorType>;
}

/// A trait to represent manipulation of the automatic acknowledgement feature
/// for an ESB capable transceiver.
pub trait EsbAutoAck {
    type AutoAckErrorType;

    /// Set the number of retry attempts and delay between retry attempts when
    /// transmitting a payload.
    ///
    /// - `delay` is in steps of 250 microseconds (`0` = 250 us, `15` = 4000 us).
    /// - `count` is the maximum number of retransmissions (`0` disables retries).
    ///
    /// Both values are truncated to 4 bits. These hardware retries are the only
    /// resend mechanism; [`EsbRadio::write()`] never resends in software.
    fn set_retries(&mut self, delay: u8, count: u8) -> Result<(), Self::AutoAckErrorType>;

    /// Enable or disable auto-acknowledgement on all pipes.
    fn set_auto_ack(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType>;
}

/// A trait to represent manipulation of the power amplitude level
/// for an ESB capable transceiver.
pub trait EsbPaLevel {
    type PaLevelErrorType;

    /// Get the currently configured Power Amplitude Level (PA).
    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType>;

    /// Set the radio's Power Amplitude Level (PA).
    ///
    /// Use `PaLevel::from(raw)` to convert a raw number; unrecognized
    /// numbers become [`PaLevel::Max`].
    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType>;
}

/// A trait to represent manipulation of the state of power
/// for an ESB capable transceiver.
pub trait EsbPower {
    type PowerErrorType;

    /// Power down the radio (clears only the `PWR_UP` bit).
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Power up the radio (sets only the `PWR_UP` bit).
    fn power_up(&mut self) -> Result<(), Self::PowerErrorType>;
}

/// A trait to represent manipulation of Cyclical Redundancy Checksums
/// for an ESB capable transceiver.
pub trait EsbCrcLength {
    type CrcLengthErrorType;

    /// Get the currently configured CRC (Cyclical Redundancy Checksum) length
    fn get_crc_length(&mut self) -> Result<CrcLength, Self::CrcLengthErrorType>;

    /// Set the radio's CRC (Cyclical Redundancy Checksum) length
    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::CrcLengthErrorType>;

    /// Shorthand for `set_crc_length(CrcLength::Disabled)`.
    fn disable_crc(&mut self) -> Result<(), Self::CrcLengthErrorType> {
        self.set_crc_length(CrcLength::Disabled)
    }
}

/// A trait to represent manipulation of data rate
/// for an ESB capable transceiver.
pub trait EsbDataRate {
    type DataRateErrorType;

    /// Set the RF data rate.
    ///
    /// The RF_SETUP register is read back after writing it. Returns `true` if
    /// the radio accepted the requested rate. Non-plus radios refuse
    /// [`DataRate::Kbps250`], which is how plus variants are detected.
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<bool, Self::DataRateErrorType>;

    /// Get the RF data rate.
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType>;
}

/// A trait to represent the transmit and receive roles
/// of an ESB capable transceiver.
pub trait EsbRadio {
    type RadioErrorType;

    /// Enter RX mode.
    ///
    /// Powers up as a primary receiver, clears all status flags, restores the
    /// pipe 0 reading address (if any), flushes both FIFOs, then raises CE and
    /// waits 130 microseconds for the receiver to settle.
    fn start_listening(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Leave RX mode for standby. Both FIFOs are flushed.
    fn stop_listening(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Upload `buf` and pulse CE to start a transmission. Does not wait for the outcome.
    ///
    /// With dynamic payloads disabled, the payload is zero padded (or truncated)
    /// to the static payload size.
    fn start_write(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType>;

    /// Transmit `buf` and block until the radio reports the outcome.
    ///
    /// Returns `true` only if `TX_DS` was observed. Hitting the retransmit limit
    /// (`MAX_RT`) and the 500 millisecond timeout both return `false`.
    ///
    /// Afterwards the radio is powered down and the TX FIFO is flushed, so a
    /// failed payload never lingers.
    fn write(&mut self, buf: &[u8]) -> Result<bool, Self::RadioErrorType>;

    /// Queue a payload to be attached to the next ACK packet sent on `pipe`.
    ///
    /// Requires [`EsbPayloadLength::set_ack_payloads()`].
    /// If `pipe` is not in range [0, 5], then this function does nothing.
    fn write_ack_payload(&mut self, pipe: u8, buf: &[u8]) -> Result<(), Self::RadioErrorType>;

    /// Did the last [`EsbRadio::write()`] receive an ACK packet with a payload?
    fn is_ack_payload_available(&self) -> bool;

    /// The length of the ACK payload received during the last [`EsbRadio::write()`].
    fn get_ack_payload_length(&self) -> u8;
}

/// A trait to snapshot and print the radio's configuration.
pub trait EsbDetails {
    type DetailsErrorType;

    /// Read every configuration register into a [`Details`] snapshot.
    fn get_details(&mut self) -> Result<Details, Self::DetailsErrorType>;

    /// Print the [`Details`] snapshot.
    ///
    /// This is a no-op unless the `std` or `defmt` feature is enabled.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;
}

/// A trait to represent the radio's initialization.
pub trait EsbInit {
    type ConfigErrorType;

    /// Initialize the radio with the library defaults ([`RadioConfig::default()`]).
    fn init(&mut self) -> Result<(), Self::ConfigErrorType>;

    /// Reconfigure the radio from a [`RadioConfig`].
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType>;
}
