#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`RF24::new()`](fn@crate::radio::RF24::new)
//! - [`RF24::init()`](radio/struct.RF24.html#method.init)
//! - [`RF24::open_writing_pipe()`](radio/struct.RF24.html#method.open_writing_pipe)
//! - [`RF24::open_reading_pipe()`](radio/struct.RF24.html#method.open_reading_pipe)
//! - [`RF24::close_reading_pipe()`](radio/struct.RF24.html#method.close_reading_pipe)
//! - [`RF24::start_listening()`](radio/struct.RF24.html#method.start_listening)
//! - [`RF24::stop_listening()`](radio/struct.RF24.html#method.stop_listening)
//! - [`RF24::available()`](radio/struct.RF24.html#method.available)
//! - [`RF24::available_pipe()`](radio/struct.RF24.html#method.available_pipe)
//! - [`RF24::read()`](radio/struct.RF24.html#method.read)
//! - [`RF24::write()`](radio/struct.RF24.html#method.write)
//! - [`RF24::set_channel()`](radio/struct.RF24.html#method.set_channel)
//! - [`RF24::get_channel()`](radio/struct.RF24.html#method.get_channel)
//!
//! ## Advanced API
//!
//! - [`RF24::start_write()`](radio/struct.RF24.html#method.start_write)
//! - [`RF24::write_ack_payload()`](radio/struct.RF24.html#method.write_ack_payload)
//! - [`RF24::is_ack_payload_available()`](radio/struct.RF24.html#method.is_ack_payload_available)
//! - [`RF24::what_happened()`](radio/struct.RF24.html#method.what_happened)
//! - [`RF24::get_fifo_state()`](radio/struct.RF24.html#method.get_fifo_state)
//! - [`RF24::clear_status_flags()`](radio/struct.RF24.html#method.clear_status_flags)
//! - [`RF24::get_status()`](radio/struct.RF24.html#method.get_status)
//! - [`RF24::flush_rx()`](radio/struct.RF24.html#method.flush_rx)
//! - [`RF24::flush_tx()`](radio/struct.RF24.html#method.flush_tx)
//! - [`RF24::test_carrier()`](fn@crate::radio::RF24::test_carrier)
//! - [`RF24::test_rpd()`](fn@crate::radio::RF24::test_rpd)
//! - [`RF24::get_details()`](radio/struct.RF24.html#method.get_details)
//! - [`RF24::print_details()`](radio/struct.RF24.html#method.print_details)
//!
//! ## Configuration API
//!
//! - [`RF24::with_config()`](radio/struct.RF24.html#method.with_config)
//! - [`RF24::set_retries()`](radio/struct.RF24.html#method.set_retries)
//! - [`RF24::set_auto_ack()`](radio/struct.RF24.html#method.set_auto_ack)
//! - [`RF24::set_dynamic_payloads()`](radio/struct.RF24.html#method.set_dynamic_payloads)
//! - [`RF24::set_ack_payloads()`](radio/struct.RF24.html#method.set_ack_payloads)
//! - [`RF24::set_payload_size()`](radio/struct.RF24.html#method.set_payload_size)
//! - [`RF24::set_data_rate()`](radio/struct.RF24.html#method.set_data_rate)
//! - [`RF24::set_pa_level()`](radio/struct.RF24.html#method.set_pa_level)
//! - [`RF24::set_crc_length()`](radio/struct.RF24.html#method.set_crc_length)
//! - [`RF24::disable_crc()`](radio/struct.RF24.html#method.disable_crc)
//! - [`RF24::power_up()`](radio/struct.RF24.html#method.power_up)
//! - [`RF24::power_down()`](radio/struct.RF24.html#method.power_down)
//! - [`RF24::is_plus_variant()`](fn@crate::radio::RF24::is_plus_variant)
//!
#![no_std]

mod types;
pub use types::{
    decode_observe_tx, decode_status, CrcLength, DataRate, FifoState, ObserveTx, PaLevel,
    StatusFlags,
};
pub mod radio;
