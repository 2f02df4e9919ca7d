//! This module defines types used by various traits.
//! These types are meant to be agnostic of the trait implementation.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

use crate::radio::mnemonics::{MASK_MAX_RT, MASK_RX_DR, MASK_TX_DS};

/// Power Amplifier level. The units dBm (decibel-milliwatts or dB<sub>mW</sub>)
/// represents a logarithmic signal loss.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaLevel {
    /// | nRF24L01 | Si24R1 with<br>LNA Enabled | Si24R1 with<br>LNA Disabled |
    /// | :-------:|:--------------------------:|:---------------------------:|
    /// | -18 dBm | -6 dBm | -12 dBm |
    Min,
    /// | nRF24L01 | Si24R1 with<br>LNA Enabled | Si24R1 with<br>LNA Disabled |
    /// | :-------:|:--------------------------:|:---------------------------:|
    /// | -12 dBm | 0 dBm | -4 dBm |
    Low,
    /// | nRF24L01 | Si24R1 with<br>LNA Enabled | Si24R1 with<br>LNA Disabled |
    /// | :-------:|:--------------------------:|:---------------------------:|
    /// | -6 dBm | 3 dBm | 1 dBm |
    High,
    /// | nRF24L01 | Si24R1 with<br>LNA Enabled | Si24R1 with<br>LNA Disabled |
    /// | :-------:|:--------------------------:|:---------------------------:|
    /// | 0 dBm | 7 dBm | 4 dBm |
    Max,
}

#[cfg(feature = "defmt")]
impl defmt::Format for PaLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PaLevel::Min => defmt::write!(fmt, "Min"),
            PaLevel::Low => defmt::write!(fmt, "Low"),
            PaLevel::High => defmt::write!(fmt, "High"),
            PaLevel::Max => defmt::write!(fmt, "Max"),
        }
    }
}

impl PaLevel {
    /// Encode into the 2-bit `RF_PWR` field value (not shifted).
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            PaLevel::Min => 0,
            PaLevel::Low => 1,
            PaLevel::High => 2,
            PaLevel::Max => 3,
        }
    }

    /// Decode the 2-bit `RF_PWR` field value (not shifted).
    ///
    /// Anything that is not a recognized level is treated as [`PaLevel::Max`].
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value {
            0 => PaLevel::Min,
            1 => PaLevel::Low,
            2 => PaLevel::High,
            _ => PaLevel::Max,
        }
    }
}

/// Converts a raw level number (`0` = Min ... `3` = Max).
///
/// Unrecognized numbers fail safe to [`PaLevel::Max`].
impl From<u8> for PaLevel {
    fn from(value: u8) -> Self {
        Self::from_bits(value)
    }
}

impl Display for PaLevel {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PaLevel::Min => write!(f, "PA_MIN"),
            PaLevel::Low => write!(f, "PA_LOW"),
            PaLevel::High => write!(f, "PA_HIGH"),
            PaLevel::Max => write!(f, "PA_MAX"),
        }
    }
}

/// How fast data moves through the air. Units are in bits per second (bps).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DataRate {
    /// represents 1 Mbps
    Mbps1,
    /// represents 2 Mbps
    Mbps2,
    /// represents 250 Kbps (only supported by the nRF24L01+)
    Kbps250,
}

impl DataRate {
    /// Encode as the (`RF_DR_LOW`, `RF_DR_HIGH`) flag pair.
    pub(crate) const fn into_flags(self) -> (bool, bool) {
        match self {
            DataRate::Mbps1 => (false, false),
            DataRate::Mbps2 => (false, true),
            DataRate::Kbps250 => (true, false),
        }
    }

    /// Decode the (`RF_DR_LOW`, `RF_DR_HIGH`) flag pair.
    ///
    /// The reserved combination (both set) reads as 1 Mbps.
    pub(crate) const fn from_flags(low: bool, high: bool) -> Self {
        match (low, high) {
            (true, false) => DataRate::Kbps250,
            (false, true) => DataRate::Mbps2,
            _ => DataRate::Mbps1,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Mbps1 => defmt::write!(fmt, "1MBPS"),
            DataRate::Mbps2 => defmt::write!(fmt, "2MBPS"),
            DataRate::Kbps250 => defmt::write!(fmt, "250KBPS"),
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Mbps1 => write!(f, "1MBPS"),
            DataRate::Mbps2 => write!(f, "2MBPS"),
            DataRate::Kbps250 => write!(f, "250KBPS"),
        }
    }
}

/// The length of a CRC checksum that is used (if any).
///
/// Cyclical Redundancy Checking (CRC) is commonly used to ensure data integrity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CrcLength {
    /// represents no CRC checksum is used
    Disabled,
    /// represents CRC 8 bit checksum is used
    Bit8,
    /// represents CRC 16 bit checksum is used
    Bit16,
}

impl CrcLength {
    /// Encode as the (`EN_CRC`, `CRCO`) flag pair.
    pub(crate) const fn into_flags(self) -> (bool, bool) {
        match self {
            CrcLength::Disabled => (false, false),
            CrcLength::Bit8 => (true, false),
            CrcLength::Bit16 => (true, true),
        }
    }

    /// Decode the (`EN_CRC`, `CRCO`) flag pair. `CRCO` is ignored while `EN_CRC` is clear.
    pub(crate) const fn from_flags(enabled: bool, two_bytes: bool) -> Self {
        match (enabled, two_bytes) {
            (false, _) => CrcLength::Disabled,
            (true, false) => CrcLength::Bit8,
            (true, true) => CrcLength::Bit16,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CrcLength {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            CrcLength::Disabled => defmt::write!(fmt, "Disabled"),
            CrcLength::Bit8 => defmt::write!(fmt, "8 bits"),
            CrcLength::Bit16 => defmt::write!(fmt, "16 bits"),
        }
    }
}

impl Display for CrcLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            CrcLength::Disabled => write!(f, "Disabled"),
            CrcLength::Bit8 => write!(f, "8 bits"),
            CrcLength::Bit16 => write!(f, "16 bits"),
        }
    }
}

/// The possible states of a FIFO.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FifoState {
    /// Represent the state of a FIFO when it is full.
    Full,
    /// Represent the state of a FIFO when it is empty.
    Empty,
    /// Represent the state of a FIFO when it is not full but not empty either.
    Occupied,
}

#[cfg(feature = "defmt")]
impl defmt::Format for FifoState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            FifoState::Empty => defmt::write!(fmt, "Empty"),
            FifoState::Full => defmt::write!(fmt, "Full"),
            FifoState::Occupied => defmt::write!(fmt, "Occupied"),
        }
    }
}

impl Display for FifoState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FifoState::Empty => write!(f, "Empty"),
            FifoState::Full => write!(f, "Full"),
            FifoState::Occupied => write!(f, "Occupied"),
        }
    }
}

/// The decoded STATUS byte.
///
/// The radio clocks this byte out as the first response of every SPI transaction.
///
/// To instantiate an object with flags that have different values:
/// ```
/// use rf24::StatusFlags;
///
/// let flags = StatusFlags::default() // all flags are false
///     .with_rx_dr(true); // assert only `rx_dr` flags
/// assert!(flags.rx_dr());
/// ```
/// Use [`StatusFlags::default`] to instantiate all flags set to false.
/// Use [`StatusFlags::new`] to instantiate all IRQ flags set to true.
#[bitfield(u8, new = false, order = Msb)]
#[derive(PartialEq)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// RX Data Ready: a payload arrived in the RX FIFO.
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// TX Data Sent: a payload was transmitted (and acknowledged, if auto-ack is on).
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// The auto-retransmit limit was reached without an acknowledgement.
    #[bits(1, access = RO)]
    pub max_rt: bool,

    /// The pipe number of the payload at the top of the RX FIFO.
    ///
    /// `0b110` is unused and `0b111` means the RX FIFO is empty.
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    /// The TX FIFO is full.
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "STATUS 0x{=u8:#x} RX_DR={=bool} TX_DS={=bool} MAX_RT={=bool} RX_P_NO={=u8} TX_FULL={=bool}",
            self.into_bits(),
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt(),
            self.rx_pipe(),
            self.tx_full()
        )
    }
}

impl StatusFlags {
    /// A mask to isolate only the IRQ flags. Useful for STATUS and CONFIG registers.
    pub(crate) const IRQ_MASK: u8 = MASK_RX_DR | MASK_TX_DS | MASK_MAX_RT;

    /// The `RX_P_NO` value reported while the RX FIFO is empty.
    pub const RX_PIPE_EMPTY: u8 = 0b111;

    /// A convenience constructor similar to [`StatusFlags::default`] except
    /// all IRQ flags are set to `true`.
    pub fn new() -> Self {
        Self::from_bits(Self::IRQ_MASK)
    }

    /// Set the RX Data Ready flag.
    pub fn with_rx_dr(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::RX_DR_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::RX_DR_OFFSET))
    }

    /// Set the TX Data Sent flag.
    pub fn with_tx_ds(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::TX_DS_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::TX_DS_OFFSET))
    }

    /// Set the retransmit-limit flag.
    pub fn with_max_rt(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::MAX_RT_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::MAX_RT_OFFSET))
    }

    /// Is the RX FIFO empty according to `RX_P_NO`?
    pub const fn rx_fifo_empty(&self) -> bool {
        self.rx_pipe() == Self::RX_PIPE_EMPTY
    }

    /// Did the last transmission finish, successfully or not?
    pub const fn tx_finished(&self) -> bool {
        self.tx_ds() || self.max_rt()
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "status = 0x{:02x}, RX_DR = {}, TX_DS = {}, MAX_RT = {}, RX_P_NO = {}, TX_FULL = {}",
            self.into_bits(),
            self.rx_dr() as u8,
            self.tx_ds() as u8,
            self.max_rt() as u8,
            self.rx_pipe(),
            self.tx_full() as u8
        )
    }
}

/// The decoded OBSERVE_TX register.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq)]
pub struct ObserveTx {
    /// Count of lost packets. Saturates at 15 and resets when RF_CH is written.
    #[bits(4, access = RO)]
    pub plos_cnt: u8,

    /// Count of retransmissions for the last packet. Resets with every new payload.
    #[bits(4, access = RO)]
    pub arc_cnt: u8,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ObserveTx {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "OBSERVE_TX 0x{=u8:#x} PLOS_CNT={=u8} ARC_CNT={=u8}",
            self.into_bits(),
            self.plos_cnt(),
            self.arc_cnt()
        )
    }
}

impl Display for ObserveTx {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "OBSERVE_TX = 0x{:02x}, PLOS_CNT = {}, ARC_CNT = {}",
            self.into_bits(),
            self.plos_cnt(),
            self.arc_cnt()
        )
    }
}

/// Decode a raw STATUS byte. Performs no bus transaction.
pub const fn decode_status(status: u8) -> StatusFlags {
    StatusFlags::from_bits(status)
}

/// Decode a raw OBSERVE_TX byte. Performs no bus transaction.
pub const fn decode_observe_tx(value: u8) -> ObserveTx {
    ObserveTx::from_bits(value)
}

#[cfg(test)]
mod test {
    use super::{
        decode_observe_tx, decode_status, CrcLength, DataRate, FifoState, PaLevel, StatusFlags,
    };
    extern crate std;
    use std::{format, string::String};

    #[test]
    fn irq_mask_matches_flags() {
        assert_eq!(StatusFlags::IRQ_MASK, 0x70);
        let flags = StatusFlags::new();
        assert!(flags.rx_dr() && flags.tx_ds() && flags.max_rt());
        assert_eq!(flags.rx_pipe(), 0);
        assert!(!flags.tx_full());
    }

    #[test]
    fn decode_rx_dr_only() {
        let flags = decode_status(0b0100_0000);
        assert!(flags.rx_dr());
        assert!(!flags.tx_ds());
        assert!(!flags.max_rt());
        assert!(!flags.tx_full());
        assert_eq!(flags.rx_pipe(), 0);
        assert!(!flags.rx_fifo_empty());
    }

    #[test]
    fn decode_idle_status() {
        // the chip's reset value of STATUS
        let flags = decode_status(0x0E);
        assert!(!flags.rx_dr());
        assert!(!flags.tx_finished());
        assert_eq!(flags.rx_pipe(), StatusFlags::RX_PIPE_EMPTY);
        assert!(flags.rx_fifo_empty());
    }

    #[test]
    fn decode_pipe_and_tx_full() {
        let flags = decode_status(0b0011_0111);
        assert!(flags.tx_ds());
        assert!(flags.max_rt());
        assert!(flags.tx_full());
        assert_eq!(flags.rx_pipe(), 3);
    }

    #[test]
    fn decode_observe() {
        let observe = decode_observe_tx(0xA3);
        assert_eq!(observe.plos_cnt(), 10);
        assert_eq!(observe.arc_cnt(), 3);
        assert_eq!(
            format!("{observe}"),
            String::from("OBSERVE_TX = 0xa3, PLOS_CNT = 10, ARC_CNT = 3")
        );
    }

    #[test]
    fn display_flags() {
        assert_eq!(
            format!("{}", decode_status(0x40)),
            String::from(
                "status = 0x40, RX_DR = 1, TX_DS = 0, MAX_RT = 0, RX_P_NO = 0, TX_FULL = 0"
            )
        );
    }

    fn set_flags(rx_dr: bool, tx_ds: bool, max_rt: bool) {
        let flags = StatusFlags::default()
            .with_rx_dr(rx_dr)
            .with_tx_ds(tx_ds)
            .with_max_rt(max_rt);
        assert_eq!(flags.rx_dr(), rx_dr);
        assert_eq!(flags.tx_ds(), tx_ds);
        assert_eq!(flags.max_rt(), max_rt);
    }

    #[test]
    fn flags_0x50() {
        set_flags(true, false, true);
    }

    #[test]
    fn flags_0x20() {
        set_flags(false, true, false);
    }

    #[test]
    fn all_irq_flags() {
        assert_eq!(StatusFlags::new().into_bits(), 0x70);
    }

    #[test]
    fn pa_level_from_raw() {
        assert_eq!(PaLevel::from(0u8), PaLevel::Min);
        assert_eq!(PaLevel::from(1u8), PaLevel::Low);
        assert_eq!(PaLevel::from(2u8), PaLevel::High);
        assert_eq!(PaLevel::from(3u8), PaLevel::Max);
        // unrecognized levels fail safe to maximum power
        assert_eq!(PaLevel::from(4u8), PaLevel::Max);
        assert_eq!(PaLevel::from(0xFFu8), PaLevel::Max);
    }

    #[test]
    fn data_rate_flags() {
        for rate in [DataRate::Mbps1, DataRate::Mbps2, DataRate::Kbps250] {
            let (low, high) = rate.into_flags();
            assert_eq!(DataRate::from_flags(low, high), rate);
        }
        assert_eq!(DataRate::from_flags(true, true), DataRate::Mbps1);
    }

    #[test]
    fn crc_flags() {
        assert_eq!(CrcLength::from_flags(false, true), CrcLength::Disabled);
        assert_eq!(CrcLength::from_flags(true, false), CrcLength::Bit8);
        assert_eq!(CrcLength::from_flags(true, true), CrcLength::Bit16);
    }

    #[test]
    fn display_enums() {
        assert_eq!(format!("{}", PaLevel::Max), String::from("PA_MAX"));
        assert_eq!(format!("{}", DataRate::Kbps250), String::from("250KBPS"));
        assert_eq!(format!("{}", CrcLength::Bit8), String::from("8 bits"));
        assert_eq!(format!("{}", FifoState::Occupied), String::from("Occupied"));
    }
}
