use bitfield_struct::bitfield;

use crate::{CrcLength, DataRate, PaLevel};

#[bitfield(u8, order = Msb)]
#[derive(PartialEq)]
pub(crate) struct Config {
    #[bits(1)]
    _padding: u8,

    /// Hide the "RX Data Ready" event from the IRQ pin.
    pub mask_rx_dr: bool,

    /// Hide the "TX Data Sent" event from the IRQ pin.
    pub mask_tx_ds: bool,

    /// Hide the "Max retransmits" event from the IRQ pin.
    pub mask_max_rt: bool,

    pub en_crc: bool,

    /// `1` selects a 2 byte CRC.
    pub crco: bool,

    pub pwr_up: bool,

    pub prim_rx: bool,
}

impl Config {
    pub const fn crc_length(&self) -> CrcLength {
        CrcLength::from_flags(self.en_crc(), self.crco())
    }

    pub fn with_crc_length(self, length: CrcLength) -> Self {
        let (enabled, two_bytes) = length.into_flags();
        self.with_en_crc(enabled).with_crco(two_bytes)
    }
}

#[bitfield(u8, order = Msb)]
pub(crate) struct SetupRetry {
    /// Auto retransmit delay, in steps of 250 us (`0` = 250 us).
    #[bits(4)]
    pub ard: u8,

    /// Auto retransmit count.
    #[bits(4)]
    pub arc: u8,
}

#[bitfield(u8, order = Msb)]
#[derive(PartialEq)]
pub(crate) struct RfSetup {
    pub cont_wave: bool,

    #[bits(1)]
    _padding: u8,

    pub rf_dr_low: bool,

    pub pll_lock: bool,

    pub rf_dr_high: bool,

    #[bits(2)]
    pub rf_pwr: u8,

    pub lna_hcurr: bool,
}

impl RfSetup {
    pub const fn data_rate(&self) -> DataRate {
        DataRate::from_flags(self.rf_dr_low(), self.rf_dr_high())
    }

    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        let (low, high) = data_rate.into_flags();
        self.with_rf_dr_low(low).with_rf_dr_high(high)
    }

    pub const fn pa_level(&self) -> PaLevel {
        PaLevel::from_bits(self.rf_pwr())
    }

    pub fn with_pa_level(self, level: PaLevel) -> Self {
        self.with_rf_pwr(level.into_bits())
    }
}

#[bitfield(u8, order = Msb)]
pub(crate) struct FifoStatus {
    #[bits(1)]
    _padding: u8,

    pub tx_reuse: bool,

    pub tx_full: bool,

    pub tx_empty: bool,

    #[bits(2)]
    _reserved: u8,

    pub rx_full: bool,

    pub rx_empty: bool,
}

#[bitfield(u8, order = Msb)]
#[derive(PartialEq)]
pub(crate) struct Feature {
    #[bits(5)]
    _padding: u8,

    pub en_dpl: bool,

    pub en_ack_pay: bool,

    pub en_dyn_ack: bool,
}

impl Feature {
    pub fn with_dynamic_payloads(self, enable: bool) -> Self {
        if enable {
            self.with_en_dpl(true)
        } else {
            // ACK payloads cannot outlive dynamic payloads
            self.with_en_dpl(false).with_en_ack_pay(false)
        }
    }

    pub fn with_ack_payloads(self, enable: bool) -> Self {
        if enable {
            self.with_en_ack_pay(true).with_en_dpl(true)
        } else {
            self.with_en_ack_pay(false)
        }
    }
}
