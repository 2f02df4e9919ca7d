use core::fmt::{Display, Formatter, Result as FmtResult};

use super::{
    bit_fields::{Config, RfSetup},
    registers, Nrf24Error, ADDRESS_WIDTH, PIPE_COUNT, RF24,
};
use crate::radio::prelude::{EsbDetails, EsbStatus};
use crate::{CrcLength, DataRate, PaLevel, StatusFlags};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
use embedded_time::Clock;

#[cfg(feature = "std")]
extern crate std;

/// A snapshot of the radio's configuration registers.
///
/// Multi-byte addresses are stored in register order (least significant byte first).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Details {
    pub status: StatusFlags,
    pub rx_addr_p0: [u8; ADDRESS_WIDTH],
    pub rx_addr_p1: [u8; ADDRESS_WIDTH],
    /// The least significant byte of the addresses on pipes 2 - 5.
    pub rx_addr_p2_5: [u8; 4],
    pub tx_addr: [u8; ADDRESS_WIDTH],
    /// Static payload widths of pipes 0 - 5.
    pub rx_pw: [u8; PIPE_COUNT as usize],
    pub en_aa: u8,
    pub en_rxaddr: u8,
    pub rf_ch: u8,
    pub rf_setup: u8,
    pub config: u8,
    pub dynpd: u8,
    pub feature: u8,
    pub is_plus_variant: bool,
}

impl Details {
    /// The data rate decoded from [`Details::rf_setup`].
    pub const fn data_rate(&self) -> DataRate {
        RfSetup::from_bits(self.rf_setup).data_rate()
    }

    /// The PA level decoded from [`Details::rf_setup`].
    pub const fn pa_level(&self) -> PaLevel {
        RfSetup::from_bits(self.rf_setup).pa_level()
    }

    /// The CRC length decoded from [`Details::config`].
    pub const fn crc_length(&self) -> CrcLength {
        Config::from_bits(self.config).crc_length()
    }
}

/// Print an address the way it was given to the driver (most significant byte first).
fn fmt_address(f: &mut Formatter<'_>, address: &[u8]) -> FmtResult {
    write!(f, "0x")?;
    for byte in address.iter().rev() {
        write!(f, "{byte:02x}")?;
    }
    Ok(())
}

impl Display for Details {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(
            f,
            "{:<20}= 0x{:02x} RX_DR={:x} TX_DS={:x} MAX_RT={:x} RX_P_NO={:x} TX_FULL={:x}",
            "STATUS",
            self.status.into_bits(),
            self.status.rx_dr() as u8,
            self.status.tx_ds() as u8,
            self.status.max_rt() as u8,
            self.status.rx_pipe(),
            self.status.tx_full() as u8
        )?;

        write!(f, "{:<20}= ", "RX_ADDR_P0-1")?;
        fmt_address(f, &self.rx_addr_p0)?;
        write!(f, " ")?;
        fmt_address(f, &self.rx_addr_p1)?;
        writeln!(f)?;

        write!(f, "{:<20}=", "RX_ADDR_P2-5")?;
        for byte in self.rx_addr_p2_5 {
            write!(f, " 0x{byte:02x}")?;
        }
        writeln!(f)?;

        write!(f, "{:<20}= ", "TX_ADDR")?;
        fmt_address(f, &self.tx_addr)?;
        writeln!(f)?;

        write!(f, "{:<20}=", "RX_PW_P0-5")?;
        for width in self.rx_pw {
            write!(f, " 0x{width:02x}")?;
        }
        writeln!(f)?;

        writeln!(f, "{:<20}= 0x{:02x}", "EN_AA", self.en_aa)?;
        writeln!(f, "{:<20}= 0x{:02x}", "EN_RXADDR", self.en_rxaddr)?;
        writeln!(f, "{:<20}= 0x{:02x}", "RF_CH", self.rf_ch)?;
        writeln!(f, "{:<20}= 0x{:02x}", "RF_SETUP", self.rf_setup)?;
        writeln!(f, "{:<20}= 0x{:02x}", "CONFIG", self.config)?;
        writeln!(
            f,
            "{:<20}= 0x{:02x} 0x{:02x}",
            "DYNPD/FEATURE", self.dynpd, self.feature
        )?;
        writeln!(f, "{:<20}= {}", "Data Rate", self.data_rate())?;
        writeln!(
            f,
            "{:<20}= {}",
            "Model",
            if self.is_plus_variant {
                "nRF24L01+"
            } else {
                "nRF24L01"
            }
        )?;
        writeln!(f, "{:<20}= {}", "CRC Length", self.crc_length())?;
        write!(f, "{:<20}= {}", "PA Power", self.pa_level())
    }
}

impl<SPI, DO, DELAY, CLOCK> EsbDetails for RF24<SPI, DO, DELAY, CLOCK>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    type DetailsErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_details(&mut self) -> Result<Details, Self::DetailsErrorType> {
        let status = self.get_status()?;

        let mut rx_addr_p0 = [0u8; ADDRESS_WIDTH];
        self.read_register_buf(registers::RX_ADDR_P0, &mut rx_addr_p0)?;
        let mut rx_addr_p1 = [0u8; ADDRESS_WIDTH];
        self.read_register_buf(registers::RX_ADDR_P1, &mut rx_addr_p1)?;
        let mut rx_addr_p2_5 = [0u8; 4];
        for (offset, byte) in rx_addr_p2_5.iter_mut().enumerate() {
            *byte = self.read_register(registers::RX_ADDR_P2 + offset as u8)?;
        }
        let mut tx_addr = [0u8; ADDRESS_WIDTH];
        self.read_register_buf(registers::TX_ADDR, &mut tx_addr)?;

        let mut rx_pw = [0u8; PIPE_COUNT as usize];
        for (pipe, width) in rx_pw.iter_mut().enumerate() {
            *width = self.read_register(registers::RX_PW_P0 + pipe as u8)?;
        }

        Ok(Details {
            status,
            rx_addr_p0,
            rx_addr_p1,
            rx_addr_p2_5,
            tx_addr,
            rx_pw,
            en_aa: self.read_register(registers::EN_AA)?,
            en_rxaddr: self.read_register(registers::EN_RXADDR)?,
            rf_ch: self.read_register(registers::RF_CH)?,
            rf_setup: self.read_register(registers::RF_SETUP)?,
            config: self.read_register(registers::CONFIG)?,
            dynpd: self.read_register(registers::DYNPD)?,
            feature: self.read_register(registers::FEATURE)?,
            is_plus_variant: self._p_variant,
        })
    }

    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let details = self.get_details()?;
        #[cfg(feature = "std")]
        std::println!("{details}");
        #[cfg(feature = "defmt")]
        defmt::println!("{}", defmt::Display2Format(&details));
        #[cfg(not(any(feature = "std", feature = "defmt")))]
        let _ = details;
        Ok(())
    }
}
