/// Register addresses of the nRF24L01.
pub mod registers {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_AW: u8 = 0x03;
    pub const SETUP_RETR: u8 = 0x04;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const OBSERVE_TX: u8 = 0x08;
    /// Carrier Detect on the nRF24L01.
    pub const CD: u8 = 0x09;
    /// Received Power Detector on the nRF24L01+ (same address as [`CD`]).
    pub const RPD: u8 = 0x09;
    pub const RX_ADDR_P0: u8 = 0x0A;
    pub const RX_ADDR_P1: u8 = 0x0B;
    pub const RX_ADDR_P2: u8 = 0x0C;
    pub const RX_ADDR_P3: u8 = 0x0D;
    pub const RX_ADDR_P4: u8 = 0x0E;
    pub const RX_ADDR_P5: u8 = 0x0F;
    pub const TX_ADDR: u8 = 0x10;
    pub const RX_PW_P0: u8 = 0x11;
    pub const RX_PW_P1: u8 = 0x12;
    pub const RX_PW_P2: u8 = 0x13;
    pub const RX_PW_P3: u8 = 0x14;
    pub const RX_PW_P4: u8 = 0x15;
    pub const RX_PW_P5: u8 = 0x16;
    pub const FIFO_STATUS: u8 = 0x17;
    pub const DYNPD: u8 = 0x1C;
    pub const FEATURE: u8 = 0x1D;
}

/// SPI command opcodes of the nRF24L01.
pub mod commands {
    pub const R_REGISTER: u8 = 0x00;
    pub const W_REGISTER: u8 = 0x20;
    /// Register addresses never exceed 5 bits.
    pub const REGISTER_MASK: u8 = 0x1F;
    pub const ACTIVATE: u8 = 0x50;
    pub const R_RX_PL_WID: u8 = 0x60;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const W_ACK_PAYLOAD: u8 = 0xA8;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const REUSE_TX_PL: u8 = 0xE3;
    pub const NOP: u8 = 0xFF;

    /// The data byte that follows [`ACTIVATE`] to unlock the FEATURE, DYNPD and
    /// W_ACK_PAYLOAD facilities on non-plus chips.
    pub const ACTIVATE_KEY: u8 = 0x73;

    /// Encode a register read command.
    pub const fn read(register: u8) -> u8 {
        R_REGISTER | (register & REGISTER_MASK)
    }

    /// Encode a register write command.
    pub const fn write(register: u8) -> u8 {
        W_REGISTER | (register & REGISTER_MASK)
    }
}

/// Bit masks shared by the STATUS and CONFIG registers.
pub mod mnemonics {
    pub const MASK_RX_DR: u8 = 1 << 6;
    pub const MASK_TX_DS: u8 = 1 << 5;
    pub const MASK_MAX_RT: u8 = 1 << 4;
}

/// The largest payload the FIFOs can hold.
pub const MAX_PAYLOAD_SIZE: u8 = 32;

/// The highest RF channel this driver will write.
pub const MAX_CHANNEL: u8 = 127;

/// The number of data pipes.
pub const PIPE_COUNT: u8 = 6;

/// Full address width used by pipes 0, 1 and the TX address.
pub const ADDRESS_WIDTH: usize = 5;
