pub mod encoder;

pub use encoder::*;

// Global constants
//------------------------------------------------------------------------------

pub const MODE_BITS: usize = 4;

// Mode indicator for 8-bit byte data
pub const BYTE_MODE: u8 = 0b0100;

pub static PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];
