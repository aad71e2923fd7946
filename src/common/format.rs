use super::mask::MaskPattern;
use super::metadata::ECLevel;

// Format information
//------------------------------------------------------------------------------

/// BCH(15, 5) code for the 5-bit `(ec level << 3) | mask` value, xored with
/// [`FORMAT_MASK`] so that the code is never all zeros.
pub fn encode_format_info(data: u32) -> u32 {
    debug_assert!(data < 1 << FORMAT_DATA_BIT_LEN, "Format data exceeds 5 bits: {data}");

    let mut rem = data << FORMAT_ERROR_BIT_LEN;
    while bit_len(rem) > FORMAT_ERROR_BIT_LEN {
        rem ^= FORMAT_GENERATOR << (bit_len(rem) - bit_len(FORMAT_GENERATOR));
    }

    ((data << FORMAT_ERROR_BIT_LEN) | rem) ^ FORMAT_MASK
}

pub fn format_info(ecl: ECLevel, mask: MaskPattern) -> u32 {
    encode_format_info((ecl.format_bits() << 3) | *mask as u32)
}

fn bit_len(n: u32) -> usize {
    (u32::BITS - n.leading_zeros()) as usize
}


// Global constants
//------------------------------------------------------------------------------

pub const FORMAT_INFO_BIT_LEN: usize = 15;

const FORMAT_DATA_BIT_LEN: usize = 5;

const FORMAT_ERROR_BIT_LEN: usize = 10;

pub const FORMAT_GENERATOR: u32 = 0b10100110111;

pub const FORMAT_MASK: u32 = 0b101010000010010;

// Bit positions from MSB to LSB. Negative indices count from the far edge.
pub static FORMAT_INFO_COORDS_QR_MAIN: [(i16, i16); 15] = [
    (8, 0),
    (8, 1),
    (8, 2),
    (8, 3),
    (8, 4),
    (8, 5),
    (8, 7),
    (8, 8),
    (7, 8),
    (5, 8),
    (4, 8),
    (3, 8),
    (2, 8),
    (1, 8),
    (0, 8),
];

pub static FORMAT_INFO_COORDS_QR_SIDE: [(i16, i16); 15] = [
    (-1, 8),
    (-2, 8),
    (-3, 8),
    (-4, 8),
    (-5, 8),
    (-6, 8),
    (-7, 8),
    (8, -8),
    (8, -7),
    (8, -6),
    (8, -5),
    (8, -4),
    (8, -3),
    (8, -2),
    (8, -1),
];
