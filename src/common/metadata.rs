use std::ops::{Deref, Not};

use super::error::{QRError, QRResult};

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn select<T>(self, dark: T, light: T) -> T {
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl From<bool> for Color {
    fn from(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

// Version
//------------------------------------------------------------------------------

/// Symbol version. Controls the side length: `4 * version + 17`.
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct Version(usize);

impl Version {
    pub const fn new(version: usize) -> Self {
        Self(version)
    }

    pub const fn width(self) -> usize {
        self.0 * 4 + 17
    }

    pub fn capacity(self, ecl: ECLevel) -> QRResult<CapacityEntry> {
        let unsupported = QRError::UnsupportedConfiguration { version: self.0, ec_level: ecl };
        let (total_codewords, per_level) =
            CAPACITIES.get(self.0.wrapping_sub(1)).ok_or(unsupported)?;
        let (ec_codewords, block_count) = per_level[ecl as usize].ok_or(unsupported)?;

        // Multi-block interleaving isn't supported
        if block_count != 1 {
            return Err(unsupported);
        }

        Ok(CapacityEntry { total_codewords: *total_codewords, ec_codewords, block_count })
    }

    pub fn data_bit_capacity(self, ecl: ECLevel) -> QRResult<usize> {
        Ok(self.capacity(ecl)?.data_codewords() << 3)
    }

    // Simplified char count width, exact for byte mode
    pub const fn char_cnt_bits(self) -> usize {
        match self.0 {
            1..=9 => 8,
            _ => 16,
        }
    }

    pub fn alignment_pattern(self) -> &'static [i16] {
        ALIGNMENT_PATTERN_POSITIONS.get(self.0.wrapping_sub(1)).copied().unwrap_or(&[])
    }
}

impl Deref for Version {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

impl ECLevel {
    // Indicator bits stored in the format info
    pub const fn format_bits(self) -> u32 {
        match self {
            Self::L => 0b01,
            Self::M => 0b00,
            Self::Q => 0b11,
            Self::H => 0b10,
        }
    }
}

// Capacity
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct CapacityEntry {
    pub total_codewords: usize,
    pub ec_codewords: usize,
    pub block_count: usize,
}

impl CapacityEntry {
    pub const fn data_codewords(&self) -> usize {
        self.total_codewords - self.ec_codewords
    }
}


// Global constants
//------------------------------------------------------------------------------

// (total codewords, [(ec codewords per block, block count); L, M, Q, H])
// Mixed block layouts are left out.
static CAPACITIES: [(usize, [Option<(usize, usize)>; 4]); 5] = [
    (26, [Some((7, 1)), Some((10, 1)), Some((13, 1)), Some((17, 1))]),
    (44, [Some((10, 1)), Some((16, 1)), Some((22, 1)), Some((28, 1))]),
    (70, [Some((15, 1)), Some((26, 1)), Some((18, 2)), Some((22, 2))]),
    (100, [Some((20, 1)), Some((18, 2)), Some((26, 2)), Some((16, 4))]),
    (134, [Some((26, 1)), Some((24, 2)), None, None]),
];

static ALIGNMENT_PATTERN_POSITIONS: [&[i16]; 7] =
    [&[], &[6, 18], &[6, 22], &[6, 26], &[6, 30], &[6, 34], &[6, 22, 38]];
