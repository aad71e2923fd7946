use crate::common::error::{QRError, QRResult};

// Galois field GF(256)
//------------------------------------------------------------------------------

/// Exponent and logarithm tables over GF(2^8) with primitive polynomial 0x11D.
///
/// The tables are computed at compile time for [`GF256`]; builds borrow the field
/// by shared reference, so any number of them can run concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaloisField {
    exp: [u8; 256],
    log: [u8; 256],
}

impl GaloisField {
    pub const fn new() -> Self {
        let mut exp = [0u8; 256];
        let mut log = [0u8; 256];
        let mut x: u16 = 1;
        let mut i = 0;
        while i < 255 {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= PRIMITIVE_POLYNOMIAL;
            }
            i += 1;
        }
        // Alpha^255 wraps back to 1
        exp[255] = exp[0];
        Self { exp, log }
    }

    pub fn exp(&self, n: usize) -> u8 {
        self.exp[n % 255]
    }

    pub fn log(&self, a: u8) -> QRResult<u8> {
        if a == 0 {
            return Err(QRError::LogOfZero);
        }
        Ok(self.log[a as usize])
    }

    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_sum = self.log[a as usize] as usize + self.log[b as usize] as usize;
        self.exp(log_sum)
    }
}

impl Default for GaloisField {
    fn default() -> Self {
        Self::new()
    }
}


// Global constants
//------------------------------------------------------------------------------

const PRIMITIVE_POLYNOMIAL: u16 = 0x11D;

pub static GF256: GaloisField = GaloisField::new();
