use std::mem;

use num_traits::PrimInt;

use super::error::{QRError, QRResult};

// Bit stream
//------------------------------------------------------------------------------

/// Append-only MSB-first bit sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    data: Vec<u8>,
    // Bit length
    len: usize,
    // Max bit capacity
    capacity: usize,
}

impl BitStream {
    pub fn new(capacity: usize) -> Self {
        Self { data: Vec::with_capacity((capacity + 7) >> 3), len: 0, capacity }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl From<&[u8]> for BitStream {
    fn from(inp: &[u8]) -> Self {
        let bit_len = inp.len() << 3;
        Self { data: inp.to_vec(), len: bit_len, capacity: bit_len }
    }
}

// Push bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    /// Appends the low `size` bits of `bits`, most significant first.
    pub fn push_bits<T: PrimInt>(&mut self, bits: T, size: usize) {
        let max_bits = mem::size_of::<T>() * 8;
        debug_assert!(size <= max_bits, "Bit count exceeds type width: Size {size}, Max {max_bits}");

        for i in (0..size).rev() {
            self.push((bits >> i) & T::one() == T::one());
        }
    }

    pub fn push(&mut self, bit: bool) {
        debug_assert!(
            self.len < self.capacity,
            "Insufficient capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + 1
        );

        let offset = self.len & 7;
        if offset == 0 {
            self.data.push(0);
        }
        if bit {
            let pos = self.len >> 3;
            self.data[pos] |= 0b10000000 >> offset;
        }

        self.len += 1;
    }

    pub fn extend(&mut self, arr: &[u8]) {
        debug_assert!(
            (self.len & 7) == 0,
            "Bit offset must be zero to extend from another array: Bit offset {}",
            self.len & 7
        );
        let arr_bits = arr.len() << 3;
        debug_assert!(
            self.len + arr_bits <= self.capacity,
            "Extension shouldn't overflow capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + arr_bits
        );
        self.data.extend_from_slice(arr);
        self.len += arr_bits;
    }
}


// Read bits from bit stream
//------------------------------------------------------------------------------

impl BitStream {
    pub fn get(&self, index: usize) -> QRResult<bool> {
        if index >= self.len {
            return Err(QRError::BitIndexOutOfRange { index, len: self.len });
        }
        Ok(self.bit(index))
    }

    pub fn iter(&self) -> Bits<'_> {
        Bits { stream: self, cursor: 0 }
    }

    fn bit(&self, index: usize) -> bool {
        let offset = index & 7;
        let pos = index >> 3;
        (self.data[pos] << offset) & 0b10000000 != 0
    }
}

pub struct Bits<'a> {
    stream: &'a BitStream,
    cursor: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.stream.len {
            return None;
        }
        let bit = self.stream.bit(self.cursor);
        self.cursor += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.stream.len - self.cursor;
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl<'a> IntoIterator for &'a BitStream {
    type Item = bool;
    type IntoIter = Bits<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
