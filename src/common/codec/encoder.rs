pub use encode::*;

// Encoder
//------------------------------------------------------------------------------

pub mod encode {
    use tracing::trace;

    use super::writer::{pad_remaining_capacity, push_byte_data, push_header, push_terminator};
    use crate::common::codec::MODE_BITS;
    use crate::common::metadata::{ECLevel, Version};
    use crate::common::{BitStream, QRError, QRResult};

    /// Packs `data` in byte mode into the data codewords of the given symbol
    /// configuration, padded up to its full data capacity.
    pub fn encode_with_version(data: &[u8], ver: Version, ecl: ECLevel) -> QRResult<BitStream> {
        let bcap = ver.data_bit_capacity(ecl)?;
        let len_bits = ver.char_cnt_bits();

        let sz = MODE_BITS + len_bits + (data.len() << 3);
        if sz > bcap || data.len() >= 1 << len_bits {
            return Err(QRError::PayloadTooLarge { bits: sz, capacity: bcap });
        }

        let mut bs = BitStream::new(bcap);
        push_header(data.len(), len_bits, &mut bs);
        push_byte_data(data, &mut bs);
        push_terminator(&mut bs);
        pad_remaining_capacity(&mut bs);

        trace!(payload_bits = sz, capacity = bcap, "Packed data codewords");
        Ok(bs)
    }

    #[cfg(test)]
    mod encode_tests {
        use test_case::test_case;

        use super::encode_with_version;
        use crate::common::codec::PADDING_CODEWORDS;
        use crate::common::error::QRError;
        use crate::common::metadata::{ECLevel, Version};

        #[test]
        fn test_hello_world() {
            let bs = encode_with_version(b"Hello World", Version::new(2), ECLevel::L).unwrap();
            let mut exp = vec![
                0x40, 0xB4, 0x86, 0x56, 0xC6, 0xC6, 0xF2, 0x05, 0x76, 0xF7, 0x26, 0xC6, 0x40,
            ];
            exp.extend(PADDING_CODEWORDS.iter().cycle().take(21));
            assert_eq!(bs.data(), exp);
            assert_eq!(bs.len(), 34 * 8);
        }

        #[test]
        fn test_empty_payload() {
            let bs = encode_with_version(b"", Version::new(1), ECLevel::L).unwrap();
            let mut exp = vec![0b0100_0000, 0b0000_0000];
            exp.extend(PADDING_CODEWORDS.iter().cycle().take(17));
            assert_eq!(bs.data(), exp);
        }

        #[test]
        fn test_terminator_fills_capacity() {
            // 4 + 8 + 17 * 8 leaves room for exactly the terminator
            let data = [0xFF; 17];
            let bs = encode_with_version(&data, Version::new(1), ECLevel::L).unwrap();
            assert_eq!(bs.len(), 152);
            assert_eq!(bs.data()[18], 0b1111_0000);
        }

        #[test]
        fn test_payload_one_byte_too_large() {
            let data = [0xFF; 18];
            let err = encode_with_version(&data, Version::new(1), ECLevel::L).unwrap_err();
            assert_eq!(err, QRError::PayloadTooLarge { bits: 156, capacity: 152 });
        }

        #[test_case(1, ECLevel::L, 17)]
        #[test_case(1, ECLevel::M, 14)]
        #[test_case(1, ECLevel::Q, 11)]
        #[test_case(1, ECLevel::H, 7)]
        #[test_case(2, ECLevel::L, 32)]
        #[test_case(2, ECLevel::H, 14)]
        #[test_case(3, ECLevel::M, 42)]
        #[test_case(4, ECLevel::L, 78)]
        #[test_case(5, ECLevel::L, 106)]
        fn test_byte_capacity(ver: usize, ecl: ECLevel, max_len: usize) {
            let ver = Version::new(ver);
            let data = vec![b'a'; max_len + 1];
            assert!(encode_with_version(&data[..max_len], ver, ecl).is_ok());
            let err = encode_with_version(&data, ver, ecl).unwrap_err();
            assert!(matches!(err, QRError::PayloadTooLarge { .. }));
        }

        #[test]
        fn test_unsupported_configuration() {
            let err = encode_with_version(b"", Version::new(3), ECLevel::H).unwrap_err();
            assert_eq!(err, QRError::UnsupportedConfiguration { version: 3, ec_level: ECLevel::H });
            let err = encode_with_version(&[0; 200], Version::new(0), ECLevel::L).unwrap_err();
            assert_eq!(err, QRError::UnsupportedConfiguration { version: 0, ec_level: ECLevel::L });
        }
    }
}

// Writer for encoded data
//------------------------------------------------------------------------------

pub(super) mod writer {
    use crate::common::codec::{BYTE_MODE, MODE_BITS, PADDING_CODEWORDS};
    use crate::common::BitStream;

    pub fn push_header(char_cnt: usize, len_bits: usize, out: &mut BitStream) {
        out.push_bits(BYTE_MODE, MODE_BITS);
        debug_assert!(
            char_cnt < (1 << len_bits),
            "Char count exceeds bit length: Char count {char_cnt}, Char count bits {len_bits}"
        );
        out.push_bits(char_cnt as u16, len_bits);
    }

    pub fn push_byte_data(data: &[u8], out: &mut BitStream) {
        for &b in data {
            out.push_bits(b, 8);
        }
    }

    pub fn push_terminator(out: &mut BitStream) {
        let bit_len = out.len();
        let bit_capacity = out.capacity();
        if bit_len < bit_capacity {
            let term_len = std::cmp::min(4, bit_capacity - bit_len);
            out.push_bits(0u8, term_len);
        }
    }

    pub fn pad_remaining_capacity(out: &mut BitStream) {
        push_padding_bits(out);
        push_padding_codewords(out);
    }

    fn push_padding_bits(out: &mut BitStream) {
        let offset = out.len() & 7;
        if offset > 0 {
            let padding_bits_len = 8 - offset;
            out.push_bits(0u8, padding_bits_len);
        }
    }

    fn push_padding_codewords(out: &mut BitStream) {
        let offset = out.len() & 7;
        debug_assert!(
            offset == 0,
            "Bit offset should be zero before padding codewords: {}",
            offset
        );

        let remain_byte_capacity = (out.capacity() - out.len()) >> 3;
        PADDING_CODEWORDS.iter().copied().cycle().take(remain_byte_capacity).for_each(|pc| {
            out.push_bits(pc, 8);
        });
    }

}
