//! Bit packing of Huffman-coded bytes.

use crate::bits::BitWriter;
use crate::compress::huffman::CodeTable;
use crate::error::{Error, Result};

/// Packed payload: code bits in input order, zero-padded to a byte boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBits {
    /// The packed bytes.
    pub bytes: Vec<u8>,
    /// Number of meaningful bits; the rest of the last byte is padding.
    pub bit_len: u64,
}

impl PackedBits {
    /// Meaningful bits in the final byte (1-8), or 0 for an empty payload.
    pub fn tail_bits(&self) -> u8 {
        match self.bit_len % 8 {
            0 if self.bit_len > 0 => 8,
            n => n as u8,
        }
    }
}

/// Concatenate the code of every byte in `data`, in order.
pub fn pack(data: &[u8], codes: &CodeTable) -> Result<PackedBits> {
    // Most inputs shrink; start at the input size and let the writer grow.
    let mut writer = BitWriter::with_capacity(data.len());
    for &byte in data {
        let code = codes.get(byte).ok_or(Error::UnknownSymbol(byte))?;
        writer.write_bits(code.value(), code.length());
    }
    let bit_len = writer.bit_len();
    Ok(PackedBits {
        bytes: writer.finish(),
        bit_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress::frequency::FrequencyTable;
    use crate::compress::huffman::HuffmanTree;

    fn codes_for(data: &[u8]) -> CodeTable {
        CodeTable::from_tree(&HuffmanTree::build(&FrequencyTable::from_bytes(data)).unwrap())
    }

    #[test]
    fn test_pack_aaab() {
        // a=1, b=0 -> 1110 padded
        let packed = pack(b"aaab", &codes_for(b"aaab")).unwrap();
        assert_eq!(packed.bytes, vec![0b11100000]);
        assert_eq!(packed.bit_len, 4);
        assert_eq!(packed.tail_bits(), 4);
    }

    #[test]
    fn test_pack_empty() {
        let packed = pack(&[], &codes_for(b"x")).unwrap();
        assert!(packed.bytes.is_empty());
        assert_eq!(packed.bit_len, 0);
        assert_eq!(packed.tail_bits(), 0);
    }

    #[test]
    fn test_pack_single_symbol_uses_one_bit_each() {
        let data = vec![7u8; 17];
        let packed = pack(&data, &codes_for(&data)).unwrap();
        assert_eq!(packed.bit_len, 17);
        assert_eq!(packed.bytes, vec![0, 0, 0]);
        assert_eq!(packed.tail_bits(), 1);
    }

    #[test]
    fn test_pack_exact_byte_boundary() {
        // abcd -> 00 01 10 11
        let packed = pack(b"abcd", &codes_for(b"abcd")).unwrap();
        assert_eq!(packed.bytes, vec![0b00011011]);
        assert_eq!(packed.bit_len, 8);
        assert_eq!(packed.tail_bits(), 8);
    }

    #[test]
    fn test_pack_unknown_symbol() {
        let err = pack(b"abz", &codes_for(b"ab")).unwrap_err();
        assert_eq!(err, Error::UnknownSymbol(b'z'));
    }

    #[test]
    fn test_pack_bit_len_matches_table() {
        let data = b"mississippi river";
        let table = FrequencyTable::from_bytes(data);
        let codes = CodeTable::from_tree(&HuffmanTree::build(&table).unwrap());
        let packed = pack(data, &codes).unwrap();
        assert_eq!(packed.bit_len, codes.encoded_bit_len(&table));
        assert_eq!(packed.bytes.len() as u64, packed.bit_len.div_ceil(8));
    }
}
