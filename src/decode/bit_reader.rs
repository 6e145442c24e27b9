//! Bit-level reader for the packed Huffman payload.
//!
//! Provides MSB-first bit reading with peek/consume semantics, the inverse of
//! [`crate::bits::BitWriter`].

use crate::error::{Error, Result};

/// Bit reader for MSB-first bit streams.
///
/// Maintains a bit buffer filled from the input byte stream.
pub struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
    bit_buf: u32,
    bits_in_buf: u8,
}

impl<'a> BitReader<'a> {
    /// Create a new MSB-first bit reader.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            bit_buf: 0,
            bits_in_buf: 0,
        }
    }

    /// Ensure at least `n` bits are available in the buffer.
    #[inline]
    fn ensure(&mut self, n: u8) -> Result<()> {
        while self.bits_in_buf < n {
            let Some(&byte) = self.data.get(self.pos) else {
                return Err(Error::format("payload ended before all symbols were decoded"));
            };
            self.pos += 1;
            // MSB-first: new byte goes to the right of what is buffered
            self.bit_buf = (self.bit_buf << 8) | (byte as u32);
            self.bits_in_buf += 8;
        }
        Ok(())
    }

    /// Peek at the next `n` bits without consuming them (MSB-first).
    #[inline]
    pub fn peek_bits(&mut self, n: u8) -> Result<u32> {
        debug_assert!(n <= 24);
        self.ensure(n)?;
        Ok((self.bit_buf >> (self.bits_in_buf - n)) & ((1 << n) - 1))
    }

    /// Consume `n` bits from the buffer.
    #[inline]
    pub fn consume(&mut self, n: u8) {
        debug_assert!(n <= self.bits_in_buf);
        self.bits_in_buf -= n;
        // Clear consumed bits
        self.bit_buf &= 1u32
            .checked_shl(self.bits_in_buf as u32)
            .unwrap_or(0)
            .wrapping_sub(1);
    }

    /// Read `n` bits MSB-first.
    #[inline]
    pub fn read_bits(&mut self, n: u8) -> Result<u32> {
        let val = self.peek_bits(n)?;
        self.consume(n);
        Ok(val)
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        self.read_bits(1).map(|bit| bit == 1)
    }

    /// Total bits consumed so far.
    pub fn bits_consumed(&self) -> u64 {
        self.pos as u64 * 8 - self.bits_in_buf as u64
    }
}
