//! Bit-level output for the packed Huffman payload.

/// A bit writer that packs bits MSB first, zero-padding the final byte.
///
/// The first bit written lands in bit 7 of the first output byte.
#[derive(Debug)]
pub struct BitWriter {
    buffer: Vec<u8>,
    current_byte: u8,
    bit_position: u8, // Free bits left in `current_byte`, counts from 8 down to 0
    bit_len: u64,
}

impl BitWriter {
    /// Create a new bit writer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a new bit writer with specified byte capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            current_byte: 0,
            bit_position: 8,
            bit_len: 0,
        }
    }

    /// Write the low `num_bits` of `value`, most significant of those first.
    ///
    /// # Arguments
    /// * `value` - The value to write (only lower `num_bits` are used)
    /// * `num_bits` - Number of bits to write (0-64)
    #[inline]
    pub fn write_bits(&mut self, value: u64, num_bits: u8) {
        debug_assert!(num_bits <= 64);

        let mut remaining = num_bits;
        while remaining > 0 {
            let to_write = remaining.min(self.bit_position);

            // Take the top `to_write` of the remaining bits
            let shift = remaining - to_write;
            let mask = (1u64 << to_write) - 1;
            let bits = ((value >> shift) & mask) as u8;

            self.bit_position -= to_write;
            self.current_byte |= bits << self.bit_position;
            remaining -= to_write;

            if self.bit_position == 0 {
                self.buffer.push(self.current_byte);
                self.current_byte = 0;
                self.bit_position = 8;
            }
        }
        self.bit_len += num_bits as u64;
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.write_bits(bit as u64, 1);
    }

    /// Pads remaining bits with zeros.
    pub fn flush(&mut self) {
        if self.bit_position < 8 {
            self.buffer.push(self.current_byte);
            self.current_byte = 0;
            self.bit_position = 8;
        }
    }

    /// Flush and return the packed bytes.
    #[must_use]
    pub fn finish(mut self) -> Vec<u8> {
        self.flush();
        self.buffer
    }

    /// Returns length in bytes (not counting partial byte).
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True if no bits have been written.
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Number of meaningful bits written so far, excluding padding.
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}
