//! Container format: frequency table, original length, packed payload.
//!
//! ```text
//! +-------------+----------------------------+--------------+---------+
//! | count (i32) | count x (byte u8, freq i32) | length (u64) | payload |
//! +-------------+----------------------------+--------------+---------+
//! ```
//!
//! All integers are little-endian. Entries are written in ascending byte
//! order. `length` is the number of decoded bytes, which equals the sum of
//! the frequencies; decoding stops there, so payload padding is never
//! mistaken for a symbol.

use crate::compress::frequency::FrequencyTable;
use crate::error::{Error, Result};

/// Size of the entry count field.
pub const COUNT_SIZE: usize = 4;
/// Size of one `(byte, frequency)` table entry.
pub const ENTRY_SIZE: usize = 5;
/// Size of the original length field.
pub const LENGTH_SIZE: usize = 8;

/// A parsed or to-be-written container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    /// Frequency of every byte value in the original data.
    pub frequencies: FrequencyTable,
    /// Length of the original data in bytes.
    pub original_len: u64,
    /// Packed, zero-padded bitstream.
    pub payload: Vec<u8>,
}

impl Container {
    /// Size of everything before the payload.
    pub fn header_len(&self) -> usize {
        COUNT_SIZE + self.frequencies.distinct() * ENTRY_SIZE + LENGTH_SIZE
    }

    /// Serialize to bytes.
    ///
    /// Fails with [`Error::InputTooLarge`] if a frequency does not fit the
    /// 32-bit signed frequency field.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.header_len() + self.payload.len());

        let count = self.frequencies.distinct() as i32;
        out.extend_from_slice(&count.to_le_bytes());

        for (symbol, count) in self.frequencies.iter() {
            let frequency =
                i32::try_from(count).map_err(|_| Error::InputTooLarge { symbol, count })?;
            out.push(symbol);
            out.extend_from_slice(&frequency.to_le_bytes());
        }

        out.extend_from_slice(&self.original_len.to_le_bytes());
        out.extend_from_slice(&self.payload);
        Ok(out)
    }

    /// Parse a container, validating the table and the length field.
    ///
    /// The payload is taken as-is; its size is checked against the code
    /// table by the decoder, which rebuilds the tree.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(bytes);

        let count = i32::from_le_bytes(cursor.take_array("entry count")?);
        if !(0..=256).contains(&count) {
            return Err(Error::format(format!(
                "table entry count {count} outside 0..=256"
            )));
        }
        let count = count as usize;
        if count * ENTRY_SIZE > cursor.remaining() {
            return Err(Error::format(format!(
                "declared {count} table entries but only {} bytes follow",
                cursor.remaining()
            )));
        }

        let mut seen = [false; 256];
        let mut entries = Vec::with_capacity(count);
        for _ in 0..count {
            let [symbol] = cursor.take_array::<1>("table entry")?;
            let frequency = i32::from_le_bytes(cursor.take_array("table entry")?);
            if std::mem::replace(&mut seen[symbol as usize], true) {
                return Err(Error::format(format!(
                    "byte {symbol:#04x} appears twice in the table"
                )));
            }
            if frequency <= 0 {
                return Err(Error::format(format!(
                    "byte {symbol:#04x} has non-positive frequency {frequency}"
                )));
            }
            entries.push((symbol, frequency as u64));
        }
        let frequencies = FrequencyTable::from_counts(entries);

        let original_len = u64::from_le_bytes(cursor.take_array("original length")?);
        if original_len != frequencies.total() {
            return Err(Error::format(format!(
                "original length {original_len} does not match frequency total {}",
                frequencies.total()
            )));
        }

        let payload = cursor.rest().to_vec();
        if frequencies.is_empty() && !payload.is_empty() {
            return Err(Error::format("payload present for an empty table"));
        }

        Ok(Self {
            frequencies,
            original_len,
            payload,
        })
    }
}

/// Forward-only reader over a byte slice.
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take_array<const N: usize>(&mut self, what: &str) -> Result<[u8; N]> {
        let bytes = self
            .data
            .get(self.pos..self.pos + N)
            .ok_or_else(|| Error::format(format!("container truncated in {what}")))?;
        self.pos += N;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    fn rest(self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}
