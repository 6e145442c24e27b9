//! Byte frequency analysis.

/// Occurrence count of every byte value in a buffer.
///
/// Backed by a fixed 256-entry table, so analysis is a single pass with
/// no allocation. Iteration only yields byte values that occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl FrequencyTable {
    /// Count the occurrences of each byte value in `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &byte in data {
            counts[byte as usize] += 1;
        }
        Self { counts }
    }

    /// Build a table from `(byte, count)` pairs. Zero counts are skipped;
    /// a repeated byte value accumulates.
    ///
    /// Counts are not bounded here; [`HuffmanTree::build`] rejects tables
    /// whose codes would exceed 64 bits.
    ///
    /// [`HuffmanTree::build`]: crate::compress::HuffmanTree::build
    pub fn from_counts<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u8, u64)>,
    {
        let mut counts = [0u64; 256];
        for (byte, count) in pairs {
            counts[byte as usize] += count;
        }
        Self { counts }
    }

    /// Occurrence count of `byte` (zero when absent).
    #[inline]
    pub fn get(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// Present byte values and their counts, in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter_map(|(i, &count)| (count > 0).then_some((i as u8, count)))
    }

    /// Number of distinct byte values present.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Sum of all counts, i.e. the length of the analyzed buffer.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// True if no byte was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self { counts: [0; 256] }
    }
}
