//! Compression: frequency analysis, tree construction, code assignment,
//! and bit packing.

pub mod frequency;
pub mod huffman;
pub mod pack;

use std::time::{Duration, Instant};

use crate::container::Container;
use crate::error::Result;

pub use frequency::FrequencyTable;
pub use huffman::{Code, CodeTable, HuffmanTree, Node};
pub use pack::{pack, PackedBits};

/// Timing and accounting information for a single compression.
#[derive(Debug, Clone, Default)]
pub struct CompressStats {
    /// Occurrences of each byte value in the input.
    pub frequencies: FrequencyTable,
    /// Code assigned to each byte value present.
    pub codes: CodeTable,
    /// Depth of the deepest leaf in the Huffman tree.
    pub tree_depth: usize,
    /// Indented outline of the Huffman tree (empty for empty input).
    pub tree: String,
    /// Input size in bytes.
    pub input_len: usize,
    /// Meaningful bits in the packed payload, excluding padding.
    pub payload_bits: u64,
    /// Size of the complete container in bytes.
    pub container_len: usize,
    /// Time spent counting byte frequencies.
    pub analyze_time: Duration,
    /// Time spent building the tree and the code table.
    pub build_time: Duration,
    /// Time spent packing code bits.
    pub pack_time: Duration,
}

impl CompressStats {
    /// Container size as a fraction of the input size (0.0 for empty input).
    pub fn ratio(&self) -> f64 {
        if self.input_len == 0 {
            0.0
        } else {
            self.container_len as f64 / self.input_len as f64
        }
    }

    /// Average code length over the input, in bits per byte.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.input_len == 0 {
            0.0
        } else {
            self.payload_bits as f64 / self.input_len as f64
        }
    }
}

/// Compress `data` into a self-describing container.
///
/// Empty input produces a container with an empty table and no payload.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let frequencies = FrequencyTable::from_bytes(data);

    let payload = if frequencies.is_empty() {
        Vec::new()
    } else {
        let tree = HuffmanTree::build(&frequencies)?;
        let codes = CodeTable::from_tree(&tree);
        pack(data, &codes)?.bytes
    };

    Container {
        frequencies,
        original_len: data.len() as u64,
        payload,
    }
    .to_bytes()
}

/// Compress `data` and report what the encoder did.
///
/// The container is byte-identical to the one [`compress`] produces.
pub fn compress_with_stats(data: &[u8]) -> Result<(Vec<u8>, CompressStats)> {
    let t0 = Instant::now();
    let frequencies = FrequencyTable::from_bytes(data);
    let analyze_time = t0.elapsed();

    let mut stats = CompressStats {
        input_len: data.len(),
        analyze_time,
        ..Default::default()
    };

    let payload = if frequencies.is_empty() {
        Vec::new()
    } else {
        let t1 = Instant::now();
        let tree = HuffmanTree::build(&frequencies)?;
        let codes = CodeTable::from_tree(&tree);
        stats.build_time = t1.elapsed();

        let t2 = Instant::now();
        let packed = pack(data, &codes)?;
        stats.pack_time = t2.elapsed();

        stats.tree_depth = tree.depth();
        stats.tree = tree.to_string();
        stats.payload_bits = packed.bit_len;
        stats.codes = codes;
        packed.bytes
    };

    let container = Container {
        frequencies,
        original_len: data.len() as u64,
        payload,
    };
    let bytes = container.to_bytes()?;

    stats.frequencies = container.frequencies;
    stats.container_len = bytes.len();
    Ok((bytes, stats))
}
