//! Huffman tree construction and code table generation.
//!
//! The encoder and decoder each rebuild the tree from the same frequency
//! table, so construction must be fully deterministic. Ties between equal
//! frequencies are broken by insertion sequence: leaves are numbered in
//! ascending byte order, and each merged node takes the next number.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

use crate::compress::frequency::FrequencyTable;
use crate::error::{Error, Result};

/// Longest code a [`Code`] can hold.
///
/// Container frequencies are `i32`, and a Huffman tree of depth `d` needs a
/// total weight of at least the `(d + 2)`th Fibonacci number, so real trees
/// stay far below this.
pub const MAX_CODE_LENGTH: u8 = 64;

/// A node of a Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A single byte value and its occurrence count.
    Leaf {
        /// The byte value.
        symbol: u8,
        /// Occurrences of `symbol`.
        frequency: u64,
    },
    /// The merge of two subtrees. Left is bit 0, right is bit 1.
    Internal {
        /// Sum of the children's frequencies.
        frequency: u64,
        /// Subtree reached by a 0 bit.
        left: Box<Node>,
        /// Subtree reached by a 1 bit.
        right: Box<Node>,
    },
}

impl Node {
    /// Frequency of this subtree.
    pub fn frequency(&self) -> u64 {
        match self {
            Node::Leaf { frequency, .. } | Node::Internal { frequency, .. } => *frequency,
        }
    }

    /// Byte value if this is a leaf.
    pub fn symbol(&self) -> Option<u8> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// Priority queue entry, ordered by `(frequency, sequence)`.
#[derive(Debug)]
struct Queued {
    frequency: u64,
    sequence: usize,
    node: Node,
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

/// A Huffman tree built from a frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
    leaves: usize,
}

impl HuffmanTree {
    /// Build the tree for a non-empty frequency table.
    ///
    /// A table with one distinct byte yields a lone leaf; it is never
    /// merged with itself. Fails with [`Error::InvalidInput`] if the counts
    /// are skewed enough to need codes longer than [`MAX_CODE_LENGTH`].
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        let mut heap: BinaryHeap<Reverse<Queued>> = frequencies
            .iter()
            .enumerate()
            .map(|(sequence, (symbol, frequency))| {
                Reverse(Queued {
                    frequency,
                    sequence,
                    node: Node::Leaf { symbol, frequency },
                })
            })
            .collect();
        let leaves = heap.len();
        let mut next_sequence = leaves;

        loop {
            let Some(Reverse(left)) = heap.pop() else {
                return Err(Error::InvalidInput(
                    "cannot build a Huffman tree from an empty frequency table",
                ));
            };
            let Some(Reverse(right)) = heap.pop() else {
                let tree = Self {
                    root: left.node,
                    leaves,
                };
                if tree.depth() > MAX_CODE_LENGTH as usize {
                    return Err(Error::InvalidInput(
                        "frequencies need codes longer than 64 bits",
                    ));
                }
                return Ok(tree);
            };

            let frequency = left
                .frequency
                .checked_add(right.frequency)
                .ok_or(Error::InvalidInput("frequency total overflows u64"))?;
            heap.push(Reverse(Queued {
                frequency,
                sequence: next_sequence,
                node: Node::Internal {
                    frequency,
                    left: Box::new(left.node),
                    right: Box::new(right.node),
                },
            }));
            next_sequence += 1;
        }
    }

    /// The root node; a lone leaf when only one byte value occurs.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of leaves, one per distinct byte value.
    pub fn leaf_count(&self) -> usize {
        self.leaves
    }

    /// Number of internal nodes (`leaves - 1`).
    pub fn internal_count(&self) -> usize {
        self.leaves - 1
    }

    /// Depth of the deepest leaf. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        fn walk(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 0,
                Node::Internal { left, right, .. } => 1 + walk(left).max(walk(right)),
            }
        }
        walk(&self.root)
    }
}

impl fmt::Display for HuffmanTree {
    /// Indented outline: one line per node, children two spaces deeper.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn render(f: &mut fmt::Formatter<'_>, node: &Node, nest: usize) -> fmt::Result {
            let indent = " ".repeat(nest * 2);
            match node {
                Node::Leaf { symbol, frequency } => {
                    writeln!(f, "{indent}{frequency}: {}", symbol_label(*symbol))
                }
                Node::Internal {
                    frequency,
                    left,
                    right,
                } => {
                    writeln!(f, "{indent}{frequency}:")?;
                    render(f, left, nest + 1)?;
                    render(f, right, nest + 1)
                }
            }
        }
        render(f, &self.root, 0)
    }
}

/// Human-readable label for a byte: the quoted character when printable
/// ASCII, otherwise its hex value.
pub fn symbol_label(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        format!("{:?}", byte as char)
    } else {
        format!("0x{byte:02x}")
    }
}

/// A prefix code: `length` bits, read MSB first from the low end of `value`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Code {
    value: u64,
    length: u8,
}

impl Code {
    /// Create a code from its bits (right-aligned) and bit count.
    pub fn new(value: u64, length: u8) -> Self {
        debug_assert!(length <= MAX_CODE_LENGTH);
        Self { value, length }
    }

    /// The code bits (right-aligned).
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Number of bits in the code.
    pub fn length(&self) -> u8 {
        self.length
    }

    /// The code bits in transmission order.
    pub fn bits(&self) -> impl Iterator<Item = bool> {
        let Code { value, length } = *self;
        (0..length).rev().map(move |shift| (value >> shift) & 1 == 1)
    }

    /// Whether `self` is a prefix of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.length <= other.length && other.value >> (other.length - self.length) == self.value
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Byte value to code mapping derived from a [`HuffmanTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Code>; 256],
}

impl CodeTable {
    /// Walk the tree depth-first, appending 0 for left and 1 for right.
    ///
    /// A lone leaf gets the one-bit code `0`.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = [None; 256];
        match tree.root() {
            Node::Leaf { symbol, .. } => codes[*symbol as usize] = Some(Code::new(0, 1)),
            root => assign_codes(root, 0, 0, &mut codes),
        }
        Self { codes }
    }

    /// Code for `byte`, if it occurred in the analyzed data.
    #[inline]
    pub fn get(&self, byte: u8) -> Option<Code> {
        self.codes[byte as usize]
    }

    /// Coded byte values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(i, code)| code.map(|code| (i as u8, code)))
    }

    /// Number of coded byte values.
    pub fn len(&self) -> usize {
        self.codes.iter().flatten().count()
    }

    /// True if no byte value has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(Option::is_none)
    }

    /// Longest code in the table.
    pub fn max_length(&self) -> u8 {
        self.iter().map(|(_, code)| code.length()).max().unwrap_or(0)
    }

    /// Exact payload size in bits for data with the given frequencies.
    pub fn encoded_bit_len(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| count * code.length() as u64))
            .sum()
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self { codes: [None; 256] }
    }
}

fn assign_codes(node: &Node, value: u64, depth: u8, codes: &mut [Option<Code>; 256]) {
    match node {
        Node::Leaf { symbol, .. } => codes[*symbol as usize] = Some(Code::new(value, depth)),
        Node::Internal { left, right, .. } => {
            debug_assert!(depth < MAX_CODE_LENGTH);
            assign_codes(left, value << 1, depth + 1, codes);
            assign_codes(right, (value << 1) | 1, depth + 1, codes);
        }
    }
}
