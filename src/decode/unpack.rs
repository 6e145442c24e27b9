//! Tree-driven decoding of a packed Huffman payload.

use crate::compress::huffman::{HuffmanTree, Node};
use crate::decode::bit_reader::BitReader;
use crate::error::{Error, Result};

/// Decode exactly `symbol_count` bytes from `packed` by walking `tree`.
///
/// Each bit moves from the current node to its left (0) or right (1)
/// child; reaching a leaf emits its byte and restarts at the root. A lone
/// leaf root consumes one bit per symbol. Padding bits after the last
/// symbol are never read, but a whole unused byte is a format error.
pub fn unpack(packed: &[u8], tree: &HuffmanTree, symbol_count: usize) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(packed);
    let mut output = Vec::with_capacity(symbol_count);
    let root = tree.root();

    if let Node::Leaf { symbol, .. } = root {
        for _ in 0..symbol_count {
            reader.read_bit()?;
            output.push(*symbol);
        }
        check_padding(packed, &reader)?;
        return Ok(output);
    }

    while output.len() < symbol_count {
        let mut node = root;
        loop {
            match node {
                Node::Leaf { symbol, .. } => {
                    output.push(*symbol);
                    break;
                }
                Node::Internal { left, right, .. } => {
                    node = if reader.read_bit()? { right.as_ref() } else { left.as_ref() };
                }
            }
        }
    }

    check_padding(packed, &reader)?;
    Ok(output)
}

/// Only the final partial byte may remain unread.
fn check_padding(packed: &[u8], reader: &BitReader<'_>) -> Result<()> {
    let unread = packed.len() as u64 * 8 - reader.bits_consumed();
    if unread >= 8 {
        return Err(Error::format(format!(
            "{} unused payload bytes after the last symbol",
            unread / 8
        )));
    }
    Ok(())
}
