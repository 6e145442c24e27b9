//! Decompression: container parsing, tree reconstruction, and tree-driven
//! bit unpacking.

pub mod bit_reader;
pub mod unpack;

use crate::compress::huffman::{CodeTable, HuffmanTree};
use crate::container::Container;
use crate::error::{Error, Result};

pub use unpack::unpack;

/// Recover the original bytes from a container produced by
/// [`crate::compress::compress`].
///
/// The tree is rebuilt from the stored frequency table, exactly as the
/// encoder built it. The payload must hold exactly the bits the table
/// implies, rounded up to a whole byte.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
    let container = Container::parse(bytes)?;
    if container.frequencies.is_empty() {
        return Ok(Vec::new());
    }

    let tree = HuffmanTree::build(&container.frequencies)?;
    let codes = CodeTable::from_tree(&tree);

    let expected = codes.encoded_bit_len(&container.frequencies).div_ceil(8);
    if container.payload.len() as u64 != expected {
        return Err(Error::format(format!(
            "payload is {} bytes, frequency table implies {}",
            container.payload.len(),
            expected
        )));
    }

    let symbol_count = usize::try_from(container.original_len)
        .map_err(|_| Error::format("original length does not fit in memory"))?;
    unpack(&container.payload, &tree, symbol_count)
}
