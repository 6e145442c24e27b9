//! # huffpack
//!
//! A lossless byte-stream compressor based on static Huffman coding.
//!
//! The whole input is analyzed first: byte frequencies are counted, a
//! Huffman tree is built from them, and every byte is replaced by its code.
//! The output container stores the frequency table rather than the tree,
//! so the decoder rebuilds exactly the tree the encoder used.
//!
//! ## Features
//!
//! - **One runtime dependency** (`thiserror`) for the library itself
//! - **Deterministic output**: equal input always gives equal containers
//! - **Explicit length field**: padding bits never decode as data
//! - Optional `huffpack` command-line tool via the `cli` feature
//! - Optional WebAssembly bindings via the `wasm` feature
//!
//! ## Example
//!
//! ```rust
//! let data = b"abracadabra";
//! let packed = huffpack::compress(data).unwrap();
//! let unpacked = huffpack::decompress(&packed).unwrap();
//! assert_eq!(unpacked, data);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bits;
pub mod compress;
pub mod container;
pub mod decode;
pub mod error;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use compress::{compress, compress_with_stats, CompressStats};
pub use container::Container;
pub use decode::decompress;
pub use error::{Error, Result};
