//! WebAssembly bindings for huffpack.
//!
//! # Building
//!
//! ```bash
//! rustup target add wasm32-unknown-unknown
//! cargo install wasm-bindgen-cli
//!
//! cargo build --target wasm32-unknown-unknown --release --no-default-features --features wasm
//!
//! wasm-bindgen --target web --out-dir web/huffpack-wasm --out-name huffpack \
//!   target/wasm32-unknown-unknown/release/huffpack.wasm
//! ```
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { compress, decompress } from 'huffpack';
//!
//! await init();
//!
//! const input = new TextEncoder().encode('abracadabra');
//! const packed = compress(input);
//! const restored = decompress(packed);
//! ```

use wasm_bindgen::prelude::*;

/// Compress bytes into a huffpack container.
///
/// # Arguments
///
/// * `data` - Bytes to compress, as Uint8Array
///
/// # Returns
///
/// Container bytes as Uint8Array.
#[wasm_bindgen(js_name = "compress")]
pub fn compress(data: &[u8]) -> Result<Vec<u8>, JsError> {
    crate::compress::compress(data).map_err(|e| JsError::new(&e.to_string()))
}

/// Decompress a huffpack container.
///
/// Throws on a truncated or malformed container.
#[wasm_bindgen(js_name = "decompress")]
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, JsError> {
    crate::decode::decompress(data).map_err(|e| JsError::new(&e.to_string()))
}
