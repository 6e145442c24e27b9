//! Fuzz target for container decoding.
//!
//! Arbitrary bytes must either decode or fail with an error; never panic
//! or allocate beyond what the payload can describe.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(decoded) = huffpack::decompress(data) {
        // Every decoded byte costs at least one payload bit
        assert!(decoded.len() as u64 <= data.len() as u64 * 8);
    }
});
