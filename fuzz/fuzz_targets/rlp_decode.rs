#![no_main]
use libfuzzer_sys::fuzz_target;

use morevp_rlp::{decode, encode};

fuzz_target!(|data: &[u8]| {
    // strict decoding means decode is the exact inverse of encode: anything
    // accepted must re-encode to the same bytes
    if let Ok(item) = decode(data) {
        let enc = encode(&item);
        assert_eq!(enc, data, "accepted input must be canonical");
    }
});
