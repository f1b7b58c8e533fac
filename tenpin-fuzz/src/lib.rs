//! Fuzzing placeholder for tenpin-core decoding
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decoder

pub fn fuzz_decode_symbol(data: &[u8]) {
    use tenpin_core::decoder::decode_symbol;

    // Try to decode - should never panic
    if let Ok(token) = core::str::from_utf8(data) {
        let _ = decode_symbol(token, None);
        let _ = decode_symbol(token, Some(3));
        let _ = decode_symbol(token, Some(10));
    }
}

pub fn fuzz_decode_game(data: &[u8]) {
    use tenpin_core::decoder::decode_game;

    // Split raw bytes into token records - decoding should never panic
    if let Ok(text) = core::str::from_utf8(data) {
        let records: Vec<Vec<&str>> = text
            .lines()
            .map(|line| line.split(',').collect())
            .collect();
        let _ = decode_game(&records);
    }
}
