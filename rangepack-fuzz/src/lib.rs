//! Fuzzing placeholder for rangepack-core decoders
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decoder

pub fn fuzz_decode(data: &[u8]) {
    use rangepack_core::decoder::decode_packet;

    // Try to decode - should never panic
    let _ = decode_packet(data);
}

pub fn fuzz_decompress(data: &[u8]) {
    use rangepack_core::compress::decompress;

    // Try to decompress - should never panic
    let _ = decompress(data);
}

pub fn fuzz_fec(data: &[u8]) {
    use rangepack_core::{fec, FecLevel};

    // Try each level - should never panic
    for level in [
        FecLevel::None,
        FecLevel::Low,
        FecLevel::Medium,
        FecLevel::High,
    ] {
        let _ = fec::decode(data, level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_decode_empty() {
        fuzz_decode(&[]);
    }

    #[test]
    fn test_fuzz_decode_random() {
        fuzz_decode(&[0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_fuzz_decompress_markers() {
        fuzz_decompress(&[0xFE, 0x05, 0x01]);
        fuzz_decompress(&[0xFF; 64]);
    }

    #[test]
    fn test_fuzz_fec_random() {
        fuzz_fec(&[0xAB; 40]);
        fuzz_fec(&[]);
    }
}
