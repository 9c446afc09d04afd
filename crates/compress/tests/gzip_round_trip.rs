//! Property and edge-case tests for the gzip helpers.
//!
//! This test suite focuses on:
//! 1. Round-trip correctness for arbitrary payloads and levels
//! 2. Multi-member archives built from independently compressed records
//! 3. Rejection of corrupted input

use compress::CompressionLevel;
use compress::gzip::{compress, compress_to_vec, decompress_to_vec};
use proptest::prelude::*;

fn level_strategy() -> impl Strategy<Value = CompressionLevel> {
    prop_oneof![
        Just(CompressionLevel::Fast),
        Just(CompressionLevel::Default),
        Just(CompressionLevel::Best),
        (1u32..=9).prop_map(|n| CompressionLevel::from_numeric(n).expect("in range")),
    ]
}

proptest! {
    #[test]
    fn decompress_inverts_compress(payload in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let compressed = compress(&payload).expect("compress");
        prop_assert_eq!(decompress_to_vec(&compressed).expect("decompress"), payload);
    }

    #[test]
    fn round_trip_holds_for_every_level(
        payload in proptest::collection::vec(any::<u8>(), 1..2048),
        level in level_strategy(),
    ) {
        let compressed = compress_to_vec(&payload, level).expect("compress");
        prop_assert_eq!(decompress_to_vec(&compressed).expect("decompress"), payload);
    }

    #[test]
    fn archives_decode_to_concatenated_records(
        records in proptest::collection::vec("[a-z ]{0,64}", 1..8),
    ) {
        let mut archive = Vec::new();
        let mut expected = Vec::new();
        for record in &records {
            let mut line = record.as_bytes().to_vec();
            line.push(b'\n');
            archive.extend(compress(&line).expect("compress record"));
            expected.extend(line);
        }
        prop_assert_eq!(decompress_to_vec(&archive).expect("decompress archive"), expected);
    }
}

#[test]
fn large_incompressible_payload_round_trips() {
    // xorshift keeps the payload deterministic without pulling in an RNG crate.
    let mut state = 0x2545_f491_u32;
    let payload: Vec<u8> = (0..(256 * 1024))
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state.to_le_bytes()[0]
        })
        .collect();

    let compressed = compress(&payload).expect("compress");
    assert_eq!(decompress_to_vec(&compressed).expect("decompress"), payload);
}

#[test]
fn corrupted_header_is_rejected() {
    let mut compressed = compress(b"payload").expect("compress");
    compressed[0] = 0x00;
    assert!(decompress_to_vec(&compressed).is_err());
}

#[test]
fn corrupted_crc_is_rejected() {
    let mut compressed = compress(b"payload with a checksum").expect("compress");
    let crc_offset = compressed.len() - 8;
    compressed[crc_offset] ^= 0xff;
    assert!(decompress_to_vec(&compressed).is_err());
}
