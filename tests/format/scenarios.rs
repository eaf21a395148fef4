//! Concrete payloads with known output.

use packtrie::{decode_trie, DecodeOptions, Record, TrieDumper, TrieFile};

use crate::common::{encode_file, encode_payload, map, tight_options, words};

fn records(payload: &[u8]) -> Vec<Record> {
    let mut records = Vec::new();
    decode_trie(payload, &mut records, &DecodeOptions::default()).unwrap();
    records
}

#[test]
fn single_simple_leaf_at_root() {
    assert_eq!(records(&[0x05]), vec![Record::new("", 5)]);
}

#[test]
fn branch_with_single_child() {
    assert_eq!(records(&[0x82, b'a', 0x01]), vec![Record::new("a", 1)]);
}

#[test]
fn encoder_matches_hand_assembled_bytes() {
    assert_eq!(encode_payload(&map(&[("", 5)])), vec![0x05]);
    assert_eq!(encode_payload(&map(&[("a", 1)])), vec![0x41, 0x01, b'a']);
    assert_eq!(
        encode_payload(&map(&[("a", 1), ("b", 2)])),
        vec![0x84, b'a', 0x01, b'b', 0x02]
    );
}

#[test]
fn words_decode_in_ascending_order() {
    let entries = words();
    let trie = TrieFile::from_bytes(&encode_file(&entries), DecodeOptions::default()).unwrap();
    let decoded = trie.records().unwrap();

    let expected: Vec<Record> = entries
        .iter()
        .map(|(k, v)| Record::new(k.clone(), *v))
        .collect();
    assert_eq!(decoded, expected);
    assert!(decoded.windows(2).all(|w| w[0].key < w[1].key));
}

#[test]
fn outcome_covers_whole_payload() {
    let payload = encode_payload(&words());
    let mut records = Vec::new();
    let outcome = decode_trie(&payload, &mut records, &DecodeOptions::default()).unwrap();
    assert_eq!(outcome.end_offset, payload.len());
    assert_eq!(outcome.stats.records, records.len() as u64);
    assert_eq!(outcome.stats.records, 10);
    assert!(outcome.stats.branches > 0);
}

#[test]
fn long_keys_grow_the_key_buffer() {
    let long_a = "k".repeat(300) + "a";
    let long_b = "k".repeat(300) + "b";
    let entries = map(&[(long_a.as_str(), 1), (long_b.as_str(), 2)]);
    let payload = encode_payload(&entries);

    let mut records = Vec::new();
    let outcome = decode_trie(&payload, &mut records, &tight_options()).unwrap();
    assert_eq!(
        records,
        vec![Record::new(long_a, 1), Record::new(long_b, 2)]
    );
    assert_eq!(outcome.stats.max_depth, 301);
}

#[test]
fn dump_renders_text_lines() {
    let entries = map(&[("", 0), ("a", 1), ("ab", 22), ("b", 333)]);
    let mut out = Vec::new();
    TrieDumper::new(DecodeOptions::new().separator(b':'))
        .dump(&mut encode_file(&entries).as_slice(), &mut out)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), ":0\na:1\nab:22\nb:333\n");
}

#[test]
fn binary_keys_survive() {
    let mut entries = std::collections::BTreeMap::new();
    entries.insert(vec![0x00], 1);
    entries.insert(vec![0x00, 0xFF], 2);
    entries.insert(vec![0x80, 0x0A, 0x09], 3);
    let payload = encode_payload(&entries);
    let decoded = records(&payload);
    assert_eq!(
        decoded,
        vec![
            Record::new(vec![0x00], 1),
            Record::new(vec![0x00, 0xFF], 2),
            Record::new(vec![0x80, 0x0A, 0x09], 3),
        ]
    );
}
