//! Reading trie files from disk and streams.

use std::io::Read;

use packtrie::{DecodeOptions, Record, TrieDumper, TrieError, TrieFile, TRIE_HEADER_SIZE};

use crate::common::{encode_file, map, temp_trie_file, words};

#[test]
fn open_file_from_disk() {
    let entries = words();
    let file = temp_trie_file(&encode_file(&entries));

    let trie = TrieFile::open(file.path()).unwrap();
    assert_eq!(trie.encoded_len(), std::fs::metadata(file.path()).unwrap().len() as usize);
    assert_eq!(trie.records().unwrap().len(), entries.len());
}

#[test]
fn bytes_after_payload_are_left_in_the_stream() {
    let mut image = encode_file(&map(&[("x", 9)]));
    image.extend_from_slice(b"tail");

    let mut input = image.as_slice();
    let trie = TrieFile::from_reader(&mut input, DecodeOptions::default()).unwrap();
    assert_eq!(trie.records().unwrap(), vec![Record::new("x", 9)]);

    let mut rest = String::new();
    input.read_to_string(&mut rest).unwrap();
    assert_eq!(rest, "tail");
}

#[test]
fn empty_payload_is_empty_trie() {
    let image = encode_file(&map(&[]));
    assert_eq!(image.len(), TRIE_HEADER_SIZE);
    let trie = TrieFile::from_bytes(&image, DecodeOptions::default()).unwrap();
    assert!(trie.records().unwrap().is_empty());
}

#[test]
fn dump_file_to_text() {
    let file = temp_trie_file(&encode_file(&map(&[("alpha", 1), ("beta", 2)])));
    let mut input = std::fs::File::open(file.path()).unwrap();
    let mut out = Vec::new();
    let outcome = TrieDumper::default().dump(&mut input, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "alpha\t1\nbeta\t2\n");
    assert_eq!(outcome.stats.records, 2);
}

#[test]
fn payload_limit_from_options() {
    let image = encode_file(&words());
    let err = TrieFile::from_bytes(&image, DecodeOptions::new().max_payload_len(4)).unwrap_err();
    assert!(matches!(err, TrieError::PayloadTooLarge { max: 4, .. }));
}
