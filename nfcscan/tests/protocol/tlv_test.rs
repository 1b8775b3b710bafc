#[path = "../common/mod.rs"]
mod common;

use nfcscan::protocol::tlv::{self, TlvIter};

#[test]
fn decodes_fci_like_buffer() {
    // 6F (FCI template) followed by 84 (DF name) and a two-byte tag 9F38
    let buffer = common::hex_bytes("6f0284009f380300112284023250");
    let map = tlv::decode(&buffer);
    assert_eq!(map.get("6F"), Some("8400"));
    assert_eq!(map.get("9F38"), Some("001122"));
    assert_eq!(map.get("84"), Some("3250"));
    assert_eq!(map.len(), 3);
}

#[test]
fn long_form_length() {
    let mut buffer = vec![0x5A, 0x81, 0x90];
    buffer.extend(std::iter::repeat(0xAB).take(0x90));
    let map = tlv::decode(&buffer);
    assert_eq!(map.get("5A").map(str::len), Some(0x90 * 2));
}

#[test]
fn truncated_value_keeps_earlier_entries() {
    let buffer = common::hex_bytes("5a0241115f240325");
    let map = tlv::decode(&buffer);
    assert_eq!(map.get("5A"), Some("4111"));
    assert!(!map.contains("5F24"));
}

#[test]
fn dangling_tag_byte() {
    let map = tlv::decode(&[0x57, 0x01, 0x00, 0x5F]);
    assert_eq!(map.len(), 1);
    assert!(tlv::decode(&[]).is_empty());
}

#[test]
fn duplicate_tags_last_wins() {
    let map = tlv::decode(&common::hex_bytes("5a01015a0102"));
    assert_eq!(map.get("5A"), Some("02"));
}

#[test]
fn iterator_yields_raw_slices_in_order() {
    let buffer = common::hex_bytes("5f2001419f1f00");
    let elements: Vec<_> = TlvIter::new(&buffer).collect();
    assert_eq!(
        elements,
        vec![(&[0x5F, 0x20][..], &[0x41][..]), (&[0x9F, 0x1F][..], &[][..])]
    );
}

#[test]
fn decodes_recorded_read_record_answer() {
    let record = common::mastercard_record();
    let map = tlv::decode(&record[..record.len() - 2]);
    let template = map.get("70").unwrap();
    let inner = tlv::decode(&common::hex_bytes(template));
    assert_eq!(inner.get("57"), Some("5413330089020011d2512201000000000f"));
    assert!(inner.contains("5F20"));
    assert_eq!(inner.get("9F1F"), Some("30303030"));
}
