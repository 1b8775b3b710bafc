#[path = "../common/mod.rs"]
mod common;

use nfcscan::ndef::{self, NdefKind, Tnf};
use nfcscan::types::NdefRecordRaw;

#[test]
fn text_record_hi() {
    let raw = NdefRecordRaw::new(1, "T", vec![0x02, b'e', b'n', b'H', b'i']);
    let decoded = ndef::decode(&[raw]).unwrap();
    assert_eq!(decoded.entries[0].kind, NdefKind::Text);
    assert_eq!(decoded.entries[0].text, "Hi");
}

#[test]
fn uri_record_example() {
    let decoded = ndef::decode(&[common::uri_record(0x01, "example.com")]).unwrap();
    assert_eq!(decoded.entries[0].kind, NdefKind::Uri);
    assert_eq!(decoded.entries[0].text, "http://www.example.com");
}

#[test]
fn every_uri_prefix_code() {
    let records: Vec<_> = (0u8..36).map(|code| common::uri_record(code, "x")).collect();
    let decoded = ndef::decode(&records).unwrap();
    assert_eq!(decoded.urls.len(), 36);
    assert_eq!(decoded.urls[0], "x");
    assert_eq!(decoded.urls[6], "mailto:x");
    assert_eq!(decoded.urls[35], "urn:nfc:x");
}

#[test]
fn smart_poster_like_message() {
    let records = vec![
        common::uri_record(0x04, "shop.example/p/42"),
        common::text_record("en", "Product 42"),
        NdefRecordRaw::new(2, "application/vnd.wfa.wsc", vec![0x10, 0x4A, 0x00, 0x01]),
        NdefRecordRaw::new(4, "android.com:pkg", "com.example.shop"),
        NdefRecordRaw::new(0, "", Vec::new()),
    ];
    let decoded = ndef::decode(&records).unwrap();

    assert_eq!(decoded.urls, vec!["https://shop.example/p/42"]);
    assert_eq!(decoded.texts, vec!["Product 42"]);
    let entries = &decoded.entries;
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[2].kind, NdefKind::Mime);
    assert_eq!(entries[2].record_type, "application/vnd.wfa.wsc");
    assert_eq!(entries[2].raw_payload_hex, "10 4a 00 01");
    assert_eq!(entries[3].kind, NdefKind::External);
    assert_eq!(entries[3].text, "com.example.shop");
    assert_eq!(entries[4].kind, NdefKind::Unknown);
    assert_eq!(entries[4].tnf(), Tnf::Empty);
    assert!(entries[4].text.is_empty());
    assert_eq!(entries[4].payload_length, 0);
}

#[test]
fn latin1_payload_bytes_map_one_to_one() {
    let decoded = ndef::decode(&[NdefRecordRaw::new(2, "text/plain", vec![0x43, 0xE7, 0x61])]).unwrap();
    assert_eq!(decoded.entries[0].text, "C\u{e7}a");
}

#[test]
fn empty_message_is_not_ndef_data() {
    assert!(ndef::decode(&[]).is_none());
}
