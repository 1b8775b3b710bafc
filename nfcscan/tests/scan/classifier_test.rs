#[path = "../common/mod.rs"]
mod common;

use nfcscan::emv::read_card_info;
use nfcscan::constants::AID_VISA;
use nfcscan::mifare::MifareBlock;
use nfcscan::ndef;
use nfcscan::scan::{assemble, classify};
use nfcscan::types::CardCategory;

fn visa_card() -> nfcscan::emv::CardInfo {
    let record = common::track2_record(&common::VISA_TRACK2, None);
    read_card_info(&record[..record.len() - 2], &AID_VISA).unwrap()
}

#[test]
fn emv_not_shadowed_by_mifare_balance() {
    let tag = common::dual_interface_tag();
    let card = visa_card();
    let block = MifareBlock::from_bytes(4, &common::mifare_block_with(50), "TL").unwrap();
    assert!(block.has_plausible_balance());

    assert_eq!(classify(&tag, Some(&card), Some(&block), None), CardCategory::Emv);

    let result = assemble(tag, Some(card), Some(block), None);
    assert_eq!(result.category(), CardCategory::Emv);
    assert_eq!(result.card_info().unwrap().pan, "4111-****-****-1111");
    assert_eq!(result.transit_balance_estimate(), None);
}

#[test]
fn ndef_only_when_nothing_more_specific() {
    let message = vec![common::text_record("en", "hello")];
    let tag = common::ndef_tag(message.clone());
    let decoded = ndef::decode(&message);

    let result = assemble(tag, None, None, decoded);
    assert_eq!(result.category(), CardCategory::NdefTag);
    assert_eq!(result.texts(), ["hello".to_string()]);
    assert_eq!(result.technology(), "MIFARE Ultralight");
    assert_eq!(result.manufacturer(), "NXP");
    assert!(result.card_info().is_none());
}

#[test]
fn card_info_present_iff_emv() {
    let cases = [
        (Some(visa_card()), CardCategory::Emv),
        (None, CardCategory::Unknown),
    ];
    for (card, expected) in cases {
        let result = assemble(common::emv_tag(), card, None, None);
        assert_eq!(result.category(), expected);
        assert_eq!(
            result.card_info().is_some(),
            result.category() == CardCategory::Emv
        );
    }
}

#[test]
fn ndef_records_mirror_source_message() {
    let message = vec![
        common::uri_record(0x03, "a.example"),
        common::text_record("fr", "bonjour"),
        common::uri_record(0x05, "+90123"),
    ];
    let result = assemble(
        common::ndef_tag(message.clone()),
        None,
        None,
        ndef::decode(&message),
    );
    let records = result.ndef_records().unwrap();
    assert_eq!(records.len(), message.len());
    for (i, (decoded, raw)) in records.iter().zip(&message).enumerate() {
        assert_eq!(decoded.index, i);
        assert_eq!(decoded.payload_length, raw.payload.len());
    }
    assert_eq!(result.urls(), ["http://a.example".to_string(), "tel:+90123".to_string()]);
}
