#[path = "../common/mod.rs"]
mod common;

use nfcscan::config::ScanConfig;
use nfcscan::constants::{AID_MAESTRO, AID_MASTERCARD};
use nfcscan::emv::EmvSelector;
use nfcscan::events::ScanEvent;
use nfcscan::protocol::apdu;
use nfcscan::protocol::Issuer;
use nfcscan::transport::MockTransport;

#[test]
fn maestro_after_three_rejections() {
    common::init_logger();
    let mut mock = MockTransport::new();
    mock.push_response(common::OK.to_vec()); // PPSE
    for _ in 0..3 {
        mock.push_response(common::NOT_FOUND.to_vec()); // Visa, Mastercard, Amex
    }
    mock.push_response(common::OK.to_vec()); // Maestro
    mock.push_failure("tag connection lost"); // GPO
    mock.push_response(common::track2_record(&common::VISA_TRACK2, None)); // SFI 1
    // Anything further would be a protocol violation
    mock.push_response(common::OK.to_vec());

    let config = ScanConfig::default();
    let mut events = Vec::new();
    let info = EmvSelector::new(&config)
        .run(&mut mock, &mut |e: ScanEvent| events.push(e))
        .unwrap()
        .expect("Maestro application should yield card info");

    assert_eq!(info.issuer, Issuer::Maestro);
    assert_eq!(info.issuer.to_string(), "Maestro");
    assert_eq!(info.aid, AID_MAESTRO);
    assert_eq!(info.expiry, "11/25");

    // PPSE + 4 SELECTs + GPO + one READ RECORD
    assert_eq!(mock.sent.len(), 7);
    assert_eq!(mock.sent[4], apdu::select_aid(&AID_MAESTRO).build().unwrap());
    assert_eq!(mock.sent[6], apdu::read_record(1, 1).build().unwrap());
    assert_eq!(mock.replies.len(), 1);
    assert_eq!(
        events.iter().filter(|e| matches!(e, ScanEvent::ReadingRecord { .. })).count(),
        1
    );
}

#[test]
fn recorded_mastercard_trace() {
    common::init_logger();
    let mut mock = MockTransport::new();
    mock.push_response(common::hex_bytes("6f12840e325041592e5359532e4444463031a5009000"));
    mock.push_response(common::NOT_FOUND.to_vec());
    mock.push_response(common::hex_bytes("6f0b8407a0000000041010a5009000"));
    mock.push_response(common::hex_bytes("770a820219809404080101009000")); // AIP + AFL
    mock.push_response(common::mastercard_record());

    // The card wraps its record data in template 70
    let config = ScanConfig::builder().unwrap_record_template(true).build().unwrap();
    let info = EmvSelector::new(&config)
        .run(&mut mock, &mut |_e: ScanEvent| {})
        .unwrap()
        .unwrap();
    assert_eq!(info.aid, AID_MASTERCARD);
    assert_eq!(info.issuer, Issuer::Mastercard);
    assert_eq!(info.pan, "5413-****-****-0011");
    assert_eq!(info.expiry, "12/25");
    assert_eq!(info.cardholder_name.as_deref(), Some("TEST/CARDHOLDER"));
    assert_eq!(mock.sent[0], common::hex_bytes(common::SELECT_PPSE_HEX));
}

#[test]
fn recorded_mastercard_trace_needs_template_lookup() {
    let mut mock = MockTransport::new();
    mock.push_response(common::OK.to_vec()); // PPSE
    mock.push_response(common::NOT_FOUND.to_vec()); // Visa
    mock.push_response(common::OK.to_vec()); // Mastercard
    mock.push_response(common::OK.to_vec()); // GPO
    mock.push_response(common::mastercard_record()); // SFI 1, templated
    for _ in 0..3 {
        mock.push_response(common::NOT_FOUND.to_vec()); // SFI 2..=4
    }

    let config = ScanConfig::default();
    let info = EmvSelector::new(&config)
        .run(&mut mock, &mut |_e: ScanEvent| {})
        .unwrap();
    assert!(info.is_none());
    // Two AIDs left after Mastercard, the link answers nothing more
    assert_eq!(mock.sent.len(), 10);
}

#[test]
fn custom_candidate_list_and_sfi_range() {
    let config = ScanConfig::builder()
        .candidate_aids([AID_MASTERCARD])
        .sfi_range(2, 3)
        .build()
        .unwrap();
    let mut mock = MockTransport::new();
    mock.push_response(common::OK.to_vec()); // PPSE
    mock.push_response(common::OK.to_vec()); // Mastercard
    mock.push_response(common::OK.to_vec()); // GPO
    mock.push_response(common::NOT_FOUND.to_vec()); // SFI 2
    mock.push_response(common::NOT_FOUND.to_vec()); // SFI 3

    let mut sfis = Vec::new();
    let info = EmvSelector::new(&config).run(&mut mock, &mut |e: ScanEvent| {
        if let ScanEvent::ReadingRecord { sfi } = e {
            sfis.push(sfi);
        }
    })
    .unwrap();
    assert!(info.is_none());
    assert_eq!(sfis, vec![2, 3]);
    assert_eq!(mock.sent.len(), 5);
}

#[test]
fn link_lost_for_whole_session() {
    let mut mock = MockTransport::new();
    let config = ScanConfig::default();
    let info = EmvSelector::new(&config)
        .run(&mut mock, &mut |_e: ScanEvent| {})
        .unwrap();
    assert!(info.is_none());
    // PPSE and every SELECT still attempted
    assert_eq!(mock.sent.len(), 5);
}
