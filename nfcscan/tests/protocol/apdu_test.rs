#[path = "../common/mod.rs"]
mod common;

use nfcscan::constants::{AID_AMEX, AID_VISA};
use nfcscan::protocol::apdu::{self, ApduResponse};

#[test]
fn select_ppse_bytes() {
    assert_eq!(apdu::select_ppse().build().unwrap(), common::hex_bytes(common::SELECT_PPSE_HEX));
}

#[test]
fn select_aid_bytes() {
    assert_eq!(
        apdu::select_aid(&AID_VISA).build().unwrap(),
        common::hex_bytes("00a4040007a000000003101000")
    );
    assert_eq!(
        apdu::select_aid(&AID_AMEX).build().unwrap(),
        common::hex_bytes("00a4040006a0000000250100")
    );
}

#[test]
fn gpo_and_read_record_bytes() {
    assert_eq!(
        apdu::get_processing_options().build().unwrap(),
        vec![0x80, 0xA8, 0x00, 0x00, 0x02, 0x83, 0x00, 0x00]
    );
    let p2: Vec<u8> = (1..=4).map(|sfi| apdu::read_record(1, sfi).build().unwrap()[3]).collect();
    assert_eq!(p2, vec![0x0C, 0x14, 0x1C, 0x24]);
    assert_eq!(apdu::read_record(1, 2).build().unwrap(), vec![0x00, 0xB2, 0x01, 0x14, 0x00]);
}

#[test]
fn response_status_words() {
    let ok = ApduResponse::parse(&common::mastercard_record()).unwrap();
    assert!(ok.is_success());
    assert_eq!(ok.data.len(), 0x2F);

    let not_found = ApduResponse::parse(&common::NOT_FOUND).unwrap();
    assert!(!not_found.is_success());
    assert_eq!(not_found.status_word(), 0x6A82);
    assert!(not_found.data.is_empty());

    assert!(ApduResponse::parse(&[0x90]).is_err());
}
