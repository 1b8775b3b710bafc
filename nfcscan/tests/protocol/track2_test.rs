#[path = "../common/mod.rs"]
mod common;

use nfcscan::protocol::pan::{determine_issuer, format_pan, Issuer};
use nfcscan::protocol::track2::parse_track2;
use nfcscan::constants::{AID_MAESTRO, AID_VISA};

#[test]
fn visa_track2() {
    let t2 = parse_track2("4111111111111111D25111234567F");
    assert_eq!(t2.card_number, "4111-****-****-1111");
    assert_eq!(t2.expiry_date, "11/25");
    assert!(t2.is_valid());
    assert_eq!(t2.pan(), "4111111111111111");
}

#[test]
fn expiry_is_read_as_yymm() {
    // D2501: year 25, month 01
    let t2 = parse_track2("4111111111111111D25011234567F");
    assert_eq!(t2.card_number, "4111-****-****-1111");
    assert_eq!(t2.expiry_date, "01/25");
    assert!(t2.is_valid());
}

#[test]
fn missing_separator_is_flagged() {
    let t2 = parse_track2("NODELIMITERHERE");
    assert_eq!(t2.card_number, "Invalid T2: NODELIMITERHERE");
    assert_eq!(t2.expiry_date, "N/A");
    assert!(!t2.is_valid());
}

#[test]
fn short_expiry_is_flagged() {
    let t2 = parse_track2("4111111111111111D25");
    assert!(t2.card_number.starts_with("Invalid T2: "));
    assert_eq!(t2.expiry_date, "N/A");
}

#[test]
fn lowercase_separator_and_pad() {
    let t2 = parse_track2("5413330089020011d2512201000000000f");
    assert_eq!(t2.card_number, "5413-****-****-0011");
    assert_eq!(t2.expiry_date, "12/25");
}

#[test]
fn pan_masking() {
    assert_eq!(format_pan("411111111111"), "4111-****-****-1111");
    assert_eq!(format_pan("1234"), "1234");
    assert_eq!(format_pan(""), "N/A");
    assert_eq!(format_pan("4111 1111 1111 1111"), "4111-****-****-1111");
}

#[test]
fn issuer_from_pan_prefix() {
    assert_eq!(determine_issuer("4000000000000002", None).to_string(), "Visa");
    assert_eq!(determine_issuer("5500000000000004", None).to_string(), "Mastercard");
    assert_eq!(determine_issuer("2221000000000009", None), Issuer::Mastercard);
    assert_eq!(
        determine_issuer("378282246310005", None).to_string(),
        "American Express"
    );
    assert_eq!(determine_issuer("6011000000000004", None), Issuer::OtherEmv);
}

#[test]
fn aid_beats_pan_prefix() {
    assert_eq!(determine_issuer("5500000000000004", Some(&AID_VISA)), Issuer::Visa);
    assert_eq!(determine_issuer("4111111111111111", Some(&AID_MAESTRO)), Issuer::Maestro);
}
