// fixtures.rs — recorded APDU answers and tag descriptors used across tests

use nfcscan::types::{NdefRecordRaw, RawTag};

/// SELECT PPSE as sent on the wire
pub const SELECT_PPSE_HEX: &str = "00a404000e325041592e5359532e444446303100";

/// READ RECORD answer of a Mastercard test card: template 70 wrapping
/// Track 2, cardholder name and an issuer-defined object, then 90 00.
pub const MASTERCARD_RECORD_HEX: &str = "702d57115413330089020011d2512201000000000f5f2010544553542f43415244484f4c444552209f1f04303030309000";

pub fn hex_bytes(s: &str) -> Vec<u8> {
    hex::decode(s).expect("fixture hex must be valid")
}

pub fn mastercard_record() -> Vec<u8> {
    hex_bytes(MASTERCARD_RECORD_HEX)
}

/// A 16-byte MIFARE Classic block whose first byte is `first`.
pub fn mifare_block_with(first: u8) -> Vec<u8> {
    let mut block = hex_bytes("00000000ffffffff0000000004fb04fb");
    block[0] = first;
    block
}

/// Text record in language `lang`.
pub fn text_record(lang: &str, text: &str) -> NdefRecordRaw {
    let mut payload = vec![lang.len() as u8];
    payload.extend_from_slice(lang.as_bytes());
    payload.extend_from_slice(text.as_bytes());
    NdefRecordRaw::new(1, "T", payload)
}

/// URI record with identifier code `code`.
pub fn uri_record(code: u8, rest: &str) -> NdefRecordRaw {
    let mut payload = vec![code];
    payload.extend_from_slice(rest.as_bytes());
    NdefRecordRaw::new(1, "U", payload)
}

/// Dual-interface card: ISO-DEP payment application plus MIFARE Classic.
pub fn dual_interface_tag() -> RawTag {
    RawTag::new(
        "04c3d2e1f0a0b0",
        [
            "android.nfc.tech.NfcA",
            "android.nfc.tech.IsoDep",
            "android.nfc.tech.MifareClassic",
        ],
    )
}
