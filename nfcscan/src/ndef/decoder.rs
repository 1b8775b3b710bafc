// nfcscan/src/ndef/decoder.rs

use crate::ndef::record::{NdefDecoded, NdefKind, NdefRecordDecoded, Tnf};
use crate::ndef::uri::uri_prefix;
use crate::types::NdefRecordRaw;
use crate::utils::{bytes_to_hex_spaced, latin1_to_string};

const RTD_TEXT: &[u8] = b"T";
const RTD_URI: &[u8] = b"U";

/// Status byte bits holding the language code length of a Text record
const TEXT_LANG_LEN_MASK: u8 = 0x3F;

/// Decode an NDEF message. An empty message is "no NDEF data" and yields
/// `None`.
pub fn decode(records: &[NdefRecordRaw]) -> Option<NdefDecoded> {
    if records.is_empty() {
        return None;
    }

    let mut decoded = NdefDecoded::default();
    for (index, record) in records.iter().enumerate() {
        let (kind, text) = interpret(record);
        match kind {
            NdefKind::Text => decoded.texts.push(text.clone()),
            NdefKind::Uri => decoded.urls.push(text.clone()),
            _ => {}
        }
        decoded.entries.push(NdefRecordDecoded {
            index,
            tnf: record.tnf,
            kind,
            record_type: latin1_to_string(&record.type_),
            text,
            raw_payload_hex: bytes_to_hex_spaced(&record.payload),
            payload_length: record.payload.len(),
        });
    }
    Some(decoded)
}

fn interpret(record: &NdefRecordRaw) -> (NdefKind, String) {
    let payload = record.payload.as_slice();
    let Some((&status, rest)) = payload.split_first() else {
        return (NdefKind::Unknown, String::new());
    };

    match Tnf::from_u8(record.tnf) {
        Tnf::WellKnown => match record.type_.as_slice() {
            RTD_TEXT => {
                let skip = (status & TEXT_LANG_LEN_MASK) as usize;
                let text = rest.get(skip..).unwrap_or_default();
                (NdefKind::Text, latin1_to_string(text))
            }
            RTD_URI => {
                let uri = format!("{}{}", uri_prefix(status), latin1_to_string(rest));
                (NdefKind::Uri, uri)
            }
            _ => (NdefKind::Unknown, latin1_to_string(payload)),
        },
        Tnf::Mime => (NdefKind::Mime, latin1_to_string(payload)),
        Tnf::External => (NdefKind::External, latin1_to_string(payload)),
        _ => (NdefKind::Unknown, latin1_to_string(payload)),
    }
}
