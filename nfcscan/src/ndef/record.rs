// nfcscan/src/ndef/record.rs

use derive_more::Display;

/// NDEF Type Name Format (3-bit header field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Tnf {
    /// No type, no payload
    Empty,
    /// NFC Forum well-known type (`T`, `U`, ...)
    WellKnown,
    /// RFC 2046 media type
    Mime,
    /// Absolute URI in the type field
    AbsoluteUri,
    /// NFC Forum external type
    External,
    /// Type unknown to the writer
    Unknown,
    /// Chunk continuation
    Unchanged,
    /// Values 7 and above
    Reserved,
}

impl Tnf {
    /// Lower 3 bits only are meaningful; anything from 7 up is `Reserved`.
    pub fn from_u8(value: u8) -> Self {
        match value {
            0x00 => Self::Empty,
            0x01 => Self::WellKnown,
            0x02 => Self::Mime,
            0x03 => Self::AbsoluteUri,
            0x04 => Self::External,
            0x05 => Self::Unknown,
            0x06 => Self::Unchanged,
            _ => Self::Reserved,
        }
    }
}

/// How a record's payload was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NdefKind {
    /// Well-known `T`
    #[display(fmt = "text")]
    Text,
    /// Well-known `U`
    #[display(fmt = "URI")]
    Uri,
    /// Media-type record
    #[display(fmt = "MIME")]
    Mime,
    /// External-type record
    #[display(fmt = "external")]
    External,
    /// Anything else, payload rendered as Latin-1
    #[display(fmt = "unknown")]
    Unknown,
}

/// One decoded NDEF record. `index` is the record's position in the message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NdefRecordDecoded {
    /// Position in the message
    pub index: usize,
    /// Raw TNF value
    pub tnf: u8,
    /// How the payload was interpreted
    pub kind: NdefKind,
    /// Record type field as text (`"T"`, `"U"`, `"text/plain"`, ...)
    pub record_type: String,
    /// Human-readable payload
    pub text: String,
    /// Payload as space-separated lowercase hex
    pub raw_payload_hex: String,
    /// Payload size in bytes
    pub payload_length: usize,
}

impl NdefRecordDecoded {
    /// TNF as an enum.
    pub fn tnf(&self) -> Tnf {
        Tnf::from_u8(self.tnf)
    }
}

/// Decoded NDEF message: every record, plus the texts and URLs found in
/// message order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NdefDecoded {
    /// One entry per record
    pub entries: Vec<NdefRecordDecoded>,
    /// Expanded URIs in message order
    pub urls: Vec<String>,
    /// Text record contents in message order
    pub texts: Vec<String>,
}

impl NdefDecoded {
    /// True when the message had no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
