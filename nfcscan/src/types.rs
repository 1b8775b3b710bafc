// nfcscan/src/types.rs

use derive_more::Display;

use crate::constants::ANDROID_TECH_PREFIX;

/// Application Identifier - Newtype Pattern over a static byte string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Aid(&'static [u8]);

impl Aid {
    /// AID over a static byte string.
    pub const fn new(bytes: &'static [u8]) -> Self {
        Self(bytes)
    }

    /// Raw AID bytes
    pub fn as_bytes(&self) -> &'static [u8] {
        self.0
    }

    /// Uppercase hex, the form AIDs are usually written in (`A0000000031010`).
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_upper(self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Aid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// One record of a tag's NDEF message as reported by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NdefRecordRaw {
    /// Type Name Format, 0..=7 (3 bits)
    pub tnf: u8,
    /// Record type field
    pub type_: Vec<u8>,
    /// Record payload
    pub payload: Vec<u8>,
}

impl NdefRecordRaw {
    /// Record from its three fields.
    pub fn new(tnf: u8, type_: impl Into<Vec<u8>>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            tnf,
            type_: type_.into(),
            payload: payload.into(),
        }
    }
}

/// Tag technology as advertised by the radio stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Technology {
    /// ISO 14443-4
    IsoDep,
    /// MIFARE Classic sector access
    MifareClassic,
    /// MIFARE Ultralight page access
    MifareUltralight,
    /// NFC Forum NDEF access
    Ndef,
    /// Tag that can be formatted for NDEF
    NdefFormatable,
    /// ISO 14443-3A
    NfcA,
    /// ISO 14443-3B
    NfcB,
    /// JIS 6319-4 (FeliCa)
    NfcF,
    /// ISO 15693
    NfcV,
    /// Unrecognised name, kept as given
    Other(String),
}

impl Technology {
    /// Parse a technology name with or without the `android.nfc.tech.` prefix.
    pub fn from_name(name: &str) -> Self {
        let short = name.strip_prefix(ANDROID_TECH_PREFIX).unwrap_or(name);
        match short {
            "IsoDep" => Self::IsoDep,
            "MifareClassic" => Self::MifareClassic,
            "MifareUltralight" => Self::MifareUltralight,
            "Ndef" => Self::Ndef,
            "NdefFormatable" => Self::NdefFormatable,
            "NfcA" => Self::NfcA,
            "NfcB" => Self::NfcB,
            "NfcF" => Self::NfcF,
            "NfcV" => Self::NfcV,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Raw tag descriptor captured by the transport for one scan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawTag {
    /// Tag identifier as hex
    pub id: String,
    /// Technology names in the order the transport reported them
    pub tech_types: Vec<String>,
    /// NDEF capacity in bytes
    pub max_size: Option<u32>,
    /// Whether the tag accepts NDEF writes
    pub is_writable: Option<bool>,
    /// NDEF message read during discovery
    pub ndef_message: Option<Vec<NdefRecordRaw>>,
    /// ISO 14443-3A ATQA as hex
    pub atqa: Option<String>,
    /// ISO 14443-3A SAK as hex
    pub sak: Option<String>,
}

impl RawTag {
    /// Descriptor with an id and technology names; everything else unset.
    pub fn new<S: Into<String>>(id: impl Into<String>, tech_types: impl IntoIterator<Item = S>) -> Self {
        Self {
            id: id.into(),
            tech_types: tech_types.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Attach the NDEF message read during discovery.
    pub fn with_ndef_message(mut self, records: Vec<NdefRecordRaw>) -> Self {
        self.ndef_message = Some(records);
        self
    }

    /// Set the NDEF capacity.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Set NDEF writability.
    pub fn with_writable(mut self, writable: bool) -> Self {
        self.is_writable = Some(writable);
        self
    }

    /// Set the ISO 14443-3A ATQA and SAK.
    pub fn with_atqa_sak(mut self, atqa: impl Into<String>, sak: impl Into<String>) -> Self {
        self.atqa = Some(atqa.into());
        self.sak = Some(sak.into());
        self
    }

    /// Parsed technology list, in reported order
    pub fn technologies(&self) -> impl Iterator<Item = Technology> + '_ {
        self.tech_types.iter().map(|t| Technology::from_name(t))
    }

    /// Whether the tag advertised `tech`
    pub fn supports(&self, tech: &Technology) -> bool {
        self.technologies().any(|t| &t == tech)
    }
}

/// Exactly one category per scan result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CardCategory {
    /// Track 2 decoded from an ISO-DEP application
    #[display(fmt = "EMV payment card")]
    Emv,
    /// MIFARE Classic block with a plausible balance
    #[display(fmt = "transit card")]
    TransitCard,
    /// MIFARE Classic without a balance
    #[display(fmt = "other MIFARE card")]
    OtherMifare,
    /// NDEF message, no stronger signal
    #[display(fmt = "NDEF tag")]
    NdefTag,
    /// Nothing recognised
    #[display(fmt = "unknown")]
    Unknown,
}
