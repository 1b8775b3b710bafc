// nfcscan/src/scan/result.rs

use crate::emv::CardInfo;
use crate::mifare::MifareBlock;
use crate::ndef::NdefRecordDecoded;
use crate::types::{CardCategory, RawTag};

/// Structured outcome of one successful scan.
///
/// Built only by [`assemble`](crate::scan::assemble): `card_info` is present
/// exactly when the category is [`CardCategory::Emv`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScanResult {
    pub(crate) raw_tag: RawTag,
    pub(crate) category: CardCategory,
    pub(crate) card_info: Option<CardInfo>,
    pub(crate) ndef_records: Option<Vec<NdefRecordDecoded>>,
    pub(crate) urls: Vec<String>,
    pub(crate) texts: Vec<String>,
    pub(crate) mifare_block: Option<MifareBlock>,
    pub(crate) technology: &'static str,
    pub(crate) manufacturer: &'static str,
}

impl ScanResult {
    /// Tag descriptor as received
    pub fn raw_tag(&self) -> &RawTag {
        &self.raw_tag
    }

    /// Classification of the tag
    pub fn category(&self) -> CardCategory {
        self.category
    }

    /// EMV display data; present only for [`CardCategory::Emv`]
    pub fn card_info(&self) -> Option<&CardInfo> {
        self.card_info.as_ref()
    }

    /// One entry per record of the tag's NDEF message, same order.
    pub fn ndef_records(&self) -> Option<&[NdefRecordDecoded]> {
        self.ndef_records.as_deref()
    }

    /// URIs from the NDEF message
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Texts from the NDEF message
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Block read by the MIFARE probe, if one ran and returned data
    pub fn mifare_block(&self) -> Option<&MifareBlock> {
        self.mifare_block.as_ref()
    }

    /// Balance estimate of a transit card.
    pub fn transit_balance_estimate(&self) -> Option<&str> {
        match self.category {
            CardCategory::TransitCard => self
                .mifare_block
                .as_ref()
                .and_then(|b| b.balance_estimate.as_deref()),
            _ => None,
        }
    }

    /// Human-readable technology label
    pub fn technology(&self) -> &'static str {
        self.technology
    }

    /// Chip vendor label
    pub fn manufacturer(&self) -> &'static str {
        self.manufacturer
    }
}

/// Terminal outcome of [`ScanSession::scan`](crate::scan::ScanSession::scan).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The scan ran to the end
    Completed(ScanResult),
    /// Human-readable reason the scan could not produce a result
    Failed(String),
    /// Cancelled through the session handle
    Cancelled,
}

impl ScanOutcome {
    /// The result of a completed scan
    pub fn result(&self) -> Option<&ScanResult> {
        match self {
            ScanOutcome::Completed(result) => Some(result),
            _ => None,
        }
    }

    /// Take the result of a completed scan.
    pub fn into_result(self) -> Option<ScanResult> {
        match self {
            ScanOutcome::Completed(result) => Some(result),
            _ => None,
        }
    }

    /// Whether the scan was cancelled
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ScanOutcome::Cancelled)
    }
}
