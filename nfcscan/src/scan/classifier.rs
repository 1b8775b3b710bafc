// nfcscan/src/scan/classifier.rs
//! Category decision and result assembly. Pure functions over what the
//! decoders already produced.

use crate::emv::CardInfo;
use crate::mifare::MifareBlock;
use crate::ndef::NdefDecoded;
use crate::scan::result::ScanResult;
use crate::types::{CardCategory, RawTag, Technology};

const UNKNOWN_LABEL: &str = "Unknown";

/// Pick the category. First match wins:
/// EMV identity, then a MIFARE Classic read, then NDEF content.
pub fn classify(
    tag: &RawTag,
    card_info: Option<&CardInfo>,
    mifare: Option<&MifareBlock>,
    ndef: Option<&NdefDecoded>,
) -> CardCategory {
    if card_info.is_some_and(CardInfo::has_valid_pan) {
        return CardCategory::Emv;
    }
    if tag.supports(&Technology::MifareClassic) {
        if let Some(block) = mifare {
            return if block.has_plausible_balance() {
                CardCategory::TransitCard
            } else {
                CardCategory::OtherMifare
            };
        }
    }
    if ndef.is_some_and(|n| !n.is_empty()) {
        return CardCategory::NdefTag;
    }
    CardCategory::Unknown
}

/// Technology and manufacturer labels, by the first technology the tag
/// advertises in this order: MIFARE Classic, MIFARE Ultralight, IsoDep,
/// NFC-A, NFC-B, NFC-F, NFC-V.
pub fn tag_labels(tag: &RawTag) -> (&'static str, &'static str) {
    const LABELS: [(Technology, &str, &str); 7] = [
        (Technology::MifareClassic, "MIFARE Classic", "NXP"),
        (Technology::MifareUltralight, "MIFARE Ultralight", "NXP"),
        (Technology::IsoDep, "ISO 14443 Type A/B (IsoDep)", UNKNOWN_LABEL),
        (Technology::NfcA, "NFC-A (ISO 14443 Type A)", UNKNOWN_LABEL),
        (Technology::NfcB, "NFC-B (ISO 14443 Type B)", UNKNOWN_LABEL),
        (Technology::NfcF, "NFC-F (FeliCa)", "Sony"),
        (Technology::NfcV, "NFC-V (ISO 15693)", UNKNOWN_LABEL),
    ];

    LABELS
        .iter()
        .find(|(tech, _, _)| tag.supports(tech))
        .map(|(_, technology, manufacturer)| (*technology, *manufacturer))
        .unwrap_or((UNKNOWN_LABEL, UNKNOWN_LABEL))
}

/// Classify and build the final [`ScanResult`]. Card info that does not
/// make the tag an EMV card is dropped.
pub fn assemble(
    tag: RawTag,
    card_info: Option<CardInfo>,
    mifare: Option<MifareBlock>,
    ndef: Option<NdefDecoded>,
) -> ScanResult {
    let category = classify(&tag, card_info.as_ref(), mifare.as_ref(), ndef.as_ref());
    let (technology, manufacturer) = tag_labels(&tag);
    let card_info = card_info.filter(|_| category == CardCategory::Emv);
    let (ndef_records, urls, texts) = match ndef {
        Some(n) => (Some(n.entries), n.urls, n.texts),
        None => (None, Vec::new(), Vec::new()),
    };

    ScanResult {
        raw_tag: tag,
        category,
        card_info,
        ndef_records,
        urls,
        texts,
        mifare_block: mifare,
        technology,
        manufacturer,
    }
}
