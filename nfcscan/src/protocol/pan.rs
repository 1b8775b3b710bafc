//! PAN masking and card scheme inference

use derive_more::Display;

use crate::constants::{AID_AMEX, AID_MAESTRO, AID_MASTERCARD, AID_VISA};
use crate::types::Aid;

/// Card scheme, as far as it can be told from the AID and PAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Issuer {
    /// Visa, AID `A0000000031010` or PAN prefix 4
    #[display(fmt = "Visa")]
    Visa,
    /// Mastercard, AID `A0000000041010` or PAN prefix 51-55 / 2221-2720
    #[display(fmt = "Mastercard")]
    Mastercard,
    /// American Express, AID `A000000025010801` or PAN prefix 34/37
    #[display(fmt = "American Express")]
    AmericanExpress,
    /// Maestro, AID `A0000000043060`
    #[display(fmt = "Maestro")]
    Maestro,
    /// Selected application, scheme not recognised
    #[display(fmt = "Other EMV card")]
    OtherEmv,
}

impl Issuer {
    /// Exact match against the known application identifiers.
    pub fn from_aid(aid: &Aid) -> Option<Self> {
        match *aid {
            a if a == AID_VISA => Some(Self::Visa),
            a if a == AID_MASTERCARD => Some(Self::Mastercard),
            a if a == AID_AMEX => Some(Self::AmericanExpress),
            a if a == AID_MAESTRO => Some(Self::Maestro),
            _ => None,
        }
    }

    /// IIN range heuristics over the unmasked PAN digits.
    pub fn from_pan(pan: &str) -> Self {
        let prefix = |n: usize| pan.get(..n).and_then(|p| p.parse::<u32>().ok());

        if pan.starts_with('4') {
            return Self::Visa;
        }
        if matches!(prefix(2), Some(51..=55)) || matches!(prefix(4), Some(2221..=2720)) {
            return Self::Mastercard;
        }
        if matches!(prefix(2), Some(34 | 37)) {
            return Self::AmericanExpress;
        }
        Self::OtherEmv
    }
}

/// Scheme for a decoded card: a recognised AID wins over the PAN prefix.
pub fn determine_issuer(pan: &str, aid: Option<&Aid>) -> Issuer {
    aid.and_then(Issuer::from_aid)
        .unwrap_or_else(|| Issuer::from_pan(pan))
}

/// Mask a PAN as `first4-****-****-last4`. Non-digits are dropped first;
/// PANs of eight digits or fewer are shown as-is, an empty one as `N/A`.
pub fn format_pan(pan: &str) -> String {
    let digits: String = pan.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        0 => "N/A".to_string(),
        1..=8 => digits,
        n => format!("{}-****-****-{}", &digits[..4], &digits[n - 4..]),
    }
}
