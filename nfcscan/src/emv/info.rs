use crate::protocol::pan::Issuer;
use crate::types::Aid;

/// Display data extracted from an EMV card. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardInfo {
    /// Masked PAN, or the `Invalid T2: ...` flag
    pub pan: String,
    /// `MM/YY`
    pub expiry: String,
    /// Scheme from the AID, or from the PAN prefix
    pub issuer: Issuer,
    /// Tag 5F20, trimmed; `None` when absent or blank
    pub cardholder_name: Option<String>,
    /// Application the Track 2 was read from
    pub aid: Aid,
}

impl CardInfo {
    /// True when a PAN was located and decoded, i.e. the card counts as an
    /// EMV card.
    pub fn has_valid_pan(&self) -> bool {
        !self.pan.is_empty() && self.pan != "N/A" && !self.pan.starts_with("Invalid")
    }
}
