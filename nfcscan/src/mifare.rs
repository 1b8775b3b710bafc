// nfcscan/src/mifare.rs
//! MIFARE Classic block probe used for the transit-card heuristic.

use log::warn;

use crate::transport::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::Result;

/// One block read from a MIFARE Classic card.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MifareBlock {
    /// Block number that was read
    pub block: u8,
    /// Space-separated lowercase hex
    pub raw_hex: String,
    /// `"<first byte> <currency> (estimate)"` when the first byte is non-zero
    pub balance_estimate: Option<String>,
}

impl MifareBlock {
    /// An empty read does not count as a read.
    pub fn from_bytes(block: u8, data: &[u8], currency: &str) -> Option<Self> {
        let first = *data.first()?;
        let balance_estimate = (first != 0).then(|| format!("{} {} (estimate)", first, currency));
        Some(Self {
            block,
            raw_hex: bytes_to_hex_spaced(data),
            balance_estimate,
        })
    }

    /// A non-zero first byte reads as a stored value.
    pub fn has_plausible_balance(&self) -> bool {
        self.balance_estimate.is_some()
    }
}

/// Read `block` and interpret it. Failures are logged and read as "no data";
/// only a cancellation is returned as an error.
pub fn probe(
    transport: &mut dyn Transport,
    block: u8,
    currency: &str,
) -> Result<Option<MifareBlock>> {
    match transport.read_mifare_block(block) {
        Ok(data) => Ok(MifareBlock::from_bytes(block, &data, currency)),
        Err(e) if e.is_cancellation() => Err(e),
        Err(e) => {
            warn!("MIFARE Classic block {} read failed: {}", block, e);
            Ok(None)
        }
    }
}
