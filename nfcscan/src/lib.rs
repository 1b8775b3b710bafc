// nfcscan/src/lib.rs

//! nfcscan
//!
//! Decoding engine for contactless cards and NFC tags: EMV payment-card
//! display data over ISO-DEP, NDEF records, and a category classifier.
#![warn(missing_docs)]

/// Scan tunables
pub mod config;
/// Protocol constants
pub mod constants;
/// EMV application selection
pub mod emv;
/// Crate error type
pub mod error;
/// Scan progress events
pub mod events;
/// MIFARE Classic block probe
pub mod mifare;
/// NDEF message decoding
pub mod ndef;
/// Common imports
pub mod prelude;
/// APDU, BER-TLV and Track 2 codecs
pub mod protocol;
/// Scan session and classification
pub mod scan;
/// Helpers shared by unit and integration tests
pub mod test_support;
/// Radio abstraction
pub mod transport;
/// Tag descriptors and shared value types
pub mod types;
/// Hex helpers
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the tag descriptor types are available to consumers and the prelude.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
