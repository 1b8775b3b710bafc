//! Utilities for nfcscan: small, reusable helpers used across the crate.
//!
//! Hex rendering for diagnostics and TLV keys, plus the byte-to-text
//! conversions the decoders share.

/// Hex encoding and decoding
pub mod hex;

pub use hex::*;
