//! NDEF message decoding.
//!
//! Every record produces exactly one [`NdefRecordDecoded`], in input order.
//! Undecodable payloads become `Unknown` entries with whatever text could be
//! recovered; decoding never fails.

mod decoder;
mod record;
/// URI identifier codes
pub mod uri;

pub use decoder::decode;
pub use record::{NdefDecoded, NdefKind, NdefRecordDecoded, Tnf};
