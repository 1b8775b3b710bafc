//! Scan orchestration: the session lifecycle, the classifier and the final
//! result type.
//!
//! A scan runs the decoders in a fixed order over one tag:
//!
//! 1. request the tag descriptor
//! 2. EMV application selection when the tag speaks ISO-DEP
//! 3. MIFARE Classic block probe when no EMV identity was found
//! 4. NDEF decoding when the tag carries a message
//! 5. classification and assembly of the [`ScanResult`]

/// Category rules and result assembly
pub mod classifier;
mod result;
/// Session lifecycle, single-flight and cancellation
pub mod session;

pub use classifier::{assemble, classify, tag_labels};
pub use result::{ScanOutcome, ScanResult};
pub use session::{ScanGuard, ScanSession, SessionHandle, Started, Stopped};
