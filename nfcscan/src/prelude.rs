// nfcscan/src/prelude.rs

pub use crate::config::{ScanConfig, ScanConfigBuilder};
pub use crate::emv::{CardInfo, EmvSelector};
pub use crate::events::{EventSink, ScanEvent};
pub use crate::mifare::MifareBlock;
pub use crate::ndef::{NdefDecoded, NdefKind, NdefRecordDecoded};
pub use crate::protocol::Issuer;
pub use crate::scan::{ScanOutcome, ScanResult, ScanSession, SessionHandle, Started, Stopped};
pub use crate::transport::Transport;
pub use crate::{Aid, CardCategory, Error, NdefRecordRaw, RawTag, Result, Technology};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
