// nfcscan/src/protocol/mod.rs

/// Command APDUs and response splitting
pub mod apdu;
/// PAN masking and issuer inference
pub mod pan;
/// BER-TLV decoding
pub mod tlv;
/// Track 2 Equivalent Data
pub mod track2;

pub use apdu::{ApduCommand, ApduResponse};
pub use pan::{determine_issuer, format_pan, Issuer};
pub use tlv::{TlvIter, TlvMap};
pub use track2::{parse_track2, Track2};
