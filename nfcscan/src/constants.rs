// nfcscan/src/constants.rs
//! Protocol constants used across the crate

use crate::types::Aid;

/// Proximity Payment System Environment directory name, "2PAY.SYS.DDF01".
pub const PPSE_NAME: &[u8] = b"2PAY.SYS.DDF01";

/// Visa debit/credit
pub const AID_VISA: Aid = Aid::new(&[0xA0, 0x00, 0x00, 0x00, 0x03, 0x10, 0x10]);

/// Mastercard credit/debit
pub const AID_MASTERCARD: Aid = Aid::new(&[0xA0, 0x00, 0x00, 0x00, 0x04, 0x10, 0x10]);

/// American Express
pub const AID_AMEX: Aid = Aid::new(&[0xA0, 0x00, 0x00, 0x00, 0x25, 0x01]);

/// Maestro
pub const AID_MAESTRO: Aid = Aid::new(&[0xA0, 0x00, 0x00, 0x00, 0x04, 0x30, 0x60]);

/// Default SELECT order after PPSE.
pub const DEFAULT_CANDIDATE_AIDS: [Aid; 4] = [AID_VISA, AID_MASTERCARD, AID_AMEX, AID_MAESTRO];

/// ISO 7816-4 instruction bytes
pub const CLA_ISO: u8 = 0x00;
/// Proprietary class byte used by GET PROCESSING OPTIONS
pub const CLA_PROPRIETARY: u8 = 0x80;
/// SELECT
pub const INS_SELECT: u8 = 0xA4;
/// READ RECORD
pub const INS_READ_RECORD: u8 = 0xB2;
/// GET PROCESSING OPTIONS
pub const INS_GET_PROCESSING_OPTIONS: u8 = 0xA8;

/// SELECT by DF name, first occurrence
pub const P1_SELECT_BY_NAME: u8 = 0x04;

/// Empty PDOL data object list: tag 83, length 0
pub const GPO_EMPTY_PDOL: [u8; 2] = [0x83, 0x00];

/// Normal processing status word
pub const SW_SUCCESS: [u8; 2] = [0x90, 0x00];

/// EMV data object tags read from records
pub const TAG_TRACK2_EQUIVALENT: &str = "57";
/// Cardholder name
pub const TAG_CARDHOLDER_NAME: &str = "5F20";

/// SFIs probed by READ RECORD when no other range is configured
pub const DEFAULT_FIRST_SFI: u8 = 1;
/// Last SFI of the default range
pub const DEFAULT_LAST_SFI: u8 = 4;

/// Largest command data field of a short APDU
pub const MAX_SHORT_DATA: usize = 255;

/// Highest SFI value addressable in the READ RECORD P2 byte
pub const MAX_SFI: u8 = 30;

/// Sector 1, block 0 of a MIFARE Classic 1K card
pub const DEFAULT_MIFARE_BLOCK: u8 = 4;

/// Currency label of the balance estimate
pub const DEFAULT_BALANCE_CURRENCY: &str = "TL";

/// Prefix used by Android for technology class names
pub const ANDROID_TECH_PREFIX: &str = "android.nfc.tech.";
