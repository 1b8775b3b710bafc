//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup and EMV record
//! building so tests across the crate and tests/ directory can reuse them.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::SW_SUCCESS;
use crate::transport::{MockTransport, Transport};
use crate::types::{NdefRecordRaw, RawTag};
use crate::Result;

/// Status word `90 00` on its own
#[doc(hidden)]
pub const OK: [u8; 2] = SW_SUCCESS;

/// Status word `6A 82` (file or application not found)
#[doc(hidden)]
pub const NOT_FOUND: [u8; 2] = [0x6A, 0x82];

/// Track 2 of a Visa test card: PAN 4111111111111111, expiry 2511
#[doc(hidden)]
pub const VISA_TRACK2: [u8; 13] = [
    0x41, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0xD2, 0x51, 0x11, 0x23, 0x4F,
];

/// Build a successful READ RECORD answer: tag 57 with `track2`, optionally
/// tag 5F20 with `name`, then `90 00`.
#[doc(hidden)]
pub fn track2_record(track2: &[u8], name: Option<&[u8]>) -> Vec<u8> {
    let mut record = vec![0x57, track2.len() as u8];
    record.extend_from_slice(track2);
    if let Some(name) = name {
        record.extend_from_slice(&[0x5F, 0x20, name.len() as u8]);
        record.extend_from_slice(name);
    }
    record.extend_from_slice(&OK);
    record
}

/// Queue the replies of a card whose first candidate application answers:
/// PPSE, SELECT and GPO succeed, then record 1 of SFI 1 is `record`.
#[doc(hidden)]
pub fn push_first_aid_success(mock: &mut MockTransport, record: Vec<u8>) {
    for _ in 0..3 {
        mock.push_response(OK.to_vec());
    }
    mock.push_response(record);
}

/// ISO-DEP payment card descriptor.
#[doc(hidden)]
pub fn emv_tag() -> RawTag {
    RawTag::new(
        "04a1b2c3d4e5f6",
        ["android.nfc.tech.IsoDep", "android.nfc.tech.NfcA"],
    )
    .with_atqa_sak("0400", "20")
}

/// MIFARE Classic 1K descriptor.
#[doc(hidden)]
pub fn mifare_tag() -> RawTag {
    RawTag::new(
        "a1b2c3d4",
        ["android.nfc.tech.NfcA", "android.nfc.tech.MifareClassic"],
    )
    .with_atqa_sak("0400", "08")
}

/// NFC Forum tag carrying `records`.
#[doc(hidden)]
pub fn ndef_tag(records: Vec<NdefRecordRaw>) -> RawTag {
    RawTag::new(
        "04112233445566",
        [
            "android.nfc.tech.NfcA",
            "android.nfc.tech.MifareUltralight",
            "android.nfc.tech.Ndef",
        ],
    )
    .with_max_size(137)
    .with_writable(true)
    .with_ndef_message(records)
}

/// Transport wrapper that delegates into a shared MockTransport, so a test
/// can inspect the mock after a session took ownership of the transport.
#[doc(hidden)]
pub struct SharedTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedTransport {
    /// Wrap a shared mock.
    pub fn new(inner: Rc<RefCell<MockTransport>>) -> Self {
        Self { inner }
    }
}

impl Transport for SharedTransport {
    fn request_tag(&mut self) -> Result<RawTag> {
        self.inner.borrow_mut().request_tag()
    }

    fn transceive(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        self.inner.borrow_mut().transceive(command)
    }

    fn read_mifare_block(&mut self, block: u8) -> Result<Vec<u8>> {
        self.inner.borrow_mut().read_mifare_block(block)
    }

    fn close(&mut self) -> Result<()> {
        self.inner.borrow_mut().close()
    }
}

/// Box `mock` as a Transport trait object and keep a handle for inspection.
#[doc(hidden)]
pub fn shared_mock(mock: MockTransport) -> (Box<dyn Transport>, Rc<RefCell<MockTransport>>) {
    let inner = Rc::new(RefCell::new(mock));
    (Box::new(SharedTransport::new(Rc::clone(&inner))), inner)
}
