//! ISO 7816-4 APDU command building and response splitting

use crate::constants::{
    CLA_ISO, CLA_PROPRIETARY, GPO_EMPTY_PDOL, INS_GET_PROCESSING_OPTIONS, INS_READ_RECORD,
    INS_SELECT, MAX_SHORT_DATA, P1_SELECT_BY_NAME, PPSE_NAME,
};
use crate::types::Aid;
use crate::{Error, Result};

/// APDU response containing data and status word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApduResponse {
    /// Response data (without status word)
    pub data: Vec<u8>,
    /// Status byte 1
    pub sw1: u8,
    /// Status byte 2
    pub sw2: u8,
}

impl ApduResponse {
    /// Split a raw response into data and the trailing status word.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        if raw.len() < 2 {
            return Err(Error::InvalidLength {
                expected: 2,
                actual: raw.len(),
            });
        }
        let (data, sw) = raw.split_at(raw.len() - 2);
        Ok(Self {
            data: data.to_vec(),
            sw1: sw[0],
            sw2: sw[1],
        })
    }

    /// Check if the response indicates success (9000)
    pub fn is_success(&self) -> bool {
        self.sw1 == 0x90 && self.sw2 == 0x00
    }

    /// `SW1 SW2` as one value
    pub fn status_word(&self) -> u16 {
        u16::from_be_bytes([self.sw1, self.sw2])
    }
}

/// APDU command builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApduCommand {
    cla: u8,
    ins: u8,
    p1: u8,
    p2: u8,
    data: Vec<u8>,
    le: Option<u8>,
}

impl ApduCommand {
    /// Command with header only
    pub fn new(cla: u8, ins: u8, p1: u8, p2: u8) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: Vec::new(),
            le: None,
        }
    }

    /// Set command data. Short APDUs only: at most 255 bytes, checked by
    /// [`build`](Self::build).
    pub fn data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }

    /// Expected response length, `0x00` for "up to 256"
    pub fn le(mut self, le: u8) -> Self {
        self.le = Some(le);
        self
    }

    /// Build the APDU command bytes. Fails when the data does not fit a
    /// short APDU.
    pub fn build(&self) -> Result<Vec<u8>> {
        if self.data.len() > MAX_SHORT_DATA {
            return Err(Error::InvalidLength {
                expected: MAX_SHORT_DATA,
                actual: self.data.len(),
            });
        }

        let mut apdu = Vec::with_capacity(6 + self.data.len());
        apdu.extend_from_slice(&[self.cla, self.ins, self.p1, self.p2]);

        if !self.data.is_empty() {
            apdu.push(self.data.len() as u8);
            apdu.extend_from_slice(&self.data);
        }

        if let Some(le) = self.le {
            apdu.push(le);
        }

        Ok(apdu)
    }
}

/// SELECT by DF name
pub fn select(name: &[u8]) -> ApduCommand {
    ApduCommand::new(CLA_ISO, INS_SELECT, P1_SELECT_BY_NAME, 0x00)
        .data(name)
        .le(0x00)
}

/// SELECT of an application by AID
pub fn select_aid(aid: &Aid) -> ApduCommand {
    select(aid.as_bytes())
}

/// SELECT of the payment system environment (`2PAY.SYS.DDF01`)
pub fn select_ppse() -> ApduCommand {
    select(PPSE_NAME)
}

/// GET PROCESSING OPTIONS with an empty PDOL
pub fn get_processing_options() -> ApduCommand {
    ApduCommand::new(CLA_PROPRIETARY, INS_GET_PROCESSING_OPTIONS, 0x00, 0x00)
        .data(GPO_EMPTY_PDOL)
        .le(0x00)
}

/// READ RECORD, P2 = (SFI << 3) | 4
pub fn read_record(record_number: u8, sfi: u8) -> ApduCommand {
    let p2 = (sfi << 3) | 0x04;
    ApduCommand::new(CLA_ISO, INS_READ_RECORD, record_number, p2).le(0x00)
}
