//! EMV application selector.
//!
//! One ISO-DEP session, strictly request/response:
//!
//! 1. SELECT PPSE. The answer is not inspected.
//! 2. SELECT each candidate AID in order until one answers `90 00`.
//! 3. GET PROCESSING OPTIONS with an empty PDOL. Failure is tolerated and the
//!    AFL in the answer is not used.
//! 4. READ RECORD 1 of each SFI in the configured range; the first record
//!    carrying Track 2 Equivalent Data (tag 57) at its top level ends the
//!    whole search. Looking inside the record template (tag 70) is opt-in,
//!    see [`ScanConfig::unwrap_record_template`].
//!
//! Records are probed by SFI instead of following the AFL from step 3; this
//! keeps the set of records read identical across cards.
//!
//! Every transport failure is absorbed as "this step did not work", except a
//! cancellation, which ends the search.

use log::{debug, warn};

use crate::config::ScanConfig;
use crate::constants::{TAG_CARDHOLDER_NAME, TAG_TRACK2_EQUIVALENT};
use crate::emv::CardInfo;
use crate::events::{EventSink, ScanEvent};
use crate::protocol::apdu::{self, ApduCommand, ApduResponse};
use crate::protocol::pan::determine_issuer;
use crate::protocol::tlv::{self, TlvMap};
use crate::protocol::track2::parse_track2;
use crate::transport::Transport;
use crate::types::Aid;
use crate::utils::{bytes_to_hex, bytes_to_hex_upper, hex_to_ascii, is_success_status, parse_hex};
use crate::Result;

/// Record template wrapping the data objects of a READ RECORD answer
const TAG_RECORD_TEMPLATE: &str = "70";

/// Runs EMV application selection for one [`ScanConfig`].
pub struct EmvSelector<'a> {
    config: &'a ScanConfig,
}

impl<'a> EmvSelector<'a> {
    /// Selector bound to `config`.
    pub fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// Run the selection sequence. `Ok(None)` means no application yielded a
    /// Track 2; that is an empty result, not an error. The only error is a
    /// cancellation, which abandons the search at once.
    pub fn run(
        &self,
        transport: &mut dyn Transport,
        events: &mut dyn EventSink,
    ) -> Result<Option<CardInfo>> {
        events.emit(ScanEvent::SelectingPpse);
        exchange(transport, &apdu::select_ppse())?;

        self.config
            .candidate_aids()
            .iter()
            .map(|aid| self.try_application(transport, aid, events))
            .find_map(Result::transpose)
            .transpose()
    }

    fn try_application(
        &self,
        transport: &mut dyn Transport,
        aid: &Aid,
        events: &mut dyn EventSink,
    ) -> Result<Option<CardInfo>> {
        events.emit(ScanEvent::SelectingAid(*aid));
        if exchange(transport, &apdu::select_aid(aid))?.is_none() {
            return Ok(None);
        }

        events.emit(ScanEvent::GettingProcessingOptions);
        exchange(transport, &apdu::get_processing_options())?;

        self.config
            .sfi_range()
            .map(|sfi| -> Result<Option<CardInfo>> {
                events.emit(ScanEvent::ReadingRecord { sfi });
                let record = exchange(transport, &apdu::read_record(1, sfi))?;
                Ok(record.and_then(|r| {
                    if self.config.unwrap_record_template() {
                        read_templated_card_info(&r.data, aid)
                    } else {
                        read_card_info(&r.data, aid)
                    }
                }))
            })
            .find_map(Result::transpose)
            .transpose()
    }
}

/// Send one command. Only a response ending in `90 00` counts; any other
/// answer or transport failure is `Ok(None)`. Cancellation is the one error
/// passed up.
fn exchange(transport: &mut dyn Transport, command: &ApduCommand) -> Result<Option<ApduResponse>> {
    let bytes = match command.build() {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("APDU not sent: {}", e);
            return Ok(None);
        }
    };
    match transport.transceive(&bytes) {
        Ok(raw) if is_success_status(&raw) => Ok(ApduResponse::parse(&raw).ok()),
        Ok(raw) => {
            debug!(
                "APDU {} rejected: SW={}",
                bytes_to_hex(&bytes),
                bytes_to_hex_upper(&raw[raw.len().saturating_sub(2)..])
            );
            Ok(None)
        }
        Err(e) if e.is_cancellation() => Err(e),
        Err(e) => {
            warn!("APDU transceive error: {} (APDU: {})", e, bytes_to_hex(&bytes));
            Ok(None)
        }
    }
}

/// Extract card info from the data of one READ RECORD answer (status word
/// already removed). Only a top-level tag 57 counts; returns `None` when the
/// record has none.
pub fn read_card_info(record: &[u8], aid: &Aid) -> Option<CardInfo> {
    card_info_from(&tlv::decode(record), aid)
}

/// Like [`read_card_info`], but falls back to the data objects inside the
/// record template (tag 70) when tag 57 is not at the top level.
pub fn read_templated_card_info(record: &[u8], aid: &Aid) -> Option<CardInfo> {
    let tlv = tlv::decode(record);
    if tlv.contains(TAG_TRACK2_EQUIVALENT) {
        return card_info_from(&tlv, aid);
    }
    let inner = tlv
        .get(TAG_RECORD_TEMPLATE)
        .and_then(|template| parse_hex(template).ok())?;
    card_info_from(&tlv::decode(&inner), aid)
}

fn card_info_from(tlv: &TlvMap, aid: &Aid) -> Option<CardInfo> {
    let track2 = parse_track2(tlv.get(TAG_TRACK2_EQUIVALENT)?);
    let issuer = determine_issuer(track2.pan(), Some(aid));
    let cardholder_name = tlv
        .get(TAG_CARDHOLDER_NAME)
        .map(|hex| hex_to_ascii(hex).trim().to_string())
        .filter(|name| !name.is_empty());

    debug!(
        "Track 2 found under AID {}: {} exp {}",
        aid.to_hex(),
        track2.card_number,
        track2.expiry_date
    );

    Some(CardInfo {
        pan: track2.card_number,
        expiry: track2.expiry_date,
        issuer,
        cardholder_name,
        aid: *aid,
    })
}
