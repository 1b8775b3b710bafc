// nfcscan/src/events.rs
//! Phase-transition events emitted while a scan runs.
//!
//! The engine only reports *what* it is doing; turning these into progress
//! bars or localized narration is the subscriber's business.

use crate::types::Aid;

/// One phase of a running scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// Waiting for a tag
    RequestingTag,
    /// Tag descriptor received
    AnalyzingTag,
    /// SELECT PPSE sent
    SelectingPpse,
    /// SELECT of a candidate application
    SelectingAid(Aid),
    /// GET PROCESSING OPTIONS sent
    GettingProcessingOptions,
    /// READ RECORD 1 of `sfi`
    ReadingRecord {
        /// Short file identifier
        sfi: u8,
    },
    /// MIFARE Classic block read
    ReadingMifareBlock {
        /// Absolute block number
        block: u8,
    },
    /// Scan completed
    Done,
    /// Scan failed or was cancelled
    Failed,
}

/// Receiver of [`ScanEvent`]s. Implemented for every `FnMut(ScanEvent)`.
pub trait EventSink {
    /// Deliver one event.
    fn emit(&mut self, event: ScanEvent);
}

impl<F: FnMut(ScanEvent)> EventSink for F {
    fn emit(&mut self, event: ScanEvent) {
        self(event)
    }
}
