// nfcscan/src/scan/session.rs

use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};

use crate::config::ScanConfig;
use crate::emv::{CardInfo, EmvSelector};
use crate::events::{EventSink, ScanEvent};
use crate::mifare;
use crate::ndef;
use crate::scan::classifier::assemble;
use crate::scan::result::ScanOutcome;
use crate::transport::Transport;
use crate::types::{RawTag, Technology};
use crate::{Error, Result};

/// Session holding its transport, not scanning
pub struct Stopped;
/// Session ready to scan
pub struct Started;

/// Cloneable handle onto a session's scan state. Safe to hand to another
/// thread (a UI "cancel" button, a watchdog).
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    scanning: Arc<AtomicBool>,
    cancelled: Arc<AtomicBool>,
}

impl SessionHandle {
    /// Fresh handle: not scanning, not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a scan currently holds the flag
    pub fn is_scanning(&self) -> bool {
        self.scanning.load(Ordering::Acquire)
    }

    /// Request cancellation of the running scan. A command already on the air
    /// is not interrupted; every later one fails with [`Error::Cancelled`].
    pub fn cancel(&self) {
        debug!("scan cancellation requested");
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether cancellation was requested for the current scan
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Claim the scanning flag. Fails with [`Error::ScanInProgress`] when a
    /// scan already holds it; the flag is released when the guard drops.
    pub fn begin_scan(&self) -> Result<ScanGuard> {
        self.scanning
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Error::ScanInProgress)?;
        self.cancelled.store(false, Ordering::Release);
        Ok(ScanGuard {
            scanning: Arc::clone(&self.scanning),
        })
    }
}

/// Holds the scanning flag of a [`SessionHandle`] until dropped.
#[derive(Debug)]
pub struct ScanGuard {
    scanning: Arc<AtomicBool>,
}

impl Drop for ScanGuard {
    fn drop(&mut self) {
        self.scanning.store(false, Ordering::Release);
    }
}

/// Transport wrapper that refuses new commands once the handle is cancelled.
struct CancellableLink<'a> {
    inner: &'a mut dyn Transport,
    cancelled: &'a AtomicBool,
}

impl CancellableLink<'_> {
    fn check(&self) -> Result<()> {
        if self.cancelled.load(Ordering::Acquire) {
            return Err(Error::Cancelled);
        }
        Ok(())
    }
}

impl Transport for CancellableLink<'_> {
    fn request_tag(&mut self) -> Result<RawTag> {
        self.check()?;
        self.inner.request_tag()
    }

    fn transceive(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        self.check()?;
        self.inner.transceive(command)
    }

    fn read_mifare_block(&mut self, block: u8) -> Result<Vec<u8>> {
        self.check()?;
        self.inner.read_mifare_block(block)
    }

    fn close(&mut self) -> Result<()> {
        self.inner.close()
    }
}

/// Scan session over one transport. Scanning is only possible once
/// started; stopping releases the transport.
pub struct ScanSession<State = Stopped> {
    transport: Box<dyn Transport>,
    config: ScanConfig,
    handle: SessionHandle,
    _state: PhantomData<State>,
}

impl ScanSession<Stopped> {
    /// Session with the default configuration.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, ScanConfig::default())
    }

    /// Session with an explicit configuration.
    pub fn with_config(transport: Box<dyn Transport>, config: ScanConfig) -> Self {
        Self {
            transport,
            config,
            handle: SessionHandle::new(),
            _state: PhantomData,
        }
    }

    /// Share scan state with another session on the same radio, so that only
    /// one of them can scan at a time.
    pub fn with_handle(mut self, handle: SessionHandle) -> Self {
        self.handle = handle;
        self
    }

    /// Move to the started state.
    pub fn start(self) -> ScanSession<Started> {
        debug!("scan session started");
        ScanSession {
            transport: self.transport,
            config: self.config,
            handle: self.handle,
            _state: PhantomData,
        }
    }
}

impl ScanSession<Started> {
    /// Run one scan: acquire a tag, decode whatever it offers and classify
    /// it. `Err` is returned only when another scan holds the session's
    /// scanning flag; every other problem ends up in the [`ScanOutcome`].
    pub fn scan(&mut self, events: &mut dyn EventSink) -> Result<ScanOutcome> {
        let _guard = self.handle.begin_scan()?;
        debug!("scan started");

        let outcome = self.run_pipeline(events);

        if let Err(e) = self.transport.close() {
            debug!("releasing technology request failed: {}", e);
        }

        match &outcome {
            ScanOutcome::Completed(result) => {
                debug!("scan finished: {}", result.category());
                events.emit(ScanEvent::Done);
            }
            ScanOutcome::Failed(reason) => {
                warn!("scan failed: {}", reason);
                events.emit(ScanEvent::Failed);
            }
            ScanOutcome::Cancelled => {
                debug!("scan cancelled");
                events.emit(ScanEvent::Failed);
            }
        }
        Ok(outcome)
    }

    fn run_pipeline(&mut self, events: &mut dyn EventSink) -> ScanOutcome {
        let cancelled = &*self.handle.cancelled;
        let mut link = CancellableLink {
            inner: &mut *self.transport,
            cancelled,
        };

        events.emit(ScanEvent::RequestingTag);
        let tag = match link.request_tag() {
            Ok(tag) => tag,
            Err(e) if e.is_cancellation() || self.handle.is_cancelled() => {
                return ScanOutcome::Cancelled;
            }
            Err(e) => return ScanOutcome::Failed(e.to_string()),
        };

        events.emit(ScanEvent::AnalyzingTag);
        let card_info = if tag.supports(&Technology::IsoDep) {
            match EmvSelector::new(&self.config).run(&mut link, events) {
                Ok(info) => info,
                Err(_) => return ScanOutcome::Cancelled,
            }
        } else {
            None
        };
        if self.handle.is_cancelled() {
            return ScanOutcome::Cancelled;
        }

        let emv_found = card_info.as_ref().is_some_and(CardInfo::has_valid_pan);
        let mifare = if !emv_found && tag.supports(&Technology::MifareClassic) {
            let block = self.config.mifare_block();
            events.emit(ScanEvent::ReadingMifareBlock { block });
            match mifare::probe(&mut link, block, self.config.balance_currency()) {
                Ok(read) => read,
                Err(_) => return ScanOutcome::Cancelled,
            }
        } else {
            None
        };
        if self.handle.is_cancelled() {
            return ScanOutcome::Cancelled;
        }

        let ndef = tag.ndef_message.as_deref().and_then(ndef::decode);
        ScanOutcome::Completed(assemble(tag, card_info, mifare, ndef))
    }

    /// Release the transport and return to the stopped state.
    pub fn stop(mut self) -> Result<ScanSession<Stopped>> {
        self.transport.close()?;
        debug!("scan session stopped");
        Ok(ScanSession {
            transport: self.transport,
            config: self.config,
            handle: self.handle,
            _state: PhantomData,
        })
    }
}

impl<State> ScanSession<State> {
    /// Cloneable handle for cancellation and the scanning flag
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Configuration the session scans with
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }
}
