// nfcscan/src/transport/traits.rs

use crate::types::RawTag;
use crate::{Error, Result};

/// Transport trait abstracts the radio away from the decoding logic.
///
/// Implementations wrap whatever platform stack discovers tags and talks to
/// them. Every call is blocking; a scan issues at most one call at a time.
pub trait Transport {
    /// Wait for a tag and return its descriptor.
    fn request_tag(&mut self) -> Result<RawTag>;

    /// Send one ISO-DEP command APDU and return the raw response, status word
    /// included. Fails on link loss, tag removal or cancellation.
    fn transceive(&mut self, command: &[u8]) -> Result<Vec<u8>>;

    /// Read one 16-byte MIFARE Classic block. Transports without MIFARE
    /// support keep the default.
    fn read_mifare_block(&mut self, _block: u8) -> Result<Vec<u8>> {
        Err(Error::UnsupportedOperation(
            "MIFARE Classic block read".to_string(),
        ))
    }

    /// Release the technology request.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn request_tag(&mut self) -> Result<RawTag> {
        (**self).request_tag()
    }

    fn transceive(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        (**self).transceive(command)
    }

    fn read_mifare_block(&mut self, block: u8) -> Result<Vec<u8>> {
        (**self).read_mifare_block(block)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}
