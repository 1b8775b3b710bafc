// nfcscan/src/transport/mock.rs

use crate::transport::traits::Transport;
use crate::types::RawTag;
use crate::{Error, Result};

/// One scripted reply of a [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Return these bytes
    Data(Vec<u8>),
    /// Fail the call with `Error::Transceive(message)`
    Fail(String),
}

/// Mock transport for tests. It records sent commands and returns queued
/// replies in order.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Descriptor returned by `request_tag`
    pub tag: Option<RawTag>,
    /// When set, `request_tag` fails with `Error::Transceive(message)`
    pub tag_error: Option<String>,
    /// Every command passed to `transceive`, in order
    pub sent: Vec<Vec<u8>>,
    /// Queued `transceive` replies
    pub replies: Vec<MockReply>,
    /// Queued `read_mifare_block` replies
    pub block_replies: Vec<MockReply>,
    /// Blocks requested, in order
    pub block_requests: Vec<u8>,
    /// Number of `close` calls
    pub close_calls: usize,
}

impl MockTransport {
    /// Empty mock: no tag, no replies
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock presenting `tag`
    pub fn with_tag(tag: RawTag) -> Self {
        Self {
            tag: Some(tag),
            ..Self::default()
        }
    }

    /// Queue a `transceive` reply.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.replies.push(MockReply::Data(resp));
    }

    /// Queue a transceive failure (link loss, tag removed...).
    pub fn push_failure(&mut self, message: impl Into<String>) {
        self.replies.push(MockReply::Fail(message.into()));
    }

    /// Queue a MIFARE block.
    pub fn push_block(&mut self, data: Vec<u8>) {
        self.block_replies.push(MockReply::Data(data));
    }

    /// Queue a MIFARE read failure.
    pub fn push_block_failure(&mut self, message: impl Into<String>) {
        self.block_replies.push(MockReply::Fail(message.into()));
    }

    fn next_reply(queue: &mut Vec<MockReply>) -> Result<Vec<u8>> {
        if queue.is_empty() {
            return Err(Error::Transceive("no response".to_string()));
        }
        match queue.remove(0) {
            MockReply::Data(data) => Ok(data),
            MockReply::Fail(message) => Err(Error::Transceive(message)),
        }
    }
}

impl Transport for MockTransport {
    fn request_tag(&mut self) -> Result<RawTag> {
        if let Some(message) = &self.tag_error {
            return Err(Error::Transceive(message.clone()));
        }
        self.tag.clone().ok_or(Error::TagNotFound)
    }

    fn transceive(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        self.sent.push(command.to_vec());
        Self::next_reply(&mut self.replies)
    }

    fn read_mifare_block(&mut self, block: u8) -> Result<Vec<u8>> {
        self.block_requests.push(block);
        Self::next_reply(&mut self.block_replies)
    }

    fn close(&mut self) -> Result<()> {
        self.close_calls += 1;
        Ok(())
    }
}
