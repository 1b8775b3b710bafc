// nfcscan/src/transport/mod.rs

/// Scripted transport for tests and replays
pub mod mock;
/// The [`Transport`] trait
pub mod traits;

pub use mock::{MockReply, MockTransport};
pub use traits::Transport;
