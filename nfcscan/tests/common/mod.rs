// Shared helpers for the integration test crates. Each aggregator pulls this
// module in, so not every crate uses every helper.
#![allow(dead_code)]

#[path = "fixtures.rs"]
mod fixtures;

pub use fixtures::*;
pub use nfcscan::test_support::*;

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
