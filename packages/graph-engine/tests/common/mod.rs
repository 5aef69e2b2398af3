//! Common test utilities for graph-engine
//!
//! Shared fixtures, assertions and builders for the integration tests.
#![allow(dead_code)]

mod assertions;
mod builders;
mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;

/// Route engine logs to the test harness (`RUST_LOG=graph_engine=debug`)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
