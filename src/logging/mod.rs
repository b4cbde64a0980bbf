//! Logging infrastructure for console diagnostics.
//!
//! Everything goes to stderr so that stdout carries only command results
//! (the value read, a dry-run rendering, the config list).

mod subscriber;

pub use subscriber::{DRY_RUN_TARGET, init_subscriber};
