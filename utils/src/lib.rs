//! Shared utilities for DRIP.

pub mod logging;
pub mod time;

pub use logging::init_tracing_with_level;
pub use time::{format_duration, format_stx};
