//! # User Interface
//!
//! Colored, timestamped terminal logging on stderr.

pub mod log;

pub use log::{debug, warn, Log};
