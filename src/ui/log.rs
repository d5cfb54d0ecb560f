//! Unified logging system
//!
//! Everything goes to stderr: stdout is reserved for response objects.

use chrono::Local;
use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::LOG_TIME_FORMAT;

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

fn timestamp() -> ColoredString {
	Local::now().format(LOG_TIME_FORMAT).to_string().dimmed()
}

pub fn warn(msg: &str) {
	eprintln!("[{}] {} {}", timestamp(), "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		eprintln!("[{}] {} {}", timestamp(), "⚙".bright_black().bold(), msg.dimmed());
	}
}
