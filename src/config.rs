//! Application configuration and constants

use clap::ValueEnum;
use std::sync::OnceLock;

use crate::codec::Format;

static CUSTOM_FORMAT: OnceLock<Format> = OnceLock::new();

// === Environment ===
pub const FORMAT_ENV: &str = "INCREMENTAL_PROFILE_FORMAT";
pub const VERBOSE_ENV: &str = "INCREMENTAL_PROFILE_VERBOSE";

// === Logging ===
pub const LOG_TIME_FORMAT: &str = "%H:%M:%S";

pub fn set_format(format: Format) {
	let _ = CUSTOM_FORMAT.set(format);
}

/// Wire format for `apply` (--format, then INCREMENTAL_PROFILE_FORMAT, then JSON)
pub fn format() -> Format {
	if let Some(custom) = CUSTOM_FORMAT.get() {
		return *custom;
	}

	if let Ok(value) = std::env::var(FORMAT_ENV) {
		match Format::from_str(value.trim(), true) {
			Ok(format) => {
				crate::ui::debug(&format!("Using {}: {:?}", FORMAT_ENV, format));
				return format;
			}
			Err(_) => crate::ui::warn(&format!("Ignoring invalid {}: {}", FORMAT_ENV, value)),
		}
	}

	Format::default()
}

/// True when INCREMENTAL_PROFILE_VERBOSE is set to anything but "0"/"false"
pub fn verbose_from_env() -> bool {
	std::env::var(VERBOSE_ENV)
		.map(|v| !matches!(v.trim(), "" | "0" | "false"))
		.unwrap_or(false)
}
