//! Wire formats for requests, responses and diagnostics

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use crate::core::ProfileError;
use crate::request::{ProfileResponse, RawRequest};

/// Encoding used for request and response objects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
	/// JSON object
	#[default]
	Json,
	/// MessagePack map with named fields
	Msgpack,
}

/// Structured error object written in place of a response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
	pub error: String,
}

impl Diagnostic {
	pub fn new(error: impl Into<String>) -> Self {
		Self { error: error.into() }
	}

	/// Always JSON, whatever the request format
	pub fn to_json(&self) -> String {
		serde_json::to_string(self).unwrap_or_else(|_| {
			r#"{"error":"Failed to serialize diagnostic"}"#.to_string()
		})
	}
}

pub fn decode_request(bytes: &[u8], format: Format) -> Result<RawRequest, ProfileError> {
	match format {
		Format::Json => serde_json::from_slice(bytes).map_err(|e| ProfileError::Malformed(e.to_string())),
		Format::Msgpack => rmp_serde::from_slice(bytes).map_err(|e| ProfileError::Malformed(e.to_string())),
	}
}

pub fn encode_response(response: &ProfileResponse, format: Format) -> Result<Vec<u8>> {
	match format {
		Format::Json => serde_json::to_vec(response).context("Failed to serialize response as JSON"),
		Format::Msgpack => rmp_serde::to_vec_named(response).context("Failed to serialize response as MessagePack"),
	}
}
