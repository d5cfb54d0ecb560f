//! Errors raised while validating or applying a profile mutation

use thiserror::Error;

use super::Operation;

#[derive(Debug, Error)]
pub enum ProfileError {
	#[error("Unknown operation: {0}")]
	UnknownOperation(String),

	#[error("Missing field: {0}")]
	MissingField(&'static str),

	#[error("Malformed request: {0}")]
	Malformed(String),

	#[error("Empty embedding: {0}")]
	EmptyEmbedding(&'static str),

	#[error("Non-finite value in {0}")]
	NonFinite(&'static str),

	#[error("Dimension mismatch: {field} has {got} values, expected {expected}")]
	DimensionMismatch {
		field: &'static str,
		expected: usize,
		got: usize,
	},

	/// Delete/update whose arithmetic needs a prior behavioral vector that is absent
	#[error("Cannot {operation} a rating: behavioral aggregate is empty")]
	EmptyAggregate { operation: Operation },
}

pub type Result<T> = std::result::Result<T, ProfileError>;
