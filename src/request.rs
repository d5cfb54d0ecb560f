//! Request and response wire types
//!
//! Requests are decoded in two stages. Serde checks the shape of the object
//! into a [`RawRequest`]; the `TryFrom` conversion then validates the
//! operation tag, its operands and the embedding dimensions, yielding a
//! [`ProfileRequest`] that the dispatcher can apply without further checks.

use serde::{Deserialize, Serialize};

use crate::core::{Aggregate, Behavioral, Embedding, Operation, ProfileError};

/// Request object as it appears on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRequest {
	pub operation: String,
	pub film_embedding: Vec<f64>,
	pub interest_embedding: Vec<f64>,
	/// `null` or absent when no ratings have been aggregated
	pub behavioral_embedding: Option<Vec<f64>>,
	pub behavioral_weight_sum: f64,
	pub rating_count: u64,
	/// New rating for insert/update, the rating being removed for delete
	pub rating: f64,
	/// Only read for `update`
	pub old_rating: Option<f64>,
}

/// A mutation together with exactly the operands it needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mutation {
	Insert { rating: f64 },
	Delete { rating: f64 },
	Update { old_rating: f64, rating: f64 },
}

impl Mutation {
	pub fn operation(&self) -> Operation {
		match self {
			Self::Insert { .. } => Operation::Insert,
			Self::Delete { .. } => Operation::Delete,
			Self::Update { .. } => Operation::Update,
		}
	}
}

/// Validated request: every embedding is non-empty, finite and of one dimension
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRequest {
	pub mutation: Mutation,
	pub film: Embedding,
	pub interest: Embedding,
	pub aggregate: Aggregate,
	pub rating_count: u64,
}

impl ProfileRequest {
	pub fn dim(&self) -> usize {
		self.interest.dim()
	}
}

impl TryFrom<RawRequest> for ProfileRequest {
	type Error = ProfileError;

	fn try_from(raw: RawRequest) -> Result<Self, Self::Error> {
		let operation: Operation = raw.operation.parse()?;

		let rating = finite("rating", raw.rating)?;
		let mutation = match operation {
			Operation::Insert => Mutation::Insert { rating },
			Operation::Delete => Mutation::Delete { rating },
			Operation::Update => {
				let old_rating = raw.old_rating.ok_or(ProfileError::MissingField("old_rating"))?;
				Mutation::Update {
					old_rating: finite("old_rating", old_rating)?,
					rating,
				}
			}
		};

		let interest = embedding("interest_embedding", raw.interest_embedding)?;
		let film = embedding("film_embedding", raw.film_embedding)?;
		same_dim("film_embedding", &film, interest.dim())?;

		let behavioral = raw
			.behavioral_embedding
			.map(|values| {
				let b = embedding("behavioral_embedding", values)?;
				same_dim("behavioral_embedding", &b, interest.dim())?;
				Ok::<_, ProfileError>(b)
			})
			.transpose()?;

		let weight_sum = finite("behavioral_weight_sum", raw.behavioral_weight_sum)?;

		Ok(Self {
			mutation,
			film,
			interest,
			aggregate: Aggregate::new(Behavioral::from(behavioral), weight_sum),
			rating_count: raw.rating_count,
		})
	}
}

fn finite(field: &'static str, value: f64) -> Result<f64, ProfileError> {
	if value.is_finite() {
		Ok(value)
	} else {
		Err(ProfileError::NonFinite(field))
	}
}

fn embedding(field: &'static str, values: Vec<f64>) -> Result<Embedding, ProfileError> {
	let e = Embedding::new(values);
	if e.is_empty() {
		return Err(ProfileError::EmptyEmbedding(field));
	}
	if !e.is_finite() {
		return Err(ProfileError::NonFinite(field));
	}
	Ok(e)
}

fn same_dim(field: &'static str, e: &Embedding, expected: usize) -> Result<(), ProfileError> {
	if e.dim() != expected {
		return Err(ProfileError::DimensionMismatch {
			field,
			expected,
			got: e.dim(),
		});
	}
	Ok(())
}

/// Response object written back to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
	/// `null` once the aggregate is empty
	pub behavioral_embedding: Option<Embedding>,
	pub behavioral_weight_sum: f64,
	pub rating_count: u64,
	pub profile_embedding: Embedding,
}
