//! Dense embedding vectors backed by ndarray

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Fixed-length vector of f64 values
///
/// Serialized as a plain sequence of numbers. Two embeddings combined in
/// one expression must share a dimension; callers check this with
/// [`Embedding::dim`] before doing arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<f64>", into = "Vec<f64>")]
pub struct Embedding(pub(crate) Array1<f64>);

impl Embedding {
	pub fn new(data: Vec<f64>) -> Self {
		Self(Array1::from_vec(data))
	}

	pub fn dim(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn is_finite(&self) -> bool {
		self.0.iter().all(|v| v.is_finite())
	}

	pub fn as_slice(&self) -> &[f64] {
		// Array1::from_vec is always contiguous
		self.0.as_slice().unwrap_or(&[])
	}

	/// `self * a + other * b`
	pub fn weighted_sum(&self, a: f64, other: &Self, b: f64) -> Self {
		Self(&self.0 * a + &other.0 * b)
	}

	pub fn divided(self, divisor: f64) -> Self {
		Self(self.0 / divisor)
	}

	/// Euclidean distance
	pub fn distance(&self, other: &Self) -> f64 {
		(&self.0 - &other.0).mapv(|d| d * d).sum().sqrt()
	}
}

impl From<Vec<f64>> for Embedding {
	fn from(data: Vec<f64>) -> Self {
		Self::new(data)
	}
}

impl From<Embedding> for Vec<f64> {
	fn from(embedding: Embedding) -> Self {
		embedding.0.to_vec()
	}
}
