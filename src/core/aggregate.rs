//! Online rating-weighted centroid of item embeddings
//!
//! An [`Aggregate`] holds `Σ rating_i · embedding_i / Σ rating_i` together with
//! the running weight sum `Σ rating_i`, so a single rating can be added,
//! removed or changed without replaying the history that produced it.

use std::fmt;
use std::str::FromStr;

use super::error::{ProfileError, Result};
use super::Embedding;

/// The three mutations a rating can undergo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
	Insert,
	Delete,
	Update,
}

impl Operation {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Insert => "insert",
			Self::Delete => "delete",
			Self::Update => "update",
		}
	}
}

impl FromStr for Operation {
	type Err = ProfileError;

	fn from_str(s: &str) -> Result<Self> {
		match s {
			"insert" => Ok(Self::Insert),
			"delete" => Ok(Self::Delete),
			"update" => Ok(Self::Update),
			other => Err(ProfileError::UnknownOperation(other.to_string())),
		}
	}
}

impl fmt::Display for Operation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Behavioral signal: either nothing has been aggregated yet, or a centroid
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Behavioral {
	#[default]
	Empty,
	Present(Embedding),
}

impl Behavioral {
	pub fn as_embedding(&self) -> Option<&Embedding> {
		match self {
			Self::Empty => None,
			Self::Present(e) => Some(e),
		}
	}

	pub fn into_embedding(self) -> Option<Embedding> {
		match self {
			Self::Empty => None,
			Self::Present(e) => Some(e),
		}
	}

	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}
}

impl From<Option<Embedding>> for Behavioral {
	fn from(embedding: Option<Embedding>) -> Self {
		embedding.map_or(Self::Empty, Self::Present)
	}
}

/// Behavioral centroid plus the accumulated rating weight behind it
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Aggregate {
	pub behavioral: Behavioral,
	pub weight_sum: f64,
}

impl Aggregate {
	pub fn new(behavioral: Behavioral, weight_sum: f64) -> Self {
		Self { behavioral, weight_sum }
	}

	/// No ratings aggregated: `(Empty, 0.0)`
	pub fn empty() -> Self {
		Self::default()
	}

	/// Add one rated item
	///
	/// With no prior centroid (or a zero weight sum) the item is the sole
	/// contributor, so the centroid is the item itself whatever its rating.
	/// A rating that brings a non-zero weight sum to exactly zero returns
	/// [`Aggregate::empty`] rather than dividing by zero.
	pub fn insert(&self, item: &Embedding, rating: f64) -> Result<Self> {
		let weight_sum = self.weight_sum + rating;

		let current = match &self.behavioral {
			Behavioral::Present(current) if self.weight_sum != 0.0 => current,
			_ => return Ok(Self::new(Behavioral::Present(item.clone()), weight_sum)),
		};

		check_dim(current, item)?;

		// A rating that exactly cancels the accumulated weight leaves no centroid
		if weight_sum == 0.0 {
			return Ok(Self::empty());
		}

		let centroid = current.weighted_sum(self.weight_sum, item, rating).divided(weight_sum);
		Ok(Self::new(Behavioral::Present(centroid), weight_sum))
	}

	/// Remove a previously inserted rating
	///
	/// Resets to [`Aggregate::empty`] when the remaining weight is not positive.
	pub fn delete(&self, item: &Embedding, rating: f64) -> Result<Self> {
		self.shift(Operation::Delete, item, -rating)
	}

	/// Replace `old_rating` with `new_rating` for an item already aggregated
	///
	/// Applied as a single delta-weighted step, so no intermediate empty state.
	pub fn update(&self, item: &Embedding, old_rating: f64, new_rating: f64) -> Result<Self> {
		self.shift(Operation::Update, item, new_rating - old_rating)
	}

	fn shift(&self, operation: Operation, item: &Embedding, delta: f64) -> Result<Self> {
		let weight_sum = self.weight_sum + delta;

		if weight_sum <= 0.0 {
			return Ok(Self::empty());
		}

		let current = self
			.behavioral
			.as_embedding()
			.ok_or(ProfileError::EmptyAggregate { operation })?;

		check_dim(current, item)?;

		let centroid = current.weighted_sum(self.weight_sum, item, delta).divided(weight_sum);
		Ok(Self::new(Behavioral::Present(centroid), weight_sum))
	}
}

fn check_dim(current: &Embedding, item: &Embedding) -> Result<()> {
	if current.dim() != item.dim() {
		return Err(ProfileError::DimensionMismatch {
			field: "film_embedding",
			expected: current.dim(),
			got: item.dim(),
		});
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	fn emb(v: &[f64]) -> Embedding {
		Embedding::new(v.to_vec())
	}

	fn assert_close(a: &Embedding, b: &[f64]) {
		assert_eq!(a.dim(), b.len());
		for (x, y) in a.as_slice().iter().zip(b) {
			assert!((x - y).abs() < EPS, "{:?} != {:?}", a.as_slice(), b);
		}
	}

	#[test]
	fn test_insert_into_empty_is_exact_copy() {
		for rating in [0.5, 1.0, 5.0, 1234.5] {
			let e = emb(&[0.1, -0.7, 3.3]);
			let next = Aggregate::empty().insert(&e, rating).unwrap();
			assert_eq!(next.behavioral, Behavioral::Present(e));
			assert_eq!(next.weight_sum, rating);
		}
	}

	#[test]
	fn test_insert_with_zero_weight_sum_takes_item() {
		let agg = Aggregate::new(Behavioral::Present(emb(&[9.0, 9.0])), 0.0);
		let next = agg.insert(&emb(&[1.0, 2.0]), 3.0).unwrap();
		assert_eq!(next.behavioral, Behavioral::Present(emb(&[1.0, 2.0])));
		assert_eq!(next.weight_sum, 3.0);
	}

	#[test]
	fn test_insert_keeps_prior_weight_without_centroid() {
		let agg = Aggregate::new(Behavioral::Empty, 2.0);
		let next = agg.insert(&emb(&[1.0]), 3.0).unwrap();
		assert_eq!(next.behavioral, Behavioral::Present(emb(&[1.0])));
		assert_eq!(next.weight_sum, 5.0);
	}

	#[test]
	fn test_insert_weighted_mean() {
		let agg = Aggregate::new(Behavioral::Present(emb(&[1.0, 0.0])), 5.0);
		let next = agg.insert(&emb(&[0.0, 2.0]), 5.0).unwrap();
		assert_eq!(next.weight_sum, 10.0);
		assert_close(next.behavioral.as_embedding().unwrap(), &[0.5, 1.0]);
	}

	#[test]
	fn test_insert_cancelling_weight_resets() {
		let agg = Aggregate::new(Behavioral::Present(emb(&[1.0, 2.0])), 4.0);
		let next = agg.insert(&emb(&[3.0, 3.0]), -4.0).unwrap();
		assert_eq!(next, Aggregate::empty());
	}

	#[test]
	fn test_insert_then_delete_restores_state() {
		let start = Aggregate::new(Behavioral::Present(emb(&[0.2, -0.4, 1.5])), 7.5);
		let item = emb(&[3.0, 1.0, -2.0]);

		let after = start.insert(&item, 4.0).unwrap().delete(&item, 4.0).unwrap();

		assert!((after.weight_sum - start.weight_sum).abs() < EPS);
		assert_close(after.behavioral.as_embedding().unwrap(), &[0.2, -0.4, 1.5]);
	}

	#[test]
	fn test_delete_to_non_positive_resets() {
		let agg = Aggregate::new(Behavioral::Present(emb(&[100.0, -3.0])), 4.0);
		for rating in [4.0, 4.5, 100.0] {
			assert_eq!(agg.delete(&emb(&[7.0, 7.0]), rating).unwrap(), Aggregate::empty());
		}
	}

	#[test]
	fn test_delete_weighted_inverse() {
		// centroid of [1,0]@5 and [0,2]@5
		let agg = Aggregate::new(Behavioral::Present(emb(&[0.5, 1.0])), 10.0);
		let next = agg.delete(&emb(&[0.0, 2.0]), 5.0).unwrap();
		assert_eq!(next.weight_sum, 5.0);
		assert_close(next.behavioral.as_embedding().unwrap(), &[1.0, 0.0]);
	}

	#[test]
	fn test_delete_from_empty_is_precondition_error() {
		let agg = Aggregate::new(Behavioral::Empty, 10.0);
		let err = agg.delete(&emb(&[1.0]), 2.0).unwrap_err();
		assert!(matches!(
			err,
			ProfileError::EmptyAggregate { operation: Operation::Delete }
		));
	}

	#[test]
	fn test_delete_from_empty_that_resets_is_allowed() {
		let agg = Aggregate::empty();
		assert_eq!(agg.delete(&emb(&[1.0]), 2.0).unwrap(), Aggregate::empty());
	}

	#[test]
	fn test_update_matches_delete_then_insert() {
		let agg = Aggregate::new(Behavioral::Present(emb(&[0.5, 1.0])), 10.0);
		let item = emb(&[0.0, 2.0]);

		let direct = agg.update(&item, 5.0, 2.0).unwrap();
		let two_step = agg.delete(&item, 5.0).unwrap().insert(&item, 2.0).unwrap();

		assert!((direct.weight_sum - 7.0).abs() < EPS);
		assert!((direct.weight_sum - two_step.weight_sum).abs() < EPS);
		assert_close(
			direct.behavioral.as_embedding().unwrap(),
			two_step.behavioral.as_embedding().unwrap().as_slice(),
		);
	}

	#[test]
	fn test_update_same_rating_is_identity() {
		let agg = Aggregate::new(Behavioral::Present(emb(&[0.25, 0.75])), 3.0);
		let next = agg.update(&emb(&[1.0, 1.0]), 3.0, 3.0).unwrap();
		assert_eq!(next.weight_sum, 3.0);
		assert_close(next.behavioral.as_embedding().unwrap(), &[0.25, 0.75]);
	}

	#[test]
	fn test_update_to_non_positive_resets() {
		let agg = Aggregate::new(Behavioral::Present(emb(&[1.0])), 2.0);
		assert_eq!(agg.update(&emb(&[5.0]), 2.0, 0.0).unwrap(), Aggregate::empty());
		assert_eq!(agg.update(&emb(&[5.0]), 3.0, -1.0).unwrap(), Aggregate::empty());
	}

	#[test]
	fn test_update_on_empty_is_precondition_error() {
		let agg = Aggregate::new(Behavioral::Empty, 4.0);
		let err = agg.update(&emb(&[1.0]), 1.0, 2.0).unwrap_err();
		assert_eq!(
			err.to_string(),
			"Cannot update a rating: behavioral aggregate is empty"
		);
	}

	#[test]
	fn test_dimension_mismatch_is_reported() {
		let agg = Aggregate::new(Behavioral::Present(emb(&[1.0, 0.0])), 1.0);
		let err = agg.insert(&emb(&[1.0, 0.0, 0.0]), 1.0).unwrap_err();
		assert!(matches!(
			err,
			ProfileError::DimensionMismatch { expected: 2, got: 3, .. }
		));
	}

	#[test]
	fn test_operation_parse() {
		assert_eq!("insert".parse::<Operation>().unwrap(), Operation::Insert);
		assert_eq!("delete".parse::<Operation>().unwrap(), Operation::Delete);
		assert_eq!("update".parse::<Operation>().unwrap(), Operation::Update);
		let err = "rename".parse::<Operation>().unwrap_err();
		assert_eq!(err.to_string(), "Unknown operation: rename");
	}
}
