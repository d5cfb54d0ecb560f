//! Interest/behavior blending for profile embeddings

use super::error::{ProfileError, Result};
use super::{Behavioral, Embedding};

/// Weight given to the interest embedding after `rating_count` ratings
///
/// `1 / (1 + n)`: 0.5 after one rating, tending to 0 as ratings accumulate.
pub fn interest_weight(rating_count: u64) -> f64 {
	1.0 / (1.0 + rating_count as f64)
}

/// Mix the static interest embedding with the behavioral centroid
///
/// Without behavioral evidence the profile is the interest embedding itself.
pub fn blend(interest: &Embedding, behavioral: &Behavioral, rating_count: u64) -> Result<Embedding> {
	let behavioral = match behavioral {
		Behavioral::Present(b) if rating_count > 0 => b,
		_ => return Ok(interest.clone()),
	};

	if behavioral.dim() != interest.dim() {
		return Err(ProfileError::DimensionMismatch {
			field: "behavioral_embedding",
			expected: interest.dim(),
			got: behavioral.dim(),
		});
	}

	let alpha = interest_weight(rating_count);
	Ok(interest.weighted_sum(alpha, behavioral, 1.0 - alpha))
}
