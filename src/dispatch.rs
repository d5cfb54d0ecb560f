//! Applies one rating mutation to a user's behavioral state

use crate::core::{blend, ProfileError, Result};
use crate::request::{Mutation, ProfileRequest, ProfileResponse, RawRequest};
use crate::ui;

/// Run the aggregator variant for the request, then blend the new profile
pub fn apply(request: &ProfileRequest) -> Result<ProfileResponse> {
	let previous = &request.aggregate;
	let film = &request.film;

	let (aggregate, rating_count) = match request.mutation {
		Mutation::Insert { rating } => (
			previous.insert(film, rating)?,
			request.rating_count.saturating_add(1),
		),
		Mutation::Delete { rating } => (
			previous.delete(film, rating)?,
			request.rating_count.saturating_sub(1),
		),
		Mutation::Update { old_rating, rating } => (
			previous.update(film, old_rating, rating)?,
			request.rating_count,
		),
	};

	// Finite inputs can still overflow; such a state could not be sent back
	if !aggregate.weight_sum.is_finite() {
		return Err(ProfileError::NonFinite("behavioral_weight_sum"));
	}
	if aggregate.behavioral.as_embedding().is_some_and(|b| !b.is_finite()) {
		return Err(ProfileError::NonFinite("behavioral_embedding"));
	}

	let profile = blend(&request.interest, &aggregate.behavioral, rating_count)?;
	if !profile.is_finite() {
		return Err(ProfileError::NonFinite("profile_embedding"));
	}

	ui::debug(&format!(
		"{}: weight {} -> {}, count {} -> {}, dim {}",
		request.mutation.operation(),
		previous.weight_sum,
		aggregate.weight_sum,
		request.rating_count,
		rating_count,
		request.dim()
	));

	if aggregate.behavioral.is_empty() && !previous.behavioral.is_empty() {
		ui::debug("Behavioral aggregate reset to empty");
	}

	Ok(ProfileResponse {
		behavioral_embedding: aggregate.behavioral.into_embedding(),
		behavioral_weight_sum: aggregate.weight_sum,
		rating_count,
		profile_embedding: profile,
	})
}

/// Validate a wire request and apply it
pub fn apply_raw(raw: RawRequest) -> Result<ProfileResponse> {
	apply(&ProfileRequest::try_from(raw)?)
}
