//! Custom Axum extractors for Huddle-specific types.
//!
//! Provides the `FromRequestParts` implementation for `CallerId` so
//! handlers consume the validated caller identity instead of reading
//! raw headers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::Error;

// CallerId //
//**********//
/// Caller identity extracted from request extensions (set by auth middleware).
#[derive(Clone, Debug)]
pub struct CallerId(pub Box<str>);

impl CallerId {
	pub fn new(user_id: &str) -> CallerId {
		CallerId(Box::from(user_id))
	}
}

impl<S> FromRequestParts<S> for CallerId
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		if let Some(caller_id) = parts.extensions.get::<CallerId>().cloned() {
			Ok(caller_id)
		} else {
			Err(Error::Unauthorized)
		}
	}
}

// vim: ts=4
