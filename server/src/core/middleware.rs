//! Custom middlewares

use axum::{
	body::Body,
	extract::State,
	http::{response::Response, Request},
	middleware::Next,
};

use crate::extract::CallerId;
use crate::prelude::*;

/// Require a caller identity on every request.
///
/// The host runtime authenticates the user and injects their id in the
/// configured identity header. An absent or empty header fails the request
/// before any routing or storage work happens. Handlers consume the
/// identity through the [`CallerId`] extractor, never the raw header.
pub async fn require_user(State(app): State<App>, mut req: Request<Body>, next: Next) -> HdResult<Response<Body>> {
	let config = app.config.load();
	let user_id = req
		.headers()
		.get(config.identity_header.as_ref())
		.and_then(|h| h.to_str().ok())
		.ok_or(Error::Unauthorized)?;

	if user_id.is_empty() {
		return Err(Error::Unauthorized);
	}

	let caller_id = CallerId::new(user_id);
	req.extensions_mut().insert(caller_id);

	Ok(next.run(req).await)
}

// vim: ts=4
