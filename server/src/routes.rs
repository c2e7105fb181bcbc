use axum::{http::StatusCode, middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::core::app::App;
use crate::core::middleware::require_user;
use crate::settings;

/// Explicit route table of the service.
///
/// The identity gate wraps the whole router, fallback included: an
/// unauthenticated request gets 401 no matter which path it names.
pub fn init(app: App) -> Router {
	Router::new()
		.route(
			"/api/v1/settings",
			get(settings::handler::get_settings).post(settings::handler::post_settings),
		)
		.fallback(not_found)
		.layer(middleware::from_fn_with_state(app.clone(), require_user))
		.layer(TraceLayer::new_for_http())
		.with_state(app)
}

async fn not_found() -> (StatusCode, &'static str) {
	(StatusCode::NOT_FOUND, "not found")
}

// vim: ts=4
