//! Meeting settings API handlers

use axum::{
	body::Bytes,
	extract::{Query, State},
	http::StatusCode,
	Json,
};
use serde::{Deserialize, Serialize};

use crate::{extract::CallerId, prelude::*, settings::types::MeetingSettings};

#[derive(Debug, Deserialize)]
pub struct SettingsQuery {
	#[serde(rename = "channelId", default)]
	pub channel_id: String,
}

/// Plain acknowledgement body for successful writes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
	pub status: &'static str,
}

/// GET /api/v1/settings?channelId=... - Fetch the settings of a channel
///
/// A channel with no saved settings is reported as a client error, so a
/// frontend can tell "not configured yet" apart from a store fault.
pub async fn get_settings(
	State(app): State<App>,
	CallerId(caller_id): CallerId,
	Query(query): Query<SettingsQuery>,
) -> HdResult<(StatusCode, Json<MeetingSettings>)> {
	if query.channel_id.is_empty() {
		return Err(Error::ValidationError("missing channelId parameter".to_string()));
	}

	let settings = app.settings.get(&query.channel_id).await.map_err(|err| match err {
		Error::NotFound => {
			Error::ValidationError(format!("channel {} is not configured yet", query.channel_id))
		}
		err => err,
	})?;
	debug!("User {} fetched settings for channel {}", caller_id, query.channel_id);

	Ok((StatusCode::OK, Json(settings)))
}

/// POST /api/v1/settings - Save the settings of a channel
///
/// The target channel is taken from the request body, not the query string.
pub async fn post_settings(
	State(app): State<App>,
	CallerId(caller_id): CallerId,
	body: Bytes,
) -> HdResult<(StatusCode, Json<StatusResponse>)> {
	let settings =
		MeetingSettings::decode(&body).map_err(|err| Error::ValidationError(err.to_string()))?;
	app.settings.save(&settings).await?;
	info!("User {} updated settings for channel {}", caller_id, settings.channel_id);

	Ok((StatusCode::OK, Json(StatusResponse { status: "OK" })))
}

// vim: ts=4
