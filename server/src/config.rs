//! Service configuration
//!
//! Configuration is published as immutable snapshots: readers take a cheap
//! `Arc` clone and never observe a half-applied change, writers validate a
//! whole new [`HuddleConfig`] and swap it in through the [`ConfigCell`].

use axum::http::header::HeaderName;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::sync::Arc;

use crate::prelude::*;

/// Header the host runtime uses to propagate the authenticated user id
pub const DEFAULT_IDENTITY_HEADER: &str = "Mattermost-User-Id";

#[skip_serializing_none]
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HuddleConfig {
	/// Name of the trusted header carrying the caller's user id
	pub identity_header: Box<str>,

	/// Username of the bot account provisioned at startup
	pub bot_username: Box<str>,

	/// Display name of the bot account
	pub bot_display_name: Box<str>,

	/// Optional description shown on the bot's profile
	pub bot_description: Option<Box<str>>,
}

impl Default for HuddleConfig {
	fn default() -> Self {
		HuddleConfig {
			identity_header: DEFAULT_IDENTITY_HEADER.into(),
			bot_username: "huddle".into(),
			bot_display_name: "Huddle Bot".into(),
			bot_description: None,
		}
	}
}

impl HuddleConfig {
	pub fn validate(&self) -> HdResult<()> {
		if self.identity_header.is_empty() {
			return Err(Error::ConfigError("identity header cannot be empty".to_string()));
		}
		HeaderName::from_bytes(self.identity_header.as_bytes()).map_err(|_| {
			Error::ConfigError(format!("invalid identity header name: {}", self.identity_header))
		})?;

		if self.bot_username.is_empty() {
			return Err(Error::ConfigError("bot username cannot be empty".to_string()));
		}

		Ok(())
	}
}

// ConfigCell //
//************//
/// Single-writer/multi-reader cell holding the current configuration snapshot.
#[derive(Debug)]
pub struct ConfigCell {
	current: RwLock<Arc<HuddleConfig>>,
}

impl ConfigCell {
	pub fn new(config: HuddleConfig) -> Self {
		ConfigCell { current: RwLock::new(Arc::new(config)) }
	}

	/// Take a snapshot of the current configuration
	pub fn load(&self) -> Arc<HuddleConfig> {
		Arc::clone(&self.current.read())
	}

	/// Publish a new configuration snapshot
	pub fn store(&self, config: HuddleConfig) {
		*self.current.write() = Arc::new(config);
	}
}


// vim: ts=4
