//! Typed settings persistence over the key-value adapter

use std::sync::Arc;

use crate::kv_adapter::KvAdapter;
use crate::prelude::*;
use crate::settings::types::MeetingSettings;

// SettingsStore //
//***************//
/// Typed store for per-channel meeting settings.
///
/// Records are keyed by channel id. The store owns the codec, so callers only
/// ever see [`MeetingSettings`] values, never raw bytes.
#[derive(Debug)]
pub struct SettingsStore {
	kv: Arc<dyn KvAdapter>,
}

impl SettingsStore {
	pub fn new(kv: Arc<dyn KvAdapter>) -> SettingsStore {
		SettingsStore { kv }
	}

	/// Loads the settings for a channel.
	///
	/// Returns [`Error::NotFound`] if nothing was ever saved for the channel.
	/// A stored value that fails to decode, or whose embedded channel id does
	/// not match the key it was stored under, is a store fault, not a caller
	/// mistake.
	pub async fn get(&self, channel_id: &str) -> HdResult<MeetingSettings> {
		let bytes = match self.kv.get(channel_id).await? {
			Some(bytes) if !bytes.is_empty() => bytes,
			_ => return Err(Error::NotFound),
		};
		let settings = MeetingSettings::decode(&bytes)?;
		if settings.channel_id.as_ref() != channel_id {
			return Err(Error::DecodeError(format!(
				"stored settings for channel {} carry channel id {}",
				channel_id, settings.channel_id
			)));
		}
		Ok(settings)
	}

	/// Saves the settings for a channel, overwriting any previous record.
	pub async fn save(&self, settings: &MeetingSettings) -> HdResult<()> {
		if settings.channel_id.is_empty() {
			return Err(Error::ValidationError("channelId cannot be empty".to_string()));
		}
		let bytes = settings.encode()?;
		self.kv.set(&settings.channel_id, &bytes).await
	}
}

// vim: ts=4
