//! Bootstrap module for initial bot account provisioning

use crate::prelude::*;
use crate::utils::random_id;

/// Reserved key the bot's user id is stored under.
///
/// Channel ids issued by the host runtime are random identifiers, so this
/// constant cannot collide with a settings record key.
pub const BOT_USER_ID_KEY: &str = "bot_user_id";

/// Ensure the service's bot account exists.
///
/// Runs on startup before the listener starts. Idempotent: an id persisted
/// by an earlier run is reused, so the bot identity is stable across
/// restarts.
pub async fn ensure_bot(app: &App) -> HdResult<()> {
	let config = app.config.load();

	let bot_user_id = match app.kv_adapter.get(BOT_USER_ID_KEY).await {
		Ok(Some(bytes)) if !bytes.is_empty() => {
			let bot_user_id = String::from_utf8_lossy(&bytes).into_owned();
			debug!("Found existing bot user: {}", bot_user_id);
			bot_user_id
		}
		Ok(_) => {
			info!("Provisioning bot user {} ({})", config.bot_username, config.bot_display_name);
			let bot_user_id = random_id()?;
			app.kv_adapter.set(BOT_USER_ID_KEY, bot_user_id.as_bytes()).await?;
			bot_user_id
		}
		Err(err) => {
			error!("FATAL: Cannot check bot user: {}", err);
			return Err(err);
		}
	};

	app.set_bot_user_id(bot_user_id.into());
	Ok(())
}

// vim: ts=4
