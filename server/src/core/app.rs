//! App state type

use std::sync::{Arc, OnceLock};

use crate::prelude::*;
use crate::config::{ConfigCell, HuddleConfig};
use crate::kv_adapter::KvAdapter;
use crate::settings::SettingsStore;
use crate::{bootstrap, routes};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub config: ConfigCell,
	pub kv_adapter: Arc<dyn KvAdapter>,
	pub settings: SettingsStore,
	bot_user_id: OnceLock<Box<str>>,
}

pub type App = Arc<AppState>;

impl AppState {
	/// Validate and publish a new configuration snapshot
	pub fn reconfigure(&self, config: HuddleConfig) -> HdResult<()> {
		config.validate()?;
		self.config.store(config);
		Ok(())
	}

	/// User id of the bot account, available once bootstrap has run
	pub fn bot_user_id(&self) -> Option<&str> {
		self.bot_user_id.get().map(AsRef::as_ref)
	}

	pub(crate) fn set_bot_user_id(&self, bot_user_id: Box<str>) {
		let _ = self.bot_user_id.set(bot_user_id);
	}
}

#[derive(Debug)]
pub struct AppBuilderOpts {
	listen: Box<str>,
	config: HuddleConfig,
}

pub struct AppBuilder {
	opts: AppBuilderOpts,
	kv_adapter: Option<Arc<dyn KvAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "127.0.0.1:8080".into(),
				config: HuddleConfig::default(),
			},
			kv_adapter: None,
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self { self.opts.listen = listen.into(); self }
	pub fn identity_header(&mut self, identity_header: impl Into<Box<str>>) -> &mut Self { self.opts.config.identity_header = identity_header.into(); self }
	pub fn bot_username(&mut self, bot_username: impl Into<Box<str>>) -> &mut Self { self.opts.config.bot_username = bot_username.into(); self }
	pub fn bot_display_name(&mut self, bot_display_name: impl Into<Box<str>>) -> &mut Self { self.opts.config.bot_display_name = bot_display_name.into(); self }
	pub fn bot_description(&mut self, bot_description: impl Into<Box<str>>) -> &mut Self { self.opts.config.bot_description = Some(bot_description.into()); self }
	pub fn config(&mut self, config: HuddleConfig) -> &mut Self { self.opts.config = config; self }

	// Adapters
	pub fn kv_adapter(&mut self, kv_adapter: Arc<dyn KvAdapter>) -> &mut Self { self.kv_adapter = Some(kv_adapter); self }

	/// Assemble the application state without serving.
	///
	/// Used when embedding the router in another process and by the tests.
	pub fn build(self) -> HdResult<App> {
		self.opts.config.validate()?;
		let kv_adapter = self
			.kv_adapter
			.ok_or_else(|| Error::ConfigError("no kv adapter configured".to_string()))?;
		let settings = SettingsStore::new(Arc::clone(&kv_adapter));

		Ok(Arc::new(AppState {
			config: ConfigCell::new(self.opts.config),
			kv_adapter,
			settings,
			bot_user_id: OnceLock::new(),
		}))
	}

	pub async fn run(self) -> HdResult<()> {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.init();
		info!(" _   _           _     _ _");
		info!("| | | |_   _  __| | __| | | ___");
		info!("| |_| | | | |/ _` |/ _` | |/ _ \\");
		info!("|  _  | |_| | (_| | (_| | |  __/");
		info!("|_| |_|\\__,_|\\__,_|\\__,_|_|\\___|");
		info!("V{}", VERSION);
		info!("");

		let listen = self.opts.listen.clone();
		let app = self.build()?;

		// Provision the bot account before accepting requests
		bootstrap::ensure_bot(&app).await?;

		let router = routes::init(app);
		let listener = tokio::net::TcpListener::bind(listen.as_ref()).await?;
		info!("Listening on {}", listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self { Self::new() }
}

// vim: ts=4
