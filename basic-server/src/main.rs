use std::sync::Arc;
use std::{env, path};

use huddle::AppBuilder;
use huddle_kv_adapter_redb::KvAdapterRedb;

pub struct Config {
	pub db_dir: path::PathBuf,
	pub listen: String,
}

#[tokio::main]
async fn main() {
	let config = Config {
		db_dir: path::PathBuf::from(env::var("DB_DIR").unwrap_or("./data".to_string())),
		listen: env::var("LISTEN").unwrap_or("127.0.0.1:8080".to_string()),
	};

	let kv_adapter =
		Arc::new(KvAdapterRedb::new(config.db_dir.join("huddle.redb")).await.unwrap());

	let mut builder = AppBuilder::new();
	builder.listen(config.listen).kv_adapter(kv_adapter);
	builder.run().await.unwrap();
}

// vim: ts=4
