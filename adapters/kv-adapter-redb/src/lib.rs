//! Redb-based key-value adapter
//!
//! Implements the KvAdapter trait using redb for persistent storage of
//! opaque byte values.
//!
//! # Storage Layout
//!
//! All entries live in a single `kv` table mapping string keys to raw byte
//! values. The adapter never inspects the bytes; codecs live above it.

#![forbid(unsafe_code)]

mod error;
pub use error::Error;

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use huddle::kv_adapter::KvAdapter;
use huddle::prelude::*;

/// Key-value entries: key -> value_bytes
const TABLE_KV: redb::TableDefinition<&str, &[u8]> = redb::TableDefinition::new("kv");

/// redb-based implementation of KvAdapter.
///
/// All blocking redb work runs on the tokio blocking pool, so adapter calls
/// never stall the async runtime.
#[derive(Debug)]
pub struct KvAdapterRedb {
	db: Arc<redb::Database>,
}

impl KvAdapterRedb {
	/// Open or create the database file at `path`.
	///
	/// Parent directories are created as needed. The `kv` table is created
	/// up front so a fresh file serves reads immediately.
	pub async fn new(path: impl Into<PathBuf>) -> HdResult<Self> {
		let path = path.into();
		if let Some(parent) = path.parent() {
			tokio::fs::create_dir_all(parent).await?;
		}

		let db = redb::Database::create(&path).map_err(error::from_redb_error)?;

		let tx = db.begin_write().map_err(error::from_redb_error)?;
		let _ = tx.open_table(TABLE_KV).map_err(error::from_redb_error)?;
		tx.commit().map_err(error::from_redb_error)?;

		info!("Opened key-value store: {:?}", path);
		Ok(Self { db: Arc::new(db) })
	}
}

#[async_trait]
impl KvAdapter for KvAdapterRedb {
	async fn get(&self, key: &str) -> HdResult<Option<Box<[u8]>>> {
		let db = Arc::clone(&self.db);
		let key_owned = key.to_string();

		tokio::task::spawn_blocking(move || {
			use redb::ReadableDatabase;

			let tx = db.begin_read().map_err(error::from_redb_error)?;
			let table = tx.open_table(TABLE_KV).map_err(error::from_redb_error)?;

			match table.get(key_owned.as_str()).map_err(error::from_redb_error)? {
				Some(v) => Ok(Some(Box::from(v.value()))),
				None => Ok(None),
			}
		})
		.await?
	}

	async fn set(&self, key: &str, value: &[u8]) -> HdResult<()> {
		let db = Arc::clone(&self.db);
		let key_owned = key.to_string();
		let value_owned = value.to_vec();

		tokio::task::spawn_blocking(move || {
			let tx = db.begin_write().map_err(error::from_redb_error)?;
			{
				let mut table = tx.open_table(TABLE_KV).map_err(error::from_redb_error)?;
				table
					.insert(key_owned.as_str(), value_owned.as_slice())
					.map_err(error::from_redb_error)?;
			}
			tx.commit().map_err(error::from_redb_error)?;
			Ok(())
		})
		.await?
	}
}

// vim: ts=4
