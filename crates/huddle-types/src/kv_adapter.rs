//! Adapter for the host runtime's key-value storage primitive.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

/// A `Huddle` key-value adapter
///
/// Every `KvAdapter` implementation is required to implement this trait.
/// A `KvAdapter` persists opaque byte values addressed by string keys. No
/// transactional guarantees are assumed beyond per-key write atomicity,
/// concurrent writers to the same key race with last write wins.
#[async_trait]
pub trait KvAdapter: Debug + Send + Sync {
	/// Reads the value stored under `key`, if any
	async fn get(&self, key: &str) -> HdResult<Option<Box<[u8]>>>;

	/// Stores `value` under `key`, replacing any previous value
	async fn set(&self, key: &str, value: &[u8]) -> HdResult<()>;
}

// vim: ts=4
