//! Shared test fixtures
//!
//! Provides an in-memory key-value adapter with fault injection and
//! builders for test app instances. The adapter counts operations so tests
//! can assert that a rejected request never touched the store.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use huddle::error::{Error, HdResult};
use huddle::kv_adapter::KvAdapter;
use huddle::{routes, App, AppBuilder};

// MemKvAdapter //
//**************//
/// In-memory key-value adapter for tests.
#[derive(Debug, Default)]
pub struct MemKvAdapter {
	data: Mutex<HashMap<String, Box<[u8]>>>,
	reads: AtomicUsize,
	writes: AtomicUsize,
	fail_reads: AtomicBool,
	fail_writes: AtomicBool,
}

impl MemKvAdapter {
	/// Make every subsequent read fail with a store error.
	pub fn fail_reads(&self) {
		self.fail_reads.store(true, Ordering::SeqCst);
	}

	/// Make every subsequent write fail with a store error.
	pub fn fail_writes(&self) {
		self.fail_writes.store(true, Ordering::SeqCst);
	}

	/// Plant raw bytes under a key, bypassing the codec.
	pub fn poison(&self, key: &str, value: &[u8]) {
		self.data.lock().insert(key.to_string(), Box::from(value));
	}

	pub fn read_count(&self) -> usize {
		self.reads.load(Ordering::SeqCst)
	}

	pub fn write_count(&self) -> usize {
		self.writes.load(Ordering::SeqCst)
	}

	/// Total operations attempted against the adapter.
	pub fn op_count(&self) -> usize {
		self.read_count() + self.write_count()
	}
}

#[async_trait]
impl KvAdapter for MemKvAdapter {
	async fn get(&self, key: &str) -> HdResult<Option<Box<[u8]>>> {
		self.reads.fetch_add(1, Ordering::SeqCst);
		if self.fail_reads.load(Ordering::SeqCst) {
			return Err(Error::StoreError("injected read failure".to_string()));
		}
		Ok(self.data.lock().get(key).cloned())
	}

	async fn set(&self, key: &str, value: &[u8]) -> HdResult<()> {
		self.writes.fetch_add(1, Ordering::SeqCst);
		if self.fail_writes.load(Ordering::SeqCst) {
			return Err(Error::StoreError("injected write failure".to_string()));
		}
		self.data.lock().insert(key.to_string(), Box::from(value));
		Ok(())
	}
}

// App builders //
//**************//
/// Build an app backed by a fresh in-memory adapter.
pub fn test_app() -> (App, Arc<MemKvAdapter>) {
	let kv = Arc::new(MemKvAdapter::default());
	let app = test_app_with(Arc::clone(&kv));
	(app, kv)
}

/// Build an app around an existing adapter, e.g. to share state between
/// two app instances.
pub fn test_app_with(kv: Arc<MemKvAdapter>) -> App {
	let mut builder = AppBuilder::new();
	builder.kv_adapter(kv);
	builder.build().expect("Failed to build test app")
}

/// Build a ready-to-serve router backed by a fresh in-memory adapter.
pub fn test_router() -> (axum::Router, Arc<MemKvAdapter>) {
	let (app, kv) = test_app();
	(routes::init(app), kv)
}
