//! Meeting settings subsystem
//!
//! # Architecture
//!
//! - **Types** (`types.rs`): settings record and its JSON codec
//! - **Store** (`store.rs`): typed persistence over the key-value adapter
//! - **Handler** (`handler.rs`): HTTP API endpoints

pub mod handler;
pub mod store;
pub mod types;

pub use store::SettingsStore;
pub use types::{MeetingSettings, Weekday};

// vim: ts=4
