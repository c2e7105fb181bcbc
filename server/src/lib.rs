//! Huddle is a per-channel meeting settings service.
//!
//! It runs embedded next to a team-chat host that supplies identity,
//! routing, and a key-value persistence primitive, and exposes a small
//! authenticated HTTP API for reading and writing the settings of a
//! channel's recurring meeting.
//!
//! # Features
//!
//! - One settings record per channel (day of week + hashtag format)
//!	- full-record overwrites, last write wins
//!	- stored through a pluggable key-value adapter
//! - Caller identity taken from a trusted host header
//!	- validated once in middleware, typed everywhere else
//! - Bot account provisioned on first startup
//! - Runtime-swappable configuration snapshots

#![forbid(unsafe_code)]

pub mod bootstrap;
pub mod config;
pub mod core;
pub mod prelude;
pub mod routes;
pub mod settings;

pub use huddle_types::{error, extract, kv_adapter, utils};

pub use crate::core::app::{App, AppBuilder, AppState};

// vim: ts=4
