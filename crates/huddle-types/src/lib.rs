//! Shared types, adapter traits, and core utilities for the Huddle service.
//!
//! This crate contains the foundational types that are shared between the
//! server crate and all adapter implementations. Extracting these into a
//! separate crate allows adapter crates to compile in parallel with the
//! server's feature modules.

pub mod error;
pub mod extract;
pub mod kv_adapter;
pub mod prelude;
pub mod utils;

// vim: ts=4
