//! Core subsystem. This handles the core infrastructure of Huddle.

pub mod app;
pub mod middleware;

pub use crate::core::app::{App, AppBuilder, AppState};
pub use crate::core::middleware::require_user;
