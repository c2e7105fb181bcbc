//! Platform error type shared by the server and all adapters.
//!
//! Status mapping follows one rule: malformed caller input is a client
//! error (400), faults inside the service or its storage are server
//! errors (500). Internal errors never carry detail in the response body.

use axum::{http::StatusCode, response::IntoResponse};
use std::fmt;

pub type HdResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Request carries no usable caller identity
	Unauthorized,
	/// Resource does not exist
	NotFound,
	/// Caller-supplied data is malformed or incomplete
	ValidationError(String),
	/// Persisted data cannot be decoded
	DecodeError(String),
	/// The underlying key-value engine failed
	StoreError(String),
	/// Service configuration is invalid
	ConfigError(String),
	/// Unexpected internal failure
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Error::Unauthorized => write!(f, "not authorized"),
			Error::NotFound => write!(f, "not found"),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::DecodeError(msg) => write!(f, "decode error: {}", msg),
			Error::StoreError(msg) => write!(f, "store error: {}", msg),
			Error::ConfigError(msg) => write!(f, "config error: {}", msg),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(e) => write!(f, "io error: {}", e),
		}
	}
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<tokio::task::JoinError> for Error {
	fn from(err: tokio::task::JoinError) -> Self {
		Self::Internal(err.to_string())
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		match self {
			Error::Unauthorized => (StatusCode::UNAUTHORIZED, "not authorized").into_response(),
			Error::NotFound => (StatusCode::NOT_FOUND, "not found").into_response(),
			Error::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
			_ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
		}
	}
}


// vim: ts=4
