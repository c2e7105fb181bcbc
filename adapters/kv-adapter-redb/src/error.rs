use huddle::error::Error as HuddleError;
use std::fmt;

/// Internal error type for the kv adapter
#[derive(Debug)]
pub enum Error {
	RedbError(String),
	IoError(std::io::Error),
	Unknown(String),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Error::RedbError(msg) => write!(f, "redb error: {}", msg),
			Error::IoError(e) => write!(f, "io error: {}", e),
			Error::Unknown(msg) => write!(f, "unknown error: {}", msg),
		}
	}
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
	fn from(e: std::io::Error) -> Self {
		Error::IoError(e)
	}
}

impl From<tokio::task::JoinError> for Error {
	fn from(e: tokio::task::JoinError) -> Self {
		Error::Unknown(e.to_string())
	}
}

impl From<Error> for HuddleError {
	fn from(e: Error) -> Self {
		match e {
			Error::IoError(io_err) => HuddleError::Io(io_err),
			_ => HuddleError::StoreError(e.to_string()),
		}
	}
}

/// Helper to convert redb errors
pub fn from_redb_error<E: fmt::Display>(err: E) -> Error {
	Error::RedbError(err.to_string())
}

// vim: ts=4
