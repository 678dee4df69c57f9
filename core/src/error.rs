//! Error types for a single API call.
//!
//! # Design
//! Every failure is terminal for the invocation, so each variant maps to a
//! process exit code. Transport and body-read failures keep the underlying
//! error as a string, which keeps the core free of any HTTP library types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit code for missing flags, an unknown method or an unreadable payload.
pub const EXIT_INVALID_INPUT: i32 = 1;
/// Exit code when the request never produced a response.
pub const EXIT_TRANSPORT: i32 = 2;
/// Exit code when the response body could not be read to the end.
pub const EXIT_READ_BODY: i32 = 3;

/// Errors returned while validating, building, sending or reading a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more required configuration values are empty.
    #[error("The following flag(s) are required, but missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("unsupported request type {0:?}, expected one of GET, POST, PUT, PATCH, DELETE")]
    UnsupportedMethod(String),

    /// The payload file for a body-bearing method could not be read.
    #[error("failed to open payload {}: {source}", .path.display())]
    PayloadOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// DNS, connect, TLS or protocol failure before a response arrived.
    #[error("error on response: {0}")]
    Transport(String),

    #[error("failed to read response body: {0}")]
    ReadBody(String),
}

impl ApiError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ApiError::MissingFields(_)
            | ApiError::UnsupportedMethod(_)
            | ApiError::PayloadOpen { .. } => EXIT_INVALID_INPUT,
            ApiError::Transport(_) => EXIT_TRANSPORT,
            ApiError::ReadBody(_) => EXIT_READ_BODY,
        }
    }
}
