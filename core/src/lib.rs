//! Core of the `apicall` single-request HTTP client.
//!
//! # Overview
//! Turns a flat `Config` into one `HttpRequest`, hands it to a `Transport`,
//! and returns the fully read `HttpResponse`. The network stays behind the
//! `Transport` trait (host-does-IO pattern), so the pipeline is deterministic
//! under test.
//!
//! # Design
//! - `Config` is immutable and validated before anything is built.
//! - `build_request` is the only place that reads the payload file.
//! - `RequestRunner::run` is a straight line: no loops, no retries.
//! - Every failure is an `ApiError` with its own exit code.

pub mod config;
pub mod error;
pub mod http;
pub mod request;
pub mod runner;

pub use config::{Config, DEFAULT_PAYLOAD, DEFAULT_TARGET_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use request::{build_request, JSON_API_CONTENT_TYPE};
pub use runner::{report, RequestRunner, Transport};
