//! Immutable configuration for one API call.
//!
//! # Design
//! `Config` is assembled once from command-line flags (with the `TOKEN`
//! environment fallback applied by the caller) and passed by reference into
//! every pipeline stage. An empty value and an absent value are the same
//! thing: both count as missing.

use std::path::PathBuf;

use crate::error::ApiError;
use crate::http::HttpMethod;

pub const DEFAULT_TARGET_URL: &str = "https://app.terraform.io/api/v2";
pub const DEFAULT_PAYLOAD: &str = "./payload.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path appended to `target_url`, or an absolute `http(s)://` URL.
    pub endpoint: String,
    pub target_url: String,
    pub request_type: String,
    pub token: String,
    /// Body source for POST, PUT and PATCH.
    pub payload: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            target_url: DEFAULT_TARGET_URL.to_string(),
            request_type: String::new(),
            token: String::new(),
            payload: PathBuf::from(DEFAULT_PAYLOAD),
        }
    }
}

impl Config {
    /// Names of required values that are empty, in flag order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.endpoint.is_empty() {
            missing.push("endpoint");
        }
        if self.request_type.is_empty() {
            missing.push("request-type");
        }
        if self.target_url.is_empty() && !self.endpoint_is_absolute() {
            missing.push("target-url");
        }
        if self.token.is_empty() {
            missing.push("token");
        }
        missing
    }

    /// Check that a request can be built from this configuration.
    pub fn validate(&self) -> Result<(), ApiError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ApiError::MissingFields(missing));
        }
        self.method().map(|_| ())
    }

    pub fn method(&self) -> Result<HttpMethod, ApiError> {
        self.request_type.parse()
    }

    pub fn endpoint_is_absolute(&self) -> bool {
        let lower = self.endpoint.to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    }

    /// Full request URL: the endpoint itself when absolute, otherwise the
    /// target URL and endpoint joined by exactly one `/`.
    pub fn full_url(&self) -> String {
        if self.endpoint_is_absolute() {
            return self.endpoint.clone();
        }
        format!(
            "{}/{}",
            self.target_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }
}
