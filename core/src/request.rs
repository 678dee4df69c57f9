//! Request construction from a validated `Config`.

use std::fs;

use tracing::debug;

use crate::config::Config;
use crate::error::ApiError;
use crate::http::HttpRequest;

/// Content type sent with every payload.
pub const JSON_API_CONTENT_TYPE: &str = "application/vnd.api+json";

/// Build the single request described by `config`.
///
/// Body-bearing methods read the payload file completely; the file handle is
/// closed before this returns, on success and on error alike.
pub fn build_request(config: &Config) -> Result<HttpRequest, ApiError> {
    let method = config.method()?;
    let url = config.full_url();
    let mut headers = vec![(
        "Authorization".to_string(),
        format!("Bearer {}", config.token),
    )];

    let body = if method.carries_body() {
        let bytes = fs::read(&config.payload).map_err(|source| ApiError::PayloadOpen {
            path: config.payload.clone(),
            source,
        })?;
        debug!(
            payload = %config.payload.display(),
            bytes = bytes.len(),
            "read payload"
        );
        headers.push((
            "Content-Type".to_string(),
            JSON_API_CONTENT_TYPE.to_string(),
        ));
        Some(bytes)
    } else {
        None
    };

    Ok(HttpRequest {
        method,
        url,
        headers,
        body,
    })
}
