//! Blocking HTTP transport backed by `ureq`.
//!
//! # Design
//! The agent keeps ureq's defaults (no timeout, TLS or proxy overrides)
//! except that 4xx/5xx responses are returned as data, so an error body
//! from the API is printed like any other body.

use apicall_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};
use tracing::debug;
use ureq::{Agent, Body, RequestBuilder};

pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn with_headers<B>(
    mut builder: RequestBuilder<B>,
    headers: &[(String, String)],
) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    type Response = ureq::http::Response<Body>;

    fn execute(&self, req: &HttpRequest) -> Result<Self::Response, ApiError> {
        let body = req.body.as_deref().unwrap_or_default();
        let result = match req.method {
            HttpMethod::Get => with_headers(self.agent.get(&req.url), &req.headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(&req.url), &req.headers).call(),
            HttpMethod::Post => with_headers(self.agent.post(&req.url), &req.headers).send(body),
            HttpMethod::Put => with_headers(self.agent.put(&req.url), &req.headers).send(body),
            HttpMethod::Patch => with_headers(self.agent.patch(&req.url), &req.headers).send(body),
        };
        result.map_err(|e| ApiError::Transport(e.to_string()))
    }

    fn read_body(&self, mut response: Self::Response) -> Result<HttpResponse, ApiError> {
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        debug!(status, "reading response body");

        // No size cap: the whole body is buffered whatever its length.
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(|e| ApiError::ReadBody(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
