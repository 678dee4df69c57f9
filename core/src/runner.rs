//! The single-request pipeline: validate, build, execute, read, report.
//!
//! # Design
//! `RequestRunner` owns a `Transport` and nothing else. The transport is the
//! only place that touches the network, so the pipeline can be driven by a
//! real HTTP client in the binary and by in-memory fakes in tests.

use std::io::{self, Write};

use tracing::{info, warn};

use crate::config::Config;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::request::build_request;

/// Executes an `HttpRequest` and reads the reply.
///
/// `execute` returns as soon as a status line has arrived; `read_body`
/// consumes that response and drains its body. Taking the response by value
/// releases the underlying connection on every path out of `read_body`.
pub trait Transport {
    type Response;

    fn execute(&self, request: &HttpRequest) -> Result<Self::Response, ApiError>;

    fn read_body(&self, response: Self::Response) -> Result<HttpResponse, ApiError>;
}

#[derive(Debug)]
pub struct RequestRunner<T> {
    transport: T,
}

impl<T: Transport> RequestRunner<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Run one request for `config`. Nothing is sent unless validation and
    /// request construction both succeed; no stage is retried.
    pub fn run(&self, config: &Config) -> Result<HttpResponse, ApiError> {
        config.validate()?;
        let request = build_request(config)?;
        info!(
            method = %request.method,
            url = %request.url,
            body_bytes = request.body.as_ref().map_or(0, Vec::len),
            "sending request"
        );

        let response = self.transport.execute(&request)?;
        let response = self.transport.read_body(response)?;

        if response.is_success() {
            info!(
                status = response.status,
                body_bytes = response.body.len(),
                "received response"
            );
        } else {
            warn!(
                status = response.status,
                body_bytes = response.body.len(),
                "server returned an error status"
            );
        }
        Ok(response)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

/// Write the response body to `out` exactly as received.
pub fn report<W: Write>(response: &HttpResponse, out: &mut W) -> io::Result<()> {
    out.write_all(&response.body)?;
    out.flush()
}
