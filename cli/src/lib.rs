//! Command-line host for `apicall-core`: flag parsing, logging setup and the
//! real network transport.

pub mod args;
pub mod logging;
pub mod transport;

pub use args::Args;
pub use transport::UreqTransport;
