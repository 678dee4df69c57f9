use std::path::PathBuf;

use apicall_core::{Config, DEFAULT_PAYLOAD, DEFAULT_TARGET_URL};
use clap::Parser;

/// Send one authenticated request to a JSON:API endpoint and print the
/// response body.
#[derive(Debug, Parser)]
#[command(
    name = "apicall",
    version,
    long_about = None,
    after_help = concat!(
        "Long flags take two dashes (--token); ",
        "single-dash spellings such as -token are rejected."
    )
)]
pub struct Args {
    /// Target API endpoint, example: /organizations/:organization_name/workspaces
    ///
    /// An absolute http(s) URL is used as-is and makes --target-url optional.
    #[arg(long, alias = "endpointURL", default_value = "", verbatim_doc_comment)]
    pub endpoint: String,

    /// Intended target URL for the API
    #[arg(
        short = 'u',
        long = "target-url",
        alias = "targetURL",
        default_value = DEFAULT_TARGET_URL
    )]
    pub target_url: String,

    /// Type of API request to perform: GET|POST|PUT|PATCH|DELETE
    #[arg(short = 'X', long = "request-type", alias = "requestType", default_value = "")]
    pub request_type: String,

    /// API token, defaults to the TOKEN environment variable
    #[arg(long, env = "TOKEN", default_value = "", hide_env_values = true)]
    pub token: String,

    /// Path to the payload file sent with POST, PUT and PATCH
    #[arg(long, default_value = DEFAULT_PAYLOAD)]
    pub payload: PathBuf,

    /// Quiet mode (only failures are logged to stderr)
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            endpoint: args.endpoint,
            target_url: args.target_url,
            request_type: args.request_type,
            token: args.token,
            payload: args.payload,
        }
    }
}
