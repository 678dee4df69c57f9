use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Diagnostics go to stderr so stdout carries
/// nothing but the response body.
///
/// `RUST_LOG` takes precedence over the default `info` level; `quiet` drops
/// everything below `error`.
pub fn init(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
