use std::io;
use std::process::ExitCode;

use apicall::{logging, Args, UreqTransport};
use apicall_core::error::EXIT_INVALID_INPUT;
use apicall_core::{report, Config, RequestRunner};
use clap::Parser;
use tracing::error;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version also land here and are not failures.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_INVALID_INPUT as u8)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    logging::init(args.quiet);
    let config = Config::from(args);

    let runner = RequestRunner::new(UreqTransport::new());
    let response = match runner.run(&config) {
        Ok(response) => response,
        Err(err) => {
            error!("{err}");
            return ExitCode::from(err.exit_code() as u8);
        }
    };

    if let Err(err) = report(&response, &mut io::stdout().lock()) {
        error!("failed to write response body: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
