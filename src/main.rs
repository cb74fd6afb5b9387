use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use worker_chess::uci::uci_top::run_stdio_loop;

fn main() -> ExitCode {
    // Protocol lines own stdout; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run_stdio_loop() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "stdio loop failed");
            ExitCode::FAILURE
        }
    }
}
