//! webhook-action: fire a configured HTTP request and log the outcome.
//!
//! Entry point for the webhook-action application.

use std::process::ExitCode;

use webhook_action::config::Cli;

mod app;
mod run;

use app::{exit_code, print_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    setup_tracing(cli.verbose);

    let runtime = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");

    match runtime.block_on(run::execute(cli)) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            // Dispatch failures were already logged with their full detail.
            if !matches!(e, run::RunError::Dispatch(_)) {
                tracing::error!("{e}");
            }
            print_hint(&e);
            e.exit_code()
        }
    }
}
