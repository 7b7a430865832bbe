//! # StyleHub Storefront Entry Point
//!
//! Smoke entry point: loads configuration, seeds the session state and logs
//! a dashboard summary. There is no interactive UI here; a view layer links
//! against the library and calls its commands.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration (defaults, file, environment)
//! 3. Create state objects (StoreState, NavigationState, ToastChannel, AdminSession)
//! 4. Log the dashboard summary

use std::process::ExitCode;

fn main() -> ExitCode {
    match stylehub_storefront::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Storefront failed to start");
            ExitCode::FAILURE
        }
    }
}
