//! # Server Launcher
//!
//! A small command-line launcher for the particle simulation server.
//! It knows exactly one action: start the Go server, wait for it to exit,
//! and report completion on stdout.
//!
//! ## Features
//!
//! - Single `server` sub-command with standard usage handling
//! - Synchronous child-process launch with inherited stdio
//! - Professional error handling and logging
//!
//! ## Example
//!
//! ```no_run
//! use server_launcher::{config::Config, core::ServerLauncher};
//!
//! let launcher = ServerLauncher::new(Config::default());
//! launcher.launch()?;
//! # Ok::<(), server_launcher::error::LauncherError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                // Keep stdout reserved for the confirmation line
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
