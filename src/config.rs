//! Configuration for the server launcher
//!
//! The launcher deliberately has no configuration system: everything is
//! derived from the parsed command line plus fixed defaults. No files or
//! environment variables are read.

use crate::{cli::Args, error::LauncherError};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Server launch configuration
    pub server: ServerConfig,
}

/// How to launch the external server process
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Toolchain binary used to run the server
    pub program: String,
    /// Arguments passed to the toolchain binary
    pub args: Vec<String>,
    /// Source file of the server, relative to the working directory
    pub source: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            server: ServerConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            program: "go".to_string(),
            args: vec!["run".to_string()],
            source: PathBuf::from("server/server.go"),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, LauncherError> {
        let config = Self {
            debug: args.debug,
            ..Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), LauncherError> {
        if self.server.program.is_empty() {
            return Err(LauncherError::validation(
                "Server toolchain binary must not be empty".to_string(),
            ));
        }

        if self.server.source.as_os_str().is_empty() {
            return Err(LauncherError::validation(
                "Server source path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl ServerConfig {
    /// Get the full launch command with arguments
    pub fn launch_cmd(&self) -> (String, Vec<String>) {
        let mut args = self.args.clone();
        args.push(self.source.display().to_string());
        (self.program.clone(), args)
    }
}
