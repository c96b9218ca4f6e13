//! Server launch functionality
//!
//! Spawns the external server process through its toolchain and blocks
//! until the process exits.

use crate::{config::Config, error::Result, utils::process::ProcessRunner};
use tracing::{debug, info, instrument};

/// Launcher that starts the server process and waits for it
pub struct ServerLauncher {
    config: Config,
    process_runner: ProcessRunner,
}

impl ServerLauncher {
    /// Create a new server launcher with the given configuration
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            process_runner: ProcessRunner::new(config.debug),
            config,
        }
    }

    /// Start the server process and block until it exits
    ///
    /// The child inherits stdin/stdout/stderr, so server output goes
    /// straight to the terminal. A missing toolchain binary or a non-zero
    /// child exit status is fatal; there is no retry.
    #[instrument(skip(self))]
    pub fn launch(&self) -> Result<()> {
        let (cmd, args) = self.config.server.launch_cmd();

        info!("Launching server: {} {}", cmd, args.join(" "));

        let args_str: Vec<&str> = args.iter().map(String::as_str).collect();
        self.process_runner.run_command(&cmd, &args_str)?;

        debug!("Server process exited cleanly");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LauncherError;
    use std::path::PathBuf;

    fn config_for(program: &str, args: &[&str], source: &str) -> Config {
        let mut config = Config::default();
        config.server.program = program.to_string();
        config.server.args = args.iter().map(ToString::to_string).collect();
        config.server.source = PathBuf::from(source);
        config
    }

    #[test]
    fn test_launch_waits_for_child_exit() {
        // `sh -c "sleep 0.2; exit 0"` only succeeds once the child has
        // actually run to completion.
        let config = config_for("sh", &["-c"], "sleep 0.2; exit 0");
        let launcher = ServerLauncher::new(config);

        let started = std::time::Instant::now();
        launcher.launch().unwrap();
        assert!(started.elapsed() >= std::time::Duration::from_millis(150));
    }

    #[test]
    fn test_launch_fails_when_toolchain_missing() {
        let config = config_for("nonexistent_toolchain_12345", &["run"], "server.go");
        let launcher = ServerLauncher::new(config);

        match launcher.launch() {
            Err(LauncherError::Process {
                exit_code, source, ..
            }) => {
                assert_eq!(exit_code, None);
                assert!(source.is_some());
            }
            other => panic!("Expected process error, got {other:?}"),
        }
    }

    #[test]
    fn test_launch_propagates_child_failure() {
        let config = config_for("sh", &["-c"], "exit 3");
        let launcher = ServerLauncher::new(config);

        match launcher.launch() {
            Err(LauncherError::Process { exit_code, .. }) => {
                assert_eq!(exit_code, Some(3));
            }
            other => panic!("Expected process error, got {other:?}"),
        }
    }
}
