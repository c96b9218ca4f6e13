//! Command-line argument parsing and validation

use clap::{Parser, Subcommand};

/// Server Launcher - starts the particle simulation server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "launcher")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the server and wait for it to exit
    Server,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
