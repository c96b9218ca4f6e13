//! Core functionality for launching the server
//!
//! Contains the logic for spawning the external server process and
//! waiting for it to terminate.

pub mod server;

pub use server::ServerLauncher;
