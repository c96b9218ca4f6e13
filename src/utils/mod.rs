//! Utility modules for common functionality
//!
//! Provides reusable utilities for process execution.

pub mod process;

pub use process::ProcessRunner;
