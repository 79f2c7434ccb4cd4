//! # cmdrun common
//!
//! Types and errors shared by the cmdrun crates: the opaque command string,
//! the shell-mode switch and the invocation error.

pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::{InvocationError, InvocationResult};
pub use types::{CommandString, ShellMode};
