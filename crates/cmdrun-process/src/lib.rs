//! # cmdrun process
//!
//! Single-shot process invocation.
//!
//! This crate provides:
//! - [`Invoker`], which starts a command line as an OS process
//! - [`Launcher`], the seam to the OS process-creation facility
//! - Direct-mode command line tokenisation
//! - YAML-loadable [`InvokerConfig`]
//!
//! ```rust,no_run
//! use cmdrun_process::execute;
//!
//! match execute("echo hello") {
//!     Ok(handle) => println!("started pid {}", handle.id()),
//!     Err(e) => e.report(),
//! }
//! ```

pub mod command_line;
pub mod config;
pub mod execute;
pub mod launcher;

// Re-export main types
pub use config::InvokerConfig;
pub use execute::{execute, Invoker, ProcessHandle};
pub use launcher::{Launcher, SystemLauncher};

pub use cmdrun_common::{CommandString, InvocationError, InvocationResult, ShellMode};
