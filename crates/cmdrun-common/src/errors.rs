//! Error types for cmdrun.
//!
//! Process creation has exactly one failure type, [`InvocationError`]. The
//! variants only exist so a caller can tell the causes apart when reporting;
//! every variant means the same thing: no process was created.

use std::error::Error as StdError;
use std::io;
use thiserror::Error;

use crate::types::CommandString;

/// Result type for invocation operations.
pub type InvocationResult<T> = std::result::Result<T, InvocationError>;

/// Why the OS could not create the requested process.
#[derive(Debug, Error)]
pub enum InvocationError {
    /// The command line names no executable at all.
    #[error("Empty command: no executable named in '{command}'")]
    EmptyCommand { command: CommandString },

    /// The executable could not be located.
    #[error("Executable not found: {program} (command: '{command}')")]
    NotFound {
        command: CommandString,
        program: String,
        #[source]
        source: io::Error,
    },

    /// The executable exists but may not be run by this user.
    #[error("Permission denied: {program} (command: '{command}')")]
    PermissionDenied {
        command: CommandString,
        program: String,
        #[source]
        source: io::Error,
    },

    /// Any other OS-level spawn failure (resource limits, bad format, ...).
    #[error("Process spawn failed: {program} (command: '{command}')")]
    Spawn {
        command: CommandString,
        program: String,
        #[source]
        source: io::Error,
    },
}

impl InvocationError {
    pub fn empty_command(command: CommandString) -> Self {
        Self::EmptyCommand { command }
    }

    /// Classifies an io error returned by the OS spawn call.
    pub fn spawn_failed(
        command: CommandString,
        program: impl Into<String>,
        source: io::Error,
    ) -> Self {
        let program = program.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                command,
                program,
                source,
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                command,
                program,
                source,
            },
            _ => Self::Spawn {
                command,
                program,
                source,
            },
        }
    }

    /// The command line that failed to start.
    pub fn command(&self) -> &CommandString {
        match self {
            Self::EmptyCommand { command }
            | Self::NotFound { command, .. }
            | Self::PermissionDenied { command, .. }
            | Self::Spawn { command, .. } => command,
        }
    }

    /// The underlying OS error, if the OS was asked at all.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::EmptyCommand { .. } => None,
            Self::NotFound { source, .. }
            | Self::PermissionDenied { source, .. }
            | Self::Spawn { source, .. } => Some(source),
        }
    }

    /// Full human-readable diagnostic: the message, every error in the
    /// source chain, and the raw OS error details.
    pub fn diagnostic(&self) -> String {
        let mut out = format!("Error: {}", self);

        let mut source = StdError::source(self);
        while let Some(err) = source {
            out.push_str(&format!("\n  caused by: {}", err));
            source = err.source();
        }

        if let Some(io_err) = self.io_error() {
            out.push_str(&format!("\n  kind: {:?}", io_err.kind()));
            if let Some(code) = io_err.raw_os_error() {
                out.push_str(&format!("\n  os error code: {}", code));
            }
        }

        out
    }

    /// Writes [`diagnostic`](Self::diagnostic) to stderr.
    pub fn report(&self) {
        eprintln!("{}", self.diagnostic());
    }
}
