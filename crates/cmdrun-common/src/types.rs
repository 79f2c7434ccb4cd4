//! Core domain types shared by the cmdrun crates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A command line supplied by a caller.
///
/// The string is opaque: nothing in this workspace parses, escapes or
/// rewrites it before it reaches the OS process-creation facility.
///
/// # Example
/// ```
/// use cmdrun_common::CommandString;
///
/// let command = CommandString::from("echo hello");
/// assert_eq!(command.as_str(), "echo hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandString(String);

impl CommandString {
    /// Creates a new CommandString from a string.
    pub fn new(command: impl Into<String>) -> Self {
        Self(command.into())
    }

    /// Returns the command as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the raw bytes of the command.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// True when the command contains nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for CommandString {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CommandString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for CommandString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a command line is handed to the operating system.
///
/// `Direct` splits the line on whitespace and executes the first token with
/// the remaining tokens as arguments. No quoting rules apply, so `"a b"` is
/// two arguments: `"a` and `b"`.
///
/// `Shell` passes the line untouched to the platform shell (`sh -c` or
/// `cmd /C`), which enables pipes, globbing and variable expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShellMode {
    #[default]
    Direct,
    Shell,
}

impl ShellMode {
    /// Returns the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShellMode::Direct => "direct",
            ShellMode::Shell => "shell",
        }
    }
}

impl fmt::Display for ShellMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
