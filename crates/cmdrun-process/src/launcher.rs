//! The OS process-creation facility.
//!
//! [`Launcher`] is the seam between the invoker and the operating system.
//! [`SystemLauncher`] is the real implementation over `std::process::Command`;
//! tests substitute their own.

use std::process::{Child, Command};

use cmdrun_common::{CommandString, InvocationError, InvocationResult, ShellMode};

#[cfg(unix)]
const DEFAULT_SHELL: &str = "sh";
#[cfg(unix)]
const SHELL_FLAG: &str = "-c";

#[cfg(windows)]
const DEFAULT_SHELL: &str = "cmd";
#[cfg(windows)]
const SHELL_FLAG: &str = "/C";

/// Creates an OS process from a command line.
///
/// Implementations receive the command exactly as the caller supplied it and
/// must either return the live child or an [`InvocationError`]. They are
/// shared between threads, hence `Send + Sync`.
pub trait Launcher: Send + Sync {
    fn launch(&self, command: &CommandString, mode: ShellMode) -> InvocationResult<Child>;
}

/// Spawns processes through the standard library.
///
/// stdin, stdout and stderr are inherited from the current process; nothing
/// is piped back.
#[derive(Debug, Clone, Default)]
pub struct SystemLauncher {
    shell: Option<String>,
}

impl SystemLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `shell` instead of the platform default in [`ShellMode::Shell`].
    pub fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: Some(shell.into()),
        }
    }

    /// The shell program used in [`ShellMode::Shell`].
    pub fn shell(&self) -> &str {
        self.shell.as_deref().unwrap_or(DEFAULT_SHELL)
    }

    /// Builds the `Command` for `command`, returning it with the program name
    /// used for error reporting.
    fn build(&self, command: &CommandString, mode: ShellMode) -> InvocationResult<(String, Command)> {
        match mode {
            ShellMode::Direct => {
                let tokens = crate::command_line::split(command.as_str());
                let Some((program, args)) = tokens.split_first() else {
                    return Err(InvocationError::empty_command(command.clone()));
                };

                let mut cmd = Command::new(program);
                cmd.args(args);
                Ok((program.to_string(), cmd))
            }
            ShellMode::Shell => {
                if command.is_blank() {
                    return Err(InvocationError::empty_command(command.clone()));
                }

                let shell = self.shell();
                let mut cmd = Command::new(shell);
                cmd.arg(SHELL_FLAG);
                append_verbatim(&mut cmd, command.as_str());
                Ok((shell.to_string(), cmd))
            }
        }
    }
}

impl Launcher for SystemLauncher {
    fn launch(&self, command: &CommandString, mode: ShellMode) -> InvocationResult<Child> {
        let (program, mut cmd) = self.build(command, mode)?;

        cmd.spawn()
            .map_err(|e| InvocationError::spawn_failed(command.clone(), program, e))
    }
}

#[cfg(unix)]
fn append_verbatim(cmd: &mut Command, line: &str) {
    cmd.arg(line);
}

// cmd.exe does its own parsing; quoting the line would change its meaning.
#[cfg(windows)]
fn append_verbatim(cmd: &mut Command, line: &str) {
    use std::os::windows::process::CommandExt;
    cmd.raw_arg(line);
}
