//! Process invocation.
//!
//! [`Invoker::execute`] turns a command line into a running OS process and
//! reports only start-up failures. The child is never waited on, read from
//! or signalled here.

use std::fmt;
use std::process::Child;
use std::sync::Arc;

use cmdrun_common::{CommandString, InvocationResult};
use tracing::{debug, info, warn};

use crate::config::InvokerConfig;
use crate::launcher::{Launcher, SystemLauncher};

/// A process created by [`Invoker::execute`].
///
/// Dropping the handle does not wait for or kill the process; the OS keeps
/// running it.
#[derive(Debug)]
pub struct ProcessHandle {
    command: CommandString,
    child: Child,
}

impl ProcessHandle {
    pub fn new(command: CommandString, child: Child) -> Self {
        Self { command, child }
    }

    /// OS process identifier.
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// The command line the process was started from.
    pub fn command(&self) -> &CommandString {
        &self.command
    }

    /// Gives up the handle, returning the underlying child so the caller
    /// can wait on it.
    pub fn into_child(self) -> Child {
        self.child
    }
}

/// Launches command lines as OS processes.
///
/// An invoker only holds immutable configuration and is safe to share
/// between threads; concurrent calls do not interact.
#[derive(Clone)]
pub struct Invoker {
    config: InvokerConfig,
    launcher: Arc<dyn Launcher>,
}

impl Invoker {
    /// Creates an invoker backed by the operating system.
    pub fn new(config: InvokerConfig) -> Self {
        let launcher = match &config.shell {
            Some(shell) => SystemLauncher::with_shell(shell.clone()),
            None => SystemLauncher::new(),
        };
        Self::with_launcher(config, launcher)
    }

    /// Creates an invoker that spawns through `launcher`.
    pub fn with_launcher(config: InvokerConfig, launcher: impl Launcher + 'static) -> Self {
        Self {
            config,
            launcher: Arc::new(launcher),
        }
    }

    pub fn config(&self) -> &InvokerConfig {
        &self.config
    }

    /// Asks the OS to start `command` as a new process.
    ///
    /// The command is forwarded unmodified; it is not validated, escaped or
    /// sanitized. One attempt is made. On success the caller owns the
    /// returned handle; on failure the error carries the OS diagnostic.
    pub fn execute(&self, command: impl Into<CommandString>) -> InvocationResult<ProcessHandle> {
        let command = command.into();
        let mode = self.config.shell_mode;

        debug!(command = %command, mode = %mode, "Spawning process");

        match self.launcher.launch(&command, mode) {
            Ok(child) => {
                let handle = ProcessHandle::new(command, child);
                info!(pid = handle.id(), command = %handle.command(), "Process spawned");
                Ok(handle)
            }
            Err(e) => {
                warn!(command = %command, error = %e, "Failed to spawn process");
                Err(e)
            }
        }
    }
}

impl Default for Invoker {
    fn default() -> Self {
        Self::new(InvokerConfig::default())
    }
}

impl fmt::Debug for Invoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invoker")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Starts `command` with the default invoker (direct mode, system launcher).
pub fn execute(command: impl Into<CommandString>) -> InvocationResult<ProcessHandle> {
    Invoker::default().execute(command)
}
