#![allow(clippy::unwrap_used, clippy::expect_used)]
#![cfg(all(feature = "std", feature = "macros"))]

use std::{env, process::Command};

use femtolog::{Logger, NoopLogSink, Severity, StderrLogSink, log_fatal_exit, logger_fatal_exit};

const CHILD_ENV: &str = "FEMTOLOG_FATAL_EXIT_CHILD";

/// Re-runs this test binary filtered to `test_name`, with the child marker set.
fn run_child(test_name: &str) -> std::process::Output {
    Command::new(env::current_exe().unwrap())
        .args(["--exact", test_name, "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, test_name)
        .output()
        .expect("failed to spawn child test process")
}

fn is_child(test_name: &str) -> bool {
    env::var(CHILD_ENV).is_ok_and(|v| v == test_name)
}

#[test]
fn fatal_exit_logs_then_exits_with_failure() {
    const NAME: &str = "fatal_exit_logs_then_exits_with_failure";
    if is_child(NAME) {
        femtolog::init(Severity::INFO, &StderrLogSink);
        log_fatal_exit!("cannot mount {}", "/boot");
    }

    let out = run_child(NAME);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("FATAL: cannot mount /boot\n"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn fatal_exit_terminates_without_a_sink() {
    const NAME: &str = "fatal_exit_terminates_without_a_sink";
    if is_child(NAME) {
        femtolog::init(Severity::INFO, &NoopLogSink);
        let _ = femtolog::take_sink();
        log_fatal_exit!("nobody hears this");
    }

    let out = run_child(NAME);
    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn logger_fatal_exit_uses_the_given_logger() {
    const NAME: &str = "logger_fatal_exit_uses_the_given_logger";
    if is_child(NAME) {
        let mut logger = Logger::new();
        logger.init(Severity::ERROR, StderrLogSink);
        logger_fatal_exit!(logger, "bad config key {:?}", "depth");
    }

    let out = run_child(NAME);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("FATAL: bad config key \"depth\"\n"),
        "unexpected stderr: {stderr}"
    );
}
