//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::process::{Command, Output};

use roster::domain::{Role, User, UserId, UserName};

/// The sample leader used by both composition roots
pub fn sample_leader() -> User {
    User::new(
        UserId::new(1),
        UserName::new("orakaro".to_string()).expect("valid name"),
        Some(Role::member()),
    )
}

/// Run the `roster` binary with the given arguments.
///
/// `RUST_LOG` is cleared so log settings of the calling environment do not
/// leak into the child process.
pub fn run_roster(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_roster"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run roster binary")
}

/// Stdout of a finished process as UTF-8
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}
