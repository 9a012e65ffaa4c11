//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the autoinliner project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

pub struct TestPlan {
    pub cmd: String,
    pub args: Vec<String>,
    pub stdin_data: String,
    pub expected_out: String,
    pub expected_err: String,
    pub expected_exit_code: i32,
}

/// Locate a workspace binary.
///
/// Tests run from the package directory, so the target directory is one
/// level up unless `CARGO_TARGET_DIR` points somewhere else.
pub fn bin_path(cmd: &str) -> PathBuf {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };

    let target_dir = match std::env::var_os("CARGO_TARGET_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()
            .unwrap()
            .parent()
            .unwrap()
            .join("target"),
    };

    target_dir.join(profile).join(cmd)
}

pub fn run_test_base(cmd: &str, args: &[String], stdin_data: &[u8]) -> Output {
    let mut child = Command::new(bin_path(cmd))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|_| panic!("failed to spawn command {cmd}"));

    if let Some(mut stdin) = child.stdin.take() {
        // the child may exit before reading anything
        let _ = stdin.write_all(stdin_data);
    }

    child.wait_with_output().expect("failed to wait for child")
}

pub fn run_test(plan: TestPlan) {
    let output = run_test_base(&plan.cmd, &plan.args, plan.stdin_data.as_bytes());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, plan.expected_out);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr, plan.expected_err);

    assert_eq!(output.status.code(), Some(plan.expected_exit_code));
    if plan.expected_exit_code == 0 {
        assert!(output.status.success());
    }
}

pub fn run_test_with_checker<F: FnMut(&TestPlan, &Output)>(plan: TestPlan, mut checker: F) {
    let output = run_test_base(&plan.cmd, &plan.args, plan.stdin_data.as_bytes());
    checker(&plan, &output);
}
