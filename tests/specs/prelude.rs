// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared harness for CLI specs.

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_INVALID: i32 = 2;
pub const EXIT_CONFLICT: i32 = 3;
pub const EXIT_NOT_FOUND: i32 = 4;

/// `fj` with a clean environment and no state directory.
pub fn cli() -> Invocation {
    let mut cmd = Command::cargo_bin("fj").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("COLOR").env_remove("FJ_LOG").env_remove("FJ_STATE_DIR");
    Invocation { cmd }
}

/// An isolated state directory that every `fj()` call points at.
pub struct Fleet {
    dir: TempDir,
}

impl Fleet {
    pub fn new() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn fj(&self) -> Invocation {
        let mut spec = cli();
        spec.cmd.env("FJ_STATE_DIR", self.path());
        spec
    }

    pub fn file(&self, name: &str, contents: &str) {
        std::fs::write(self.path().join(name), contents).unwrap();
    }

    pub fn add_driver(&self, name: &str) -> String {
        self.fj().args(&["-o", "json", "driver", "add", name]).passes().json()["id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    pub fn add_truck(&self, plate: &str) -> String {
        self.fj().args(&["-o", "json", "truck", "add", plate]).passes().json()["id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    /// Create a job from `title`, a `HH:MM` window on 2026-03-02, and extra flags.
    pub fn create_job(&self, title: &str, pickup: &str, dropoff: &str, extra: &[&str]) -> String {
        self.try_create_job(title, pickup, dropoff, extra).passes().json()["id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    pub fn try_create_job(&self, title: &str, pickup: &str, dropoff: &str, extra: &[&str]) -> Invocation {
        let pickup = format!("2026-03-02T{pickup}");
        let dropoff = format!("2026-03-02T{dropoff}");
        let mut args = vec![
            "-o", "json", "job", "create", "--title", title, "--from", "Yard", "--to", "Site",
            "--pickup", &pickup, "--dropoff", &dropoff,
        ];
        args.extend_from_slice(extra);
        self.fj().args(&args)
    }
}

pub struct Invocation {
    cmd: Command,
}

impl Invocation {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn passes(mut self) -> Output {
        let output = self.cmd.output().unwrap();
        let out = Output::from(output);
        assert_eq!(out.code, 0, "expected success\nstdout:\n{}\nstderr:\n{}", out.stdout, out.stderr);
        out
    }

    pub fn fails_with(mut self, code: i32) -> Output {
        let output = self.cmd.output().unwrap();
        let out = Output::from(output);
        assert_eq!(out.code, code, "unexpected exit code\nstdout:\n{}\nstderr:\n{}", out.stdout, out.stderr);
        out
    }
}

pub struct Output {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for Output {
    fn from(output: std::process::Output) -> Self {
        Self {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl Output {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout lacks {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout has {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr lacks {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}
