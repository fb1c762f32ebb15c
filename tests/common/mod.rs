#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the rpgle-guard binary.
#[macro_export]
macro_rules! rpgle_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("rpgle-guard"))
    };
}

/// C line with `factor1` in 12-25, `opcode` in 26-35 and `factor2` from 36.
pub fn c_line(factor1: &str, opcode: &str, factor2: &str) -> String {
    format!("     C     {factor1:<14}{opcode:<10}{factor2}")
}

/// Stand-alone D line: name in 7-21, `S` in 24, size ending at 39, type in 40.
pub fn d_line(name: &str, size: &str, data_type: &str, decimals: &str) -> String {
    format!(
        "     D{name:<15}  S {:>7}{size:>7}{data_type:<1}{decimals:>2}",
        ""
    )
}

/// A small fixed-format program with no errors.
pub fn clean_program() -> String {
    [
        "     H DFTACTGRP(*NO)".to_string(),
        d_line("counter", "10", "I", "0"),
        c_line("", "EVAL", "counter = counter + 1"),
        c_line("", "RETURN", ""),
    ]
    .join("\n")
}

/// A program that uses GOTO, which is an error from the standard level up.
pub fn goto_program() -> String {
    ["     H DFTACTGRP(*NO)".to_string(), c_line("", "GOTO", "ENDPGM")].join("\n")
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.rpgle-guard.toml` into the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".rpgle-guard.toml", content);
    }

    /// Reads a file from the temp directory.
    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}
