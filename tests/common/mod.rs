//! Utility helpers shared across integration tests.
#![allow(dead_code, reason = "not every test crate uses every helper")]

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::{Command, assert::Assert};
use tempfile::TempDir;

/// Build a `Vec<String>` from a list of string slices.
#[allow(unused_macros, reason = "only some test crates build line vectors")]
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// Build a command for the `mdhtml` binary.
pub fn mdhtml() -> Command {
    Command::cargo_bin("mdhtml").expect("Failed to create cargo command for mdhtml")
}

/// Run the binary with the given arguments.
pub fn run_cli_with_args(args: &[&str]) -> Assert {
    mdhtml().args(args).assert()
}

/// A temporary directory holding a Markdown input and an HTML output path.
pub struct Workspace {
    pub dir: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Workspace {
    /// Create a workspace whose input file contains `markdown`.
    pub fn with_input(markdown: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temporary directory");
        let input = dir.path().join("README.md");
        let output = dir.path().join("README.html");
        fs::write(&input, markdown).expect("failed to write input file");
        Self { dir, input, output }
    }

    /// Run the binary on the input and output paths.
    pub fn run(&self) -> Assert {
        mdhtml().arg(&self.input).arg(&self.output).assert()
    }

    pub fn read_output(&self) -> String {
        read(&self.output)
    }
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("failed to read output file")
}
