//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `mdnotes` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct MdnotesCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl MdnotesCommand {
    /// Creates a new command for the `mdnotes` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    /// Sets the `--dir` option to specify the store directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points `MDNOTES_CONFIG` at the given file.
    pub fn config(self, path: &Path) -> Self {
        self.env("MDNOTES_CONFIG", &path.to_string_lossy())
    }

    /// Sets an environment variable for the child process.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("mdnotes").expect("Failed to find mdnotes binary");
        cmd.env_remove("RUST_LOG");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `new` command with a title.
    pub fn new_note(self, title: &str) -> Self {
        self.args(["new", "--title", title])
    }

    /// Configures for the `show` command with an ID or title.
    pub fn show(self, note: &str) -> Self {
        self.args(["show", note])
    }

    /// Configures for the `tags` command.
    pub fn tags(self) -> Self {
        self.args(["tags"])
    }

    /// Configures for the `categories` command.
    pub fn categories(self) -> Self {
        self.args(["categories"])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--format ids` to the command.
    pub fn format_ids(self) -> Self {
        self.args(["--format", "ids"])
    }
}

impl Default for MdnotesCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ===========================================
    // MdnotesCommand Basics
    // ===========================================

    #[test]
    fn test_command_runs_binary() {
        MdnotesCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_dir() {
        let temp = TempDir::new().unwrap();
        let cmd = MdnotesCommand::new().dir(temp.path());
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], temp.path().to_string_lossy());
    }

    #[test]
    fn test_command_output_success() {
        let output = MdnotesCommand::new().args(["--help"]).output_success();
        assert!(output.contains("mdnotes") || output.contains("notes"));
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = MdnotesCommand::new().ls().format_json();
        let args = cmd.get_args();
        assert!(args.contains(&"ls".to_string()));
        assert!(args.contains(&"--format".to_string()));
        assert!(args.contains(&"json".to_string()));
    }
}
