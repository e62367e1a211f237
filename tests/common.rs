use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

// Not every test binary uses every helper.
#[allow(dead_code)]
pub struct TestContext {
    pub _temp_dir: TempDir,
    pub config_path: PathBuf,
    pub snapshot_path: PathBuf,
    pub bin_path: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.json");
        let snapshot_path = temp_dir.path().join("registry.json");

        let bin_path = PathBuf::from(env!("CARGO_BIN_EXE_vsprobe"));

        Self {
            _temp_dir: temp_dir,
            config_path,
            snapshot_path,
            bin_path,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(&self.bin_path);
        cmd.env("VSPROBE_CONFIG_PATH", &self.config_path);
        cmd.env_remove("VSPROBE_FORMAT");
        cmd.env_remove("VSPROBE_SHOW_PATHS");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Write a registry snapshot and return a command that reads it.
    pub fn cmd_with_snapshot(&self, snapshot: &Value) -> Command {
        fs::write(&self.snapshot_path, snapshot.to_string()).expect("Failed to write snapshot");
        let mut cmd = self.cmd();
        cmd.arg("--snapshot").arg(&self.snapshot_path);
        cmd
    }

    pub fn write_config(&self, config: &Value) {
        fs::write(&self.config_path, config.to_string()).expect("Failed to write config");
    }
}

#[allow(dead_code)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: std::process::ExitStatus,
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            status: output.status,
        }
    }
}

#[allow(dead_code)]
impl CommandOutput {
    pub fn assert_success(&self) -> &Self {
        if !self.status.success() {
            panic!(
                "Command failed with status {:?}\nstdout: {}\nstderr: {}",
                self.status.code(),
                self.stdout,
                self.stderr
            );
        }
        self
    }

    pub fn assert_failure(&self) -> &Self {
        assert!(
            !self.status.success(),
            "Command unexpectedly succeeded\nstdout: {}\nstderr: {}",
            self.stdout,
            self.stderr
        );
        self
    }

    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(
            self.stdout.contains(text),
            "Stdout did not contain '{}'\nActual stdout: {}",
            text,
            self.stdout
        );
        self
    }

    pub fn assert_stderr_contains(&self, text: &str) -> &Self {
        assert!(
            self.stderr.contains(text),
            "Stderr did not contain '{}'\nActual stderr: {}",
            text,
            self.stderr
        );
        self
    }
}
