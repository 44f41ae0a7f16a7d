// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

pub const MISSING_SIMULATOR: &str = "this_command_definitely_does_not_exist_12345";

/// A sandbox laid out like a hardware project: `ci/` next to `sim/`.
pub struct Workspace {
    pub root: TempDir,
}

impl Workspace {
    pub fn ci_dir(&self) -> PathBuf {
        self.root.path().join("ci")
    }

    pub fn sim_dir(&self) -> PathBuf {
        self.root.path().join("sim")
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.path().join("bin")
    }

    /// Writes a transcript directly, as if a previous simulator run left it behind.
    pub fn write_transcript(&self, content: &str) {
        fs::write(self.sim_dir().join("Transcript.transcript"), content)
            .expect("Failed to write transcript");
    }

    /// Sets the transcript the fake simulator will produce when it runs.
    pub fn set_simulated_output(&self, content: &str) {
        fs::write(self.sim_dir().join("fixture.txt"), content).expect("Failed to write fixture");
    }

    /// Writes a config file into `ci/` pointing at a simulator program.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.ci_dir().join("SimGate.toml");
        fs::write(&path, content).expect("Failed to write SimGate.toml");
        path
    }

    /// `PATH` with the fake simulator directory prepended.
    pub fn path_with_fake_simulator(&self) -> String {
        let original = std::env::var("PATH").unwrap_or_default();
        format!("{}:{}", self.bin_dir().display(), original)
    }
}

pub fn setup_workspace() -> Workspace {
    let root = tempdir().expect("Failed to create temporary directory");
    fs::create_dir_all(root.path().join("ci")).expect("Failed to create ci directory");
    fs::create_dir_all(root.path().join("sim")).expect("Failed to create sim directory");
    fs::create_dir_all(root.path().join("bin")).expect("Failed to create bin directory");
    fs::write(root.path().join("sim").join("ci.do"), "run -all\nquit -f\n")
        .expect("Failed to write ci.do");
    Workspace { root }
}

/// Installs a fake `vsim` that checks its arguments and copies `fixture.txt`
/// to `Transcript.transcript` in its working directory, then exits with `exit_status`.
#[cfg(unix)]
pub fn install_fake_simulator(bin_dir: &Path, exit_status: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = format!(
        r##"#!/bin/sh
if [ "$*" != "-c -do ci.do" ]; then
    echo "unexpected arguments: $*" >&2
    exit 3
fi
if [ ! -f ci.do ]; then
    echo "ci.do not found in $(pwd)" >&2
    exit 4
fi
echo "# Reading ci.do"
cp fixture.txt Transcript.transcript
exit {exit_status}
"##
    );
    let path = bin_dir.join("vsim");
    fs::write(&path, script).expect("Failed to write fake vsim");
    let mut perms = fs::metadata(&path).expect("Failed to stat fake vsim").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("Failed to chmod fake vsim");
    path
}
