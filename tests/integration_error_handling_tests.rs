//! # Error Handling Integration Tests / 错误处理集成测试
//!
//! Environment and configuration failures must end the process with the
//! generic failure code, never with one of the verdict codes (0, 254, 255).
//!
//! 环境和配置错误必须以通用失败码结束进程，
//! 而不能使用判定退出码（0、254、255）之一。

mod common;

use assert_cmd::prelude::*;
use common::{MISSING_SIMULATOR, setup_workspace};
use predicates::prelude::*;
use std::fs;
use std::process::Command;

#[cfg(test)]
mod environment_error_tests {
    use super::*;

    #[test]
    fn test_missing_transcript_is_fatal() {
        let ws = setup_workspace();
        ws.write_config(&format!("simulator = \"{}\"\n", MISSING_SIMULATOR));

        let mut cmd = Command::cargo_bin("sim-gate").unwrap();
        cmd.current_dir(ws.ci_dir()).arg("--lang").arg("en");
        cmd.assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to read transcript"))
            .stderr(predicate::str::contains("Transcript.transcript"));
    }

    #[test]
    fn test_missing_sim_dir_is_fatal() {
        let ws = setup_workspace();
        fs::remove_dir_all(ws.sim_dir()).unwrap();

        let mut cmd = Command::cargo_bin("sim-gate").unwrap();
        cmd.current_dir(ws.ci_dir()).arg("--lang").arg("en");
        cmd.assert()
            .code(1)
            .stderr(predicate::str::contains("Simulation directory not found"));
    }

    #[test]
    fn test_sim_path_that_is_a_file_is_fatal() {
        let ws = setup_workspace();
        let file = ws.root.path().join("not_a_dir");
        fs::write(&file, "").unwrap();

        let mut cmd = Command::cargo_bin("sim-gate").unwrap();
        cmd.current_dir(ws.ci_dir())
            .arg("run")
            .arg("--sim-dir")
            .arg(&file)
            .arg("--lang")
            .arg("en");
        cmd.assert()
            .code(1)
            .stderr(predicate::str::contains("not a directory"));
    }

    #[test]
    fn test_missing_sim_dir_does_not_start_simulator() {
        let ws = setup_workspace();
        fs::remove_dir_all(ws.sim_dir()).unwrap();
        ws.write_config(&format!("simulator = \"{}\"\n", MISSING_SIMULATOR));

        let mut cmd = Command::cargo_bin("sim-gate").unwrap();
        cmd.current_dir(ws.ci_dir());
        cmd.assert()
            .code(1)
            .stderr(predicate::str::contains(MISSING_SIMULATOR).not());
    }
}

#[cfg(test)]
mod config_error_tests {
    use super::*;

    #[test]
    fn test_nonexistent_config_file() {
        let ws = setup_workspace();

        let mut cmd = Command::cargo_bin("sim-gate").unwrap();
        cmd.current_dir(ws.ci_dir())
            .arg("run")
            .arg("--config")
            .arg("nonexistent_file.toml")
            .arg("--lang")
            .arg("en");
        cmd.assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to read configuration file"));
    }

    #[test]
    fn test_invalid_toml_syntax() {
        let ws = setup_workspace();
        ws.write_config("sim_dir = [\n");

        let mut cmd = Command::cargo_bin("sim-gate").unwrap();
        cmd.current_dir(ws.ci_dir()).arg("--lang").arg("en");
        cmd.assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to parse configuration file"));
    }

    #[test]
    fn test_empty_simulator_rejected() {
        let ws = setup_workspace();
        ws.write_config("simulator = \"\"\n");

        let mut cmd = Command::cargo_bin("sim-gate").unwrap();
        cmd.current_dir(ws.ci_dir()).arg("--lang").arg("en");
        cmd.assert()
            .code(1)
            .stderr(predicate::str::contains("'simulator' setting must not be empty"));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let ws = setup_workspace();

        let mut cmd = Command::cargo_bin("sim-gate").unwrap();
        cmd.current_dir(ws.ci_dir()).arg("run").arg("--no-such-flag");
        cmd.assert().failure().code(predicate::ne(0).and(predicate::ne(254)).and(predicate::ne(255)));
    }
}
