//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures the gate works with: the simulation
//! transcript, the markers searched for in it, and the verdict that decides the
//! process exit code.
//!
//! 此模块定义了门禁使用的数据结构：仿真记录（transcript）、
//! 在其中搜索的标记，以及决定进程退出码的判定结果。

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::infra::t;

/// Marker written by the simulation when a check fails.
/// 仿真在检查失败时写入的标记。
pub const ERROR_MARKER: &str = "###ERROR###";

/// Marker written by the simulation once every test bench has finished.
/// 所有测试平台运行结束后仿真写入的标记。
pub const SUCCESS_MARKER: &str = "SIMULATIONS COMPLETED SUCCESSFULLY";

/// File name of the transcript the simulator leaves in its working directory.
/// 仿真器在其工作目录中留下的记录文件名。
pub const TRANSCRIPT_FILE: &str = "Transcript.transcript";

/// Exit code for a transcript carrying the error marker (`-1` as an unsigned byte).
pub const EXIT_ERROR_REPORTED: u8 = 255;
/// Exit code for a transcript lacking the success marker (`-2` as an unsigned byte).
pub const EXIT_INCOMPLETE: u8 = 254;
/// Exit code for a clean run.
pub const EXIT_PASSED: u8 = 0;

/// The outcome of classifying a transcript.
/// Each variant maps to exactly one process exit code.
///
/// 对记录进行分类的结果。
/// 每个变体恰好对应一个进程退出码。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The success marker is present and the error marker is not.
    /// 存在成功标记且不存在错误标记。
    Passed,
    /// The error marker is present, regardless of the success marker.
    /// 存在错误标记（无论是否存在成功标记）。
    ErrorReported,
    /// Neither marker condition for success holds; the run ended early.
    /// 不满足成功条件；仿真提前结束。
    Incomplete,
}

impl Verdict {
    /// The raw exit status as a byte, as observed by a POSIX shell.
    /// 以字节形式表示的原始退出状态，与 POSIX shell 观察到的一致。
    pub fn exit_status(&self) -> u8 {
        match self {
            Verdict::Passed => EXIT_PASSED,
            Verdict::ErrorReported => EXIT_ERROR_REPORTED,
            Verdict::Incomplete => EXIT_INCOMPLETE,
        }
    }

    /// The signed code this verdict stands for (`0`, `-1`, `-2`).
    pub fn signed_code(&self) -> i32 {
        match self {
            Verdict::Passed => 0,
            Verdict::ErrorReported => -1,
            Verdict::Incomplete => -2,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Passed)
    }

    /// Gets the localized status label used in the console report.
    /// 获取控制台报告中使用的本地化状态标签。
    pub fn get_status_str(&self, locale: &str) -> String {
        match self {
            Verdict::Passed => t!("verdict.passed", locale = locale).to_string(),
            Verdict::ErrorReported => t!("verdict.error_reported", locale = locale).to_string(),
            Verdict::Incomplete => t!("verdict.incomplete", locale = locale).to_string(),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verdict::Passed => "passed",
            Verdict::ErrorReported => "error-reported",
            Verdict::Incomplete => "incomplete",
        };
        write!(f, "{}", name)
    }
}

/// The full text of a simulation transcript, read once into memory.
///
/// 仿真记录的完整文本，一次性读入内存。
#[derive(Debug, Clone)]
pub struct Transcript {
    /// Where the transcript was read from / 记录的读取位置
    pub path: PathBuf,
    content: String,
}

impl Transcript {
    /// Wraps already loaded transcript text.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Reads `Transcript.transcript` from the given simulation directory.
    /// A missing or unreadable file is an environment error.
    ///
    /// 从给定的仿真目录读取 `Transcript.transcript`。
    /// 文件缺失或无法读取属于环境错误。
    pub fn load(sim_dir: &Path) -> Result<Self> {
        let path = sim_dir.join(TRANSCRIPT_FILE);
        let bytes = fs::read(&path)
            .with_context(|| t!("transcript_read_failed", path = path.display()).to_string())?;
        // Simulator logs are not guaranteed to be clean UTF-8.
        let content = String::from_utf8_lossy(&bytes).into_owned();
        Ok(Self { path, content })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn has_error_marker(&self) -> bool {
        self.content.contains(ERROR_MARKER)
    }

    pub fn has_success_marker(&self) -> bool {
        self.content.contains(SUCCESS_MARKER)
    }

    /// Classifies the transcript. The error marker is checked first and wins
    /// over the success marker.
    ///
    /// 对记录进行分类。首先检查错误标记，其优先级高于成功标记。
    pub fn classify(&self) -> Verdict {
        if self.has_error_marker() {
            Verdict::ErrorReported
        } else if !self.has_success_marker() {
            Verdict::Incomplete
        } else {
            Verdict::Passed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Verdict {
        Transcript::new("Transcript.transcript", text).classify()
    }

    #[test]
    fn success_marker_alone_passes() {
        assert_eq!(classify("SIMULATIONS COMPLETED SUCCESSFULLY"), Verdict::Passed);
    }

    #[test]
    fn error_marker_is_reported() {
        assert_eq!(classify("###ERROR### something failed"), Verdict::ErrorReported);
    }

    #[test]
    fn missing_markers_is_incomplete() {
        assert_eq!(classify("still running..."), Verdict::Incomplete);
        assert_eq!(classify(""), Verdict::Incomplete);
    }

    #[test]
    fn error_marker_takes_precedence_over_success() {
        assert_eq!(
            classify("SIMULATIONS COMPLETED SUCCESSFULLY ###ERROR###"),
            Verdict::ErrorReported
        );
    }

    #[test]
    fn markers_match_anywhere_in_multiline_text() {
        let text = "# Loading work.tb\n# ** Note: tb_axi done\n# SIMULATIONS COMPLETED SUCCESSFULLY\n# End time: 12:00\n";
        assert_eq!(classify(text), Verdict::Passed);
    }

    #[test]
    fn markers_are_case_sensitive() {
        assert_eq!(classify("simulations completed successfully"), Verdict::Incomplete);
        assert_eq!(
            classify("###error### SIMULATIONS COMPLETED SUCCESSFULLY"),
            Verdict::Passed
        );
    }

    #[test]
    fn success_predicate_matches_verdict() {
        assert!(Verdict::Passed.is_success());
        assert!(!Verdict::ErrorReported.is_success());
        assert!(!Verdict::Incomplete.is_success());
    }

    #[test]
    fn invalid_utf8_transcript_is_decoded_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let mut bytes = vec![0xff, 0xfe, b'\n'];
        bytes.extend_from_slice(SUCCESS_MARKER.as_bytes());
        fs::write(dir.path().join(TRANSCRIPT_FILE), &bytes).unwrap();

        let transcript = Transcript::load(dir.path()).unwrap();
        assert!(transcript.content().contains('\u{FFFD}'));
        assert_eq!(transcript.classify(), Verdict::Passed);
    }

    #[test]
    fn exit_codes_map_to_unsigned_bytes() {
        assert_eq!(Verdict::Passed.exit_status(), 0);
        assert_eq!(Verdict::ErrorReported.exit_status(), 255);
        assert_eq!(Verdict::Incomplete.exit_status(), 254);
        assert_eq!(Verdict::ErrorReported.signed_code() as u8, 255);
        assert_eq!(Verdict::Incomplete.signed_code() as u8, 254);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Transcript::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains(TRANSCRIPT_FILE));
    }

    #[test]
    fn load_reads_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(TRANSCRIPT_FILE), "line 1\nline 2\n###ERROR###\n").unwrap();
        let transcript = Transcript::load(dir.path()).unwrap();
        assert_eq!(transcript.content().lines().count(), 3);
        assert_eq!(transcript.classify(), Verdict::ErrorReported);
    }
}
