//! # Gate Execution Module / 门禁执行模块
//!
//! This module runs one simulation and turns its transcript into a verdict:
//! resolve the simulation directory, run the simulator there, read the
//! transcript and classify it. Everything happens strictly in sequence.
//!
//! 此模块运行一次仿真并将其记录转换为判定结果：
//! 解析仿真目录，在其中运行仿真器，读取记录并分类。所有步骤严格按顺序执行。

use anyhow::Result;
use colored::*;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::{Duration, Instant};

use crate::{
    core::{
        config::{GateConfig, SIMULATOR_ARGS},
        models::{Transcript, Verdict},
    },
    infra::{command, fs, t},
};

/// Everything known about a finished gate run.
/// 关于一次已完成门禁运行的全部信息。
#[derive(Debug)]
pub struct GateOutcome {
    /// Absolute simulation directory / 仿真目录的绝对路径
    pub sim_dir: PathBuf,
    /// Exit status of the simulator, `None` if it could not be started.
    /// Informational only; it never affects the verdict.
    ///
    /// 仿真器的退出状态；如果无法启动则为 `None`。
    /// 仅供参考，不影响判定结果。
    pub simulator_status: Option<ExitStatus>,
    pub transcript: Transcript,
    pub verdict: Verdict,
    /// Wall time spent in the simulator / 仿真器运行耗时
    pub duration: Duration,
}

/// The main entry point for a gate run.
///
/// # Arguments
/// * `config` - The merged gate configuration
///
/// # Returns
/// A `GateOutcome` carrying the verdict. A missing simulation directory or
/// transcript is returned as an error instead.
pub async fn run_gate(config: &GateConfig) -> Result<GateOutcome> {
    let sim_dir = fs::resolve_directory(&config.sim_dir)?;
    tracing::debug!(sim_dir = %sim_dir.display(), "resolved simulation directory");

    let start_time = Instant::now();
    let simulator_status = run_simulator(&config.simulator, &sim_dir).await;
    let duration = start_time.elapsed();

    let transcript = Transcript::load(&sim_dir)?;
    let verdict = transcript.classify();
    tracing::debug!(
        %verdict,
        bytes = transcript.content().len(),
        error_marker = transcript.has_error_marker(),
        success_marker = transcript.has_success_marker(),
        "classified transcript"
    );

    Ok(GateOutcome {
        sim_dir,
        simulator_status,
        transcript,
        verdict,
        duration,
    })
}

/// Runs the simulator in batch mode and waits for it.
/// A failure to start it is reported but not fatal; the transcript decides.
///
/// 以批处理模式运行仿真器并等待其结束。
/// 启动失败会被报告但不是致命错误；由记录决定结果。
async fn run_simulator(program: &str, sim_dir: &std::path::Path) -> Option<ExitStatus> {
    let cmd = command::build_command(program, &SIMULATOR_ARGS, sim_dir);
    match command::run_inherited(cmd).await {
        Ok(status) => {
            tracing::debug!(%status, "simulator exited");
            Some(status)
        }
        Err(e) => {
            tracing::warn!(program, error = %e, "failed to start simulator");
            eprintln!(
                "{}",
                t!("simulator_spawn_failed", program = program, error = e).yellow()
            );
            None
        }
    }
}
