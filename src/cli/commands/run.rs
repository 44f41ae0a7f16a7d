//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command, which executes the simulation
//! and maps its transcript to the process exit code.
//!
//! 此模块实现 `run` 命令，执行仿真并将其记录映射为进程退出码。

use anyhow::Result;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::{
    cli::match_locale,
    core::{
        config::{self, GateConfig, SIMULATOR_ARGS},
        execution::run_gate,
    },
    infra::command::display_command,
    reporting::console::{print_run_banner, print_verdict},
};

/// Options accepted by the `run` command. All of them are optional; a bare
/// invocation uses `SimGate.toml` if present and the built-in defaults otherwise.
///
/// `run` 命令接受的选项，全部可选。
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Path to a configuration file / 配置文件路径
    pub config: Option<PathBuf>,
    /// Overrides the simulation directory / 覆盖仿真目录
    pub sim_dir: Option<PathBuf>,
    /// Overrides the output language / 覆盖输出语言
    pub lang: Option<String>,
}

/// Merges command-line overrides into the loaded configuration.
/// Command-line values win over the file.
pub fn resolve_config(options: &RunOptions) -> Result<GateConfig> {
    let mut gate_config = config::load_config(options.config.as_deref())?;
    if let Some(sim_dir) = &options.sim_dir {
        // Relative command-line paths stay relative to the current directory.
        gate_config.sim_dir = config::expand_path(sim_dir)?;
    }
    if let Some(lang) = &options.lang {
        gate_config.language = lang.clone();
    }
    gate_config.language = match_locale(&gate_config.language);
    gate_config.validate()?;
    Ok(gate_config)
}

/// Executes the run command with the provided options.
///
/// # Returns
/// The exit code derived from the transcript verdict. Configuration, directory
/// and transcript errors are returned as `Err`.
pub async fn execute(options: RunOptions) -> Result<ExitCode> {
    let gate_config = resolve_config(&options)?;
    let locale = gate_config.language.clone();
    rust_i18n::set_locale(&locale);

    print_run_banner(
        &gate_config.sim_dir,
        &display_command(&gate_config.simulator, &SIMULATOR_ARGS),
        &locale,
    );

    let outcome = run_gate(&gate_config).await?;
    print_verdict(&outcome, &locale);

    if outcome.verdict.is_success() {
        tracing::info!(verdict = %outcome.verdict, "gate finished");
    } else {
        tracing::warn!(
            verdict = %outcome.verdict,
            code = outcome.verdict.signed_code(),
            "gate failed"
        );
    }
    Ok(outcome.verdict.exit_code())
}
