//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the gate's human-readable output: a banner before the
//! simulator starts and a coloured verdict once the transcript is classified.
//!
//! 此模块打印门禁的可读输出：仿真器启动前的横幅，
//! 以及记录分类后的彩色判定结果。

use colored::*;
use std::path::Path;

use crate::core::execution::GateOutcome;
use crate::core::models::{ERROR_MARKER, SUCCESS_MARKER, Verdict};
use crate::infra::t;

/// Prints the banner shown before the simulator runs.
///
/// # Arguments / 参数
/// * `sim_dir` - The simulation directory as configured
///               配置的仿真目录
/// * `command_line` - The simulator command line
///                    仿真器命令行
/// * `locale` - The language locale to use for messages
///              用于消息的语言区域设置
pub fn print_run_banner(sim_dir: &Path, command_line: &str, locale: &str) {
    println!("{}", t!("run_banner", locale = locale).bold());
    println!(
        "{}",
        t!("sim_dir_label", locale = locale, path = sim_dir.display()).cyan()
    );
    println!(
        "{}",
        t!("simulator_command_label", locale = locale, command = command_line).cyan()
    );
}

/// Prints the verdict of a finished run.
///
/// # Output Format / 输出格式
/// ```text
/// --- Simulation Gate Summary ---
///   - Transcript       | /work/sim/Transcript.transcript
///   - Simulator time   | 12.31s
///   - Verdict          | PASSED (exit code 0)
/// ```
pub fn print_verdict(outcome: &GateOutcome, locale: &str) {
    println!("\n{}", t!("summary_banner", locale = locale).bold());
    println!(
        "  - {:<18} | {}",
        t!("summary_transcript", locale = locale),
        outcome.transcript.path.display()
    );
    println!(
        "  - {:<18} | {:.2?}",
        t!("summary_duration", locale = locale),
        outcome.duration
    );
    if let Some(status) = outcome.simulator_status {
        println!(
            "  - {:<18} | {}",
            t!("summary_simulator_status", locale = locale),
            status
        );
    }

    let status_str = outcome.verdict.get_status_str(locale);
    let status_colored = match outcome.verdict {
        Verdict::Passed => status_str.green().bold(),
        Verdict::ErrorReported => status_str.red().bold(),
        Verdict::Incomplete => status_str.yellow().bold(),
    };
    println!(
        "  - {:<18} | {} ({})",
        t!("summary_verdict", locale = locale),
        status_colored,
        t!(
            "exit_code_label",
            locale = locale,
            code = outcome.verdict.exit_status()
        )
    );

    match outcome.verdict {
        Verdict::Passed => println!("\n{}", t!("gate_passed", locale = locale).green().bold()),
        Verdict::ErrorReported => println!(
            "\n{}",
            t!("gate_error_marker_found", locale = locale, marker = ERROR_MARKER)
                .red()
                .bold()
        ),
        Verdict::Incomplete => println!(
            "\n{}",
            t!("gate_success_marker_missing", locale = locale, marker = SUCCESS_MARKER)
                .yellow()
                .bold()
        ),
    }
}
