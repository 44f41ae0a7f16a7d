//! # Command Execution Module / 命令执行模块
//!
//! Spawns the simulator as a child process. Its output streams are inherited
//! so the simulator's console log shows up directly in the CI job output.
//!
//! 将仿真器作为子进程启动。其输出流被继承，
//! 因此仿真器的控制台日志会直接显示在 CI 作业输出中。

use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Builds the simulator command: `<program> <args...>` inside `working_dir`,
/// with stdin detached and stdout/stderr inherited.
///
/// 构建仿真器命令：在 `working_dir` 中执行 `<program> <args...>`，
/// 分离 stdin，继承 stdout/stderr。
pub fn build_command(program: &str, args: &[&str], working_dir: &Path) -> Command {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    cmd
}

/// Runs a command to completion and returns its exit status.
/// There is no timeout; the call blocks until the child exits.
///
/// 运行命令直到完成并返回其退出状态。
/// 没有超时；调用会一直阻塞直到子进程退出。
pub async fn run_inherited(mut cmd: Command) -> std::io::Result<ExitStatus> {
    cmd.status().await
}

/// Renders a program and its arguments for display.
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
