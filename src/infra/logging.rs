//! # Logging Module / 日志模块
//!
//! Diagnostic logging through `tracing`. Logs go to stderr so that stdout only
//! carries the simulator output and the gate report.
//!
//! 通过 `tracing` 输出诊断日志。日志写入 stderr，
//! 使 stdout 只包含仿真器输出和门禁报告。

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "SIM_GATE_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Builds the filter: `SIM_GATE_LOG` first, then `RUST_LOG`, then `warn`.
/// An invalid directive falls back to the default with a notice.
///
/// 构建过滤器：优先 `SIM_GATE_LOG`，其次 `RUST_LOG`，最后为 `warn`。
/// 无效的指令会回退到默认值并给出提示。
pub fn build_filter() -> EnvFilter {
    match std::env::var(LOG_ENV) {
        Ok(directive) => EnvFilter::try_new(&directive).unwrap_or_else(|err| {
            eprintln!(
                "invalid {} directive ({}); defaulting to {} logging",
                LOG_ENV, err, DEFAULT_DIRECTIVE
            );
            EnvFilter::new(DEFAULT_DIRECTIVE)
        }),
        Err(_) => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
        }
    }
}

/// Installs the global subscriber. Calling it twice is harmless.
/// 安装全局订阅者。重复调用无副作用。
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
