//! # Configuration Module / 配置模块
//!
//! Loads the optional `SimGate.toml` file and merges command-line overrides
//! into a single [`GateConfig`].
//!
//! 加载可选的 `SimGate.toml` 文件，并将命令行覆盖项合并为单个 [`GateConfig`]。

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Name of the configuration file looked up in the current directory.
/// 在当前目录中查找的配置文件名。
pub const DEFAULT_CONFIG_FILE: &str = "SimGate.toml";

/// Program the gate invokes unless configured otherwise.
pub const DEFAULT_SIMULATOR: &str = "vsim";

/// Fixed batch-mode arguments: console mode, run the `ci.do` script.
/// 固定的批处理参数：控制台模式，运行 `ci.do` 脚本。
pub const SIMULATOR_ARGS: [&str; 3] = ["-c", "-do", "ci.do"];

/// Represents the gate configuration, loaded from a TOML file or defaulted.
///
/// 代表门禁配置，从 TOML 文件加载或使用默认值。
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GateConfig {
    /// The language for the gate's output messages (e.g., "en", "zh-CN").
    /// 门禁输出消息的语言（例如 "en", "zh-CN"）。
    #[serde(default = "default_language")]
    pub language: String,

    /// Directory the simulator runs in and writes its transcript to.
    /// Relative paths in a config file are resolved against that file's directory.
    ///
    /// 仿真器运行并写入记录的目录。
    /// 配置文件中的相对路径相对于该文件所在目录解析。
    #[serde(default = "default_sim_dir")]
    pub sim_dir: PathBuf,

    /// The simulator program, looked up on `PATH` when not a path itself.
    /// 仿真器程序；如果不是路径，则在 `PATH` 中查找。
    #[serde(default = "default_simulator")]
    pub simulator: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            sim_dir: default_sim_dir(),
            simulator: default_simulator(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_sim_dir() -> PathBuf {
    PathBuf::from("../sim")
}

fn default_simulator() -> String {
    DEFAULT_SIMULATOR.to_string()
}

impl GateConfig {
    /// Parses a configuration from TOML text and validates it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GateConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that cannot describe a runnable simulation.
    /// 拒绝无法描述可运行仿真的配置值。
    pub fn validate(&self) -> Result<()> {
        if self.simulator.trim().is_empty() {
            bail!(t!("config_empty_simulator"));
        }
        if self.sim_dir.as_os_str().is_empty() {
            bail!(t!("config_empty_sim_dir"));
        }
        Ok(())
    }

    /// Expands `~` and environment variables in `sim_dir`, then anchors a
    /// relative result at `base`.
    ///
    /// 展开 `sim_dir` 中的 `~` 和环境变量，然后将相对路径锚定到 `base`。
    pub fn anchor_sim_dir(&mut self, base: &Path) -> Result<()> {
        let expanded = expand_path(&self.sim_dir)?;
        self.sim_dir = if expanded.is_relative() {
            base.join(expanded)
        } else {
            expanded
        };
        Ok(())
    }
}

/// Expands `~` and `$VAR` / `${VAR}` in a path. An unset variable is an error.
///
/// 展开路径中的 `~` 和 `$VAR` / `${VAR}`。未设置的变量会返回错误。
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy().into_owned();
    let expanded = shellexpand::full(&raw)
        .with_context(|| t!("config_expand_failed", path = &raw).to_string())?;
    Ok(PathBuf::from(expanded.into_owned()))
}

/// Loads the gate configuration.
///
/// With an explicit `path` the file must exist and parse. Without one,
/// `SimGate.toml` in the current directory is used when present, and the
/// built-in defaults otherwise.
///
/// 加载门禁配置。
///
/// 指定 `path` 时文件必须存在且可解析。未指定时，如果当前目录存在
/// `SimGate.toml` 则使用它，否则使用内置默认值。
pub fn load_config(path: Option<&Path>) -> Result<GateConfig> {
    let (config_path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    if !required && !config_path.is_file() {
        tracing::debug!("no {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
        return Ok(GateConfig::default());
    }

    let content = fs::read_to_string(&config_path).with_context(|| {
        t!("config_read_failed_path", path = config_path.display()).to_string()
    })?;
    let mut config = GateConfig::from_toml_str(&content)
        .with_context(|| t!("config_parse_failed", path = config_path.display()).to_string())?;

    let base = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    config.anchor_sim_dir(&base)?;

    tracing::debug!(path = %config_path.display(), ?config, "loaded gate configuration");
    Ok(config)
}
