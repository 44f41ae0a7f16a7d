//! # Gate Configuration Initialization Module / 门禁配置初始化模块
//!
//! This module creates a `SimGate.toml` file, either with the built-in defaults
//! or through a short interactive wizard.
//!
//! 此模块创建 `SimGate.toml` 文件，使用内置默认值或通过简短的交互式向导。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::{DEFAULT_CONFIG_FILE, DEFAULT_SIMULATOR, GateConfig};
use crate::infra::t;

/// Languages offered by the wizard, as (locale, display name).
const LANGUAGES: [(&str, &str); 2] = [("en", "English"), ("zh-CN", "简体中文")];

/// Renders a configuration as a commented TOML document.
///
/// 将配置渲染为带注释的 TOML 文档。
pub fn render_config(config: &GateConfig) -> Result<String> {
    let body = toml::to_string_pretty(config)?;
    Ok(format!(
        "# sim-gate configuration / sim-gate 配置\n\
         # The simulator is always invoked as `<simulator> -c -do ci.do` inside `sim_dir`,\n\
         # and the verdict is read from `sim_dir/Transcript.transcript`.\n\
         # 仿真器始终在 `sim_dir` 中以 `<simulator> -c -do ci.do` 调用，\n\
         # 判定结果读取自 `sim_dir/Transcript.transcript`。\n\n{}",
        body
    ))
}

/// Runs the init command in the current directory.
///
/// * `language` - Language for the wizard's messages / 向导消息的语言
/// * `non_interactive` - Write the defaults without prompting / 不提示直接写入默认值
/// * `force` - Overwrite an existing file without asking / 不询问直接覆盖已有文件
pub fn run_init_wizard(language: &str, non_interactive: bool, force: bool) -> Result<()> {
    run_init_wizard_at(Path::new(DEFAULT_CONFIG_FILE), language, non_interactive, force)
}

/// Same as [`run_init_wizard`] with an explicit target path.
pub fn run_init_wizard_at(
    config_path: &Path,
    language: &str,
    non_interactive: bool,
    force: bool,
) -> Result<()> {
    let theme = ColorfulTheme::default();

    if config_path.exists() && !force {
        if non_interactive {
            println!(
                "{}",
                t!("init_file_exists", locale = language, path = config_path.display()).red()
            );
            println!("{}", t!("init_use_force", locale = language).yellow());
            return Ok(());
        }
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!("init_overwrite_prompt", locale = language, path = config_path.display()))
            .default(false)
            .interact()
            .context(t!("init_user_confirmation_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init_aborted", locale = language));
            return Ok(());
        }
    }

    let mut config = GateConfig {
        language: language.to_string(),
        ..Default::default()
    };

    if non_interactive {
        return write_config(config_path, &config, language);
    }

    println!("\n{}", t!("init_wizard_welcome", locale = language).cyan().bold());
    println!("{}", t!("init_wizard_description", locale = language));

    let sim_dir: String = Input::with_theme(&theme)
        .with_prompt(t!("init_sim_dir_prompt", locale = language))
        .default(config.sim_dir.display().to_string())
        .interact_text()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;
    config.sim_dir = PathBuf::from(sim_dir.trim());

    let simulator: String = Input::with_theme(&theme)
        .with_prompt(t!("init_simulator_prompt", locale = language))
        .default(DEFAULT_SIMULATOR.to_string())
        .interact_text()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;
    config.simulator = simulator.trim().to_string();

    let default_lang = LANGUAGES
        .iter()
        .position(|(code, _)| *code == language)
        .unwrap_or(0);
    let selection = Select::with_theme(&theme)
        .with_prompt(t!("init_language_prompt", locale = language))
        .items(&LANGUAGES.iter().map(|(_, name)| *name).collect::<Vec<_>>())
        .default(default_lang)
        .interact()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;
    config.language = LANGUAGES[selection].0.to_string();

    config.validate()?;
    write_config(config_path, &config, language)
}

fn write_config(path: &Path, config: &GateConfig, language: &str) -> Result<()> {
    let content = render_config(config)
        .context(t!("init_serialize_failed", locale = language).to_string())?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| {
            t!("init_create_parent_dir_failed", locale = language, path = parent.display())
                .to_string()
        })?;
    }

    fs::write(path, content).with_context(|| {
        t!("init_write_failed", locale = language, path = path.display()).to_string()
    })?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init_success_created", locale = language, path = path.display()).bold()
    );
    println!("{}", t!("init_usage_hint", locale = language));

    Ok(())
}
