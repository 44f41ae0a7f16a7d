//! # Command-Line Interface / 命令行接口
//!
//! Builds the clap command tree and dispatches to the `run` and `init`
//! commands. Running the binary without a subcommand is the same as `run`,
//! and accepts the same flags.
//!
//! 构建 clap 命令树并分发到 `run` 和 `init` 命令。
//! 不带子命令运行二进制文件等同于 `run`。

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf, process::ExitCode};

use crate::infra::t;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` or `--lang=<VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return Some(lang.clone());
        }
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang=").map(str::to_string))
}

/// Detects the system language, falling back to "en".
pub fn detect_system_language() -> String {
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

/// Picks the closest available locale: the full tag (e.g. "zh-CN"), then the
/// language part (e.g. "en" from "en-US"), then "en".
///
/// 选择最接近的可用语言：先完整标签（如 "zh-CN"），再语言部分（如 "en-US" 中的 "en"），最后 "en"。
pub fn match_locale(requested: &str) -> String {
    let available = rust_i18n::available_locales!();
    if available.iter().any(|l| *l == requested) {
        return requested.to_string();
    }
    requested
        .split(['-', '_'])
        .next()
        .and_then(|lang| available.iter().find(|l| l.eq_ignore_ascii_case(lang)))
        .map(|l| l.to_string())
        .unwrap_or_else(|| "en".to_string())
}

fn run_args(locale: &str) -> [Arg; 2] {
    [
        Arg::new("config")
            .short('c')
            .long("config")
            .help(t!("arg_config", locale = locale).to_string())
            .value_name("CONFIG")
            .value_parser(clap::value_parser!(PathBuf))
            .action(ArgAction::Set),
        Arg::new("sim-dir")
            .long("sim-dir")
            .help(t!("arg_sim_dir", locale = locale).to_string())
            .value_name("SIM_DIR")
            .value_parser(clap::value_parser!(PathBuf))
            .action(ArgAction::Set),
    ]
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("sim-gate")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .args(run_args(locale))
        .subcommand(
            Command::new("run")
                .about(t!("cmd_run_about", locale = locale).to_string())
                .args(run_args(locale)),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("arg_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("force")
                        .short('f')
                        .long("force")
                        .help(t!("arg_force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Collects the `run` flags. Flags given on the subcommand win; flags placed
/// before it (`sim-gate --sim-dir x run`) are read from the top-level matches.
fn run_options(
    matches: &ArgMatches,
    top_level: Option<&ArgMatches>,
    lang: Option<String>,
) -> commands::run::RunOptions {
    let path_arg = |id: &str| {
        matches
            .get_one::<PathBuf>(id)
            .or_else(|| top_level.and_then(|m| m.get_one::<PathBuf>(id)))
            .cloned()
    };
    commands::run::RunOptions {
        config: path_arg("config"),
        sim_dir: path_arg("sim-dir"),
        lang,
    }
}

/// Parses the command line and runs the selected command.
/// Returns the process exit code; environment errors come back as `Err`.
///
/// 解析命令行并运行所选命令。
/// 返回进程退出码；环境错误以 `Err` 返回。
pub async fn run() -> Result<ExitCode> {
    // Pre-parse language and initialize i18n first.
    let explicit_lang = pre_parse_language();
    let language = match_locale(
        &explicit_lang
            .clone()
            .unwrap_or_else(detect_system_language),
    );
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();
    // `--lang` is global and may follow the subcommand, so the pre-parsed value is authoritative.
    let lang = explicit_lang;

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            commands::run::execute(run_options(run_matches, Some(&matches), lang)).await
        }
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");
            let force = init_matches.get_flag("force");
            commands::init::run_init_wizard(&language, non_interactive, force)?;
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            // No subcommand: behave exactly like `run`.
            commands::run::execute(run_options(&matches, None, lang)).await
        }
    }
}
