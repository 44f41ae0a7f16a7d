//! # Sim Gate Library / Sim Gate 库
//!
//! This library provides the core functionality for the `sim-gate` tool,
//! a CI gate that runs an HDL simulation in batch mode and turns the
//! transcript it leaves behind into a pass/fail exit code.
//!
//! 此库为 `sim-gate` 工具提供核心功能，
//! 这是一个以批处理模式运行 HDL 仿真、并将其生成的记录转换为通过/失败退出码的 CI 门禁。
//!
//! ## Modules / 模块
//!
//! - `core` - Transcript model, configuration and the gate run
//! - `infra` - Process spawning, file system helpers, logging
//! - `reporting` - Console output
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 记录模型、配置和门禁运行
//! - `infra` - 进程启动、文件系统辅助、日志
//! - `reporting` - 控制台输出
//! - `cli` - 命令行接口和命令

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use crate::core::models;
pub use crate::core::config;
pub use crate::core::execution;

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
