//! # Core Module / 核心模块
//!
//! This module contains the core functionality of sim-gate,
//! including data models, configuration, and the gate run itself.
//!
//! 此模块包含 sim-gate 的核心功能，
//! 包括数据模型、配置和门禁运行本身。

pub mod models;
pub mod config;
pub mod execution;

// Re-exports
pub use models::{Transcript, Verdict};
pub use config::GateConfig;
pub use execution::run_gate;
