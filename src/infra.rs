//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for sim-gate,
//! including process spawning, file system operations, logging and i18n support.
//!
//! 此模块为 sim-gate 提供基础设施服务，
//! 包括进程启动、文件系统操作、日志和国际化支持。

pub mod command;
pub mod fs;
pub mod logging;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
