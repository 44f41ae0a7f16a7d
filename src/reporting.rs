//! # Reporting Module / 报告模块
//!
//! This module handles the display of gate results in the console,
//! with colour and internationalization support.
//!
//! 此模块处理门禁结果在控制台中的显示，支持彩色输出和国际化。

pub mod console;

// Re-export common reporting functions
pub use console::{print_run_banner, print_verdict};
