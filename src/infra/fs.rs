//! # File System Operations Module / 文件系统操作模块
//!
//! Resolves the simulation directory before anything is spawned in it.
//!
//! 在启动任何进程之前解析仿真目录。

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Checks if a path exists and is a directory.
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Gets the absolute path of an existing directory.
///
/// # Arguments
/// * `path` - Directory to resolve, relative to the current directory if not absolute
///
/// # Returns
/// The canonicalized path, or an error naming the directory if it does not exist
/// or is not a directory.
pub fn resolve_directory(path: &Path) -> Result<PathBuf> {
    let resolved = fs::canonicalize(path)
        .with_context(|| t!("sim_dir_not_found", path = path.display()).to_string())?;
    if !is_directory(&resolved) {
        bail!(t!("sim_dir_not_a_directory", path = resolved.display()));
    }
    Ok(resolved)
}
