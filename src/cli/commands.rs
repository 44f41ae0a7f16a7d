//! # CLI Commands / 命令行命令
//!
//! - `run` - Run the simulation and gate on its transcript
//! - `init` - Create a `SimGate.toml` configuration file
//!
//! - `run` - 运行仿真并根据其记录进行门禁判定
//! - `init` - 创建 `SimGate.toml` 配置文件

pub mod init;
pub mod run;
