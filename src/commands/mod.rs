//! # 命令执行模块
//!
//! 实现水印批处理的业务流程。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `models/`, `utils/`
//! - 子模块: watermark

pub mod watermark;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    watermark::execute(cli.args)
}
