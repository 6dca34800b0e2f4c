//! # 工具函数模块
//!
//! 提供美化输出、进度提示、路径校验与外部命令执行等工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 与 `batch/` 模块使用
//! - 子模块: command, output, paths, progress

pub mod command;
pub mod output;
pub mod paths;
pub mod progress;
