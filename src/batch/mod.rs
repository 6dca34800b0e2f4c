//! # 批量处理模块
//!
//! 对整棵目录树批量加水印。
//!
//! ## 功能
//! - 清理根目录下的过期水印文件
//! - 递归收集源图
//! - 逐个调用外部合成工具
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/watermark.rs` 使用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配清理目标
//! - 使用 `indicatif` 显示进度

pub mod cleanup;
pub mod collector;
pub mod compositor;
pub mod runner;

pub use runner::{BatchResult, BatchRunner};
