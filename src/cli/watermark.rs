//! # 水印命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/watermark.rs`

use crate::models::config::{
    DEFAULT_COMPOSITOR, DEFAULT_EXTENSION, DEFAULT_NAME, DEFAULT_TIMEOUT_SECS,
};
use clap::Args;

/// 水印批处理参数
#[derive(Args, Debug)]
pub struct WatermarkArgs {
    /// Root path for images
    #[arg(long)]
    pub root: String,

    /// Path to watermark image
    #[arg(long)]
    pub watermark: String,

    /// Name addition for watermarked files
    #[arg(long, default_value = DEFAULT_NAME, allow_hyphen_values = true)]
    pub name: String,

    /// Image extension to look for
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Skip directories whose path contains this text
    #[arg(long)]
    pub exclude: Option<String>,

    // ─────────────────────────────────────────────────────────────
    // 合成工具选项
    // ─────────────────────────────────────────────────────────────
    /// Compositing program (ImageMagick `composite`)
    #[arg(long, env = "WMARK_COMPOSITOR", default_value = DEFAULT_COMPOSITOR)]
    pub compositor: String,

    /// Timeout in seconds for each compositor call
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}
