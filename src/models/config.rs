//! # 运行配置
//!
//! 校验后的不可变运行参数。
//!
//! ## 依赖关系
//! - 由 `commands/watermark.rs` 构造
//! - 被 `batch/` 模块读取

use std::path::{Path, PathBuf};
use std::time::Duration;

/// 默认水印文件名后缀
pub const DEFAULT_NAME: &str = "-watermark";

/// 默认源图扩展名子串
pub const DEFAULT_EXTENSION: &str = ".png";

/// 默认合成程序（ImageMagick）
pub const DEFAULT_COMPOSITOR: &str = "composite";

/// 单次合成的默认超时（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// 一次批处理的完整配置
#[derive(Debug, Clone)]
pub struct WatermarkConfig {
    /// 扫描根目录（绝对路径）
    pub root: PathBuf,
    /// 水印图片（绝对路径）
    pub watermark: PathBuf,
    /// 插入在扩展名之前的后缀
    pub name: String,
    /// 识别源图的子串
    pub extension: String,
    /// 目录路径包含该子串即整体跳过
    pub exclude: Option<String>,
    /// 合成程序
    pub compositor: String,
    /// 单次合成超时
    pub timeout: Duration,
}

impl WatermarkConfig {
    /// 以默认参数创建
    pub fn new(root: impl Into<PathBuf>, watermark: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            watermark: watermark.into(),
            name: DEFAULT_NAME.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            exclude: None,
            compositor: DEFAULT_COMPOSITOR.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.to_string();
        self
    }

    pub fn with_exclude(mut self, exclude: Option<String>) -> Self {
        self.exclude = exclude.filter(|s| !s.is_empty());
        self
    }

    pub fn with_compositor(mut self, compositor: &str) -> Self {
        self.compositor = compositor.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 水印图片的文件名部分
    pub fn watermark_basename(&self) -> String {
        self.watermark
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// 目录是否应被排除
    pub fn is_excluded(&self, dir: &Path) -> bool {
        match &self.exclude {
            Some(pattern) => dir.to_string_lossy().contains(pattern.as_str()),
            None => false,
        }
    }

    /// 文件名是否为待加水印的源图
    pub fn is_eligible(&self, fname: &str) -> bool {
        let basename = self.watermark_basename();
        fname.contains(self.extension.as_str())
            && (basename.is_empty() || !fname.contains(basename.as_str()))
            && !fname.contains(self.name.as_str())
    }
}
