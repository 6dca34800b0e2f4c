//! # 源图收集器
//!
//! 先序遍历根目录，统计访问的文件数并筛选待加水印的源图。
//!
//! ## 功能
//! - 目录路径包含排除子串时整棵子树剪枝
//! - 按文件名排序，结果可复现
//! - 单个条目读取失败仅记录警告
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `models/config.rs` 的筛选规则
//! - 使用 `walkdir` 遍历目录

use crate::models::WatermarkConfig;

use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// 一次扫描的结果
#[derive(Debug, Default)]
pub struct ScanResult {
    /// 访问到的文件总数（不含被排除目录中的文件）
    pub files_processed: usize,
    /// 待加水印的源图，按遍历顺序
    pub candidates: Vec<PathBuf>,
    /// 遍历中遇到的非致命错误
    pub warnings: Vec<String>,
}

/// 源图收集器
pub struct ImageCollector<'a> {
    config: &'a WatermarkConfig,
}

impl<'a> ImageCollector<'a> {
    pub fn new(config: &'a WatermarkConfig) -> Self {
        Self { config }
    }

    /// 遍历根目录并收集源图
    pub fn scan(&self) -> ScanResult {
        let mut result = ScanResult::default();

        let walker = WalkDir::new(&self.config.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !(e.file_type().is_dir() && self.config.is_excluded(e.path())));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| self.config.root.display().to_string());
                    result.warnings.push(format!("Cannot read '{}': {}", path, e));
                    continue;
                }
            };

            if !is_file_like(&entry) {
                continue;
            }

            result.files_processed += 1;

            let eligible = self
                .config
                .is_eligible(&entry.file_name().to_string_lossy());
            if eligible {
                result.candidates.push(entry.into_path());
            }
        }

        result
    }
}

/// 普通文件，或指向非目录的符号链接
fn is_file_like(entry: &DirEntry) -> bool {
    let ft = entry.file_type();
    if ft.is_dir() {
        return false;
    }
    if ft.is_symlink() {
        return !entry.path().is_dir();
    }
    true
}
