//! # 过期水印清理
//!
//! 遍历前删除根目录下（不递归）源图已不存在的水印文件，
//! 匹配模式为 `*<name><extension>`，如 `*-watermark.png`。
//! 源图仍在的水印文件保留，以保证重复运行的幂等性。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `models/naming.rs` 还原源文件名
//! - 使用 `glob` 匹配文件名

use crate::error::WatermarkError;
use crate::models::naming::source_name;
use crate::models::WatermarkConfig;

use std::fs;
use std::path::PathBuf;

/// 清理结果
#[derive(Debug, Default)]
pub struct CleanupReport {
    /// 已删除的文件
    pub removed: Vec<PathBuf>,
    /// 删除失败等非致命问题
    pub warnings: Vec<String>,
}

/// 删除根目录下的过期水印文件（尽力而为，从不失败）
pub fn remove_stale_outputs(config: &WatermarkConfig) -> CleanupReport {
    let mut report = CleanupReport::default();

    let raw_pattern = format!(
        "*{}",
        glob::Pattern::escape(&format!("{}{}", config.name, config.extension))
    );
    let pattern = match glob::Pattern::new(&raw_pattern) {
        Ok(p) => p,
        Err(e) => {
            report
                .warnings
                .push(format!("Invalid cleanup pattern '{}': {}", raw_pattern, e));
            return report;
        }
    };

    let entries = match fs::read_dir(&config.root) {
        Ok(entries) => entries,
        Err(e) => {
            let err = WatermarkError::FileReadError {
                path: config.root.display().to_string(),
                source: e,
            };
            report.warnings.push(format!("{}: {}", err, describe_source(&err)));
            return report;
        }
    };

    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let fname = entry.file_name().to_string_lossy().to_string();
        if !pattern.matches(&fname) {
            continue;
        }

        // 无法还原源文件名的不是本工具的产物
        let Some(source) = source_name(&fname, &config.name) else {
            continue;
        };
        if config.root.join(&source).exists() {
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => report.removed.push(path),
            Err(e) => {
                let err = WatermarkError::FileDeleteError {
                    path: path.display().to_string(),
                    source: e,
                };
                report.warnings.push(format!("{}: {}", err, describe_source(&err)));
            }
        }
    }

    report.removed.sort();
    report
}

fn describe_source(err: &WatermarkError) -> String {
    std::error::Error::source(err)
        .map(|s| s.to_string())
        .unwrap_or_default()
}
