//! # 输入路径校验
//!
//! 校验 `--root` / `--watermark` 参数：拒绝空路径、`..` 跳转段以及
//! 规范化后与原文不一致的路径。工作目录由调用方显式传入，便于测试。
//!
//! ## 依赖关系
//! - 被 `commands/watermark.rs` 调用
//! - 无外部模块依赖

use crate::error::{Result, WatermarkError};

use std::path::{Component, Path, PathBuf};

/// 将 `raw` 相对 `cwd` 解析为绝对路径，不访问文件系统
pub fn validate_path(cwd: &Path, raw: &str) -> Result<PathBuf> {
    let invalid = |reason: &str| WatermarkError::InvalidPath {
        path: raw.to_string(),
        reason: reason.to_string(),
    };

    if raw.trim().is_empty() {
        return Err(invalid("path is empty"));
    }

    let path = Path::new(raw);
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(invalid("parent-directory segments are not allowed"));
    }

    let normalized: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    if normalized.as_os_str() != Path::new(strip_tolerated(raw)).as_os_str() {
        return Err(invalid(&format!(
            "path does not normalize to itself (normalized: '{}')",
            normalized.display()
        )));
    }

    Ok(cwd.join(normalized))
}

/// 去掉允许存在的前导 `./` 与尾部分隔符
fn strip_tolerated(raw: &str) -> &str {
    let mut s = raw;
    if s == "." || s == "./" {
        return "";
    }
    if let Some(rest) = s.strip_prefix("./") {
        s = rest;
    }
    let trimmed = s.trim_end_matches('/');
    if trimmed.is_empty() {
        // "/" 本身
        &s[..1.min(s.len())]
    } else {
        trimmed
    }
}

/// 校验目录存在
pub fn require_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(WatermarkError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }
    if !path.is_dir() {
        return Err(WatermarkError::NotADirectory {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

/// 校验文件存在
pub fn require_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(WatermarkError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(())
}
