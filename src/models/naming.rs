//! # 派生文件命名
//!
//! `a.png` + `-watermark` -> `a-watermark.png`；以第一个 `.` 切分主干与扩展链，
//! 因此 `photo.tar.png` -> `photo-watermark.tar.png`。
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs`, `batch/cleanup.rs`, `batch/runner.rs` 使用

/// 由源文件名计算水印文件名
pub fn derived_name(fname: &str, name: &str) -> String {
    match fname.split_once('.') {
        Some((stem, ext)) => format!("{}{}.{}", stem, name, ext),
        None => format!("{}{}.", fname, name),
    }
}

/// `derived_name` 的逆运算：由水印文件名还原源文件名
///
/// 要求 `name` 紧贴在第一个 `.` 之前；无扩展名的源图对应以 `.` 结尾的水印文件名。
pub fn source_name(derived: &str, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    derived.match_indices(name).find_map(|(idx, _)| {
        let stem = &derived[..idx];
        let rest = &derived[idx + name.len()..];
        if stem.contains('.') {
            return None;
        }
        if rest == "." {
            Some(stem.to_string())
        } else if rest.starts_with('.') {
            Some(format!("{}{}", stem, rest))
        } else {
            None
        }
    })
}
