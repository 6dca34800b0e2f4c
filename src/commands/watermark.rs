//! # 水印命令实现
//!
//! 校验输入 -> 清理过期输出 -> 遍历目录 -> 逐个合成 -> 汇总。
//!
//! ## 依赖关系
//! - 使用 `cli/watermark.rs` 定义的参数
//! - 使用 `batch/`, `models/config.rs`
//! - 使用 `utils/paths.rs`, `utils/command.rs`, `utils/output.rs`

use crate::batch::{BatchResult, BatchRunner};
use crate::cli::watermark::WatermarkArgs;
use crate::error::{Result, WatermarkError};
use crate::models::WatermarkConfig;
use crate::utils::command::ProcessRunner;
use crate::utils::output;
use crate::utils::paths::{require_dir, require_file, validate_path};

use std::path::Path;
use std::time::Duration;
use tabled::{Table, Tabled};

/// 失败详情行
#[derive(Debug, Clone, Tabled)]
struct FailureRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Error")]
    error: String,
}

/// 执行水印批处理
pub fn execute(args: WatermarkArgs) -> Result<()> {
    output::print_header("Batch Watermarking");

    let cwd = std::env::current_dir().map_err(|e| WatermarkError::FileReadError {
        path: ".".to_string(),
        source: e,
    })?;

    // 所有校验在任何文件改动之前完成
    let config = build_config(&args, &cwd)?;

    output::print_info(&format!(
        "Scanning '{}' for '{}' images (watermark: '{}')",
        config.root.display(),
        config.extension,
        config.watermark.display()
    ));
    if let Some(exclude) = &config.exclude {
        output::print_info(&format!("Excluding directories matching '{}'", exclude));
    }

    let result = BatchRunner::new(&config, &ProcessRunner).run();
    print_summary(&result);

    Ok(())
}

/// 由命令行参数构造并校验配置
pub fn build_config(args: &WatermarkArgs, cwd: &Path) -> Result<WatermarkConfig> {
    if args.name.is_empty() {
        return Err(WatermarkError::InvalidArgument(
            "--name must not be empty".to_string(),
        ));
    }
    if args.extension.is_empty() {
        return Err(WatermarkError::InvalidArgument(
            "--extension must not be empty".to_string(),
        ));
    }
    if args.timeout == 0 {
        return Err(WatermarkError::InvalidArgument(
            "--timeout must be at least 1 second".to_string(),
        ));
    }

    let root = validate_path(cwd, &args.root)?;
    let watermark = validate_path(cwd, &args.watermark)?;
    require_dir(&root)?;
    require_file(&watermark)?;

    Ok(WatermarkConfig::new(root, watermark)
        .with_name(&args.name)
        .with_extension(&args.extension)
        .with_exclude(args.exclude.clone())
        .with_compositor(&args.compositor)
        .with_timeout(Duration::from_secs(args.timeout)))
}

fn print_summary(result: &BatchResult) {
    output::print_separator();
    println!(
        "Files Processed: {}",
        output::format_count(result.files_processed)
    );
    println!(
        "Files Watermarked: {}",
        output::format_count(result.files_watermarked)
    );
    output::print_separator();

    if result.removed > 0 {
        output::print_info(&format!(
            "Removed {} stale watermark file(s)",
            output::format_count(result.removed)
        ));
    }
    if result.skipped > 0 {
        output::print_skip(&format!(
            "{} of {} image(s) already watermarked",
            output::format_count(result.skipped),
            output::format_count(result.candidates())
        ));
    }

    if result.failures.is_empty() {
        output::print_done("Watermarking complete");
        return;
    }

    output::print_warning(&format!(
        "{} image(s) failed:",
        output::format_count(result.failed)
    ));
    let rows: Vec<FailureRow> = result
        .failures
        .iter()
        .map(|(file, error)| FailureRow {
            file: file.clone(),
            error: failure_detail(error),
        })
        .collect();
    println!("{}", Table::new(&rows));
}

/// 错误信息的最后一个非空行（外部命令失败时即 stderr 的结论）
fn failure_detail(error: &str) -> String {
    error
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}
