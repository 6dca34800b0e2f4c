//! # 批量执行器
//!
//! 顺序处理整棵目录树：清理 -> 扫描 -> 逐个合成。
//!
//! ## 功能
//! - 已存在水印文件的源图跳过（可中断后续跑）
//! - 单个文件失败只记录，不中断批处理
//! - 进度条显示与结果统计
//!
//! ## 依赖关系
//! - 被 `commands/watermark.rs` 调用
//! - 使用 `batch/cleanup.rs`, `batch/collector.rs`, `batch/compositor.rs`
//! - 使用 `utils/progress.rs` 创建进度条

use super::cleanup::remove_stale_outputs;
use super::collector::ImageCollector;
use super::compositor::Compositor;
use crate::models::naming::derived_name;
use crate::models::WatermarkConfig;
use crate::utils::command::CommandRunner;
use crate::utils::{output, progress};

use std::path::{Path, PathBuf};

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 已生成水印文件
    Success(PathBuf),
    /// 水印文件已存在
    Skipped(PathBuf),
    /// 处理失败
    Failed(String, String), // (文件路径, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 访问过的文件数
    pub files_processed: usize,
    /// 新生成的水印文件数
    pub files_watermarked: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 清理阶段删除的过期文件数
    pub removed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(_) => self.files_watermarked += 1,
            ProcessResult::Skipped(_) => self.skipped += 1,
            ProcessResult::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path, err));
            }
        }
    }

    /// 源图数量（成功 + 跳过 + 失败）
    pub fn candidates(&self) -> usize {
        self.files_watermarked + self.skipped + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner<'a, R: CommandRunner + ?Sized> {
    config: &'a WatermarkConfig,
    runner: &'a R,
    compositor: Compositor,
}

impl<'a, R: CommandRunner + ?Sized> BatchRunner<'a, R> {
    pub fn new(config: &'a WatermarkConfig, runner: &'a R) -> Self {
        Self {
            config,
            runner,
            compositor: Compositor::from_config(config),
        }
    }

    /// 执行完整批处理
    pub fn run(&self) -> BatchResult {
        let mut batch_result = BatchResult::default();

        let cleanup = remove_stale_outputs(self.config);
        for warning in &cleanup.warnings {
            output::print_warning(&format!("Cleanup: {}", warning));
        }
        for path in &cleanup.removed {
            output::print_info(&format!("Removed stale output {}", path.display()));
        }
        batch_result.removed = cleanup.removed.len();

        let spinner = progress::create_spinner("Scanning for images...");
        let scan = ImageCollector::new(self.config).scan();
        spinner.finish_and_clear();

        for warning in &scan.warnings {
            output::print_warning(warning);
        }
        batch_result.files_processed = scan.files_processed;

        let pb = progress::create_progress_bar(scan.candidates.len() as u64, "Watermarking");
        for source in &scan.candidates {
            let result = self.process_file(source);

            pb.suspend(|| match &result {
                ProcessResult::Success(out) => output::print_conversion(
                    &source.display().to_string(),
                    &out.display().to_string(),
                ),
                ProcessResult::Skipped(out) => {
                    output::print_skip(&format!("{} (exists)", out.display()))
                }
                ProcessResult::Failed(path, err) => {
                    output::print_error(&format!("{}: {}", path, err))
                }
            });

            batch_result.merge(result);
            pb.inc(1);
        }
        pb.finish_and_clear();

        batch_result
    }

    /// 处理单个源图
    pub fn process_file(&self, source: &Path) -> ProcessResult {
        let Some(output_path) = output_path_for(source, &self.config.name) else {
            return ProcessResult::Failed(
                source.display().to_string(),
                "path has no file name".to_string(),
            );
        };

        if output_path.exists() {
            return ProcessResult::Skipped(output_path);
        }

        match self
            .compositor
            .composite(self.runner, &self.config.watermark, source, &output_path)
        {
            Ok(()) => ProcessResult::Success(output_path),
            Err(e) => ProcessResult::Failed(source.display().to_string(), e.to_string()),
        }
    }
}

/// 源图同目录下的水印文件路径
pub fn output_path_for(source: &Path, name: &str) -> Option<PathBuf> {
    let fname = source.file_name()?.to_string_lossy();
    let derived = derived_name(&fname, name);
    Some(match source.parent() {
        Some(dir) => dir.join(derived),
        None => PathBuf::from(derived),
    })
}
