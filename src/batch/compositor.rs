//! # 图像合成调用
//!
//! 以 ImageMagick `composite` 的命令行约定叠加水印：
//! 25% 溶解、右下角锚定、+5+5 像素偏移。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `utils/command.rs` 的 `CommandRunner`

use crate::error::{Result, WatermarkError};
use crate::models::WatermarkConfig;
use crate::utils::command::CommandRunner;

use std::path::Path;
use std::time::Duration;

const DISSOLVE: &str = "25%";
const GRAVITY: &str = "SouthEast";
const GEOMETRY: &str = "+5+5";

/// 合成器
#[derive(Debug, Clone)]
pub struct Compositor {
    program: String,
    timeout: Duration,
}

impl Compositor {
    pub fn new(program: &str, timeout: Duration) -> Self {
        Self {
            program: program.to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &WatermarkConfig) -> Self {
        Self::new(&config.compositor, config.timeout)
    }

    /// 构造合成命令参数（不含程序名）
    pub fn args(watermark: &Path, source: &Path, output: &Path) -> Vec<String> {
        vec![
            "-dissolve".to_string(),
            DISSOLVE.to_string(),
            "-gravity".to_string(),
            GRAVITY.to_string(),
            "-geometry".to_string(),
            GEOMETRY.to_string(),
            watermark.display().to_string(),
            source.display().to_string(),
            output.display().to_string(),
        ]
    }

    /// 将水印叠加到 `source`，写出 `output`
    pub fn composite<R: CommandRunner + ?Sized>(
        &self,
        runner: &R,
        watermark: &Path,
        source: &Path,
        output: &Path,
    ) -> Result<()> {
        let args = Self::args(watermark, source, output);
        let out = runner.run(&self.program, &args, self.timeout)?;

        if out.success() {
            return Ok(());
        }

        let stderr = out.stderr.trim();
        let stdout = out.stdout.trim();
        let detail = if !stderr.is_empty() {
            stderr.to_string()
        } else if !stdout.is_empty() {
            stdout.to_string()
        } else {
            match out.status_code {
                Some(code) => format!("exit status {}", code),
                None => "terminated by signal".to_string(),
            }
        };

        Err(WatermarkError::CommandFailed {
            command: format!("{} {}", self.program, args.join(" ")),
            stderr: detail,
        })
    }
}
