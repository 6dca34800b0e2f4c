//! # wmark - 批量图片水印工具
//!
//! 遍历目录树，为尚无水印版本的图片调用 ImageMagick `composite` 生成
//! `<stem>-watermark.<ext>`。重复运行会跳过已生成的文件。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (清理、扫描、合成)
//!   │     └── models/    (配置与命名规则)
//!   ├── utils/      (输出、进度、路径校验、外部命令)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
