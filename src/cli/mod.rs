//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: watermark

pub mod watermark;

use clap::Parser;

/// wmark - 批量图片水印工具
#[derive(Parser)]
#[command(name = "wmark")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Add watermarks to every image under a directory tree",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub args: watermark::WatermarkArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli =
            Cli::try_parse_from(["wmark", "--root", "img", "--watermark", "wm.png"]).unwrap();
        assert_eq!(cli.args.root, "img");
        assert_eq!(cli.args.watermark, "wm.png");
        assert_eq!(cli.args.name, "-watermark");
        assert_eq!(cli.args.extension, ".png");
        assert!(cli.args.exclude.is_none());
        assert_eq!(cli.args.timeout, 60);
    }

    #[test]
    fn test_required_flags() {
        assert!(Cli::try_parse_from(["wmark", "--root", "img"]).is_err());
        assert!(Cli::try_parse_from(["wmark", "--watermark", "wm.png"]).is_err());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "wmark",
            "--root",
            "img",
            "--watermark",
            "wm.png",
            "--name",
            "_wm",
            "--extension",
            ".jpg",
            "--exclude",
            "thumbs",
            "--compositor",
            "/opt/im/bin/composite",
            "--timeout",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.args.name, "_wm");
        assert_eq!(cli.args.extension, ".jpg");
        assert_eq!(cli.args.exclude.as_deref(), Some("thumbs"));
        assert_eq!(cli.args.compositor, "/opt/im/bin/composite");
        assert_eq!(cli.args.timeout, 5);
    }
}
