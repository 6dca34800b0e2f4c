//! # 数据模型模块
//!
//! 运行配置与派生文件命名规则。
//!
//! ## 依赖关系
//! - 被 `batch/` 与 `commands/` 模块使用
//! - 子模块: config, naming

pub mod config;
pub mod naming;

pub use config::WatermarkConfig;
