//! # 批量处理模块
//!
//! 提供对整个目录的 Gaussian 输出文件批量生成光谱的能力。
//!
//! ## 功能
//! - 收集匹配的 .log/.out 文件列表
//! - 并行展宽计算
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchRunner, BatchSummary, ProcessResult};
