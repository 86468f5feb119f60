//! # 解析器模块
//!
//! 提供量子化学计算输出的解析器。
//!
//! ## 依赖关系
//! - 被 `commands.rs` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: gaussian_log

pub mod gaussian_log;

pub use gaussian_log::parse_gaussian_log;
