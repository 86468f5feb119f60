//! # 数据模型模块
//!
//! 定义跨模块共享的数据结构。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `spectrum/`, `commands.rs` 使用
//! - 子模块: excitation

pub mod excitation;

pub use excitation::Excitation;
