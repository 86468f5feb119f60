//! # 光谱计算模块
//!
//! 提供高斯展宽、绘图与数据导出功能。
//!
//! ## 子模块
//! - `calculator`: 激发态 → 连续吸收曲线的高斯展宽
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands.rs` 使用
//! - 使用 `models/excitation.rs`

pub mod calculator;
pub mod export;
pub mod plot;

pub use calculator::{BroadeningParameters, SpectrumCalculator, SpectrumCurve};
