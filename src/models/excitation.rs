//! # 激发态数据模型
//!
//! 存储从 Gaussian TD-DFT 输出提取的单个电子激发。
//!
//! ## 依赖关系
//! - 被 `parsers/gaussian_log.rs` 产生
//! - 被 `spectrum/`, `commands.rs` 使用

use serde::{Deserialize, Serialize};

/// 普朗克常数 × 光速，eV·nm（用于 λ ↔ E 换算）
const HC_EV_NM: f64 = 1239.84193;

/// 单个电子激发
///
/// 波长与振子强度成对出现，一条记录对应输出文件中的一行，
/// 保持行序即物理激发顺序。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Excitation {
    /// 激发波长 λ (nm)
    pub wavelength_nm: f64,

    /// 振子强度 f（无量纲）
    pub oscillator_strength: f64,
}

impl Excitation {
    pub fn new(wavelength_nm: f64, oscillator_strength: f64) -> Self {
        Excitation {
            wavelength_nm,
            oscillator_strength,
        }
    }

    /// 激发能量 (eV)
    pub fn energy_ev(&self) -> f64 {
        HC_EV_NM / self.wavelength_nm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_conversion() {
        let ex = Excitation::new(413.28, 0.1);
        // 413.28 nm ≈ 3.0 eV
        assert!((ex.energy_ev() - 3.0).abs() < 0.01);
    }
}
