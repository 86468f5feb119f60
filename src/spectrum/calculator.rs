//! # UV-Vis 光谱计算器
//!
//! 将离散激发态（波长 + 振子强度）高斯展宽为连续吸收曲线。
//!
//! ## 算法概述
//! 每条谱线以能量域固定半宽 σ (eV) 的高斯峰替代，在波长域
//! [min_wave, max_wave) 上以 1 nm 步长采样并逐点求和：
//!
//! ```text
//! σ_cm = σ × 10⁷ × 0.000806556        (cm⁻¹)
//! σ_nm = σ × 0.000806556              (nm⁻¹)
//! ε(x) = Σ_j 130629740 · (f_j / σ_cm) · exp(-((1/x − 1/λ_j) / σ_nm)²)
//! ```
//!
//! ## 参考
//! - https://gaussian.com/uvvisplot/
//!
//! ## 依赖关系
//! - 被 `commands.rs` 调用
//! - 使用 `models/excitation.rs` 的 Excitation 结构

use crate::models::Excitation;

/// eV → nm⁻¹ 换算系数（Gaussian uvvisplot 约定）
const EV_TO_NM_INV: f64 = 0.000806556;

/// 摩尔吸光系数前置因子
const EPSILON_PREFACTOR: f64 = 130_629_740.0;

/// 展宽参数
#[derive(Debug, Clone, Copy)]
pub struct BroadeningParameters {
    /// 峰半宽 σ (eV)
    pub sigma: f64,
    /// 采样下限 (nm)
    pub min_wave: f64,
    /// 采样上限 (nm)，不含
    pub max_wave: f64,
}

/// 计算得到的吸收曲线
///
/// x 与 y 等长；x 自 min_wave 起以 1 nm 步长严格递增。
#[derive(Debug, Clone, Default)]
pub struct SpectrumCurve {
    /// 采样波长 (nm)
    pub x: Vec<f64>,
    /// 摩尔吸光系数 ε (L mol⁻¹ cm⁻¹)
    pub y: Vec<f64>,
}

impl SpectrumCurve {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// (x, y) 点迭代器
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// y 的最大值（空曲线返回 None）
    pub fn max_y(&self) -> Option<f64> {
        self.y.iter().copied().reduce(f64::max)
    }
}

/// UV-Vis 光谱计算器
pub struct SpectrumCalculator {
    params: BroadeningParameters,
}

impl SpectrumCalculator {
    pub fn new(params: BroadeningParameters) -> Self {
        Self { params }
    }

    /// 对激发态列表做高斯展宽，生成吸收曲线
    ///
    /// min_wave ≥ max_wave 时返回空曲线。逐采样点全量求和，
    /// O(采样数 × 激发数)；输入规模小（数十个激发、数百个采样点），
    /// 无需增量优化。零波长按 IEEE-754 语义传播 Inf/NaN，不做保护。
    pub fn calculate(&self, excitations: &[Excitation]) -> SpectrumCurve {
        let BroadeningParameters {
            sigma,
            min_wave,
            max_wave,
        } = self.params;

        if min_wave >= max_wave {
            return SpectrumCurve::default();
        }

        let sigma_cm = sigma * 1.0e7 * EV_TO_NM_INV;
        let sigma_nm = sigma * EV_TO_NM_INV;

        let n_samples = (max_wave - min_wave).ceil() as usize;
        let mut x = Vec::with_capacity(n_samples);
        let mut y = Vec::with_capacity(n_samples);

        for i in 0..n_samples {
            let wave = min_wave + i as f64;
            let mut epsilon = 0.0;

            for excitation in excitations {
                let amplitude = EPSILON_PREFACTOR * (excitation.oscillator_strength / sigma_cm);
                let arg = (1.0 / wave - 1.0 / excitation.wavelength_nm) / sigma_nm;
                epsilon += amplitude * (-(arg * arg)).exp();
            }

            x.push(wave);
            y.push(epsilon);
        }

        SpectrumCurve { x, y }
    }
}
