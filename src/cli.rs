//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! uvspec 是单一用途工具，不设子命令：输入为单个 Gaussian 输出文件
//! 或包含输出文件的目录（批量模式），其余参数控制展宽与输出。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands.rs`

use crate::error::{Result, UvspecError};

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// uvspec - Gaussian TD-DFT 输出 → UV-Vis 吸收光谱
#[derive(Parser, Debug)]
#[command(name = "uvspec")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "UV-Vis absorption spectra from Gaussian TD-DFT excited states", long_about = None)]
pub struct Cli {
    /// Input: Gaussian output file (.log/.out) or directory containing output files
    pub input: PathBuf,

    /// Gaussian half-width sigma in eV (0.4 is the value Gaussian recommends)
    #[arg(long, default_value_t = 0.4)]
    pub sigma: f64,

    /// Wavelength sampling range in nm, upper bound exclusive (e.g., "200-800")
    #[arg(short, long, default_value = "200-800")]
    pub range: String,

    /// Save spectrum data only; do not render a plot
    #[arg(short = 's', long, default_value_t = false)]
    pub save_only: bool,

    /// Output file (single mode) or directory (batch mode); defaults next to the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (inferred from output extension / mode if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<SpectrumFormat>,

    /// Truncate existing data files instead of appending
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Mark the strongest excitations on the plot
    #[arg(long, default_value_t = false)]
    pub label_peaks: bool,

    /// Number of excitations to label (if --label-peaks is set)
    #[arg(long, default_value_t = 5)]
    pub label_count: usize,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot (default: input file stem)
    #[arg(long)]
    pub title: Option<String>,

    // ─────────────────────────────────────────────────────────────
    // 批量处理参数
    // ─────────────────────────────────────────────────────────────
    /// Glob pattern for input files (batch mode)
    #[arg(long, default_value = "*.log,*.out,*.LOG,*.OUT")]
    pub pattern: String,

    /// Number of parallel jobs (0 = auto, batch mode only)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Recurse into subdirectories (batch mode)
    #[arg(long, default_value_t = false)]
    pub recursive: bool,
}

/// 光谱输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SpectrumFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// Tab-separated data file (wavelength \t epsilon)
    Txt,
    /// CSV data file with header
    Csv,
}

impl SpectrumFormat {
    /// 对应的文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            SpectrumFormat::Png => "png",
            SpectrumFormat::Svg => "svg",
            SpectrumFormat::Txt => "txt",
            SpectrumFormat::Csv => "csv",
        }
    }

    /// 是否为图像格式
    pub fn is_plot(&self) -> bool {
        matches!(self, SpectrumFormat::Png | SpectrumFormat::Svg)
    }
}

impl std::fmt::Display for SpectrumFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// 解析波长范围 "MIN-MAX" (nm)
pub fn parse_range(range: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = range.split('-').collect();
    if parts.len() != 2 {
        return Err(UvspecError::InvalidRange(range.to_string()));
    }

    let min: f64 = parts[0]
        .trim()
        .parse()
        .map_err(|_| UvspecError::InvalidRange(range.to_string()))?;
    let max: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| UvspecError::InvalidRange(range.to_string()))?;

    if min <= 0.0 || max <= min {
        return Err(UvspecError::InvalidRange(format!(
            "{} (must be 0 < min < max)",
            range
        )));
    }

    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range_valid() {
        assert_eq!(parse_range("200-800").unwrap(), (200.0, 800.0));
        assert_eq!(parse_range("299.5-301").unwrap(), (299.5, 301.0));
    }

    #[test]
    fn test_parse_range_invalid() {
        assert!(parse_range("800-200").is_err());
        assert!(parse_range("200").is_err());
        assert!(parse_range("abc-800").is_err());
        assert!(parse_range("0-800").is_err());
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(SpectrumFormat::Txt.extension(), "txt");
        assert!(SpectrumFormat::Svg.is_plot());
        assert!(!SpectrumFormat::Csv.is_plot());
    }
}
