//! # 光谱数据导出
//!
//! 导出吸收曲线到 TXT 和 CSV 格式。
//!
//! ## 支持格式
//! - TXT: 两列制表符分隔（波长 \t 吸光系数），默认以追加模式写入
//! - CSV: 含表头的标准 CSV（wavelength_nm, epsilon）
//!
//! ## 依赖关系
//! - 被 `commands.rs` 调用
//! - 使用 `spectrum/calculator.rs` 的 SpectrumCurve 结构
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{Result, UvspecError};
use crate::spectrum::SpectrumCurve;

use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV 数据行
#[derive(Serialize)]
struct SpectrumRow {
    wavelength_nm: f64,
    epsilon: f64,
}

/// 导出为制表符分隔的 TXT 文件
///
/// 默认以追加模式打开：重复运行会在同一文件中累积数据块，
/// 与上游工具的行为一致。`overwrite` 为 true 时改为截断写入。
pub fn to_txt(curve: &SpectrumCurve, output_path: &Path, overwrite: bool) -> Result<()> {
    let file = if overwrite {
        File::create(output_path)
    } else {
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(output_path)
    }
    .map_err(|e| UvspecError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    for (x, y) in curve.points() {
        writeln!(writer, "{}\t{}", x, y).map_err(|e| UvspecError::FileWriteError {
            path: output_path.display().to_string(),
            source: e,
        })?;
    }

    writer.flush().map_err(|e| UvspecError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出为 CSV 文件
pub fn to_csv(curve: &SpectrumCurve, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for (x, y) in curve.points() {
        wtr.serialize(SpectrumRow {
            wavelength_nm: x,
            epsilon: y,
        })?;
    }

    wtr.flush().map_err(|e| UvspecError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_curve() -> SpectrumCurve {
        SpectrumCurve {
            x: vec![299.0, 300.0],
            y: vec![1234.5, 20250.75],
        }
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::remove_file(&path).ok();
        path
    }

    #[test]
    fn test_txt_round_trip() {
        let path = temp_path("uvspec_export_roundtrip.txt");
        let curve = sample_curve();
        to_txt(&curve, &path, false).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let parsed: Vec<(f64, f64)> = content
            .lines()
            .map(|l| {
                let mut cols = l.split('\t');
                (
                    cols.next().unwrap().parse().unwrap(),
                    cols.next().unwrap().parse().unwrap(),
                )
            })
            .collect();

        assert_eq!(parsed.len(), curve.len());
        for (i, (x, y)) in curve.points().enumerate() {
            assert_eq!(parsed[i], (x, y));
        }
    }

    #[test]
    fn test_txt_append_accumulates_blocks() {
        let path = temp_path("uvspec_export_append.txt");
        let curve = sample_curve();
        to_txt(&curve, &path, false).unwrap();
        to_txt(&curve, &path, false).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        // 追加模式：两次写入 → 数据块翻倍
        assert_eq!(content.lines().count(), curve.len() * 2);
    }

    #[test]
    fn test_txt_overwrite_truncates() {
        let path = temp_path("uvspec_export_overwrite.txt");
        let curve = sample_curve();
        to_txt(&curve, &path, false).unwrap();
        to_txt(&curve, &path, true).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(content.lines().count(), curve.len());
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let path = temp_path("uvspec_export.csv");
        let curve = sample_curve();
        to_csv(&curve, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "wavelength_nm,epsilon");
        assert_eq!(lines.count(), curve.len());
    }
}
