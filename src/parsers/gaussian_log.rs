//! # Gaussian TD-DFT 输出解析器
//!
//! 解析 Gaussian .log/.out 输出文件，提取每个激发态的波长与振子强度。
//!
//! 典型的激发态行：
//! ```text
//!  Excited State   1:      Singlet-A      6.2174 eV  199.41 nm  f=0.0741  <S**2>=0.000
//! ```
//!
//! ## 依赖关系
//! - 被 `commands.rs` 使用
//! - 使用 `models/excitation.rs`

use crate::error::{Result, UvspecError};
use crate::models::Excitation;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// 激发态行的识别标记（两者必须同时出现）
const STATE_MARKER: &str = "Excited State";
const SPIN_MARKER: &str = "<S**2>=";

/// 波长在行内非空 token 中的固定位置
const WAVELENGTH_TOKEN: usize = 6;
/// 振子强度 token（形如 `f=0.0741`）的固定位置
const STRENGTH_TOKEN: usize = 8;

/// 解析 Gaussian 输出文件，按行序返回所有激发态
///
/// 未包含任何激发态的文件返回空 Vec，由调用方决定如何报告。
pub fn parse_gaussian_log(path: &Path) -> Result<Vec<Excitation>> {
    let file = File::open(path).map_err(|e| UvspecError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let reader = BufReader::new(file);
    let mut excitations = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| UvspecError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        if line.contains(STATE_MARKER) && line.contains(SPIN_MARKER) {
            let excitation = extract_excitation(&line).map_err(|reason| {
                UvspecError::ParseError {
                    path: path.display().to_string(),
                    line: idx + 1,
                    reason,
                }
            })?;
            excitations.push(excitation);
        }
    }

    Ok(excitations)
}

/// 从单个激发态行提取 (λ, f)
///
/// 上游输出格式的 token 位置耦合集中在这里：波长固定为第 7 个
/// 非空 token，振子强度固定为第 9 个（`f=` 前缀剥除后解析）。
/// 格式漂移时只需修改此函数。
fn extract_excitation(line: &str) -> std::result::Result<Excitation, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let wavelength_str = tokens
        .get(WAVELENGTH_TOKEN)
        .ok_or_else(|| format!("expected at least {} tokens", WAVELENGTH_TOKEN + 1))?;
    let wavelength: f64 = wavelength_str
        .parse()
        .map_err(|_| format!("invalid wavelength token '{}'", wavelength_str))?;

    let strength_str = tokens
        .get(STRENGTH_TOKEN)
        .ok_or_else(|| format!("expected at least {} tokens", STRENGTH_TOKEN + 1))?;
    // token 形如 "f=0.0741"，剥除 '=' 及其之前的内容
    let value = match strength_str.split_once('=') {
        Some((_, v)) => v,
        None => return Err(format!("missing '=' in strength token '{}'", strength_str)),
    };
    let strength: f64 = value
        .parse()
        .map_err(|_| format!("invalid oscillator strength token '{}'", strength_str))?;

    Ok(Excitation::new(wavelength, strength))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_LINE: &str =
        " Excited State   1:      Singlet-A      6.2174 eV  199.41 nm  f=0.0741  <S**2>=0.000";

    fn write_temp_log(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_extract_excitation() {
        let ex = extract_excitation(SAMPLE_LINE).unwrap();
        assert_eq!(ex.wavelength_nm, 199.41);
        assert_eq!(ex.oscillator_strength, 0.0741);
    }

    #[test]
    fn test_extract_spec_scenario() {
        // token #6 = 300.00, token #8 = f=0.5000
        let line = "Excited State   2:   Singlet-B   4.13 eV  300.00 nm  f=0.5000  <S**2>=0.000";
        let ex = extract_excitation(line).unwrap();
        assert_eq!(ex.wavelength_nm, 300.0);
        assert_eq!(ex.oscillator_strength, 0.5);
    }

    #[test]
    fn test_extract_rejects_malformed_strength() {
        let line = "Excited State   1:   Singlet-A   6.21 eV  199.41 nm  f0.0741  <S**2>=0.000";
        assert!(extract_excitation(line).is_err());
    }

    #[test]
    fn test_parse_preserves_line_order() {
        let content = format!(
            "{}\n some unrelated line\n Excited State   2:      Singlet-A      4.9594 eV  250.00 nm  f=0.1200  <S**2>=0.000\n",
            SAMPLE_LINE
        );
        let path = write_temp_log("uvspec_parse_order.log", &content);
        let excitations = parse_gaussian_log(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(excitations.len(), 2);
        assert_eq!(excitations[0].wavelength_nm, 199.41);
        assert_eq!(excitations[1].wavelength_nm, 250.0);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let path = write_temp_log("uvspec_parse_idem.log", SAMPLE_LINE);
        let first = parse_gaussian_log(&path).unwrap();
        let second = parse_gaussian_log(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_no_matching_lines() {
        // 缺少 <S**2>= 标记的行不是激发态记录
        let content = " Excited State summary\n SCF Done:  E(RB3LYP) = -230.71 A.U.\n";
        let path = write_temp_log("uvspec_parse_empty.log", content);
        let excitations = parse_gaussian_log(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(excitations.is_empty());
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_gaussian_log(Path::new("/nonexistent/uvspec.log"));
        assert!(result.is_err());
    }
}
