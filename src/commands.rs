//! # 光谱生成命令实现
//!
//! 串联解析 → 展宽计算 → 输出（绘图或数据文件）的完整流水线。
//!
//! ## 功能
//! - 支持单文件和批量目录处理
//! - 并行计算（rayon）
//! - 输出 PNG/SVG 图像或 TXT/CSV 数据
//!
//! ## 依赖关系
//! - 使用 `cli.rs` 定义的 Cli 参数
//! - 使用 `parsers/` 读取激发态
//! - 使用 `spectrum/` 模块进行计算与输出
//! - 使用 `batch/` 模块进行批量处理

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::{self, Cli, SpectrumFormat};
use crate::error::{Result, UvspecError};
use crate::models::Excitation;
use crate::parsers;
use crate::spectrum::{self, BroadeningParameters, SpectrumCalculator, SpectrumCurve};
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 执行光谱生成
pub fn execute(args: Cli) -> Result<()> {
    output::print_header("UV-Vis Spectrum Generation");

    if args.sigma <= 0.0 {
        return Err(UvspecError::InvalidArgument(format!(
            "sigma must be positive, got {}",
            args.sigma
        )));
    }

    // 检测输入类型
    if args.input.is_file() {
        execute_single(&args)
    } else if args.input.is_dir() {
        execute_batch(&args)
    } else {
        Err(UvspecError::FileNotFound {
            path: args.input.display().to_string(),
        })
    }
}

/// 输出阶段的共享配置
struct SinkConfig {
    format: SpectrumFormat,
    overwrite: bool,
    label_peaks: bool,
    label_count: usize,
    width: u32,
    height: u32,
}

impl SinkConfig {
    fn from_args(args: &Cli, format: SpectrumFormat) -> Self {
        Self {
            format,
            overwrite: args.overwrite,
            label_peaks: args.label_peaks,
            label_count: args.label_count,
            width: args.width,
            height: args.height,
        }
    }
}

/// 单文件模式
fn execute_single(args: &Cli) -> Result<()> {
    output::print_info(&format!("Single file mode: '{}'", args.input.display()));

    let (min_wave, max_wave) = cli::parse_range(&args.range)?;

    let excitations = parsers::parse_gaussian_log(&args.input)?;
    if excitations.is_empty() {
        output::print_warning("No excited states found.");
        return Ok(());
    }

    output::print_success(&format!("Parsed {} excited states", excitations.len()));
    print_excitation_table(&excitations, 10);

    let calculator = SpectrumCalculator::new(BroadeningParameters {
        sigma: args.sigma,
        min_wave,
        max_wave,
    });
    let curve = calculator.calculate(&excitations);

    output::print_info(&format!(
        "Broadened to {} samples over {}-{} nm (sigma = {} eV)",
        curve.len(),
        min_wave,
        max_wave,
        args.sigma
    ));

    let format = resolve_format(args.format, args.output.as_deref(), args.save_only);
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension(format.extension()));

    let title = args
        .title
        .clone()
        .unwrap_or_else(|| input_stem(&args.input));
    let sink = SinkConfig::from_args(args, format);

    write_spectrum(&curve, &excitations, &output_path, &title, &sink)?;

    output::print_success(&format!("Spectrum saved to '{}'", output_path.display()));
    Ok(())
}

/// 批量处理模式
fn execute_batch(args: &Cli) -> Result<()> {
    output::print_info(&format!("Batch mode: directory '{}'", args.input.display()));

    let (min_wave, max_wave) = cli::parse_range(&args.range)?;

    // 收集文件
    let collector = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)
        .recursive(args.recursive);

    let files = collector.collect();

    if files.is_empty() {
        output::print_warning(&format!(
            "No matching files found with pattern '{}'",
            args.pattern
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} output files", files.len()));

    // 确保输出目录存在
    let output_dir = args.output.clone().unwrap_or_else(|| args.input.clone());
    fs::create_dir_all(&output_dir).map_err(|e| UvspecError::FileWriteError {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    let format = resolve_format(args.format, None, args.save_only);
    output::print_info(&format!("Output format: {}", format));

    // 创建共享配置
    let config = Arc::new(BatchSpectrumConfig {
        output_dir,
        sigma: args.sigma,
        min_wave,
        max_wave,
        sink: SinkConfig::from_args(args, format),
    });

    // 并行处理
    let runner = BatchRunner::new(args.jobs);
    let summary = runner.run(files, |file| process_batch_file(file, &config));

    // 打印统计
    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} success, {} skipped, {} failed",
        summary.success, summary.skipped, summary.failed
    ));

    for msg in summary.skips.iter().take(10) {
        output::print_warning(&format!("  {}", msg));
    }

    if !summary.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in summary.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if summary.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", summary.failures.len() - 10));
        }
    }

    Ok(())
}

/// 批量处理配置
struct BatchSpectrumConfig {
    output_dir: PathBuf,
    sigma: f64,
    min_wave: f64,
    max_wave: f64,
    sink: SinkConfig,
}

/// 处理批量模式中的单个文件
fn process_batch_file(input: &PathBuf, config: &Arc<BatchSpectrumConfig>) -> ProcessResult {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("spectrum");

    let output_file = config
        .output_dir
        .join(format!("{}_uvvis.{}", stem, config.sink.format.extension()));

    // 已存在且未要求覆盖 → 跳过
    if output_file.exists() && !config.sink.overwrite {
        return ProcessResult::Skipped(format!(
            "Output exists, skipping: {}",
            output_file.display()
        ));
    }

    let excitations = match parsers::parse_gaussian_log(input) {
        Ok(e) => e,
        Err(e) => return ProcessResult::Failed(input.display().to_string(), e.to_string()),
    };

    if excitations.is_empty() {
        return ProcessResult::Skipped(format!("No excited states found: {}", input.display()));
    }

    let calculator = SpectrumCalculator::new(BroadeningParameters {
        sigma: config.sigma,
        min_wave: config.min_wave,
        max_wave: config.max_wave,
    });
    let curve = calculator.calculate(&excitations);

    let title = input_stem(input);
    match write_spectrum(&curve, &excitations, &output_file, &title, &config.sink) {
        Ok(_) => {
            ProcessResult::Success(format!("{} -> {}", input.display(), output_file.display()))
        }
        Err(e) => ProcessResult::Failed(input.display().to_string(), e.to_string()),
    }
}

/// 按选定格式写出光谱
fn write_spectrum(
    curve: &SpectrumCurve,
    excitations: &[Excitation],
    output_path: &Path,
    title: &str,
    sink: &SinkConfig,
) -> Result<()> {
    match sink.format {
        SpectrumFormat::Png | SpectrumFormat::Svg => spectrum::plot::generate_spectrum_plot(
            curve,
            excitations,
            output_path,
            title,
            sink.width,
            sink.height,
            sink.label_peaks,
            sink.label_count,
            sink.format == SpectrumFormat::Svg,
        ),
        SpectrumFormat::Txt => spectrum::export::to_txt(curve, output_path, sink.overwrite),
        SpectrumFormat::Csv => spectrum::export::to_csv(curve, output_path),
    }
}

/// 确定输出格式：显式参数 > 输出路径扩展名 > 模式默认值
fn resolve_format(
    explicit: Option<SpectrumFormat>,
    output: Option<&Path>,
    save_only: bool,
) -> SpectrumFormat {
    if let Some(format) = explicit {
        return format;
    }

    if let Some(path) = output {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("png") => return SpectrumFormat::Png,
            Some("svg") => return SpectrumFormat::Svg,
            Some("csv") => return SpectrumFormat::Csv,
            Some("txt") | Some("dat") | Some("xy") => return SpectrumFormat::Txt,
            _ => {}
        }
    }

    if save_only {
        SpectrumFormat::Txt
    } else {
        SpectrumFormat::Png
    }
}

/// 输入文件主名（用作默认图表标题）
fn input_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("spectrum")
        .to_string()
}

/// 打印激发态表格
fn print_excitation_table(excitations: &[Excitation], count: usize) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct ExcitationRow {
        #[tabled(rename = "State")]
        state: usize,
        #[tabled(rename = "λ (nm)")]
        wavelength: String,
        #[tabled(rename = "E (eV)")]
        energy: String,
        #[tabled(rename = "f")]
        strength: String,
    }

    let rows: Vec<ExcitationRow> = excitations
        .iter()
        .enumerate()
        .take(count)
        .map(|(i, ex)| ExcitationRow {
            state: i + 1,
            wavelength: format!("{:.2}", ex.wavelength_nm),
            energy: format!("{:.4}", ex.energy_ev()),
            strength: format!("{:.4}", ex.oscillator_strength),
        })
        .collect();

    if !rows.is_empty() {
        let table = Table::new(&rows);
        println!("{}", table);
        if excitations.len() > count {
            println!("  ... and {} more states", excitations.len() - count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_format_precedence() {
        // 显式参数优先
        assert_eq!(
            resolve_format(Some(SpectrumFormat::Csv), Some(Path::new("a.png")), false),
            SpectrumFormat::Csv
        );
        // 其次输出扩展名
        assert_eq!(
            resolve_format(None, Some(Path::new("a.svg")), true),
            SpectrumFormat::Svg
        );
        assert_eq!(
            resolve_format(None, Some(Path::new("a.dat")), false),
            SpectrumFormat::Txt
        );
        // 最后按模式取默认
        assert_eq!(resolve_format(None, None, true), SpectrumFormat::Txt);
        assert_eq!(resolve_format(None, None, false), SpectrumFormat::Png);
    }

    #[test]
    fn test_derived_data_path_replaces_extension() {
        let input = Path::new("/tmp/benzene.log");
        let derived = input.with_extension(SpectrumFormat::Txt.extension());
        assert_eq!(derived, Path::new("/tmp/benzene.txt"));
    }
}
