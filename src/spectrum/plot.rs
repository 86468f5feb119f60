//! # UV-Vis 光谱图生成
//!
//! 使用 `plotters` 库绘制吸收光谱曲线。
//!
//! ## 功能
//! - 连续吸收曲线 + 曲线下方填充
//! - 可选激发峰位标注
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands.rs` 调用
//! - 使用 `spectrum/calculator.rs` 的 SpectrumCurve 结构
//! - 使用 `plotters` 渲染图表

use crate::error::{Result, UvspecError};
use crate::models::Excitation;
use crate::spectrum::SpectrumCurve;

use plotters::prelude::*;
use std::path::Path;

/// 生成 UV-Vis 光谱图
#[allow(clippy::too_many_arguments)]
pub fn generate_spectrum_plot(
    curve: &SpectrumCurve,
    excitations: &[Excitation],
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    label_peaks: bool,
    label_count: usize,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_spectrum_chart(&root, curve, excitations, title, label_peaks, label_count)?;
        root.present()
            .map_err(|e| UvspecError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_spectrum_chart(&root, curve, excitations, title, label_peaks, label_count)?;
        root.present()
            .map_err(|e| UvspecError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 绘制光谱图表的核心逻辑
fn draw_spectrum_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    curve: &SpectrumCurve,
    excitations: &[Excitation],
    title: &str,
    label_peaks: bool,
    label_count: usize,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| UvspecError::PlotError(format!("{:?}", e)))?;

    let x_min = curve.x.first().copied().unwrap_or(200.0);
    let x_max = curve.x.last().copied().unwrap_or(800.0);
    let y_max = curve.max_y().filter(|v| v.is_finite() && *v > 0.0).unwrap_or(1.0);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max * 1.1)
        .map_err(|e| UvspecError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("λ(nm)")
        .y_desc("e(L mol-1 cm-1)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| UvspecError::PlotError(format!("{:?}", e)))?;

    // 绘制连续曲线
    let line_color = RGBColor(102, 51, 153);
    chart
        .draw_series(LineSeries::new(curve.points(), line_color.stroke_width(2)))
        .map_err(|e| UvspecError::PlotError(format!("{:?}", e)))?;

    // 填充曲线下方区域
    let fill_color = RGBColor(102, 51, 153).mix(0.2);
    chart
        .draw_series(AreaSeries::new(curve.points(), 0.0, fill_color))
        .map_err(|e| UvspecError::PlotError(format!("{:?}", e)))?;

    // 标注激发峰位（按振子强度取前 label_count 个）
    if label_peaks {
        let mut ranked: Vec<&Excitation> = excitations.iter().collect();
        ranked.sort_by(|a, b| {
            b.oscillator_strength
                .partial_cmp(&a.oscillator_strength)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        for excitation in ranked.iter().take(label_count) {
            let peak_x = excitation.wavelength_nm;
            if peak_x < x_min || peak_x > x_max {
                continue;
            }

            // 取最靠近激发波长的采样点高度作为标注位置
            let y_pos = curve
                .points()
                .min_by(|(xa, _), (xb, _)| {
                    (xa - peak_x)
                        .abs()
                        .partial_cmp(&(xb - peak_x).abs())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .map(|(_, y)| y)
                .unwrap_or(0.0);

            let label = format!("{:.0} nm", peak_x);
            let text_style = ("sans-serif", 12).into_font().color(&BLACK);

            chart
                .draw_series(std::iter::once(Text::new(
                    label,
                    (peak_x, y_pos + y_max * 0.03),
                    text_style,
                )))
                .map_err(|e| UvspecError::PlotError(format!("{:?}", e)))?;
        }
    }

    Ok(())
}
