//! # 像差图表生成
//!
//! 使用 `plotters` 库生成三幅图：
//! - 色差焦移随波长变化
//! - 合成球差随波长变化
//! - 两类像差最大绝对值的对比柱状图（柱顶标注两位小数）
//!
//! 支持 PNG 和 SVG 输出。
//!
//! ## 依赖关系
//! - 被 `commands/analyze.rs`, `commands/batch.rs` 调用
//! - 使用 `optics/calculator.rs` 的 AberrationReport
//! - 使用 `plotters` 渲染图表

use crate::error::{Result, SingletError};
use crate::models::AberrationSample;
use crate::optics::AberrationReport;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};

const LINE_COLOR: RGBColor = RGBColor(0, 102, 204);
const SPHERICAL_COLOR: RGBColor = RGBColor(31, 119, 180);
const CHROMATIC_COLOR: RGBColor = RGBColor(255, 127, 14);

/// 图像尺寸与格式
#[derive(Debug, Clone, Copy)]
pub struct PlotOptions {
    pub width: u32,
    pub height: u32,
    pub use_svg: bool,
}

impl PlotOptions {
    pub fn extension(&self) -> &'static str {
        if self.use_svg {
            "svg"
        } else {
            "png"
        }
    }
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 625,
            use_svg: false,
        }
    }
}

/// 折线图的文字描述
struct LineChartLabels<'a> {
    title: &'a str,
    y_desc: &'a str,
    series: &'a str,
    note: Option<String>,
}

/// 由透镜名称生成安全的文件名前缀
pub fn file_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "lens".to_string()
    } else {
        stem
    }
}

fn plot_err<E: std::fmt::Debug>(e: E) -> SingletError {
    SingletError::PlotError(format!("{:?}", e))
}

/// 生成全部三幅图，返回写出的文件路径
pub fn generate_all(
    report: &AberrationReport,
    output_dir: &Path,
    stem: &str,
    options: PlotOptions,
) -> Result<Vec<PathBuf>> {
    let ext = options.extension();
    let chromatic_path = output_dir.join(format!("{}_chromatic.{}", stem, ext));
    let spherical_path = output_dir.join(format!("{}_spherical.{}", stem, ext));
    let max_path = output_dir.join(format!("{}_max.{}", stem, ext));

    generate_chromatic_plot(report, &chromatic_path, options)?;
    generate_spherical_plot(report, &spherical_path, options)?;
    generate_comparison_plot(report, &max_path, options)?;

    Ok(vec![chromatic_path, spherical_path, max_path])
}

/// 生成色差焦移图
pub fn generate_chromatic_plot(
    report: &AberrationReport,
    output_path: &Path,
    options: PlotOptions,
) -> Result<()> {
    let samples = report.chromatic_samples();
    let labels = LineChartLabels {
        title: "Chromatic Focal Shift",
        y_desc: "Focal Shift |f_d - f(λ)| (mm)",
        series: "Chromatic Focal Shift (mm)",
        note: Some(format!("f_d = {:.3} mm", report.focal_d)),
    };
    render_line_chart(&samples, &labels, output_path, options)
}

/// 生成球差变化图
pub fn generate_spherical_plot(
    report: &AberrationReport,
    output_path: &Path,
    options: PlotOptions,
) -> Result<()> {
    let samples = report.spherical_samples();
    let labels = LineChartLabels {
        title: "Spherical Aberration Variation",
        y_desc: "Spherical Aberration (mm)",
        series: "Spherical Aberration (mm)",
        note: None,
    };
    render_line_chart(&samples, &labels, output_path, options)
}

/// 生成最大像差对比柱状图
pub fn generate_comparison_plot(
    report: &AberrationReport,
    output_path: &Path,
    options: PlotOptions,
) -> Result<()> {
    let values = [
        report.max_spherical.value.abs(),
        report.max_chromatic.value.abs(),
    ];

    if options.use_svg {
        let root = SVGBackend::new(output_path, (options.width, options.height)).into_drawing_area();
        draw_comparison_chart(&root, values)?;
        root.present().map_err(plot_err)?;
    } else {
        let root =
            BitMapBackend::new(output_path, (options.width, options.height)).into_drawing_area();
        draw_comparison_chart(&root, values)?;
        root.present().map_err(plot_err)?;
    }
    Ok(())
}

fn render_line_chart(
    samples: &[AberrationSample],
    labels: &LineChartLabels,
    output_path: &Path,
    options: PlotOptions,
) -> Result<()> {
    if options.use_svg {
        let root = SVGBackend::new(output_path, (options.width, options.height)).into_drawing_area();
        draw_line_chart(&root, samples, labels)?;
        root.present().map_err(plot_err)?;
    } else {
        let root =
            BitMapBackend::new(output_path, (options.width, options.height)).into_drawing_area();
        draw_line_chart(&root, samples, labels)?;
        root.present().map_err(plot_err)?;
    }
    Ok(())
}

/// 计算坐标轴范围，数据平坦时给出固定留白
fn padded_range(values: impl Iterator<Item = f64>, fallback_pad: f64) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return (-fallback_pad, fallback_pad);
    }
    let span = max - min;
    if span <= f64::EPSILON * max.abs().max(1.0) {
        (min - fallback_pad, max + fallback_pad)
    } else {
        (min - span * 0.1, max + span * 0.1)
    }
}

/// 绘制折线图的核心逻辑
fn draw_line_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    samples: &[AberrationSample],
    labels: &LineChartLabels,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let (x_min, x_max) = padded_range(samples.iter().map(|s| s.wavelength), 10.0);
    let (y_min, y_max) = padded_range(samples.iter().map(|s| s.value), 1.0);

    let mut chart = ChartBuilder::on(root)
        .caption(labels.title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Wavelength (nm)")
        .y_desc(labels.y_desc)
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.wavelength, s.value)),
            LINE_COLOR.stroke_width(2),
        ))
        .map_err(plot_err)?
        .label(labels.series)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], LINE_COLOR.stroke_width(2)));

    chart
        .draw_series(
            samples
                .iter()
                .map(|s| Circle::new((s.wavelength, s.value), 4, LINE_COLOR.filled())),
        )
        .map_err(plot_err)?;

    if let Some(ref note) = labels.note {
        chart
            .draw_series(std::iter::once(Text::new(
                note.clone(),
                (x_min + (x_max - x_min) * 0.05, y_max - (y_max - y_min) * 0.05),
                ("sans-serif", 14).into_font().color(&BLACK),
            )))
            .map_err(plot_err)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_err)?;

    Ok(())
}

/// 绘制对比柱状图的核心逻辑
fn draw_comparison_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    values: [f64; 2],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let top = values.iter().copied().fold(0.0_f64, f64::max);
    let y_max = if top > 0.0 { top * 1.25 } else { 1.0 };

    let mut chart = ChartBuilder::on(root)
        .caption("Maximum Aberrations", ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d((0i32..2i32).into_segmented(), 0.0..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Aberration (mm)")
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(0) => "Max Spherical Aberration (mm)".to_string(),
            SegmentValue::CenterOf(1) => "Max Chromatic Aberration (mm)".to_string(),
            _ => String::new(),
        })
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(plot_err)?;

    let colors = [SPHERICAL_COLOR, CHROMATIC_COLOR];
    for (i, (value, color)) in values.iter().zip(colors.iter()).enumerate() {
        let x = i as i32;
        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(color.filled())
                    .margin(60)
                    .data(std::iter::once((x, *value))),
            )
            .map_err(plot_err)?;

        chart
            .draw_series(std::iter::once(Text::new(
                format!("{:.2}", value),
                (SegmentValue::CenterOf(x), value + y_max * 0.02),
                ("sans-serif", 18)
                    .into_font()
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Center, VPos::Bottom)),
            )))
            .map_err(plot_err)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_range_flat_data() {
        let (lo, hi) = padded_range([2.0, 2.0, 2.0].into_iter(), 1.0);
        assert_eq!((lo, hi), (1.0, 3.0));
    }

    #[test]
    fn test_padded_range_spread() {
        let (lo, hi) = padded_range([0.0, 10.0].into_iter(), 1.0);
        assert!((lo + 1.0).abs() < 1e-12);
        assert!((hi - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_padded_range_empty() {
        let (lo, hi) = padded_range(std::iter::empty(), 5.0);
        assert_eq!((lo, hi), (-5.0, 5.0));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("BK7 f/2"), "BK7_f_2");
        assert_eq!(file_stem("sf-11_a"), "sf-11_a");
        assert_eq!(file_stem("  "), "lens");
    }

    fn reference_report() -> AberrationReport {
        use crate::models::{LensSpec, WavelengthGrid};
        use crate::optics::AberrationCalculator;

        AberrationCalculator::new(LensSpec::new(50.0, -50.0, 5.0, 1.5, 60.0))
            .analyze(&WavelengthGrid::visible())
            .unwrap()
    }

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("singlet_plot_{}_{}", tag, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_generate_all_svg() {
        let report = reference_report();
        let dir = scratch_dir("all");
        let options = PlotOptions {
            use_svg: true,
            ..PlotOptions::default()
        };

        let written = generate_all(&report, &dir, "p", options).unwrap();
        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["p_chromatic.svg", "p_spherical.svg", "p_max.svg"]);
        for path in &written {
            assert!(path.exists(), "{} not written", path.display());
        }

        let svg = std::fs::read_to_string(dir.join("p_max.svg")).unwrap();
        for value in [report.max_spherical.value, report.max_chromatic.value] {
            let label = format!(">{:.2}<", value.abs());
            let idx = svg.find(&label).unwrap_or_else(|| panic!("missing bar label {}", label));
            // 标签居中于柱顶
            let tag_start = svg[..idx].rfind("<text").unwrap();
            assert!(svg[tag_start..idx].contains("text-anchor=\"middle\""));
        }
        assert!(svg.contains(">0.19<"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_generate_png() {
        let report = reference_report();
        let dir = scratch_dir("png");
        let path = dir.join("chromatic.png");

        generate_chromatic_plot(&report, &path, PlotOptions::default()).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_extension() {
        let mut options = PlotOptions::default();
        assert_eq!(options.extension(), "png");
        options.use_svg = true;
        assert_eq!(options.extension(), "svg");
    }
}
