//! # analyze 命令实现
//!
//! 单透镜色差与球差分析。
//!
//! ## 功能
//! - 由命令行/环境变量/交互输入构造分析配置
//! - 计算逐波长折射率、焦距、色差、球差
//! - 终端表格输出
//! - 生成三幅图 (PNG/SVG)
//! - 导出数据文件 (CSV/XY)
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的 AnalyzeArgs
//! - 使用 `optics/` 模块进行计算、绘图与导出

use crate::cli::analyze::AnalyzeArgs;
use crate::error::{Result, SingletError};
use crate::models::{LensSpec, WavelengthGrid};
use crate::optics::{self, AberrationCalculator, AberrationReport};
use crate::utils::output;

use std::fs;
use std::path::Path;
use tabled::{Table, Tabled};

/// 分析配置：数值核心的唯一输入
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub lens: LensSpec,
    pub grid: WavelengthGrid,
}

impl AnalysisConfig {
    pub fn new(lens: LensSpec, grid: WavelengthGrid) -> Self {
        Self { lens, grid }
    }

    /// 从命令行参数构造（必要时交互询问透镜参数）
    pub fn from_args(args: &AnalyzeArgs) -> Result<Self> {
        let grid = args.grid.to_grid()?;
        let lens = args.lens.resolve()?;
        Ok(Self::new(lens, grid))
    }

    /// 执行分析
    pub fn run(&self) -> Result<AberrationReport> {
        AberrationCalculator::new(self.lens.clone()).analyze(&self.grid)
    }
}

/// 数据导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xy,
}

/// 执行 analyze 命令
pub fn execute(args: AnalyzeArgs) -> Result<()> {
    output::print_header("Singlet Aberration Analysis");

    let config = AnalysisConfig::from_args(&args)?;
    output::print_info(&config.lens.to_string());

    let (min, max) = config.grid.bounds();
    output::print_info(&format!(
        "Wavelength grid: {:.1}-{:.1} nm, {} points",
        min,
        max,
        config.grid.len()
    ));

    let report = config.run()?;
    log::debug!(
        "analysis finished for '{}': f_d = {}, {} rows",
        report.lens.name,
        report.focal_d,
        report.rows.len()
    );

    print_report(&report);

    if !args.no_plot {
        fs::create_dir_all(&args.output_dir).map_err(|e| SingletError::FileWriteError {
            path: args.output_dir.display().to_string(),
            source: e,
        })?;

        let stem = optics::plot::file_stem(&report.lens.name);
        let written =
            optics::plot::generate_all(&report, &args.output_dir, &stem, args.plot.options())?;
        output::print_success("Plots saved:");
        for path in &written {
            output::print_written(path);
        }
    }

    if let Some(ref path) = args.export {
        export_report(&report, path)?;
        output::print_success(&format!("Data exported to '{}'", path.display()));
    }

    Ok(())
}

/// 按扩展名导出报告
pub fn export_report(report: &AberrationReport, path: &Path) -> Result<()> {
    match guess_format_from_extension(path) {
        ExportFormat::Csv => optics::export::to_csv(report, path),
        ExportFormat::Xy => optics::export::to_xy(report, path),
    }
}

/// 从文件扩展名推断导出格式
fn guess_format_from_extension(path: &Path) -> ExportFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("xy") | Some("dat") | Some("txt") => ExportFormat::Xy,
        _ => ExportFormat::Csv,
    }
}

/// 打印结果表格与摘要
fn print_report(report: &AberrationReport) {
    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "λ (nm)")]
        wavelength: String,
        #[tabled(rename = "n(λ)")]
        index: String,
        #[tabled(rename = "f(λ) (mm)")]
        focal: String,
        #[tabled(rename = "Chromatic |Δf| (mm)")]
        chromatic: String,
        #[tabled(rename = "Spherical (mm)")]
        spherical: String,
    }

    let rows: Vec<Row> = report
        .rows
        .iter()
        .map(|r| Row {
            wavelength: format!("{:.1}", r.wavelength),
            index: format!("{:.5}", r.refractive_index),
            focal: format!("{:.4}", r.focal_length),
            chromatic: format!("{:.4}", r.chromatic),
            spherical: format!("{:.4}", r.spherical),
        })
        .collect();

    output::print_header("Aberrations by Wavelength");
    println!("{}", Table::new(&rows));
    println!();

    output::print_value("Focal length (d-line)", &format!("{:.4} mm", report.focal_d));
    output::print_value(
        "Max chromatic aberration",
        &format!(
            "{:.2} mm @ {:.1} nm",
            report.max_chromatic.value.abs(),
            report.max_chromatic.wavelength
        ),
    );
    output::print_value(
        "Max spherical aberration",
        &format!(
            "{:.2} mm @ {:.1} nm",
            report.max_spherical.value.abs(),
            report.max_spherical.wavelength
        ),
    );
}
