//! # 像差数据导出
//!
//! 导出逐波长计算结果到 CSV 和 XY 格式。
//!
//! ## 支持格式
//! - CSV: 波长、折射率、焦距、色差、球差
//! - XY: 制表符分隔，`#` 开头的注释行记录透镜参数
//!
//! ## 依赖关系
//! - 被 `commands/analyze.rs`, `commands/batch.rs` 调用
//! - 使用 `optics/calculator.rs` 的 AberrationReport
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{Result, SingletError};
use crate::models::LensSpec;
use crate::optics::AberrationReport;

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 批量模式的汇总行
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRecord {
    pub name: String,
    pub r1: f64,
    pub r2: f64,
    pub thickness: f64,
    pub n_d: f64,
    pub abbe: f64,
    pub focal_d_mm: f64,
    pub max_chromatic_mm: f64,
    pub max_chromatic_nm: f64,
    pub max_spherical_mm: f64,
    pub max_spherical_nm: f64,
}

impl SummaryRecord {
    pub fn from_report(report: &AberrationReport) -> Self {
        let LensSpec {
            name,
            r1,
            r2,
            thickness,
            n_d,
            abbe,
        } = report.lens.clone();

        SummaryRecord {
            name,
            r1,
            r2,
            thickness,
            n_d,
            abbe,
            focal_d_mm: report.focal_d,
            max_chromatic_mm: report.max_chromatic.value.abs(),
            max_chromatic_nm: report.max_chromatic.wavelength,
            max_spherical_mm: report.max_spherical.value.abs(),
            max_spherical_nm: report.max_spherical.wavelength,
        }
    }
}

fn write_err(path: &Path) -> impl Fn(std::io::Error) -> SingletError + '_ {
    move |e| SingletError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    }
}

/// 导出逐波长结果为 CSV 格式
pub fn to_csv(report: &AberrationReport, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record([
        "wavelength_nm",
        "refractive_index",
        "focal_length_mm",
        "chromatic_mm",
        "spherical_mm",
    ])?;

    for row in &report.rows {
        wtr.write_record(&[
            format!("{:.4}", row.wavelength),
            format!("{:.8}", row.refractive_index),
            format!("{:.8}", row.focal_length),
            format!("{:.8}", row.chromatic),
            format!("{:.8}", row.spherical),
        ])?;
    }

    wtr.flush().map_err(write_err(output_path))?;

    Ok(())
}

/// 导出逐波长结果为 XY 格式
pub fn to_xy(report: &AberrationReport, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(write_err(output_path))?;
    let mut out = BufWriter::new(file);
    let lens = &report.lens;

    let header = [
        format!("# Singlet aberrations: {}", lens.name),
        format!(
            "# R1 = {} mm, R2 = {} mm, t = {} mm, n_d = {}, V = {}",
            lens.r1, lens.r2, lens.thickness, lens.n_d, lens.abbe
        ),
        format!("# Focal length (d-line, 589 nm): {:.6} mm", report.focal_d),
        "# Columns: wavelength (nm), chromatic (mm), spherical (mm)".to_string(),
        "#".to_string(),
    ];
    for line in &header {
        writeln!(out, "{}", line).map_err(write_err(output_path))?;
    }

    for row in &report.rows {
        writeln!(
            out,
            "{:.4}\t{:.8}\t{:.8}",
            row.wavelength, row.chromatic, row.spherical
        )
        .map_err(write_err(output_path))?;
    }

    out.flush().map_err(write_err(output_path))?;

    Ok(())
}

/// 导出批量汇总为 CSV 格式
pub fn summary_to_csv(records: &[SummaryRecord], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush().map_err(write_err(output_path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WavelengthGrid;
    use crate::optics::AberrationCalculator;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("singlet_export_{}_{}", std::process::id(), name))
    }

    fn sample_report() -> AberrationReport {
        let lens = LensSpec::new(50.0, -50.0, 5.0, 1.5, 60.0).with_name("demo");
        AberrationCalculator::new(lens)
            .analyze(&WavelengthGrid::visible())
            .unwrap()
    }

    #[test]
    fn test_csv_export() {
        let report = sample_report();
        let path = temp_path("rows.csv");
        to_csv(&report, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines[0],
            "wavelength_nm,refractive_index,focal_length_mm,chromatic_mm,spherical_mm"
        );
        assert_eq!(lines.len(), 11);
        assert!(lines[1].starts_with("400.0000,"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_xy_export() {
        let report = sample_report();
        let path = temp_path("rows.xy");
        to_xy(&report, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Singlet aberrations: demo"));
        let data: Vec<&str> = content.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(data.len(), 10);
        assert_eq!(data[9].split('\t').count(), 3);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_summary_export() {
        let report = sample_report();
        let path = temp_path("summary.csv");
        summary_to_csv(&[SummaryRecord::from_report(&report)], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("name,r1,r2,thickness,n_d,abbe,focal_d_mm"));
        assert!(lines.next().unwrap().starts_with("demo,50"));
        fs::remove_file(&path).ok();
    }
}
