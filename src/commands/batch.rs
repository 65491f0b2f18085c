//! # batch 命令实现
//!
//! 对透镜目录中的全部透镜并行进行像差分析。
//!
//! ## 功能
//! - 读取 CSV 透镜目录
//! - 并行计算（rayon），单个透镜失败或目录行无法解析都不影响其他透镜
//! - 按最大色差升序排名并输出表格
//! - 汇总 CSV，可选逐透镜图表
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的 BatchArgs
//! - 使用 `batch/` 模块读取目录与并行处理
//! - 使用 `optics/` 模块进行计算、绘图与导出

use crate::batch::{catalog, BatchRunner, ProcessResult};
use crate::cli::batch::BatchArgs;
use crate::error::{Result, SingletError};
use crate::models::{LensSpec, WavelengthGrid};
use crate::optics::export::{self, SummaryRecord};
use crate::optics::plot::{self, PlotOptions};
use crate::optics::{AberrationCalculator, AberrationReport};
use crate::utils::output;

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tabled::{Table, Tabled};

/// 批量处理配置
struct BatchAnalysisConfig {
    grid: WavelengthGrid,
    plot_dir: Option<PathBuf>,
    plot_options: PlotOptions,
    overwrite: bool,
}

/// 排名表格行
#[derive(Debug, Clone, Tabled)]
struct RankRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Lens")]
    name: String,
    #[tabled(rename = "f_d (mm)")]
    focal_d: String,
    #[tabled(rename = "Max chromatic (mm)")]
    max_chromatic: String,
    #[tabled(rename = "Max spherical (mm)")]
    max_spherical: String,
}

/// 执行 batch 命令
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Batch Aberration Analysis");

    let catalog = catalog::read_catalog(&args.catalog)?;
    output::print_info(&format!(
        "Loaded {} lenses from '{}'",
        catalog.lenses.len(),
        args.catalog.display()
    ));
    if !catalog.rejected.is_empty() {
        output::print_warning(&format!(
            "{} catalogue rows could not be parsed",
            catalog.rejected.len()
        ));
    }
    let lenses = catalog.lenses;

    let grid = args.grid.to_grid()?;

    if let Some(ref dir) = args.plot_dir {
        fs::create_dir_all(dir).map_err(|e| SingletError::FileWriteError {
            path: dir.display().to_string(),
            source: e,
        })?;
    }

    // 创建共享配置
    let config = Arc::new(BatchAnalysisConfig {
        grid,
        plot_dir: args.plot_dir.clone(),
        plot_options: args.plot.options(),
        overwrite: args.overwrite,
    });

    // 并行处理
    let runner = BatchRunner::new(args.jobs);
    let runner = if console::user_attended() {
        runner
    } else {
        runner.quiet()
    };
    log::debug!("batch: {} lenses on {} threads", lenses.len(), runner.jobs());
    let mut result = runner.run(lenses, |lens| process_lens(lens, &config));
    for (label, err) in catalog.rejected {
        result.merge(ProcessResult::Failed(label, err));
    }

    let total = result.total();
    let mut reports = result.successes;
    rank_reports(&mut reports);

    // 打印统计
    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} of {} lenses analyzed, {} failed",
        reports.len(),
        total,
        result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed lenses:");
        for (name, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", name, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    if reports.is_empty() {
        output::print_warning("No lens could be analyzed.");
        return Ok(());
    }

    print_ranking(&reports, args.top_n);

    let records: Vec<SummaryRecord> = reports.iter().map(SummaryRecord::from_report).collect();
    export::summary_to_csv(&records, &args.output)?;
    output::print_success(&format!(
        "Summary saved to '{}'",
        args.output.display()
    ));

    Ok(())
}

/// 处理单个透镜
fn process_lens(
    lens: &LensSpec,
    config: &Arc<BatchAnalysisConfig>,
) -> ProcessResult<AberrationReport> {
    let report = match analyze_lens(lens, &config.grid) {
        Ok(report) => report,
        Err(e) => return ProcessResult::Failed(lens.name.clone(), e.to_string()),
    };

    if let Some(ref dir) = config.plot_dir {
        let stem = plot::file_stem(&lens.name);
        let first = dir.join(format!(
            "{}_chromatic.{}",
            stem,
            config.plot_options.extension()
        ));
        if first.exists() && !config.overwrite {
            log::info!("plots for '{}' exist, skipping", lens.name);
        } else if let Err(e) = plot::generate_all(&report, dir, &stem, config.plot_options) {
            return ProcessResult::Failed(lens.name.clone(), e.to_string());
        }
    }

    ProcessResult::Success(report)
}

/// 校验并分析单个透镜
fn analyze_lens(lens: &LensSpec, grid: &WavelengthGrid) -> Result<AberrationReport> {
    lens.validate()?;
    AberrationCalculator::new(lens.clone()).analyze(grid)
}

/// 按最大色差升序排列
fn rank_reports(reports: &mut [AberrationReport]) {
    reports.sort_by(|a, b| {
        a.max_chromatic
            .value
            .abs()
            .total_cmp(&b.max_chromatic.value.abs())
    });
}

/// 打印排名表格
fn print_ranking(reports: &[AberrationReport], top_n: usize) {
    let rows: Vec<RankRow> = reports
        .iter()
        .take(top_n)
        .enumerate()
        .map(|(i, r)| RankRow {
            rank: i + 1,
            name: r.lens.name.clone(),
            focal_d: format!("{:.4}", r.focal_d),
            max_chromatic: format!("{:.4}", r.max_chromatic.value.abs()),
            max_spherical: format!("{:.4}", r.max_spherical.value.abs()),
        })
        .collect();

    output::print_header(&format!(
        "Top {} Lenses by Chromatic Aberration",
        rows.len()
    ));
    println!("{}", Table::new(&rows));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Arc<BatchAnalysisConfig> {
        Arc::new(BatchAnalysisConfig {
            grid: WavelengthGrid::visible(),
            plot_dir: None,
            plot_options: PlotOptions::default(),
            overwrite: false,
        })
    }

    #[test]
    fn test_process_valid_lens() {
        let lens = LensSpec::new(50.0, -50.0, 5.0, 1.5, 60.0).with_name("ok");
        match process_lens(&lens, &config()) {
            ProcessResult::Success(report) => assert_eq!(report.lens.name, "ok"),
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_process_invalid_lens_fails() {
        let lens = LensSpec::new(50.0, 50.0, 0.0, 1.5, 60.0).with_name("afocal");
        match process_lens(&lens, &config()) {
            ProcessResult::Failed(name, err) => {
                assert_eq!(name, "afocal");
                assert!(err.contains("no finite focal length"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_rank_by_chromatic() {
        let grid = WavelengthGrid::visible();
        let low_dispersion = LensSpec::new(50.0, -50.0, 5.0, 1.5, 90.0).with_name("low");
        let high_dispersion = LensSpec::new(50.0, -50.0, 5.0, 1.5, 20.0).with_name("high");

        let mut reports = vec![
            analyze_lens(&high_dispersion, &grid).unwrap(),
            analyze_lens(&low_dispersion, &grid).unwrap(),
        ];
        rank_reports(&mut reports);
        assert!(
            reports[0].max_chromatic.value.abs() <= reports[1].max_chromatic.value.abs()
        );
    }

    #[test]
    fn test_unparsable_rows_counted_as_failures() {
        let data = "\
name,r1,r2,thickness,n_d,abbe
good,50,-50,5,1.5,60
bad,fifty,-50,5,1.5,60
good2,80,-80,3,1.6,40
";
        let catalog = catalog::parse_catalog(data.as_bytes()).unwrap();
        let config = config();
        let mut result = BatchRunner::new(2)
            .quiet()
            .run(catalog.lenses, |lens| process_lens(lens, &config));
        for (label, err) in catalog.rejected {
            result.merge(ProcessResult::Failed(label, err));
        }

        assert_eq!(result.success(), 2);
        assert_eq!(result.failed, 1);
        assert_eq!(result.total(), 3);
        assert_eq!(result.failures[0].0, "bad");
    }

    #[test]
    fn test_batch_runner_with_lenses() {
        let lenses = vec![
            LensSpec::new(50.0, -50.0, 5.0, 1.5, 60.0).with_name("a"),
            LensSpec::new(50.0, -50.0, 5.0, 1.5, -1.0).with_name("bad"),
            LensSpec::new(100.0, -100.0, 5.0, 1.6, 40.0).with_name("b"),
        ];
        let config = config();
        let result = BatchRunner::new(2)
            .quiet()
            .run(lenses, |lens| process_lens(lens, &config));

        assert_eq!(result.success(), 2);
        assert_eq!(result.failed, 1);
        assert_eq!(result.failures[0].0, "bad");
    }
}
