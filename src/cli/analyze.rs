//! # analyze 子命令 CLI 定义
//!
//! 单透镜色差与球差的完整分析：表格、三幅图、可选数据导出。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/analyze.rs`

use super::common::{GridArgs, LensArgs, PlotArgs};
use clap::Args;
use std::path::PathBuf;

/// analyze 子命令参数
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub lens: LensArgs,

    #[command(flatten)]
    pub grid: GridArgs,

    #[command(flatten)]
    pub plot: PlotArgs,

    /// Directory for the generated plots
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Skip plot generation
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,

    /// Export per-wavelength data (.csv, or .xy/.dat/.txt for tab-separated)
    #[arg(short, long)]
    pub export: Option<PathBuf>,
}
