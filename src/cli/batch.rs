//! # batch 子命令 CLI 定义
//!
//! 读取透镜目录 CSV（name,r1,r2,thickness,n_d,abbe），并行分析全部透镜
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use super::common::{GridArgs, PlotArgs};
use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Lens catalogue CSV with columns name,r1,r2,thickness,n_d,abbe
    pub catalog: PathBuf,

    #[command(flatten)]
    pub grid: GridArgs,

    #[command(flatten)]
    pub plot: PlotArgs,

    /// Filename for the summary CSV
    #[arg(short, long, default_value = "aberration_summary.csv")]
    pub output: PathBuf,

    /// Write per-lens plots into this directory
    #[arg(long)]
    pub plot_dir: Option<PathBuf>,

    /// Number of lenses to show in the ranking table
    #[arg(long, default_value_t = 10)]
    pub top_n: usize,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing plot files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
