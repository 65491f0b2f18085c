//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `focal`: 焦距计算
//! - `analyze`: 单透镜像差分析
//! - `batch`: 透镜目录批量分析
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: common, focal, analyze, batch

pub mod analyze;
pub mod batch;
pub mod common;
pub mod focal;

use clap::{Parser, Subcommand};

/// Singlet - 单透镜像差分析工具
#[derive(Parser)]
#[command(name = "singlet")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Chromatic and spherical aberration analysis for singlet lenses", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the focal length of a thick singlet (lensmaker's equation)
    Focal(focal::FocalArgs),

    /// Analyze chromatic and spherical aberration over a wavelength range
    Analyze(analyze::AnalyzeArgs),

    /// Analyze every lens in a CSV catalogue in parallel
    Batch(batch::BatchArgs),
}
