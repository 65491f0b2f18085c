//! # focal 子命令 CLI 定义
//!
//! 计算单透镜焦距（默认 d 线，可指定波长）
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/focal.rs`

use super::common::LensArgs;
use clap::Args;

/// focal 子命令参数
#[derive(Args, Debug)]
pub struct FocalArgs {
    #[command(flatten)]
    pub lens: LensArgs,

    /// Evaluate at this wavelength (nm) using the linear dispersion model
    #[arg(short, long)]
    pub wavelength: Option<f64>,
}
