//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `optics/`, `models/`, `batch/`, `utils/`
//! - 子模块: focal, analyze, batch

pub mod analyze;
pub mod batch;
pub mod focal;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Focal(args) => focal::execute(args),
        Commands::Analyze(args) => analyze::execute(args),
        Commands::Batch(args) => batch::execute(args),
    }
}
