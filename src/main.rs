//! # Singlet - 单透镜像差分析工具
//!
//! 由透镜几何与材料参数计算色差与简化球差，并生成图表。
//!
//! ## 子命令
//! - `focal`   - 透镜制造者方程求焦距
//! - `analyze` - 单透镜色差/球差分析，输出表格、图表与数据
//! - `batch`   - 透镜目录 CSV 的并行批量分析
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── optics/   (数值核心、绘图、导出)
//!   │     ├── batch/    (目录读取与并行执行)
//!   │     └── models/   (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod optics;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        log::debug!("command failed: {:?}", e);
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
