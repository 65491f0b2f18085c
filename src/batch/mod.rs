//! # 批量处理模块
//!
//! 对透镜目录中的每个透镜并行执行像差分析。
//!
//! ## 功能
//! - 读取 CSV 透镜目录
//! - 并行处理
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod catalog;
pub mod runner;

pub use runner::{BatchRunner, ProcessResult};
