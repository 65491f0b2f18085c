//! # 光学像差模块
//!
//! 单透镜像差分析的数值核心与输出。
//!
//! ## 子模块
//! - `focal`: 透镜制造者方程
//! - `dispersion`: 线性色散模型
//! - `chromatic`: 色差估计
//! - `spherical`: 简化球差估计
//! - `calculator`: 组合计算，生成报告
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `batch/` 使用
//! - 使用 `models/` 的 LensSpec, WavelengthGrid
//! - 数值部分不做任何 I/O

pub mod calculator;
pub mod chromatic;
pub mod dispersion;
pub mod export;
pub mod focal;
pub mod plot;
pub mod spherical;

pub use calculator::{AberrationCalculator, AberrationReport};
