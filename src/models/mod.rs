//! # 数据模型模块
//!
//! 定义单透镜参数、波长网格与像差采样的数据模型。
//!
//! ## 依赖关系
//! - 被 `optics/`, `batch/` 和 `commands/` 使用
//! - 子模块: lens, spectrum

pub mod lens;
pub mod spectrum;

pub use lens::LensSpec;
pub use spectrum::{AberrationSample, WavelengthGrid};
