//! # 简化球差估计
//!
//! 对每个波长：
//! 1. 线性色散模型求 n(λ)
//! 2. 透镜制造者方程求 f(λ)，作为该波长的近轴焦距
//! 3. 边缘光线焦距取 f(λ) - 0.001 * (λ - 589)
//! 4. 输出 边缘 - 近轴
//!
//! 第 3 步是与孔径、光线高度无关的线性占位项，结果化简为
//! `-0.001 * (λ - 589)`，与透镜几何无关。公式按原样保留以保证输出兼容。
//!
//! 任一采样点焦距不存在时整批失败，错误信息中带出对应波长。
//!
//! ## 依赖关系
//! - 被 `optics/calculator.rs`, `commands/focal.rs` 调用
//! - 使用 `optics/dispersion.rs`, `optics/focal.rs`

use crate::error::Result;
use crate::optics::dispersion::{self, D_LINE_NM};
use crate::optics::focal;

/// 边缘光线线性修正系数 (mm/nm)
pub const MARGINAL_RAY_COEFFICIENT: f64 = 0.001;

/// 由该波长近轴焦距得到合成球差 (边缘 - 近轴)
pub fn marginal_minus_paraxial(focal_lambda: f64, wavelength: f64) -> f64 {
    let paraxial = focal_lambda;
    let marginal = focal_lambda - MARGINAL_RAY_COEFFICIENT * (wavelength - D_LINE_NM);
    marginal - paraxial
}

/// 单个波长处的合成球差 (mm)
pub fn spherical_aberration_at(
    wavelength: f64,
    r1: f64,
    r2: f64,
    t: f64,
    n_d: f64,
    abbe: f64,
) -> Result<f64> {
    let n_lambda = dispersion::refractive_index(n_d, abbe, wavelength)?;
    let focal_lambda =
        focal::focal_length(r1, r2, t, n_lambda).map_err(|e| e.at_wavelength(wavelength))?;
    Ok(marginal_minus_paraxial(focal_lambda, wavelength))
}

/// 对波长序列计算合成球差，输出与输入等长且顺序一致
pub fn spherical_aberration(
    wavelengths: &[f64],
    r1: f64,
    r2: f64,
    t: f64,
    n_d: f64,
    abbe: f64,
) -> Result<Vec<f64>> {
    wavelengths
        .iter()
        .map(|&wavelength| spherical_aberration_at(wavelength, r1, r2, t, n_d, abbe))
        .collect()
}
