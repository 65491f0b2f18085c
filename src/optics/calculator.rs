//! # 像差计算器
//!
//! 组合焦距、色差与球差三个纯函数，生成完整的像差报告。
//!
//! ## 算法概述
//! 1. 预先计算 d 线焦距 f_d（整个分析的参考值）
//! 2. 单遍扫描网格：每个波长只求一次 n(λ) 与 f(λ)
//! 3. 由 f(λ) 派生色差 |f_d - f(λ)| 与简化边缘光线球差
//! 4. 统计两类像差的最大绝对值，供对比柱状图使用
//!
//! ## 依赖关系
//! - 被 `commands/analyze.rs`, `commands/batch.rs` 调用
//! - 使用 `optics/dispersion.rs`, `optics/chromatic.rs`, `optics/spherical.rs`
//! - 使用 `models/` 的 LensSpec, WavelengthGrid, AberrationSample

use crate::error::Result;
use crate::models::spectrum::max_abs;
use crate::models::{AberrationSample, LensSpec, WavelengthGrid};
use crate::optics::{chromatic, dispersion, spherical};

/// 单个波长的完整计算结果
#[derive(Debug, Clone, PartialEq)]
pub struct WavelengthRow {
    /// 波长 (nm)
    pub wavelength: f64,
    /// 线性色散模型折射率
    pub refractive_index: f64,
    /// 该波长焦距 (mm)
    pub focal_length: f64,
    /// 色差 |f_d - f(λ)| (mm)
    pub chromatic: f64,
    /// 合成球差 (mm)
    pub spherical: f64,
}

/// 像差报告
#[derive(Debug, Clone)]
pub struct AberrationReport {
    /// 输入透镜
    pub lens: LensSpec,
    /// d 线焦距 (mm)
    pub focal_d: f64,
    /// 逐波长结果（与网格顺序一致）
    pub rows: Vec<WavelengthRow>,
    /// 色差最大绝对值
    pub max_chromatic: AberrationSample,
    /// 球差最大绝对值
    pub max_spherical: AberrationSample,
}

impl AberrationReport {
    /// 色差采样序列
    pub fn chromatic_samples(&self) -> Vec<AberrationSample> {
        self.rows
            .iter()
            .map(|r| AberrationSample::new(r.wavelength, r.chromatic))
            .collect()
    }

    /// 球差采样序列
    pub fn spherical_samples(&self) -> Vec<AberrationSample> {
        self.rows
            .iter()
            .map(|r| AberrationSample::new(r.wavelength, r.spherical))
            .collect()
    }
}

/// 像差计算器
pub struct AberrationCalculator {
    lens: LensSpec,
}

impl AberrationCalculator {
    /// 创建新的像差计算器
    pub fn new(lens: LensSpec) -> Self {
        Self { lens }
    }

    /// 在波长网格上计算像差报告
    pub fn analyze(&self, grid: &WavelengthGrid) -> Result<AberrationReport> {
        let lens = &self.lens;
        let focal_d = lens.focal_length_d()?;

        let rows = grid
            .as_slice()
            .iter()
            .map(|&wavelength| -> Result<WavelengthRow> {
                let n = dispersion::refractive_index(lens.n_d, lens.abbe, wavelength)?;
                let focal_length = lens
                    .focal_length_at(n)
                    .map_err(|e| e.at_wavelength(wavelength))?;
                Ok(WavelengthRow {
                    wavelength,
                    refractive_index: n,
                    focal_length,
                    chromatic: chromatic::focal_shift(focal_d, focal_length),
                    spherical: spherical::marginal_minus_paraxial(focal_length, wavelength),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut report = AberrationReport {
            lens: lens.clone(),
            focal_d,
            rows,
            max_chromatic: AberrationSample::new(dispersion::D_LINE_NM, 0.0),
            max_spherical: AberrationSample::new(dispersion::D_LINE_NM, 0.0),
        };
        // 网格非空，max_abs 一定有值
        if let Some(sample) = max_abs(&report.chromatic_samples()) {
            report.max_chromatic = sample;
        }
        if let Some(sample) = max_abs(&report.spherical_samples()) {
            report.max_spherical = sample;
        }

        Ok(report)
    }
}
