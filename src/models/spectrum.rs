//! # 波长网格与像差采样
//!
//! 两个像差估计器共用同一波长网格，输出与网格逐点对齐的采样值。
//!
//! ## 依赖关系
//! - 被 `optics/`, `commands/` 使用
//! - 无外部模块依赖

use crate::error::{Result, SingletError};

use serde::{Deserialize, Serialize};

/// 可见光默认范围下限 (nm)
pub const VISIBLE_MIN_NM: f64 = 400.0;
/// 可见光默认范围上限 (nm)
pub const VISIBLE_MAX_NM: f64 = 750.0;
/// 默认采样点数
pub const DEFAULT_POINTS: usize = 10;

/// 有序波长序列 (nm)
#[derive(Debug, Clone, PartialEq)]
pub struct WavelengthGrid {
    wavelengths: Vec<f64>,
}

impl WavelengthGrid {
    /// 等间距网格，包含两个端点
    pub fn linspace(start: f64, end: f64, points: usize) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(SingletError::InvalidRange(format!(
                "{}-{} (bounds must be finite)",
                start, end
            )));
        }
        if points == 0 {
            return Err(SingletError::InvalidArgument(
                "wavelength grid needs at least one point".to_string(),
            ));
        }

        let wavelengths = if points == 1 {
            vec![start]
        } else {
            let step = (end - start) / (points - 1) as f64;
            (0..points)
                .map(|i| {
                    if i == points - 1 {
                        end
                    } else {
                        start + i as f64 * step
                    }
                })
                .collect()
        };

        Self::from_values(wavelengths)
    }

    /// 可见光默认网格：400-750 nm，10 点
    pub fn visible() -> Self {
        let step = (VISIBLE_MAX_NM - VISIBLE_MIN_NM) / (DEFAULT_POINTS - 1) as f64;
        let mut wavelengths: Vec<f64> = (0..DEFAULT_POINTS)
            .map(|i| VISIBLE_MIN_NM + i as f64 * step)
            .collect();
        wavelengths[DEFAULT_POINTS - 1] = VISIBLE_MAX_NM;
        WavelengthGrid { wavelengths }
    }

    /// 从显式波长列表创建（保持输入顺序）
    pub fn from_values(wavelengths: Vec<f64>) -> Result<Self> {
        if wavelengths.is_empty() {
            return Err(SingletError::InvalidArgument(
                "wavelength grid is empty".to_string(),
            ));
        }
        if let Some(bad) = wavelengths.iter().find(|w| !w.is_finite() || **w <= 0.0) {
            return Err(SingletError::InvalidArgument(format!(
                "wavelength must be a positive finite value, got {}",
                bad
            )));
        }
        Ok(WavelengthGrid { wavelengths })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.wavelengths
    }

    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    /// 最短与最长波长
    pub fn bounds(&self) -> (f64, f64) {
        let min = self
            .wavelengths
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        let max = self
            .wavelengths
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }
}

impl Default for WavelengthGrid {
    fn default() -> Self {
        Self::visible()
    }
}

/// 单个波长处的像差值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AberrationSample {
    /// 波长 (nm)
    pub wavelength: f64,
    /// 像差 (mm)，色差非负，球差带符号
    pub value: f64,
}

impl AberrationSample {
    pub fn new(wavelength: f64, value: f64) -> Self {
        AberrationSample { wavelength, value }
    }
}

/// 采样序列中绝对值最大的样本
pub fn max_abs(samples: &[AberrationSample]) -> Option<AberrationSample> {
    samples
        .iter()
        .copied()
        .max_by(|a, b| a.value.abs().total_cmp(&b.value.abs()))
}
