//! # 线性色散模型
//!
//! 以 d 线为锚点的一阶近似：
//!
//! ```text
//! n(λ) = n_d + ((n_d - 1) / V) * (λ - 589)
//! ```
//!
//! 不是物理色散曲线（如 Sellmeier），只按与 589 nm 的距离线性外推，
//! 阿贝数越大色散越小。
//!
//! ## 依赖关系
//! - 被 `optics/chromatic.rs`, `optics/spherical.rs`, `optics/calculator.rs` 调用

use crate::error::{Result, SingletError};

/// d 线波长 (nm)，钠 D 线
pub const D_LINE_NM: f64 = 589.0;

/// 给定波长处的折射率
pub fn refractive_index(n_d: f64, abbe: f64, wavelength: f64) -> Result<f64> {
    if !abbe.is_finite() || abbe <= 0.0 {
        return Err(SingletError::InvalidAbbeNumber(abbe));
    }
    Ok(n_d + ((n_d - 1.0) / abbe) * (wavelength - D_LINE_NM))
}
