//! # 透镜制造者方程
//!
//! 厚单透镜焦距：
//!
//! ```text
//! 1/f = (n - 1) * [1/R1 - 1/R2 + (n - 1) * t / (n * R1 * R2)]
//! ```
//!
//! 任一分母为零（包括括号项恰好为零的无焦/望远配置）时返回
//! `UndefinedFocalLength`，不会静默返回 inf 或 NaN。
//!
//! ## 依赖关系
//! - 被 `optics/chromatic.rs`, `optics/spherical.rs`, `models/lens.rs` 调用
//! - 无外部模块依赖

use crate::error::{Result, SingletError};

/// 计算厚单透镜焦距 (mm)
pub fn focal_length(r1: f64, r2: f64, t: f64, n: f64) -> Result<f64> {
    if r1 == 0.0 {
        return Err(SingletError::undefined_focal("R1 is zero"));
    }
    if r2 == 0.0 {
        return Err(SingletError::undefined_focal("R2 is zero"));
    }
    if n == 0.0 {
        return Err(SingletError::undefined_focal("refractive index is zero"));
    }

    let bracket = 1.0 / r1 - 1.0 / r2 + (n - 1.0) * t / (n * r1 * r2);
    if bracket == 0.0 {
        return Err(SingletError::undefined_focal(format!(
            "curvature terms cancel (R1 = {}, R2 = {}, t = {}, n = {})",
            r1, r2, t, n
        )));
    }

    let power = (n - 1.0) * bracket;
    if power == 0.0 {
        return Err(SingletError::undefined_focal(format!(
            "optical power is zero at n = {}",
            n
        )));
    }

    let f = 1.0 / power;
    if !f.is_finite() {
        return Err(SingletError::undefined_focal(format!(
            "non-finite result for R1 = {}, R2 = {}, t = {}, n = {}",
            r1, r2, t, n
        )));
    }

    Ok(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed_form(r1: f64, r2: f64, t: f64, n: f64) -> f64 {
        let inv = (n - 1.0) * (1.0 / r1 - 1.0 / r2 + (n - 1.0) * t / (n * r1 * r2));
        1.0 / inv
    }

    #[test]
    fn test_symmetric_biconvex_100() {
        // 1/f = 0.5 * (0.02 - 2.5 / 15000)
        let expected = 1.0 / (0.5 * (0.02 - 2.5 / 15000.0));
        let f = focal_length(100.0, -100.0, 5.0, 1.5).unwrap();
        assert!((f - expected).abs() < 1e-9);
        assert!((f - 100.840336).abs() < 1e-5);
    }

    #[test]
    fn test_matches_closed_form() {
        let cases = [
            (50.0, -50.0, 5.0, 1.5),
            (120.0, 300.0, 4.0, 1.62),
            (-80.0, 45.0, 2.5, 1.7),
            (30.0, 1.0e6, 8.0, 1.9),
        ];
        for (r1, r2, t, n) in cases {
            let f = focal_length(r1, r2, t, n).unwrap();
            assert!((f - closed_form(r1, r2, t, n)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_thin_lens_limit() {
        // t = 0 时退化为薄透镜公式
        let f = focal_length(50.0, -50.0, 0.0, 1.5).unwrap();
        assert!((f - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_swap_radii_changes_value() {
        let a = focal_length(50.0, 100.0, 5.0, 1.5).unwrap();
        let b = focal_length(100.0, 50.0, 5.0, 1.5).unwrap();
        assert!(a > 0.0);
        assert!(b < 0.0);
    }

    #[test]
    fn test_zero_radius_is_undefined() {
        assert!(matches!(
            focal_length(0.0, -50.0, 5.0, 1.5),
            Err(SingletError::UndefinedFocalLength { .. })
        ));
        assert!(matches!(
            focal_length(50.0, 0.0, 5.0, 1.5),
            Err(SingletError::UndefinedFocalLength { .. })
        ));
    }

    #[test]
    fn test_zero_index_is_undefined() {
        assert!(matches!(
            focal_length(50.0, -50.0, 5.0, 0.0),
            Err(SingletError::UndefinedFocalLength { .. })
        ));
    }

    #[test]
    fn test_unit_index_is_undefined() {
        assert!(matches!(
            focal_length(50.0, -50.0, 5.0, 1.0),
            Err(SingletError::UndefinedFocalLength { .. })
        ));
    }

    #[test]
    fn test_equal_radii_zero_thickness_is_undefined() {
        assert!(matches!(
            focal_length(75.0, 75.0, 0.0, 1.5),
            Err(SingletError::UndefinedFocalLength { .. })
        ));
    }

    #[test]
    fn test_nan_input_is_undefined() {
        assert!(focal_length(f64::NAN, -50.0, 5.0, 1.5).is_err());
    }

    #[test]
    fn test_deterministic() {
        let a = focal_length(50.0, -50.0, 5.0, 1.5).unwrap();
        let b = focal_length(50.0, -50.0, 5.0, 1.5).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
