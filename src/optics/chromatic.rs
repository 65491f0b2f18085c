//! # 色差估计
//!
//! 在查询波长处用线性色散模型重新计算折射率与焦距，
//! 返回相对 d 线焦距的绝对偏移 |f_d - f(λ)|。
//!
//! ## 依赖关系
//! - 被 `optics/calculator.rs`, `commands/focal.rs` 调用
//! - 使用 `optics/dispersion.rs`, `optics/focal.rs`

use crate::error::Result;
use crate::optics::{dispersion, focal};

/// 相对 d 线焦距的绝对焦移
pub fn focal_shift(focal_d: f64, focal_lambda: f64) -> f64 {
    (focal_d - focal_lambda).abs()
}

/// 单个波长处的色差 (mm)，恒为非负
pub fn chromatic_aberration(
    focal_d: f64,
    n_d: f64,
    abbe: f64,
    wavelength: f64,
    r1: f64,
    r2: f64,
    t: f64,
) -> Result<f64> {
    let n_lambda = dispersion::refractive_index(n_d, abbe, wavelength)?;
    let focal_lambda =
        focal::focal_length(r1, r2, t, n_lambda).map_err(|e| e.at_wavelength(wavelength))?;
    Ok(focal_shift(focal_d, focal_lambda))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SingletError;
    use crate::models::WavelengthGrid;
    use crate::optics::dispersion::D_LINE_NM;

    #[test]
    fn test_zero_at_d_line() {
        let cases = [
            (50.0, -50.0, 5.0, 1.5, 60.0),
            (120.0, 300.0, 4.0, 1.62, 36.4),
            (-80.0, 45.0, 2.5, 1.7, 29.5),
        ];
        for (r1, r2, t, n_d, v) in cases {
            let f_d = focal::focal_length(r1, r2, t, n_d).unwrap();
            let ca = chromatic_aberration(f_d, n_d, v, D_LINE_NM, r1, r2, t).unwrap();
            assert_eq!(ca, 0.0);
        }
    }

    #[test]
    fn test_reference_scenario_endpoints() {
        let f_d = focal::focal_length(50.0, -50.0, 5.0, 1.5).unwrap();
        for wl in [400.0, 750.0] {
            let ca = chromatic_aberration(f_d, 1.5, 60.0, wl, 50.0, -50.0, 5.0).unwrap();
            assert!(ca.is_finite());
            assert!(ca > 0.0);
        }
    }

    #[test]
    fn test_matches_manual_computation() {
        let f_d = focal::focal_length(50.0, -50.0, 5.0, 1.5).unwrap();
        let n_700 = 1.5 + (0.5 / 60.0) * (700.0 - 589.0);
        let f_700 = focal::focal_length(50.0, -50.0, 5.0, n_700).unwrap();
        let ca = chromatic_aberration(f_d, 1.5, 60.0, 700.0, 50.0, -50.0, 5.0).unwrap();
        assert!((ca - (f_d - f_700).abs()).abs() < 1e-12);
    }

    #[test]
    fn test_always_non_negative() {
        let f_d = focal::focal_length(50.0, -50.0, 5.0, 1.5).unwrap();
        let grid = WavelengthGrid::linspace(380.0, 780.0, 41).unwrap();
        for &wl in grid.as_slice() {
            let ca = chromatic_aberration(f_d, 1.5, 60.0, wl, 50.0, -50.0, 5.0).unwrap();
            assert!(ca >= 0.0);
        }
    }

    #[test]
    fn test_focal_shift_symmetric() {
        assert_eq!(focal_shift(100.0, 98.5), 1.5);
        assert_eq!(focal_shift(98.5, 100.0), 1.5);
        assert_eq!(focal_shift(42.0, 42.0), 0.0);
    }

    #[test]
    fn test_zero_abbe_rejected() {
        let f_d = focal::focal_length(50.0, -50.0, 5.0, 1.5).unwrap();
        assert!(matches!(
            chromatic_aberration(f_d, 1.5, 0.0, 500.0, 50.0, -50.0, 5.0),
            Err(SingletError::InvalidAbbeNumber(_))
        ));
    }

    #[test]
    fn test_unit_index_wavelength_fails() {
        // V = 1, λ = 588 nm: n(λ) = 1.5 - 0.5 = 1，光焦度为零
        let f_d = focal::focal_length(50.0, -50.0, 0.0, 1.5).unwrap();
        let result = chromatic_aberration(f_d, 1.5, 1.0, 588.0, 50.0, -50.0, 0.0);
        match result {
            Err(SingletError::UndefinedFocalLength { reason }) => {
                assert!(reason.contains("at 588 nm"));
            }
            other => panic!("expected UndefinedFocalLength, got {:?}", other),
        }
    }
}
