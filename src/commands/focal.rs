//! # focal 命令实现
//!
//! 用透镜制造者方程计算焦距；指定波长时先按线性色散模型求折射率，
//! 并给出该波长处的色差与合成球差。
//!
//! ## 依赖关系
//! - 使用 `cli/focal.rs` 定义的参数
//! - 使用 `optics/focal.rs`, `optics/dispersion.rs`
//! - 使用 `optics/chromatic.rs`, `optics/spherical.rs`

use crate::cli::focal::FocalArgs;
use crate::error::Result;
use crate::models::LensSpec;
use crate::optics::dispersion::{self, D_LINE_NM};
use crate::optics::{chromatic, spherical};
use crate::utils::output;

/// 执行 focal 命令
pub fn execute(args: FocalArgs) -> Result<()> {
    output::print_header("Lensmaker's Equation");

    let lens = args.lens.resolve()?;
    output::print_info(&lens.to_string());

    let wavelength = args.wavelength.unwrap_or(D_LINE_NM);
    let (n, focal) = focal_at(&lens, wavelength)?;
    log::debug!("focal length at {} nm: n = {}, f = {}", wavelength, n, focal);

    output::print_value("Wavelength", &format!("{:.2} nm", wavelength));
    output::print_value("Refractive index", &format!("{:.6}", n));
    output::print_value("Focal length", &format!("{:.6} mm", focal));

    if args.wavelength.is_some() {
        let (ca, sa) = aberrations_at(&lens, wavelength)?;
        output::print_value("Chromatic |Δf|", &format!("{:.6} mm", ca));
        output::print_value("Spherical", &format!("{:.6} mm", sa));
    }

    Ok(())
}

/// 指定波长处的 (色差, 合成球差)
pub fn aberrations_at(lens: &LensSpec, wavelength: f64) -> Result<(f64, f64)> {
    let focal_d = lens.focal_length_d()?;
    let ca = chromatic::chromatic_aberration(
        focal_d,
        lens.n_d,
        lens.abbe,
        wavelength,
        lens.r1,
        lens.r2,
        lens.thickness,
    )?;
    let sa = spherical::spherical_aberration(
        &[wavelength],
        lens.r1,
        lens.r2,
        lens.thickness,
        lens.n_d,
        lens.abbe,
    )?;
    Ok((ca, sa[0]))
}

/// 指定波长处的 (折射率, 焦距)
pub fn focal_at(lens: &LensSpec, wavelength: f64) -> Result<(f64, f64)> {
    let n = dispersion::refractive_index(lens.n_d, lens.abbe, wavelength)?;
    let focal = lens.focal_length_at(n)?;
    Ok((n, focal))
}
