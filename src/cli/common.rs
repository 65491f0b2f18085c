//! # 公共 CLI 参数
//!
//! 多个子命令共用的参数组：透镜参数、波长网格、图像输出。
//!
//! 参数优先级：命令行 > `SINGLET_*` 环境变量 > 交互式询问。
//!
//! ## 依赖关系
//! - 被 `cli/focal.rs`, `cli/analyze.rs`, `cli/batch.rs` 使用
//! - 使用 `models/` 构造 LensSpec, WavelengthGrid
//! - 使用 `utils/prompt.rs` 询问缺失参数

use crate::error::{Result, SingletError};
use crate::models::{LensSpec, WavelengthGrid};
use crate::optics::plot::PlotOptions;
use crate::utils::prompt::Prompter;

use clap::{Args, ValueEnum};

// ─────────────────────────────────────────────────────────────
// 透镜参数
// ─────────────────────────────────────────────────────────────

/// 透镜参数（缺失项在交互终端上询问）
#[derive(Args, Debug, Clone)]
pub struct LensArgs {
    /// Radius of curvature of the first surface R1 (mm)
    #[arg(long, env = "SINGLET_R1", allow_hyphen_values = true)]
    pub r1: Option<f64>,

    /// Radius of curvature of the second surface R2 (mm)
    #[arg(long, env = "SINGLET_R2", allow_hyphen_values = true)]
    pub r2: Option<f64>,

    /// Center thickness t (mm)
    #[arg(short, long, env = "SINGLET_THICKNESS")]
    pub thickness: Option<f64>,

    /// Refractive index at the d-line (589 nm)
    #[arg(long = "n-d", env = "SINGLET_N_D")]
    pub n_d: Option<f64>,

    /// Abbe number V
    #[arg(long, env = "SINGLET_ABBE")]
    pub abbe: Option<f64>,

    /// Lens name used in plot titles and output file names
    #[arg(long, default_value = "lens")]
    pub name: String,
}

impl LensArgs {
    /// 解析透镜参数，必要时交互询问
    pub fn resolve(&self) -> Result<LensSpec> {
        let prompter = Prompter::attended();
        self.resolve_with(prompter.as_ref())
    }

    /// 使用给定的询问器解析透镜参数（None 表示不可交互）
    pub fn resolve_with(&self, prompter: Option<&Prompter>) -> Result<LensSpec> {
        let fields = [
            (self.r1, "--r1", "Enter radius of curvature R1 (mm)"),
            (self.r2, "--r2", "Enter radius of curvature R2 (mm)"),
            (self.thickness, "--thickness", "Enter lens thickness (mm)"),
            (self.n_d, "--n-d", "Enter refractive index for d-line (589 nm)"),
            (self.abbe, "--abbe", "Enter Abbe number"),
        ];

        let mut values = [0.0_f64; 5];
        for (slot, (given, flag, question)) in values.iter_mut().zip(fields) {
            *slot = match (given, prompter) {
                (Some(value), _) => value,
                (None, Some(p)) => p.ask_f64(question)?,
                (None, None) => {
                    return Err(SingletError::InvalidArgument(format!(
                        "missing {} (not an interactive terminal, cannot prompt)",
                        flag
                    )))
                }
            };
        }

        let [r1, r2, thickness, n_d, abbe] = values;
        let lens = LensSpec::new(r1, r2, thickness, n_d, abbe).with_name(self.name.clone());
        lens.validate()?;
        Ok(lens)
    }
}

// ─────────────────────────────────────────────────────────────
// 波长网格
// ─────────────────────────────────────────────────────────────

/// 波长网格参数
#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    /// Wavelength range in nm (e.g., "400-750")
    #[arg(short, long, default_value = "400-750")]
    pub range: String,

    /// Number of evenly spaced wavelengths, both ends included
    #[arg(short, long, default_value_t = 10)]
    pub points: usize,
}

impl GridArgs {
    pub fn to_grid(&self) -> Result<WavelengthGrid> {
        let (min, max) = parse_range(&self.range)?;
        WavelengthGrid::linspace(min, max, self.points)
    }
}

/// 解析波长范围 "min-max" (nm)
pub fn parse_range(range: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = range.split('-').collect();
    if parts.len() != 2 {
        return Err(SingletError::InvalidRange(range.to_string()));
    }

    let min: f64 = parts[0]
        .trim()
        .parse()
        .map_err(|_| SingletError::InvalidRange(range.to_string()))?;
    let max: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| SingletError::InvalidRange(range.to_string()))?;

    if !min.is_finite() || !max.is_finite() || min <= 0.0 || max <= min {
        return Err(SingletError::InvalidRange(format!(
            "{} (must be 0 < min < max)",
            range
        )));
    }

    Ok((min, max))
}

// ─────────────────────────────────────────────────────────────
// 图像输出
// ─────────────────────────────────────────────────────────────

/// 图像输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ImageFormat {
    /// PNG image
    #[default]
    Png,
    /// SVG vector image
    Svg,
}

/// 图像参数
#[derive(Args, Debug, Clone)]
pub struct PlotArgs {
    /// Image format for the plots
    #[arg(short, long, value_enum, default_value = "png")]
    pub format: ImageFormat,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 625)]
    pub height: u32,
}

impl PlotArgs {
    pub fn options(&self) -> PlotOptions {
        PlotOptions {
            width: self.width,
            height: self.height,
            use_svg: self.format == ImageFormat::Svg,
        }
    }
}
