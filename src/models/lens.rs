//! # 单透镜数据模型
//!
//! 描述设计波长 (d 线, 589 nm) 下的厚单透镜：两个曲率半径、中心厚度、
//! d 线折射率与阿贝数。
//!
//! ## 依赖关系
//! - 被 `optics/`, `commands/`, `batch/` 使用
//! - 使用 `optics/focal.rs` 校验焦距是否存在

use crate::error::{Result, SingletError};
use crate::optics::focal;

/// 厚单透镜参数（不可变输入）
#[derive(Debug, Clone, PartialEq)]
pub struct LensSpec {
    /// 透镜名称（目录文件中的标识）
    pub name: String,
    /// 前表面曲率半径 R1 (mm)
    pub r1: f64,
    /// 后表面曲率半径 R2 (mm)
    pub r2: f64,
    /// 中心厚度 t (mm)
    pub thickness: f64,
    /// d 线折射率
    pub n_d: f64,
    /// 阿贝数 V
    pub abbe: f64,
}

fn default_name() -> String {
    "lens".to_string()
}

impl LensSpec {
    pub fn new(r1: f64, r2: f64, thickness: f64, n_d: f64, abbe: f64) -> Self {
        LensSpec {
            name: default_name(),
            r1,
            r2,
            thickness,
            n_d,
            abbe,
        }
    }

    /// 设置名称
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// 任意折射率下的焦距（几何不变）
    pub fn focal_length_at(&self, n: f64) -> Result<f64> {
        focal::focal_length(self.r1, self.r2, self.thickness, n)
    }

    /// 设计波长 (d 线) 焦距
    pub fn focal_length_d(&self) -> Result<f64> {
        self.focal_length_at(self.n_d)
    }

    /// 校验参数范围，并确认 d 线焦距有限
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("R1", self.r1),
            ("R2", self.r2),
            ("thickness", self.thickness),
            ("n_d", self.n_d),
            ("Abbe number", self.abbe),
        ];
        for (label, value) in fields {
            if !value.is_finite() {
                return Err(self.invalid(format!("{} must be finite, got {}", label, value)));
            }
        }

        if self.thickness < 0.0 {
            return Err(self.invalid(format!(
                "thickness must be >= 0, got {}",
                self.thickness
            )));
        }
        if self.n_d <= 1.0 {
            return Err(self.invalid(format!("n_d must be > 1, got {}", self.n_d)));
        }
        if self.abbe <= 0.0 {
            return Err(SingletError::InvalidAbbeNumber(self.abbe));
        }

        self.focal_length_d().map(|_| ())
    }

    fn invalid(&self, reason: String) -> SingletError {
        SingletError::InvalidLens {
            name: self.name.clone(),
            reason,
        }
    }
}

impl std::fmt::Display for LensSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: R1 = {} mm, R2 = {} mm, t = {} mm, n_d = {}, V = {}",
            self.name, self.r1, self.r2, self.thickness, self.n_d, self.abbe
        )
    }
}
