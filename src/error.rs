//! # 统一错误处理模块
//!
//! 定义 Singlet 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Singlet 统一错误类型
#[derive(Error, Debug)]
pub enum SingletError {
    // ─────────────────────────────────────────────────────────────
    // 数值域错误
    // ─────────────────────────────────────────────────────────────
    #[error("This lens geometry/material combination has no finite focal length: {reason}")]
    UndefinedFocalLength { reason: String },

    #[error("Invalid Abbe number: {0} (must be a finite value > 0)")]
    InvalidAbbeNumber(f64),

    #[error("Invalid lens '{name}': {reason}")]
    InvalidLens { name: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input from terminal")]
    PromptError(#[source] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to render plot: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl SingletError {
    /// 构造焦距不存在错误
    pub fn undefined_focal(reason: impl Into<String>) -> Self {
        SingletError::UndefinedFocalLength {
            reason: reason.into(),
        }
    }

    /// 为焦距不存在错误补充波长信息，其他错误原样返回
    pub fn at_wavelength(self, wavelength: f64) -> Self {
        match self {
            SingletError::UndefinedFocalLength { reason } => SingletError::UndefinedFocalLength {
                reason: format!("at {} nm: {}", wavelength, reason),
            },
            other => other,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SingletError>;
