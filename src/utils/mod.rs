//! # 工具函数模块
//!
//! 提供美化输出、进度条与终端交互输入等工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `batch/` 模块使用
//! - 子模块: output, progress, prompt

pub mod output;
pub mod progress;
pub mod prompt;
