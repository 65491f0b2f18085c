//! # 终端交互输入
//!
//! 命令行未给出透镜参数时，在交互终端上逐项询问。
//! 非交互环境（管道、CI）下不提示，由调用方报错。
//!
//! ## 依赖关系
//! - 被 `cli/common.rs` 使用
//! - 使用 `console` crate 读取终端输入

use crate::error::{Result, SingletError};
use crate::utils::output;

use colored::Colorize;
use console::Term;

/// 交互式数值询问
pub struct Prompter {
    term: Term,
}

impl Prompter {
    /// 仅当 stdin/stdout 均连接终端时可用
    pub fn attended() -> Option<Self> {
        if console::user_attended() {
            Some(Prompter {
                term: Term::stdout(),
            })
        } else {
            None
        }
    }

    /// 询问一个有限实数，输入无效时重复询问
    pub fn ask_f64(&self, question: &str) -> Result<f64> {
        loop {
            self.term
                .write_str(&format!("{} {}: ", "[?]".cyan().bold(), question))
                .map_err(SingletError::PromptError)?;
            let line = self.term.read_line().map_err(SingletError::PromptError)?;

            match parse_number(&line) {
                Some(value) => {
                    log::debug!("prompt '{}' -> {}", question, value);
                    return Ok(value);
                }
                None => output::print_warning(&format!("'{}' is not a number", line.trim())),
            }
        }
    }
}

/// 解析用户输入的实数
pub fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
