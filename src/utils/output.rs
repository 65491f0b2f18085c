//! # 美化输出工具
//!
//! 提供统一的终端输出样式。面向用户的状态行走这里，
//! 诊断信息走 `log` 宏（由 `RUST_LOG` 控制）。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印键值对结果（如焦距）
pub fn print_value(label: &str, value: &str) {
    println!("{} {:<28} {}", "[=]".cyan().bold(), label, value.bold());
}

/// 打印输出文件路径
pub fn print_written(path: &std::path::Path) {
    println!(
        "{} {} {}",
        "[OK]".green().bold(),
        "->".cyan(),
        path.display()
    );
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}
