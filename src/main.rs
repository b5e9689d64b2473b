//! # feedbench - 跨语言 feed 解析基准驱动
//!
//! 对 `<DIRECTORY>/*.<EXTENSION>` 匹配到的每个文件调用一次 feed-rs 解析器，
//! 与其他语言生态中的同类驱动程序（gofeed、feedparser、feedjira……）对比吞吐。
//!
//! 默认不产生任何输出，单文件错误一律吸收，正常结束即退出码 0。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (文件收集与顺序执行)
//!   │     └── parsers/   (被测解析器接口)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    // 扫描本身吸收所有单文件错误，这里只处理扫描之外的错误
    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&e.detail());
        std::process::exit(1);
    }
}
