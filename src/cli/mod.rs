//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 命令结构
//! `feedbench <DIRECTORY> <EXTENSION> [--report] [--verbose] [--progress]`
//!
//! 没有子命令：两个位置参数与其他语言的驱动程序保持一致，
//! 所有附加开关默认关闭。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: scan

pub mod scan;

use clap::Parser;

/// feedbench - 跨语言 feed 解析基准驱动
#[derive(Parser, Debug)]
#[command(name = "feedbench")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Parse every <DIRECTORY>/*.<EXTENSION> file with feed-rs", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub scan: scan::ScanArgs,
}
