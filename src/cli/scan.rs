//! # 扫描参数 CLI 定义
//!
//! 目录与扩展名两个位置参数，外加默认关闭的诊断开关。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scan.rs`

use clap::Args;
use std::path::PathBuf;

/// 扫描参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directory containing the feed files (not checked for existence)
    pub directory: PathBuf,

    /// File extension without the leading dot (e.g. xml, atom, json)
    pub extension: String,

    // ─────────────────────────────────────────────────────────────
    // 诊断参数（默认关闭，不影响基准行为）
    // ─────────────────────────────────────────────────────────────
    /// Print a summary of parsed, failed and skipped files
    #[arg(long, default_value_t = false)]
    pub report: bool,

    /// Print one line for every skipped or failed file
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Show a progress bar while parsing
    #[arg(long, default_value_t = false)]
    pub progress: bool,
}
