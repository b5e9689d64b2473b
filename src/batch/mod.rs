//! # 批量处理模块
//!
//! 提供目录扫描与逐文件解析的批量处理能力。
//!
//! ## 功能
//! - 展开 `<dir>/*.<ext>` 收集文件列表
//! - 单线程顺序处理（stat → 读取 → 解析）
//! - 带标签的单文件结果与统计
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 使用
//! - 使用 `glob` 展开模式
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchResult, BatchRunner, FileOutcome};
