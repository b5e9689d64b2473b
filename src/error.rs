//! # 统一错误处理模块
//!
//! 定义 feedbench 的所有错误类型，使用 `thiserror` 派生。
//!
//! 扫描过程中的单文件错误不会向上传播，而是被渲染为字符串
//! 存入 `batch::FileOutcome`；只有命令层之外的错误才会导致非零退出。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// feedbench 统一错误类型
#[derive(Error, Debug)]
pub enum FeedbenchError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to stat entry: {path}")]
    StatError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 匹配与解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Failed to parse feed {path}: {reason}")]
    FeedParseError { path: String, reason: String },
}

impl FeedbenchError {
    /// 带底层原因的完整描述（用于单行输出）
    pub fn detail(&self) -> String {
        match self {
            FeedbenchError::FileReadError { source, .. }
            | FeedbenchError::StatError { source, .. } => format!("{}: {}", self, source),
            _ => self.to_string(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, FeedbenchError>;
