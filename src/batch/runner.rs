//! # 批量执行器
//!
//! 在单线程中顺序处理路径列表：stat → 读取 → 解析。
//!
//! ## 功能
//! - 每个路径产生一个带标签的 `FileOutcome`，交给调用方回调处理
//! - 读取失败不会跳过解析，已读到的部分内容（可能为空）照常提交
//! - 可选进度条；回调在 `suspend` 中执行，避免输出与进度条交错
//! - 结果计数汇总到 `BatchResult`
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `parsers::FeedParser` 抽象被测解析器
//! - 使用 `utils/progress.rs` 创建进度条

use crate::error::FeedbenchError;
use crate::parsers::FeedParser;
use crate::utils::progress;

use indicatif::ProgressBar;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

/// 单个路径的处理结果
#[derive(Debug)]
pub enum FileOutcome<F> {
    /// 解析成功
    Parsed { path: PathBuf, feed: F },
    /// 读取失败（仍以部分内容调用过解析器，结果丢弃）
    ReadFailed { path: PathBuf, reason: String },
    /// 解析失败
    ParseFailed { path: PathBuf, reason: String },
    /// 跳过（stat 失败或为目录），未读取、未解析
    Skipped { path: PathBuf, reason: String },
}

impl<F> FileOutcome<F> {
    /// 对应路径
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Parsed { path, .. }
            | FileOutcome::ReadFailed { path, .. }
            | FileOutcome::ParseFailed { path, .. }
            | FileOutcome::Skipped { path, .. } => path,
        }
    }
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 解析成功数量
    pub parsed: usize,
    /// 解析失败数量
    pub parse_failed: usize,
    /// 读取失败数量
    pub read_failed: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败详情 (路径, 原因)
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge<F>(&mut self, outcome: &FileOutcome<F>) {
        match outcome {
            FileOutcome::Parsed { .. } => self.parsed += 1,
            FileOutcome::Skipped { .. } => self.skipped += 1,
            FileOutcome::ReadFailed { path, reason } => {
                self.read_failed += 1;
                self.failures
                    .push((path.display().to_string(), reason.clone()));
            }
            FileOutcome::ParseFailed { path, reason } => {
                self.parse_failed += 1;
                self.failures
                    .push((path.display().to_string(), reason.clone()));
            }
        }
    }

    /// 提交给解析器的数量
    pub fn submitted(&self) -> usize {
        self.parsed + self.parse_failed + self.read_failed
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.submitted() + self.skipped
    }
}

/// 批量执行器
///
/// 持有唯一的解析器实例，整轮扫描中顺序复用。
pub struct BatchRunner<P> {
    parser: P,
    show_progress: bool,
}

impl<P: FeedParser> BatchRunner<P> {
    /// 创建新的批量执行器
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            show_progress: false,
        }
    }

    /// 设置是否显示进度条
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// 顺序处理文件列表，每个结果交给 `on_outcome`
    pub fn run<C>(&mut self, files: &[PathBuf], mut on_outcome: C) -> BatchResult
    where
        C: FnMut(FileOutcome<P::Feed>),
    {
        let pb = if self.show_progress {
            progress::create_progress_bar(files.len() as u64, "Parsing")
        } else {
            ProgressBar::hidden()
        };

        let mut batch_result = BatchResult::default();

        for file in files {
            let outcome = self.process(file);
            batch_result.merge(&outcome);
            pb.suspend(|| on_outcome(outcome));
            pb.inc(1);
        }

        pb.finish_and_clear();
        batch_result
    }

    /// 处理单个路径
    pub fn process(&mut self, path: &Path) -> FileOutcome<P::Feed> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => {
                return FileOutcome::Skipped {
                    path: path.to_path_buf(),
                    reason: format!("Not a regular file: {}", path.display()),
                };
            }
            Ok(_) => {}
            Err(e) => {
                let err = FeedbenchError::StatError {
                    path: path.display().to_string(),
                    source: e,
                };
                return FileOutcome::Skipped {
                    path: path.to_path_buf(),
                    reason: err.detail(),
                };
            }
        }

        let (content, read_error) = read_content(path);
        let parsed = self.parser.parse(&content);
        drop(content);

        if let Some(err) = read_error {
            return FileOutcome::ReadFailed {
                path: path.to_path_buf(),
                reason: err.detail(),
            };
        }

        match parsed {
            Ok(feed) => FileOutcome::Parsed {
                path: path.to_path_buf(),
                feed,
            },
            Err(e) => FileOutcome::ParseFailed {
                path: path.to_path_buf(),
                reason: FeedbenchError::FeedParseError {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                }
                .detail(),
            },
        }
    }
}

/// 读取完整文件内容
///
/// 出错时返回已读到的部分内容（打开失败则为空）以及错误。
pub fn read_content(path: &Path) -> (Vec<u8>, Option<FeedbenchError>) {
    let mut buf = Vec::new();
    let result = File::open(path).and_then(|mut f| f.read_to_end(&mut buf));

    match result {
        Ok(_) => (buf, None),
        Err(e) => (
            buf,
            Some(FeedbenchError::FileReadError {
                path: path.display().to_string(),
                source: e,
            }),
        ),
    }
}
