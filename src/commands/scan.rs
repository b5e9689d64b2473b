//! # scan 命令实现
//!
//! 展开 `<dir>/*.<ext>`，用同一个 feed-rs 解析器实例逐个解析匹配文件。
//!
//! ## 功能
//! - 默认静默：所有单文件错误都被吸收，不产生输出，退出码始终为 0
//! - `--verbose`: 每个跳过/失败的条目打印一行
//! - `--report`: 结束后打印统计表和失败列表
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的参数
//! - 使用 `batch/` 收集与执行
//! - 使用 `parsers/` 构造解析器
//! - 使用 `utils/output.rs`

use crate::batch::{BatchResult, BatchRunner, FileCollector, FileOutcome};
use crate::cli::scan::ScanArgs;
use crate::error::Result;
use crate::parsers::{self, FeedParser};
use crate::utils::output;

use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 失败详情最多显示条数
const MAX_LISTED_FAILURES: usize = 10;

/// 扫描配置
#[derive(Debug)]
pub struct ScanOptions {
    pub directory: PathBuf,
    pub extension: String,
    pub report: bool,
    pub verbose: bool,
    pub progress: bool,
}

impl From<ScanArgs> for ScanOptions {
    fn from(args: ScanArgs) -> Self {
        Self {
            directory: args.directory,
            extension: args.extension,
            report: args.report,
            verbose: args.verbose,
            progress: args.progress,
        }
    }
}

/// 执行 scan 命令
pub fn execute(args: ScanArgs) -> Result<()> {
    let options = ScanOptions::from(args);
    scan_with(parsers::default_parser(), &options);
    Ok(())
}

/// 使用给定解析器执行一轮扫描
pub fn scan_with<P: FeedParser>(parser: P, options: &ScanOptions) -> BatchResult {
    let collector = FileCollector::new(&options.directory, &options.extension);

    let files = match collector.collect() {
        Ok(files) => files,
        Err(e) => {
            if options.verbose || options.report {
                output::print_warning(&e.detail());
            }
            Vec::new()
        }
    };

    if options.report {
        output::print_header("Feed Parsing Benchmark (feed-rs)");
        output::print_info(&format!(
            "Found {} entries matching '*.{}' in '{}'",
            files.len(),
            options.extension,
            options.directory.display()
        ));
    }

    let mut runner = BatchRunner::new(parser).with_progress(options.progress);
    let verbose = options.verbose;
    let result = runner.run(&files, |outcome| {
        if verbose {
            print_outcome(&outcome);
        }
    });

    if options.report {
        print_report(&result);
    }

    result
}

/// 打印单个非成功结果
fn print_outcome<F>(outcome: &FileOutcome<F>) {
    match outcome {
        FileOutcome::Parsed { .. } => {}
        FileOutcome::Skipped { reason, .. } => output::print_skip(reason),
        FileOutcome::ReadFailed { reason, .. } | FileOutcome::ParseFailed { reason, .. } => {
            output::print_warning(&format!(
                "Error in {}: {}",
                file_label(outcome.path()),
                reason
            ))
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Outcome")]
    outcome: &'static str,
    #[tabled(rename = "Files")]
    count: usize,
}

fn summary_rows(result: &BatchResult) -> Vec<SummaryRow> {
    vec![
        SummaryRow {
            outcome: "Parsed",
            count: result.parsed,
        },
        SummaryRow {
            outcome: "Parse failed",
            count: result.parse_failed,
        },
        SummaryRow {
            outcome: "Read failed",
            count: result.read_failed,
        },
        SummaryRow {
            outcome: "Skipped",
            count: result.skipped,
        },
        SummaryRow {
            outcome: "Total",
            count: result.total(),
        },
    ]
}

/// 打印统计
fn print_report(result: &BatchResult) {
    output::print_separator();
    let table = Table::new(summary_rows(result));
    println!("{}", table);

    output::print_done(&format!(
        "Submitted {} files to the parser, {} parsed",
        result.submitted(),
        result.parsed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in result.failures.iter().take(MAX_LISTED_FAILURES) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > MAX_LISTED_FAILURES {
            output::print_warning(&format!(
                "  ... and {} more",
                result.failures.len() - MAX_LISTED_FAILURES
            ));
        }
    }
}
