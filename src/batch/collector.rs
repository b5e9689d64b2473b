//! # 文件收集器
//!
//! 根据目录和扩展名展开 `<dir>/*.<ext>` 模式，收集待解析的路径列表。
//!
//! ## 功能
//! - glob 模式展开（不递归）
//! - 目录部分转义，扩展名原样拼入
//!   （`<DIRECTORY>` 中的 `*`、`?`、`[` 按字面匹配，不会展开）
//! - 展开过程中出错的条目直接丢弃
//!
//! 收集器不区分文件与目录：匹配到的子目录同样会被返回，
//! 由 `runner` 在 stat 阶段跳过。
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `glob` crate

use crate::error::{FeedbenchError, Result};

use glob::Pattern;
use std::path::{Path, PathBuf};

/// 文件收集器
pub struct FileCollector {
    /// 扫描目录
    directory: PathBuf,
    /// 扩展名（不含点）
    extension: String,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(directory: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            extension: extension.into(),
        }
    }

    /// 构造 glob 模式字符串
    pub fn pattern(&self) -> Result<String> {
        let dir = self
            .directory
            .to_str()
            .ok_or_else(|| FeedbenchError::InvalidPattern {
                pattern: self.directory.display().to_string(),
                reason: "directory is not valid UTF-8".to_string(),
            })?;

        let wildcard = format!("*.{}", self.extension);
        if dir.is_empty() {
            return Ok(wildcard);
        }

        let escaped = PathBuf::from(Pattern::escape(dir));
        Ok(join_pattern(&escaped, &wildcard))
    }

    /// 收集所有匹配的路径（顺序由 glob 决定，调用方不应依赖）
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let pattern = self.pattern()?;

        let paths = glob::glob(&pattern).map_err(|e| FeedbenchError::InvalidPattern {
            pattern: pattern.clone(),
            reason: e.msg.to_string(),
        })?;

        Ok(paths.filter_map(|p| p.ok()).collect())
    }
}

fn join_pattern(dir: &Path, wildcard: &str) -> String {
    dir.join(wildcard).to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        let mut names: Vec<String> = paths
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_collect_matches_extension_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.xml"), "<rss/>").unwrap();
        fs::write(dir.path().join("b.xml"), "").unwrap();
        fs::write(dir.path().join("c.txt"), "ignored").unwrap();
        fs::write(dir.path().join("d.xml.bak"), "ignored").unwrap();

        let files = FileCollector::new(dir.path(), "xml").collect().unwrap();
        assert_eq!(names(&files), vec!["a.xml", "b.xml"]);
    }

    #[test]
    fn test_collect_includes_matching_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::create_dir(dir.path().join("nested.xml")).unwrap();
        fs::write(dir.path().join("sub").join("deep.xml"), "").unwrap();

        let files = FileCollector::new(dir.path(), "xml").collect().unwrap();
        assert_eq!(names(&files), vec!["nested.xml"]);
    }

    #[test]
    fn test_collect_hidden_files_match() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".hidden.json"), "{}").unwrap();

        let files = FileCollector::new(dir.path(), "json").collect().unwrap();
        assert_eq!(names(&files), vec![".hidden.json"]);
    }

    #[test]
    fn test_collect_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let files = FileCollector::new(missing, "xml").collect().unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_directory_metacharacters_are_escaped() {
        let dir = tempfile::tempdir().unwrap();
        let odd = dir.path().join("feeds[1]");
        fs::create_dir(&odd).unwrap();
        fs::write(odd.join("a.atom"), "").unwrap();

        let files = FileCollector::new(&odd, "atom").collect().unwrap();
        assert_eq!(names(&files), vec!["a.atom"]);
    }

    #[test]
    fn test_directory_wildcards_not_expanded() {
        let dir = tempfile::tempdir().unwrap();
        let feeds = dir.path().join("feeds");
        fs::create_dir(&feeds).unwrap();
        fs::write(feeds.join("a.xml"), "").unwrap();

        let files = FileCollector::new(dir.path().join("f*"), "xml")
            .collect()
            .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_invalid_extension_pattern_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileCollector::new(dir.path(), "[").collect();
        assert!(matches!(
            result,
            Err(FeedbenchError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_pattern_format() {
        let collector = FileCollector::new("feeds/rss", "xml");
        assert_eq!(collector.pattern().unwrap(), "feeds/rss/*.xml");

        let bare = FileCollector::new("", "json");
        assert_eq!(bare.pattern().unwrap(), "*.json");
    }
}
