//! # 解析器模块
//!
//! 定义被测 feed 解析器的统一接口，并提供基于 `feed-rs` 的默认实现。
//!
//! 扫描器只依赖"把文本解析为 feed 对象，或失败"这一能力，
//! 解析结果的内容不被检查。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 和 `commands/scan.rs` 使用
//! - 使用 `feed-rs` crate

use std::fmt::Display;

/// feed 解析器接口
///
/// 一个实例在整轮扫描中只构造一次，并在单线程中被顺序复用。
pub trait FeedParser {
    /// 解析成功后产生的 feed 对象
    type Feed;
    /// 解析失败时的错误
    type Error: Display;

    /// 解析一份完整的文件内容
    fn parse(&mut self, content: &[u8]) -> Result<Self::Feed, Self::Error>;
}

impl FeedParser for feed_rs::parser::Parser {
    type Feed = feed_rs::model::Feed;
    type Error = feed_rs::parser::ParseFeedError;

    fn parse(&mut self, content: &[u8]) -> Result<Self::Feed, Self::Error> {
        feed_rs::parser::Parser::parse(self, content)
    }
}

/// 创建默认解析器（自动识别 RSS / Atom / JSON Feed）
pub fn default_parser() -> feed_rs::parser::Parser {
    feed_rs::parser::Builder::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Example Channel</title>
    <link>https://example.com/</link>
    <description>Example</description>
    <item>
      <title>First post</title>
      <link>https://example.com/1</link>
      <guid>https://example.com/1</guid>
    </item>
  </channel>
</rss>
"#;

    const ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Example Atom</title>
  <id>urn:uuid:60a76c80-d399-11d9-b93C-0003939e0af6</id>
  <updated>2003-12-13T18:30:02Z</updated>
  <entry>
    <title>Atom entry</title>
    <id>urn:uuid:1225c695-cfb8-4ebb-aaaa-80da344efa6a</id>
    <updated>2003-12-13T18:30:02Z</updated>
  </entry>
</feed>
"#;

    const JSON_FEED: &str = r#"{
  "version": "https://jsonfeed.org/version/1.1",
  "title": "Example JSON Feed",
  "items": [
    { "id": "1", "content_text": "Hello" }
  ]
}"#;

    #[test]
    fn test_parse_rss() {
        let mut parser = default_parser();
        let feed = FeedParser::parse(&mut parser, RSS.as_bytes()).unwrap();
        assert_eq!(
            feed.title.map(|t| t.content),
            Some("Example Channel".to_string())
        );
        assert_eq!(feed.entries.len(), 1);
    }

    #[test]
    fn test_parse_atom() {
        let mut parser = default_parser();
        let feed = FeedParser::parse(&mut parser, ATOM.as_bytes()).unwrap();
        assert_eq!(feed.entries.len(), 1);
    }

    #[test]
    fn test_parse_json_feed() {
        let mut parser = default_parser();
        let feed = FeedParser::parse(&mut parser, JSON_FEED.as_bytes()).unwrap();
        assert_eq!(feed.entries.len(), 1);
    }

    #[test]
    fn test_parse_rejects_empty_and_garbage() {
        let mut parser = default_parser();
        assert!(FeedParser::parse(&mut parser, b"").is_err());
        assert!(FeedParser::parse(&mut parser, b"not a feed at all").is_err());
    }

    #[test]
    fn test_parser_reusable_after_failure() {
        let mut parser = default_parser();
        assert!(FeedParser::parse(&mut parser, b"{ \"version\": ").is_err());
        assert!(FeedParser::parse(&mut parser, RSS.as_bytes()).is_ok());
    }
}
