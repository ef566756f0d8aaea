//! 検索結果のドメイン型と整形ルール

use serde::Serialize;
use std::time::Duration;

/// snippet の最大文字数（超えた場合は末尾 3 文字を "..." にする）
pub const SNIPPET_MAX_CHARS: usize = 220;

const ELLIPSIS: &str = "...";

/// タイトルが空のときの表示
pub const NO_TITLE: &str = "(no title)";

/// SearXNG の safesearch レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SafeSearch {
    #[default]
    #[value(name = "0")]
    Off,
    #[value(name = "1")]
    Moderate,
    #[value(name = "2")]
    Strict,
}

impl SafeSearch {
    /// クエリパラメータ値
    pub fn as_param(self) -> &'static str {
        match self {
            SafeSearch::Off => "0",
            SafeSearch::Moderate => "1",
            SafeSearch::Strict => "2",
        }
    }
}

/// 1 回の検索に必要なパラメータ（すべて解決済み）
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub query: String,
    pub base_url: String,
    pub language: String,
    pub safesearch: SafeSearch,
    /// 出力する最大件数（負数は 0 扱い）
    pub count: i64,
    pub timeout: Duration,
}

/// 出力する 1 件分
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// stdout に出す JSON 全体
#[derive(Debug, Serialize)]
pub struct SearchOutput<'a> {
    pub query: &'a str,
    pub results: &'a [SearchResult],
}

/// 空白を 1 つに畳み、SNIPPET_MAX_CHARS を超えたら切り詰めて "..." を付ける
pub fn make_snippet(content: &str) -> String {
    let normalized = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.chars().count() <= SNIPPET_MAX_CHARS {
        return normalized;
    }
    let keep = SNIPPET_MAX_CHARS - ELLIPSIS.len();
    let mut s: String = normalized.chars().take(keep).collect();
    s.push_str(ELLIPSIS);
    s
}
