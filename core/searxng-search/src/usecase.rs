//! 検索中継ユースケース: URL 組み立て → JSON 取得 → 整形 → JSON 出力

use crate::domain::{make_snippet, SearchOutput, SearchParams, SearchResult, NO_TITLE};
use common::error::Error;
use common::ports::outbound::{HttpClient, Log, LogLevel, LogRecord, Url};
use serde_json::Value;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

/// `<base>/search?q=..&format=json&language=..&safesearch=..` を組み立てる
///
/// 件数は SearXNG のパラメータではないので URL には含めない。
pub fn build_url(params: &SearchParams) -> Result<Url, Error> {
    let endpoint = format!("{}/search", params.base_url.trim_end_matches('/'));
    Url::parse_with_params(
        &endpoint,
        &[
            ("q", params.query.as_str()),
            ("format", "json"),
            ("language", params.language.as_str()),
            ("safesearch", params.safesearch.as_param()),
        ],
    )
    .map_err(|e| Error::invalid_argument(format!("Invalid base URL '{}': {}", params.base_url, e)))
}

/// 先頭 `count` 件を SearchResult に整形する（負数は 0 件、`results` が無ければ空）
pub fn reshape(document: &Value, count: i64) -> Vec<SearchResult> {
    let n = usize::try_from(count).unwrap_or(0);
    let Some(results) = document.get("results").and_then(Value::as_array) else {
        return Vec::new();
    };
    results.iter().take(n).map(to_search_result).collect()
}

fn to_search_result(entry: &Value) -> SearchResult {
    let field = |key: &str| {
        entry
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string()
    };
    let title = field("title");
    SearchResult {
        title: if title.is_empty() {
            NO_TITLE.to_string()
        } else {
            title
        },
        url: field("url"),
        snippet: make_snippet(&field("content")),
    }
}

/// 出力 JSON（2 スペースインデント、非 ASCII はエスケープしない、末尾改行付き）
pub fn render_output(query: &str, results: &[SearchResult]) -> Result<String, Error> {
    let mut s = serde_json::to_string_pretty(&SearchOutput { query, results })?;
    s.push('\n');
    Ok(s)
}

pub struct SearchUseCase {
    http: Arc<dyn HttpClient>,
    log: Arc<dyn Log>,
}

impl SearchUseCase {
    pub fn new(http: Arc<dyn HttpClient>, log: Arc<dyn Log>) -> Self {
        Self { http, log }
    }

    /// 1 回の GET で JSON を取得する。
    /// ステータスエラーは Error::HttpStatus、通信エラーは Error::Transport で返る。
    pub fn fetch(&self, url: &Url, timeout: Duration) -> Result<Value, Error> {
        self.http.get_json(url.as_str(), timeout)
    }

    /// 検索して結果 JSON を `out` に一度に書き出す（途中までの出力はしない）
    pub fn run(&self, params: &SearchParams, out: &mut dyn Write) -> Result<i32, Error> {
        let url = build_url(params)?;
        let document = self.fetch(&url, params.timeout)?;
        let results = reshape(&document, params.count);
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "search completed")
                .layer("usecase")
                .field("url", url.as_str())
                .field(
                    "upstream_results",
                    document
                        .get("results")
                        .and_then(Value::as_array)
                        .map(|a| a.len())
                        .unwrap_or(0),
                )
                .field("returned", results.len()),
        );
        let rendered = render_output(&params.query, &results)?;
        out.write_all(rendered.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| Error::io_msg(format!("Failed to write output: {}", e)))?;
        Ok(0)
    }
}
