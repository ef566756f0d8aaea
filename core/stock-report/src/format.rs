//! 市場データのテキスト整形

use crate::domain::{IndexQuote, MarketSnapshot, SectorQuote};
use serde_json::Value;

/// どちらのセクションも得られなかったときの 1 文
pub const FALLBACK_MESSAGE: &str = "未能获取到有效的市场数据，请检查网络或数据源。";

pub const INDEX_HEADER: &str = "【上证指数行情】";
pub const SECTOR_HEADER: &str = "【热门板块涨跌幅 (Top 10)】";

/// 指数セクション。`data.diff[0]` が無ければ空（エラーにはしない）
pub fn format_index_section(document: &Value) -> Vec<String> {
    IndexQuote::from_document(document)
        .map(|q| index_lines(&q))
        .unwrap_or_default()
}

/// セクターセクション。`data.diff` が無ければ空
pub fn format_sector_section(document: &Value) -> Vec<String> {
    SectorQuote::list_from_document(document)
        .map(|list| sector_lines(&list))
        .unwrap_or_default()
}

/// 両セクションを改行で連結する。どちらも空なら FALLBACK_MESSAGE
pub fn format_report(index_doc: &Value, sector_doc: &Value) -> String {
    render_snapshot(&MarketSnapshot::from_documents(index_doc, sector_doc))
}

pub fn render_snapshot(snapshot: &MarketSnapshot) -> String {
    let mut lines = Vec::new();
    if let Some(q) = &snapshot.index {
        lines.extend(index_lines(q));
    }
    if let Some(list) = &snapshot.sectors {
        lines.extend(sector_lines(list));
    }
    if lines.is_empty() {
        return FALLBACK_MESSAGE.to_string();
    }
    lines.join("\n")
}

fn index_lines(q: &IndexQuote) -> Vec<String> {
    vec![
        INDEX_HEADER.to_string(),
        format!("名称: {} ({})", q.name, q.code),
        format!("收盘: {:.2}", q.close),
        format!("涨跌: {:.2} ({:.2}%)", q.change, q.change_percent),
        format!(
            "成交量: {:.2}M / 成交额: {:.2}亿",
            q.volume / 1_000_000.0,
            q.turnover / 100_000_000.0
        ),
        String::new(),
    ]
}

fn sector_lines(list: &[SectorQuote]) -> Vec<String> {
    let mut lines = Vec::with_capacity(list.len() + 1);
    lines.push(SECTOR_HEADER.to_string());
    for s in list {
        lines.push(format!("- {}: {}%", s.name, signed_percent(s.change_percent)));
    }
    lines
}

/// 0 以上には "+" を付ける（0 も "+0.00"）。負数は符号そのまま
pub fn signed_percent(value: f64) -> String {
    // -0.0 を "+-0.00" にしない
    let value = if value == 0.0 { 0.0 } else { value };
    if value >= 0.0 {
        format!("+{:.2}", value)
    } else {
        format!("{:.2}", value)
    }
}
