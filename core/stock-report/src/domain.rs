//! 東方財富 clist API のレスポンスから取り出す値
//!
//! ベンダーのフィールドキー: f2=終値, f3=騰落率(%), f4=騰落額, f5=出来高, f6=売買代金, f12=コード, f14=名称

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// 指数 1 件（上証指数）
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IndexQuote {
    #[serde(rename = "f14")]
    pub name: String,
    #[serde(rename = "f12", deserialize_with = "string_or_number")]
    pub code: String,
    #[serde(rename = "f2")]
    pub close: f64,
    #[serde(rename = "f3")]
    pub change_percent: f64,
    #[serde(rename = "f4")]
    pub change: f64,
    #[serde(rename = "f5")]
    pub volume: f64,
    #[serde(rename = "f6")]
    pub turnover: f64,
}

/// 業種セクター 1 件
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectorQuote {
    #[serde(rename = "f14")]
    pub name: String,
    #[serde(rename = "f12", default, deserialize_with = "string_or_number")]
    pub code: String,
    #[serde(rename = "f2", default, deserialize_with = "lenient_f64")]
    pub close: Option<f64>,
    #[serde(rename = "f3")]
    pub change_percent: f64,
    #[serde(rename = "f4", default, deserialize_with = "lenient_f64")]
    pub change: Option<f64>,
}

/// 1 回の実行で取得した市場データ（欠けた部分は None）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarketSnapshot {
    pub index: Option<IndexQuote>,
    pub sectors: Option<Vec<SectorQuote>>,
}

impl MarketSnapshot {
    pub fn from_documents(index_doc: &Value, sector_doc: &Value) -> Self {
        Self {
            index: IndexQuote::from_document(index_doc),
            sectors: SectorQuote::list_from_document(sector_doc),
        }
    }
}

/// `data.diff` が配列なら返す
fn diff_array(document: &Value) -> Option<&Vec<Value>> {
    document.get("data")?.get("diff")?.as_array()
}

impl IndexQuote {
    /// `data.diff[0]` を取り出す。キーが無い・形が違う場合は None
    pub fn from_document(document: &Value) -> Option<Self> {
        let first = diff_array(document)?.first()?;
        serde_json::from_value(first.clone()).ok()
    }
}

impl SectorQuote {
    /// `data.diff` の各要素を取り出す（解析できない要素は飛ばす）。`data.diff` が無ければ None
    pub fn list_from_document(document: &Value) -> Option<Vec<Self>> {
        let diff = diff_array(document)?;
        Some(
            diff.iter()
                .filter_map(|v| serde_json::from_value(v.clone()).ok())
                .collect(),
        )
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

/// 値が無いときに "-" を返すことがあるので、数値以外は None にする
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}
