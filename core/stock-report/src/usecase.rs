//! 市場データ取得ユースケース: 2 つのエンドポイントを取得してテキスト化する

use crate::format::format_report;
use common::error::Error;
use common::ports::outbound::{HttpClient, Log, LogLevel, LogRecord};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

/// 上証指数（東方財富 clist API）
pub const INDEX_URL: &str = "http://push2.eastmoney.com/api/qt/clist/get?pn=1&pz=1&po=1&np=1&ut=bd1d9ddb04089700cf9c27f6f7426281&fltt=2&invt=2&fid=f3&fs=i:1.000001&fields=f1,f2,f3,f4,f5,f6,f7,f12,f13,f14";

/// 業種セクター騰落率上位 10 件
pub const SECTOR_URL: &str = "http://push2.eastmoney.com/api/qt/clist/get?pn=1&pz=10&po=1&np=1&ut=bd1d9ddb04089700cf9c27f6f7426281&fltt=2&invt=2&fid=f3&fs=m:90+t:2&fields=f1,f2,f3,f4,f12,f14";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub struct StockReportUseCase {
    http: Arc<dyn HttpClient>,
    log: Arc<dyn Log>,
}

impl StockReportUseCase {
    pub fn new(http: Arc<dyn HttpClient>, log: Arc<dyn Log>) -> Self {
        Self { http, log }
    }

    pub fn fetch_json(&self, url: &str) -> Result<Value, Error> {
        self.http.get_json(url, FETCH_TIMEOUT)
    }

    /// 取得に失敗したら `{"error": "<message>"}` を返す（整形側は常に何かを受け取る）
    pub fn fetch_document(&self, url: &str) -> Value {
        self.fetch_json(url).unwrap_or_else(|e| {
            let _ = self.log.log(
                &LogRecord::new(LogLevel::Warn, "market data fetch failed")
                    .layer("usecase")
                    .kind("error")
                    .field("url", url)
                    .field("error", e.to_string()),
            );
            json!({ "error": e.to_string() })
        })
    }

    /// レポート本文を返す。失敗しない
    pub fn report(&self) -> String {
        let index_doc = self.fetch_document(INDEX_URL);
        let sector_doc = self.fetch_document(SECTOR_URL);
        format_report(&index_doc, &sector_doc)
    }
}
