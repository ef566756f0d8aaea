//! HTTP クライアント Outbound ポート
//!
//! 各ツールは 1 回のブロッキング GET でサードパーティ API を叩く。
//! ステータスエラーと通信エラーは別バリアントで返す（呼び出し側が終了コードを選べるように）。

use crate::error::Error;
use serde_json::Value;
use std::io::Write;
use std::time::Duration;

pub use reqwest::Url;

/// HTTP クライアント抽象（Outbound ポート）
///
/// 実装は `common::adapter::ReqwestHttpClient` やテスト用のスタブ。
pub trait HttpClient: Send + Sync {
    /// GET してレスポンスボディを返す
    ///
    /// # Returns
    /// * `Err(Error::HttpStatus)` - ステータスが 2xx 以外
    /// * `Err(Error::Transport)` - 接続・タイムアウト等
    fn get(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, Error>;

    /// GET したボディを `dest` へストリーミングで書き出し、書き込んだバイト数を返す
    fn download(&self, url: &str, timeout: Duration, dest: &mut dyn Write) -> Result<u64, Error>;

    /// GET したボディを JSON として解析する（不正な UTF-8 は置換文字にする）
    fn get_json(&self, url: &str, timeout: Duration) -> Result<Value, Error> {
        let body = self.get(url, timeout)?;
        let text = String::from_utf8_lossy(&body);
        serde_json::from_str(&text)
            .map_err(|e| Error::Json(format!("Failed to parse response JSON: {}", e)))
    }
}
