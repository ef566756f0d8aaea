//! 時刻取得 Outbound ポート
//!
//! usecase はこの trait 経由で「現在時刻」を取得する（ファイル名・レポート見出し）。

use chrono::{DateTime, Local, TimeZone};

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の固定時刻など。
pub trait Clock: Send + Sync {
    /// 現在時刻をミリ秒（Unix epoch）で返す
    fn now_ms(&self) -> u64;

    /// 現在時刻を Unix 秒で返す
    fn now_secs(&self) -> u64 {
        self.now_ms() / 1000
    }

    /// 現在時刻をローカルタイムゾーンで返す
    fn now_local(&self) -> DateTime<Local> {
        Local
            .timestamp_millis_opt(self.now_ms() as i64)
            .single()
            .unwrap_or_else(Local::now)
    }
}
