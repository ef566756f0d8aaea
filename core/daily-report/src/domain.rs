//! 日次レポート送信のドメイン型

use chrono::{DateTime, Local};
use std::path::PathBuf;

/// 見出しの接頭辞
pub const REPORT_TITLE: &str = "【每日收盘报表】";

/// 送信先が未設定のときにオペレーターへ出すメッセージ
pub const MISSING_RECIPIENT_MESSAGE: &str =
    "缺少收件人：请设置环境变量 STOCK_REPORT_IMESSAGE_TO（例如你的 iMessage 邮箱/手机号）";

/// 解決済みの送信設定（環境変数は wiring で読む）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchSettings {
    /// 送信先（iMessage のメールアドレス・電話番号）。None なら送信しない
    pub recipient: Option<String>,
    /// レポートを出力するプログラム（stock-report）
    pub report_program: PathBuf,
    /// メッセージ送信 CLI（imsg）
    pub messenger: PathBuf,
}

/// 送信結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// 送信先未設定のため送らなかった
    SkippedNoRecipient,
    /// レポート本文が空のため送らなかった
    SkippedEmptyReport,
    Failed(String),
}

/// `【每日收盘报表】YYYY-MM-DD HH:MM` + 空行 + 本文
pub fn compose_message(now: DateTime<Local>, report: &str) -> String {
    format!(
        "{}{}\n\n{}",
        REPORT_TITLE,
        now.format("%Y-%m-%d %H:%M"),
        report
    )
}
