//! 人間向けログ（stderr に 1 行ずつ要点のみ出力）
//!
//! `-v/--verbose` 指定時に使う。stdout はツールの出力専用なので汚さない。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};

/// 出力するフィールド値の最大文字数（巨大化防止）
const FIELD_VALUE_MAX: usize = 200;

/// stderr 向け Log 実装
#[derive(Debug, Clone, Default)]
pub struct StderrLog {
    tool: String,
}

impl StderrLog {
    pub fn new(tool: &str) -> Self {
        Self {
            tool: tool.to_string(),
        }
    }

    /// 1 レコードを 1 行に整形する
    pub fn format_line(&self, record: &LogRecord) -> String {
        let level = match record.level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        let mut line = format!("[{}] {}: {}", self.tool, level, record.message);
        if let Some(fields) = &record.fields {
            for (k, v) in fields {
                let s = match v {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                let s = if s.chars().count() > FIELD_VALUE_MAX {
                    format!("{}...", s.chars().take(FIELD_VALUE_MAX).collect::<String>())
                } else {
                    s
                };
                line.push_str(&format!(" {}={}", k, s));
            }
        }
        line
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        eprintln!("{}", self.format_line(record));
        Ok(())
    }
}
