//! エラーハンドリング
//!
//! 全ツール共通のエラー型。終了コードは sysexits 風に割り当てる。

use thiserror::Error as ThisError;

/// エラー型
#[derive(Debug, ThisError)]
pub enum Error {
    /// 引数不正
    #[error("{0}")]
    InvalidArgument(String),

    /// ファイル I/O の失敗
    #[error("{0}")]
    Io(String),

    /// JSON の解析・生成の失敗
    #[error("{0}")]
    Json(String),

    /// HTTP ステータスが 2xx 以外
    #[error("HTTP {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    /// 接続・タイムアウト・DNS など通信層の失敗
    #[error("{0}")]
    Transport(String),

    /// 上記以外のシステムエラー（サブプロセス等）
    #[error("{0}")]
    System(String),
}

impl Error {
    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// I/O エラー
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// システムエラー
    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// 通信エラー
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Json(_) => 65,
            Self::System(_) => 70,
            Self::Io(_) | Self::HttpStatus { .. } | Self::Transport(_) => 74,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers() {
        let err = Error::invalid_argument("test");
        assert_eq!(err.to_string(), "test");
        assert_eq!(err.exit_code(), 64);

        let err = Error::system("test");
        assert_eq!(err.exit_code(), 70);
    }

    #[test]
    fn test_http_status_display() {
        let err = Error::HttpStatus {
            status: 502,
            reason: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 502 Bad Gateway");
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_from_serde_json_error() {
        let e = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = e.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
