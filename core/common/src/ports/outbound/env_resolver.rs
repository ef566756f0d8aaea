//! 環境変数解決 Outbound ポート
//!
//! 設定値（SearXNG の URL・送信先など）は wiring でこの trait から読み、
//! Config に詰めて usecase へ渡す。usecase は環境変数に直接触れない。

use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用の `MapEnvResolver`。
pub trait EnvResolver: Send + Sync {
    /// 環境変数を取得する。未設定または空文字列なら None
    fn var(&self, key: &str) -> Option<String>;

    /// 実行中バイナリのあるディレクトリ（兄弟バイナリの探索用）
    fn current_exe_dir(&self) -> Option<PathBuf>;

    /// カレントディレクトリ
    fn current_dir(&self) -> Option<PathBuf>;
}
