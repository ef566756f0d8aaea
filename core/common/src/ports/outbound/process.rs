//! サブプロセス実行 Outbound ポート
//!
//! レポート生成スクリプトの起動やメッセージ送信 CLI の呼び出しを抽象化する。

use crate::error::Error;
use std::path::Path;

/// 標準出力を捕捉した実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// 終了コード（シグナル終了などで取れない場合は None）
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// サブプロセス実行の抽象
///
/// 実装は `common::adapter::StdProcess`（std::process::Command）など。
pub trait Process: Send + Sync {
    /// プログラムを引数付きで実行し、終了コードを返す（標準出力はそのまま継承）
    fn run(&self, program: &Path, args: &[String]) -> Result<i32, Error>;

    /// プログラムを引数付きで実行し、標準出力・標準エラーを捕捉して返す
    fn output(&self, program: &Path, args: &[String]) -> Result<ProcessOutput, Error>;
}
