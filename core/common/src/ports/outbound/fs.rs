//! ファイルシステム Outbound ポート
//!
//! usecase はこの trait 経由でのみファイル I/O を行う。

use crate::error::Error;
use std::io::Write;
use std::path::Path;

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdFileSystem` など。
pub trait FileSystem: Send + Sync {
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    /// 書き込み用に開く（既存なら切り詰める）。返した Writer を drop すると閉じる。
    fn create(&self, path: &Path) -> Result<Box<dyn Write + Send>, Error>;
    /// 追記用に開く（存在しなければ作成）
    fn open_append(&self, path: &Path) -> Result<Box<dyn Write + Send>, Error>;
    /// ファイルを削除する
    fn remove_file(&self, path: &Path) -> Result<(), Error>;
}
