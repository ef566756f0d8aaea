//! ファイルへ JSONL で追記する Log 実装

use crate::error::Error;
use crate::ports::outbound::{FileSystem, Log, LogRecord};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// ファイルへ JSONL を追記する Log 実装
pub struct FileJsonLog {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileJsonLog {
    /// 親ディレクトリは書き込みのたびに（無ければ）作成する
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Log for FileJsonLog {
    /// 1 レコード = 1 回の write（改行込み）で追記する
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.fs.create_dir_all(parent)?;
        }
        self.fs
            .open_append(&self.path)
            .and_then(|mut w| {
                w.write_all(&line)
                    .and_then(|_| w.flush())
                    .map_err(|e| {
                        Error::io_msg(format!("Failed to write log '{}': {}", self.path.display(), e))
                    })
            })
    }
}

/// 何も出力しない Log 実装（テスト用・ログ無効時）
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::StdFileSystem;
    use crate::ports::outbound::LogLevel;

    #[test]
    fn test_noop_log() {
        let log = NoopLog;
        let rec = LogRecord::new(LogLevel::Info, "test");
        assert!(log.log(&rec).is_ok());
    }

    #[test]
    fn test_file_json_log_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("searxng-search.jsonl");
        let log = FileJsonLog::new(Arc::new(StdFileSystem), &path);

        log.log(&LogRecord::new(LogLevel::Info, "command started").kind("lifecycle"))
            .unwrap();
        log.log(&LogRecord::new(LogLevel::Info, "command finished").field("exit_code", 0))
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["message"], "command started");
        assert_eq!(first["kind"], "lifecycle");
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["fields"]["exit_code"], 0);
    }
}
