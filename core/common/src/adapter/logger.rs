//! 配線: 環境変数と `-v` から各ツールの logger を組み立てる

use super::{CompositeLog, FileJsonLog, StderrLog, StdFileSystem};
use crate::ports::outbound::{EnvResolver, Log};
use std::path::PathBuf;
use std::sync::Arc;

/// JSONL ログの出力先ディレクトリを指定する環境変数
pub const LOG_DIR_ENV: &str = "PACKS_LOG_DIR";

/// logger を組み立てる
///
/// - `$PACKS_LOG_DIR` が設定されていれば `<dir>/<tool>.jsonl` へ追記
/// - `verbose` なら stderr へ人間向けの 1 行ログ
/// - どちらも無ければ何も出力しない
pub fn wire_logger(env: &dyn EnvResolver, tool: &str, verbose: bool) -> Arc<dyn Log> {
    let mut sinks: Vec<Arc<dyn Log>> = Vec::new();
    if let Some(dir) = env.var(LOG_DIR_ENV) {
        let path = PathBuf::from(dir).join(format!("{}.jsonl", tool));
        sinks.push(Arc::new(FileJsonLog::new(Arc::new(StdFileSystem), path)));
    }
    if verbose {
        sinks.push(Arc::new(StderrLog::new(tool)));
    }
    Arc::new(CompositeLog::new(sinks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::MapEnvResolver;
    use crate::ports::outbound::{LogLevel, LogRecord};

    #[test]
    fn test_wire_logger_writes_to_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let env = MapEnvResolver::new().with_var(LOG_DIR_ENV, dir.path().to_str().unwrap());
        let log = wire_logger(&env, "stock-report", false);
        log.log(&LogRecord::new(LogLevel::Info, "command started"))
            .unwrap();
        let content = std::fs::read_to_string(dir.path().join("stock-report.jsonl")).unwrap();
        assert!(content.contains("command started"));
    }

    #[test]
    fn test_wire_logger_without_sinks_is_silent() {
        let env = MapEnvResolver::new();
        let log = wire_logger(&env, "pic-fetch", false);
        assert!(log.log(&LogRecord::new(LogLevel::Info, "x")).is_ok());
    }
}
