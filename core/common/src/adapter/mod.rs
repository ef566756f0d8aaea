//! アダプター（外界の I/O を trait で抽象化した標準実装）
//!
//! usecase は ports::outbound の trait 経由でのみ HTTP・ファイル・時刻・プロセスに触れる。
//! 実装は標準実装（Std*）やテスト用のモックを注入する。

pub mod composite_log;
pub mod file_json_log;
pub mod logger;
pub mod reqwest_http_client;
pub mod std_clock;
pub mod std_env_resolver;
pub mod std_fs;
pub mod std_process;
pub mod stderr_log;

pub use crate::ports::outbound::{
    Clock, EnvResolver, FileSystem, HttpClient, Log, Process, ProcessOutput,
};
pub use composite_log::CompositeLog;
pub use file_json_log::{FileJsonLog, NoopLog};
pub use logger::{wire_logger, LOG_DIR_ENV};
pub use reqwest_http_client::ReqwestHttpClient;
pub use std_clock::StdClock;
pub use std_env_resolver::{MapEnvResolver, StdEnvResolver};
pub use std_fs::StdFileSystem;
pub use std_process::StdProcess;
pub use stderr_log::StderrLog;
