//! Outbound ポート: アプリが外界（HTTP・FS・時刻・環境変数・プロセス・ログ）を使うための trait

pub mod clock;
pub mod env_resolver;
pub mod fs;
pub mod http_client;
pub mod log;
pub mod process;

pub use clock::Clock;
pub use env_resolver::EnvResolver;
pub use fs::FileSystem;
pub use http_client::{HttpClient, Url};
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
pub use process::{Process, ProcessOutput};
