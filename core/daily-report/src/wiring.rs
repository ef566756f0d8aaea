//! 配線: 環境変数から送信設定を解決し、標準アダプタで DailyReportUseCase を組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{wire_logger, EnvResolver, Log, StdClock, StdEnvResolver, StdProcess};

use crate::domain::DispatchSettings;
use crate::usecase::DailyReportUseCase;

/// 送信先（iMessage のメールアドレス・電話番号）
pub const RECIPIENT_ENV: &str = "STOCK_REPORT_IMESSAGE_TO";
/// レポート生成プログラムのパス
pub const REPORT_BIN_ENV: &str = "STOCK_REPORT_BIN";
/// メッセージ送信 CLI のパス
pub const MESSENGER_ENV: &str = "STOCK_REPORT_MESSENGER";

pub const DEFAULT_MESSENGER: &str = "imsg";
const REPORT_BIN_NAME: &str = "stock-report";

pub struct App {
    pub use_case: DailyReportUseCase,
    pub logger: Arc<dyn Log>,
}

/// レポート生成プログラム: $STOCK_REPORT_BIN > 自身と同じディレクトリの stock-report > PATH 上の stock-report
pub fn resolve_settings(env: &dyn EnvResolver) -> DispatchSettings {
    let bin_name = format!("{}{}", REPORT_BIN_NAME, std::env::consts::EXE_SUFFIX);
    let report_program = env
        .var(REPORT_BIN_ENV)
        .map(PathBuf::from)
        .or_else(|| env.current_exe_dir().map(|d| d.join(&bin_name)))
        .unwrap_or_else(|| PathBuf::from(&bin_name));
    DispatchSettings {
        recipient: env.var(RECIPIENT_ENV),
        report_program,
        messenger: PathBuf::from(
            env.var(MESSENGER_ENV)
                .unwrap_or_else(|| DEFAULT_MESSENGER.to_string()),
        ),
    }
}

pub fn wire_daily_report(verbose: bool) -> App {
    let env = StdEnvResolver;
    let logger = wire_logger(&env, "daily-report", verbose);
    let use_case = DailyReportUseCase::new(
        Arc::new(StdProcess),
        Arc::new(StdClock),
        Arc::clone(&logger),
        resolve_settings(&env),
    );
    App { use_case, logger }
}
