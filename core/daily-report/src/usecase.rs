//! 日次レポート送信ユースケース: レポート生成（サブプロセス）→ 見出し付与 → メッセージ CLI で送信

use crate::domain::{compose_message, Delivery, DispatchSettings, MISSING_RECIPIENT_MESSAGE};
use common::error::Error;
use common::ports::outbound::{Clock, Log, LogLevel, LogRecord, Process};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

pub struct DailyReportUseCase {
    process: Arc<dyn Process>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
    settings: DispatchSettings,
}

impl DailyReportUseCase {
    pub fn new(
        process: Arc<dyn Process>,
        clock: Arc<dyn Clock>,
        log: Arc<dyn Log>,
        settings: DispatchSettings,
    ) -> Self {
        Self {
            process,
            clock,
            log,
            settings,
        }
    }

    pub fn settings(&self) -> &DispatchSettings {
        &self.settings
    }

    /// レポート生成プログラムを実行し、標準出力（前後の空白を除く）を返す。
    /// 失敗はエラー文字列をレポートとして返す。
    pub fn get_stock_report(&self) -> String {
        match self.capture_report() {
            Ok(report) => report,
            Err(e) => {
                self.warn("stock report failed", &self.settings.report_program, &e);
                format!("获取股市数据失败: {}", e)
            }
        }
    }

    fn capture_report(&self) -> Result<String, Error> {
        let program = &self.settings.report_program;
        let out = self.process.output(program, &[])?;
        if !out.success() {
            let mut reason = exit_status_message(program, out.code);
            // 標準エラーの最終行（例外メッセージ等）を添える
            let last = out.stderr.lines().map(str::trim).rev().find(|l| !l.is_empty());
            if let Some(last) = last {
                reason.push_str(": ");
                reason.push_str(last);
            }
            return Err(Error::system(reason));
        }
        Ok(out.stdout.trim().to_string())
    }

    /// `<messenger> send --to <recipient> --text <content>` を 1 回だけ実行する
    pub fn send(&self, content: &str, out: &mut dyn Write) -> Result<Delivery, Error> {
        let Some(recipient) = self.settings.recipient.as_deref().filter(|r| !r.is_empty()) else {
            emit(out, MISSING_RECIPIENT_MESSAGE)?;
            return Ok(Delivery::SkippedNoRecipient);
        };

        let messenger = &self.settings.messenger;
        let args = vec![
            "send".to_string(),
            "--to".to_string(),
            recipient.to_string(),
            "--text".to_string(),
            content.to_string(),
        ];
        let failure = match self.process.run(messenger, &args) {
            Ok(0) => return Ok(Delivery::Sent),
            Ok(code) => Error::system(exit_status_message(messenger, Some(code))),
            Err(e) => e,
        };
        self.warn("delivery failed", messenger, &failure);
        emit(out, &format!("发送 iMessage 失败: {}", failure))?;
        Ok(Delivery::Failed(failure.to_string()))
    }

    /// 1 回分の実行。送信失敗でもエラーにはしない
    pub fn run(&self, out: &mut dyn Write) -> Result<Delivery, Error> {
        let report = self.get_stock_report();
        if report.is_empty() {
            return Ok(Delivery::SkippedEmptyReport);
        }
        let message = compose_message(self.clock.now_local(), &report);
        let delivery = self.send(&message, out)?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "daily report dispatched")
                .layer("usecase")
                .field("delivery", format!("{:?}", delivery))
                .field("chars", message.chars().count()),
        );
        Ok(delivery)
    }

    fn warn(&self, message: &str, program: &Path, error: &Error) {
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Warn, message)
                .layer("usecase")
                .kind("process")
                .field("program", program.display().to_string())
                .field("error", error.to_string()),
        );
    }
}

fn exit_status_message(program: &Path, code: Option<i32>) -> String {
    match code {
        Some(c) => format!("'{}' exited with status {}", program.display(), c),
        None => format!("'{}' was terminated by a signal", program.display()),
    }
}

fn emit(out: &mut dyn Write, line: &str) -> Result<(), Error> {
    writeln!(out, "{}", line).map_err(|e| Error::io_msg(format!("Failed to write output: {}", e)))
}
