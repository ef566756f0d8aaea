mod cli;
mod domain;
mod usecase;
mod wiring;

use std::process;

use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::Delivery;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("daily-report: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

/// 送信に失敗しても終了コードは 0（失敗は標準出力に出る）
fn run() -> Result<i32, Error> {
    let config = cli::parse_args()?;
    let app = wiring::wire_daily_report(config.verbose);
    let settings = app.use_case.settings();
    let _ = app.logger.log(
        &LogRecord::new(LogLevel::Info, "command started")
            .layer("cli")
            .kind("lifecycle")
            .field("report_program", settings.report_program.display().to_string())
            .field("messenger", settings.messenger.display().to_string())
            .field("recipient_set", settings.recipient.is_some()),
    );

    let stdout = std::io::stdout();
    let delivery = app.use_case.run(&mut stdout.lock())?;

    let mut finished = LogRecord::new(LogLevel::Info, "command finished")
        .layer("cli")
        .kind("lifecycle")
        .field("delivery", format!("{:?}", delivery))
        .field("exit_code", 0);
    if let Delivery::Failed(reason) = &delivery {
        finished = finished.field("error", reason.as_str());
    }
    let _ = app.logger.log(&finished);
    Ok(0)
}
