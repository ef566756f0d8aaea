mod cli;
mod domain;
mod usecase;
mod wiring;

use std::process;

use cli::{parse_args, print_completion, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};

/// 検索中継の終了コード（スクリプトから失敗種別を判別できるように）
pub const EXIT_OK: i32 = 0;
pub const EXIT_GENERIC: i32 = 1;
pub const EXIT_HTTP: i32 = 2;
pub const EXIT_TRANSPORT: i32 = 3;

fn main() {
    let outcome = match parse_args() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(e.exit_code());
        }
    };
    let config = match outcome {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            process::exit(EXIT_OK);
        }
    };

    let exit_code = match run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", describe_error(&e));
            exit_code_for(&e)
        }
    };
    process::exit(exit_code);
}

fn run(config: &cli::Config) -> Result<i32, Error> {
    let app = wiring::wire_search(config)?;
    let _ = app.logger.log(
        &LogRecord::new(LogLevel::Info, "command started")
            .layer("cli")
            .kind("lifecycle")
            .field("base_url", app.params.base_url.as_str())
            .field("count", app.params.count),
    );

    let stdout = std::io::stdout();
    let result = app.use_case.run(&app.params, &mut stdout.lock());

    let mut finished = LogRecord::new(LogLevel::Info, "command finished")
        .layer("cli")
        .kind("lifecycle");
    finished = match &result {
        Ok(code) => finished.field("exit_code", *code),
        Err(e) => finished
            .field("exit_code", exit_code_for(e))
            .field("error", e.to_string()),
    };
    let _ = app.logger.log(&finished);
    result
}

/// エラー種別 → 終了コード
fn exit_code_for(e: &Error) -> i32 {
    match e {
        Error::HttpStatus { .. } => EXIT_HTTP,
        Error::Transport(_) => EXIT_TRANSPORT,
        _ => EXIT_GENERIC,
    }
}

/// stderr に出す 1 行の診断メッセージ
fn describe_error(e: &Error) -> String {
    match e {
        Error::HttpStatus { status, reason } => format!("HTTPError: {} {}", status, reason),
        Error::Transport(msg) => format!("URLError: {}", msg),
        other => format!("Error: {}", other),
    }
}
