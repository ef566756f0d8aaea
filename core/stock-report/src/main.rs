use std::process;

use clap::builder::ArgAction;
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use stock_report::wiring;

fn build_clap_command() -> clap::Command {
    clap::Command::new("stock-report")
        .about("Print today's Shanghai Composite quote and top sector moves as plain text")
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit verbose debug logs to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("stock-report: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

fn run() -> Result<i32, Error> {
    let matches = build_clap_command().try_get_matches().map_err(|e| {
        if !e.use_stderr() {
            e.exit();
        }
        Error::invalid_argument(e.to_string())
    })?;
    let app = wiring::wire_stock_report(matches.get_flag("verbose"))?;
    let _ = app.logger.log(
        &LogRecord::new(LogLevel::Info, "command started")
            .layer("cli")
            .kind("lifecycle"),
    );

    println!("{}", app.use_case.report());

    let _ = app.logger.log(
        &LogRecord::new(LogLevel::Info, "command finished")
            .layer("cli")
            .kind("lifecycle")
            .field("exit_code", 0),
    );
    Ok(0)
}
