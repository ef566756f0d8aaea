mod cli;
mod domain;
mod usecase;
mod wiring;

use std::process;

use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("pic-fetch: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

fn run() -> Result<i32, Error> {
    let config = cli::parse_args()?;
    let query = match &config.query {
        Some(q) if !q.trim().is_empty() => q.clone(),
        _ => {
            println!("错误: 缺少关键词参数");
            return Ok(0);
        }
    };

    let app = wiring::wire_pic_fetch(&config)?;
    let _ = app.logger.log(
        &LogRecord::new(LogLevel::Info, "command started")
            .layer("cli")
            .kind("lifecycle")
            .field("r18_flag", config.r18)
            .field("out_dir", app.use_case.out_dir().display().to_string()),
    );

    let stdout = std::io::stdout();
    let result = app.use_case.run(&query, config.r18, &mut stdout.lock());

    let _ = app.logger.log(
        &LogRecord::new(LogLevel::Info, "command finished")
            .layer("cli")
            .kind("lifecycle")
            .field("exit_code", *result.as_ref().unwrap_or(&1)),
    );
    result
}
