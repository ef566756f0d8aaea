use clap::builder::ArgAction;
use common::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    /// 検索キーワード（未指定なら None）
    pub query: Option<String>,
    /// --r18: 成人向けモードを明示する
    pub r18: bool,
    /// --out-dir: 保存先（未指定なら wiring で解決）
    pub out_dir: Option<PathBuf>,
    /// -v / --verbose: stderr に調査用ログを出す
    pub verbose: bool,
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("pic-fetch")
        .about("Fetch a random illustration from the Lolicon API and save it")
        .arg(
            clap::Arg::new("r18")
                .long("r18")
                .help("Request restricted (R18) content")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("out-dir")
                .long("out-dir")
                .value_name("dir")
                .help("Directory to save images into (default: $PIC_FETCH_OUT_DIR or ./out/pic-api)")
                .value_parser(clap::value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit verbose debug logs to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("query")
                .index(1)
                .help("Keywords, e.g. 二次元 / anime / 色图")
                .num_args(1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        query: matches.get_one::<String>("query").cloned(),
        r18: matches.get_flag("r18"),
        out_dir: matches.get_one::<PathBuf>("out-dir").cloned(),
        verbose: matches.get_flag("verbose"),
    }
}

/// コマンドラインを解析する
pub fn parse_args() -> Result<Config, Error> {
    let matches = build_clap_command().try_get_matches().map_err(|e| {
        // --help / --version は clap に表示させて終了する
        if !e.use_stderr() {
            e.exit();
        }
        Error::invalid_argument(e.to_string())
    })?;
    Ok(matches_to_config(&matches))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}
