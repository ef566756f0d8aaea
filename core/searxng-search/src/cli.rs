use crate::domain::SafeSearch;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::time::Duration;

pub const DEFAULT_COUNT: i64 = 5;
pub const DEFAULT_LANG: &str = "zh-CN";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub query: String,
    /// --base: 未指定なら wiring で $SEARXNG_BASE_URL か既定値に解決
    pub base: Option<String>,
    pub count: i64,
    pub lang: String,
    pub safesearch: SafeSearch,
    pub timeout: Duration,
    /// -v / --verbose: stderr に調査用ログを出す
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query: String::new(),
            base: None,
            count: DEFAULT_COUNT,
            lang: DEFAULT_LANG.to_string(),
            safesearch: SafeSearch::Off,
            timeout: DEFAULT_TIMEOUT,
            verbose: false,
        }
    }
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

/// タイムアウト秒数（Duration で表せる正の値のみ）
fn parse_timeout(s: &str) -> Result<Duration, String> {
    let v: f64 = s.parse().map_err(|_| format!("invalid float value '{}'", s))?;
    match Duration::try_from_secs_f64(v) {
        Ok(d) if !d.is_zero() => Ok(d),
        _ => Err(format!("timeout must be a positive number of seconds, got '{}'", s)),
    }
}

pub fn build_clap_command() -> clap::Command {
    clap::Command::new("searxng-search")
        .about("Search via SearXNG and print concise results")
        .arg(
            clap::Arg::new("query")
                .index(1)
                .help("search query")
                .required_unless_present("generate")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("base")
                .long("base")
                .value_name("url")
                .help("SearXNG base URL (default: $SEARXNG_BASE_URL or http://localhost:8888)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("count")
                .long("count")
                .value_name("n")
                .help("max results to print")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .default_value("5")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("lang")
                .long("lang")
                .value_name("code")
                .help("language code")
                .default_value(DEFAULT_LANG)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("safesearch")
                .long("safesearch")
                .value_name("level")
                .help("0 off, 1 moderate, 2 strict")
                .value_parser(value_parser!(SafeSearch))
                .default_value("0")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("timeout")
                .long("timeout")
                .value_name("secs")
                .help("HTTP timeout seconds")
                .value_parser(parse_timeout)
                .default_value("15.0")
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
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn matches_to_outcome(matches: &clap::ArgMatches) -> ParseOutcome {
    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return ParseOutcome::GenerateCompletion(shell);
    }
    ParseOutcome::Config(Config {
        query: matches.get_one::<String>("query").cloned().unwrap_or_default(),
        base: matches.get_one::<String>("base").cloned(),
        count: matches.get_one::<i64>("count").copied().unwrap_or(DEFAULT_COUNT),
        lang: matches
            .get_one::<String>("lang")
            .cloned()
            .unwrap_or_else(|| DEFAULT_LANG.to_string()),
        safesearch: matches
            .get_one::<SafeSearch>("safesearch")
            .copied()
            .unwrap_or_default(),
        timeout: matches
            .get_one::<Duration>("timeout")
            .copied()
            .unwrap_or(DEFAULT_TIMEOUT),
        verbose: matches.get_flag("verbose"),
    })
}

/// コマンドラインを解析する
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command().try_get_matches().map_err(|e| {
        // --help / --version は clap に表示させて終了する
        if !e.use_stderr() {
            e.exit();
        }
        Error::invalid_argument(e.to_string())
    })?;
    Ok(matches_to_outcome(&matches))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_outcome(&matches))
}

/// 補完スクリプトを標準出力に出力する
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "searxng-search", &mut std::io::stdout());
}
