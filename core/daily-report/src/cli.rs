use clap::builder::ArgAction;
use common::error::Error;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    /// -v / --verbose: stderr に調査用ログを出す
    pub verbose: bool,
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("daily-report")
        .about("Send the daily market close report via iMessage (recipient: $STOCK_REPORT_IMESSAGE_TO)")
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit verbose debug logs to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        verbose: matches.get_flag("verbose"),
    }
}

pub fn parse_args() -> Result<Config, Error> {
    let matches = build_clap_command().try_get_matches().map_err(|e| {
        if !e.use_stderr() {
            e.exit();
        }
        Error::invalid_argument(e.to_string())
    })?;
    Ok(matches_to_config(&matches))
}

#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}
