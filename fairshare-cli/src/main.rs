#![warn(clippy::uninlined_format_args)]

mod bootstrap;
mod infrastructure;

use bootstrap::AppConfig;
use fairshare_application::SplitProcessor;
use fairshare_domain::RawAmount;
use fairshare_presentation::{
    MoneyFormatter, QuickSplitPresenter, SettlementPresenter, format_quick_split_error,
    format_split_error,
};
use infrastructure::FairshareRosterParser;
use std::{borrow::Cow, env, fs, process};

type CliResult<T> = Result<T, Cow<'static, str>>;

const USAGE: &str = "Usage: fairshare <roster-file> | fairshare --quick <total> <headcount>";

#[derive(Debug, PartialEq, Eq)]
enum Invocation<'a> {
    Roster { path: &'a str },
    Quick { total: &'a str, headcount: usize },
}

impl<'a> Invocation<'a> {
    fn parse(args: &'a [String]) -> CliResult<Self> {
        match args {
            [flag, total, headcount] if flag == "--quick" => {
                let headcount = headcount
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| format!("Headcount must be a whole number, got '{headcount}'"))?;
                Ok(Invocation::Quick {
                    total: total.as_str(),
                    headcount,
                })
            }
            [path] if !path.starts_with("--") => Ok(Invocation::Roster {
                path: path.as_str(),
            }),
            _ => Err(USAGE.into()),
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    bootstrap::init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let invocation = Invocation::parse(&args)?;
    let config = AppConfig::from_env();

    tracing::debug!(
        currency = %config.currency,
        rounding_unit = %config.rounding_unit,
        remainder_policy = ?config.remainder_policy,
        "Configuration loaded"
    );

    let output = match invocation {
        Invocation::Roster { path } => {
            let source = fs::read_to_string(path)
                .map_err(|err| format!("Failed to read '{path}': {err}"))?;
            settle_roster(&config, &source)?
        }
        Invocation::Quick { total, headcount } => quick_split(&config, total, headcount)?,
    };

    println!("{output}");
    Ok(())
}

fn processor(config: &AppConfig) -> SplitProcessor<'static> {
    SplitProcessor::new(&FairshareRosterParser).with_remainder_policy(config.remainder_policy)
}

fn settle_roster(config: &AppConfig, source: &str) -> CliResult<String> {
    let result = processor(config)
        .settle_roster(source, config.rounding_unit)
        .map_err(|err| format_split_error(&err))?;

    let formatter = MoneyFormatter::new(config.currency.as_str(), config.rounding_unit);
    Ok(SettlementPresenter::render(&result, &formatter).to_text())
}

fn quick_split(config: &AppConfig, total: &str, headcount: usize) -> CliResult<String> {
    let split = processor(config)
        .quick_split(RawAmount::Text(total), headcount, config.rounding_unit)
        .map_err(|err| format_quick_split_error(&err))?;

    let formatter = MoneyFormatter::new(config.currency.as_str(), config.rounding_unit);
    Ok(QuickSplitPresenter::render(&split, &formatter).to_text())
}
