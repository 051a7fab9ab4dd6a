use std::io;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use self::{analyze::AnalyzeArg, table::TableArg};

mod analyze;
mod args;
mod table;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Build the frequency table and compute every measure with its derivation
    Analyze(#[clap(flatten)] AnalyzeArg),
    /// Build the frequency table only
    Table(#[clap(flatten)] TableArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(args.verbose);
    match args.mode.unwrap_or(Mode::Analyze(AnalyzeArg::default())) {
        Mode::Analyze(arg) => analyze::run(&arg)?,
        Mode::Table(arg) => table::run(&arg)?,
    }
    Ok(())
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_args() {
        let args = CommandArgs::try_parse_from([
            "grouped",
            "-v",
            "analyze",
            "12,15,18",
            "20",
            "--format",
            "json",
            "--precision",
            "3",
        ])
        .unwrap();
        assert_eq!(args.verbose, 1);
        let Some(Mode::Analyze(arg)) = args.mode else {
            panic!("expected analyze mode");
        };
        assert_eq!(arg.input.values, ["12,15,18", "20"]);
        assert_eq!(arg.output.format, args::OutputFormat::Json);
        assert_eq!(arg.output.precision, 3);
        assert_eq!(arg.input.min_observations, crate::input::MIN_OBSERVATIONS);
    }

    #[test]
    fn test_default_mode_is_none() {
        let args = CommandArgs::try_parse_from(["grouped"]).unwrap();
        assert!(args.mode.is_none());
    }
}
