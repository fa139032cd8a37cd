mod commands;
mod logging;
mod source;

use clap::Parser;
use commands::Commands;

/// datapaths
///
/// Inspect the dataset and cache paths used by the hackathon data tooling.
#[derive(clap::Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub logging: logging::LogArgs,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.logging.setup_logging(2)?;

    args.command.run()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_get_args() {
        let args = Args::try_parse_from(["datapaths", "-v", "get", "cache_path"]).unwrap();
        match args.command {
            Commands::Get(get) => assert_eq!(get.key, "cache_path"),
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(Args::try_parse_from(["datapaths", "get"]).is_err());
    }
}
