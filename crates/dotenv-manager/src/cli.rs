//! Command-line interface definitions for dotenv-manager.

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use logging::LogArgs;

/// Command-line interface for the `dotenv-manager` binary.
#[derive(Parser, Debug)]
#[command(
    name = "dotenv-manager",
    about = "Toggle grouped variables in a dotenv file",
    version
)]
pub struct Cli {
    /// Logging controls.
    #[command(flatten)]
    pub log: LogArgs,

    /// Dotenv file to edit.
    #[arg(value_name = "FILE", default_value = ".env")]
    pub file: PathBuf,

    /// Settings file (RON). Defaults to ~/.config/dotenv-manager/config.ron when present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not watch the file for external changes.
    #[arg(long)]
    pub no_watch: bool,

    /// How long to wait for input before polling for file changes and logs.
    #[arg(
        long,
        value_parser = humantime::parse_duration,
        default_value = "250ms",
        value_name = "DURATION"
    )]
    pub tick_rate: Duration,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["dotenv-manager"]).unwrap();
        assert_eq!(cli.file, PathBuf::from(".env"));
        assert_eq!(cli.tick_rate, Duration::from_millis(250));
        assert!(!cli.no_watch);
        assert!(cli.config.is_none());
    }

    #[test]
    fn flags() {
        let cli = Cli::try_parse_from([
            "dotenv-manager",
            "--no-watch",
            "--tick-rate",
            "1s",
            "--debug",
            "--log-file",
            "/tmp/dm.log",
            "prod.env",
        ])
        .unwrap();
        assert_eq!(cli.file, PathBuf::from("prod.env"));
        assert_eq!(cli.tick_rate, Duration::from_secs(1));
        assert!(cli.no_watch);
        assert!(cli.log.debug);
        assert_eq!(cli.log.log_file, Some(PathBuf::from("/tmp/dm.log")));
    }
}
