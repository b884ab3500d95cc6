//! Command-line interface for strictly_connect_four.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Connect Four - two players, one console
#[derive(Parser, Debug)]
#[command(name = "strictly_connect_four")]
#[command(about = "Two-player Connect Four in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game configuration file (defaults apply if missing)
    #[arg(short, long, default_value = "connect_four.toml")]
    pub config: PathBuf,

    /// Tracing filter directive, overriding RUST_LOG
    #[arg(long)]
    pub log_filter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["strictly_connect_four"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("connect_four.toml"));
        assert_eq!(cli.log_filter, None);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "strictly_connect_four",
            "--config",
            "custom.toml",
            "--log-filter",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.log_filter.as_deref(), Some("debug"));
    }
}
