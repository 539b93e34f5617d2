//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

use crate::state::{Doneness, EggSize};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "egg-timer")]
#[command(about = "A state-managed egg timer with an HTTP control surface")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Program used to play the alarm sound
    #[arg(long, default_value = "paplay")]
    pub alarm_player: String,

    /// Sound file for the alarm; the terminal bell rings when omitted
    #[arg(long)]
    pub alarm_sound: Option<PathBuf>,

    /// Initially selected egg size (small, medium, large)
    #[arg(long, default_value = "medium")]
    pub size: EggSize,

    /// Initially selected doneness (soft, medium, hard)
    #[arg(long, default_value = "medium")]
    pub doneness: Doneness,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["egg-timer"]).unwrap();
        assert_eq!(config.address(), "0.0.0.0:20554");
        assert_eq!(config.size, EggSize::Medium);
        assert_eq!(config.doneness, Doneness::Medium);
        assert_eq!(config.alarm_player, "paplay");
        assert!(config.alarm_sound.is_none());
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn parses_selection_and_rejects_unknown_values() {
        let config = Config::try_parse_from([
            "egg-timer", "--size", "large", "--doneness", "soft", "-v",
        ])
        .unwrap();
        assert_eq!(config.size, EggSize::Large);
        assert_eq!(config.doneness, Doneness::Soft);
        assert_eq!(config.log_level(), "debug");

        assert!(Config::try_parse_from(["egg-timer", "--size", "jumbo"]).is_err());
    }
}
