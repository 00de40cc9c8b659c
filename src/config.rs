use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::constants::HINT_DELAY_SECS;
use crate::error::ConfigError;
use crate::game::sequencer::Timings;

/// Command-line arguments for a tcrush session.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Seed for the token generator; a random seed is used when omitted.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
    /// Seconds without a click before a possible move is highlighted.
    #[arg(
        long = "hint-delay-secs",
        value_name = "SECONDS",
        default_value_t = HINT_DELAY_SECS,
        value_parser = clap::value_parser!(u64).range(1..=3600)
    )]
    pub hint_delay_secs: u64,
    /// Multiplier applied to every animation; 0 turns animation off.
    #[arg(long = "animation-scale", value_name = "FACTOR", default_value_t = 1.0)]
    pub animation_scale: f32,
    /// Write a log to this file. Nothing is logged otherwise, the terminal belongs to the game.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
    /// Log at debug level instead of info.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub timings: Timings,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

impl Config {
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        let scale = args.animation_scale;
        if !scale.is_finite() || scale < 0.0 {
            return Err(ConfigError::AnimationScale(scale));
        }

        let timings = Timings {
            hint_delay: Duration::from_secs(args.hint_delay_secs),
            ..Timings::scaled(scale)
        };

        Ok(Self {
            seed: args.seed,
            timings,
            log_file: args.log_file,
            verbose: args.verbose,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            timings: Timings::default(),
            log_file: None,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cli_defaults() {
        let args = CliArgs::parse_from(["tcrush"]);
        let config = Config::from_args(args).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_cli_overrides() {
        let args = CliArgs::parse_from([
            "tcrush",
            "--seed",
            "7",
            "--hint-delay-secs",
            "3",
            "--animation-scale",
            "0",
        ]);
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.timings.hint_delay, Duration::from_secs(3));
        assert_eq!(config.timings.swap_glide, Duration::ZERO);
    }

    #[test]
    fn test_negative_animation_scale_is_rejected() {
        let args = CliArgs::parse_from(["tcrush", "--animation-scale=-1"]);
        assert_eq!(
            Config::from_args(args),
            Err(ConfigError::AnimationScale(-1.0))
        );
    }

    #[test]
    fn test_zero_hint_delay_is_rejected() {
        assert!(CliArgs::try_parse_from(["tcrush", "--hint-delay-secs", "0"]).is_err());
    }
}
