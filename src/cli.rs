//! Command-line interface for the Gomoku GUI.

use clap::{Parser, ValueEnum};

use crate::Stone;

/// Free-style Gomoku on a 15x15 board, two players at one screen
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Five in a row, hotseat", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who moves first in every game of this session
    #[arg(long, value_enum, default_value_t = FirstPlayer::Black)]
    pub first: FirstPlayer,

    /// Tracing filter used when RUST_LOG is unset (e.g. "debug", "gomoku=trace")
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Initial window width in points
    #[arg(long, default_value_t = 900.0)]
    pub width: f32,

    /// Initial window height in points
    #[arg(long, default_value_t = 680.0)]
    pub height: f32,
}

/// Starting color choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FirstPlayer {
    Black,
    White,
}

impl From<FirstPlayer> for Stone {
    fn from(value: FirstPlayer) -> Self {
        match value {
            FirstPlayer::Black => Stone::Black,
            FirstPlayer::White => Stone::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["gomoku"]);
        assert_eq!(cli.first, FirstPlayer::Black);
        assert_eq!(cli.log_level, "info");
        assert_eq!(cli.width, 900.0);
        assert_eq!(cli.height, 680.0);
    }

    #[test]
    fn test_first_white() {
        let cli = Cli::parse_from(["gomoku", "--first", "white", "--log-level", "debug"]);
        assert_eq!(Stone::from(cli.first), Stone::White);
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_rejects_unknown_color() {
        assert!(Cli::try_parse_from(["gomoku", "--first", "red"]).is_err());
    }

    #[test]
    fn test_clap_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
