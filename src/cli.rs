//! Command-line surface.

use std::time::Duration;

use clap::Parser;

use crate::agent::{AgentConfig, GameRef};

pub const DEFAULT_URL: &str = "https://chessguardian-production.up.railway.app";

/// Plays a live ChessGuardian match with the built-in minimax engine.
#[derive(Debug, Parser)]
#[command(name = "autoplay", version, about)]
pub struct Cli {
    /// Existing game id to join, or "new" to start a match against the
    /// host AI.
    pub game: String,

    /// Search depth in plies.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..))]
    pub depth: u8,

    /// Seconds between polls and after each accepted move.
    #[arg(long, default_value_t = 5)]
    pub delay: u64,

    /// Base URL of the match host.
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Stop cleanly after this many of our moves.
    #[arg(long, default_value_t = 200)]
    pub max_moves: u32,
}

impl Cli {
    pub fn agent_config(&self) -> AgentConfig {
        let game = if self.game.eq_ignore_ascii_case("new") {
            GameRef::New
        } else {
            GameRef::Existing(self.game.clone())
        };
        AgentConfig {
            game,
            depth: self.depth,
            delay: Duration::from_secs(self.delay),
            max_moves: self.max_moves,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["autoplay", "new"]).unwrap();
        assert_eq!(cli.depth, 4);
        assert_eq!(cli.delay, 5);
        assert_eq!(cli.url, DEFAULT_URL);
        assert_eq!(cli.max_moves, 200);
        assert_eq!(cli.agent_config().game, GameRef::New);
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        assert!(Cli::try_parse_from(["autoplay", "new", "--depth", "0"]).is_err());
    }

    #[test]
    fn test_game_id_is_taken_verbatim() {
        let cli = Cli::try_parse_from(["autoplay", "abc123", "--depth", "2"]).unwrap();
        assert_eq!(
            cli.agent_config().game,
            GameRef::Existing("abc123".to_string())
        );
        assert_eq!(cli.depth, 2);
    }

    #[test]
    fn test_new_keyword_is_case_insensitive() {
        let cli = Cli::try_parse_from(["autoplay", "NEW"]).unwrap();
        assert_eq!(cli.agent_config().game, GameRef::New);
    }
}
