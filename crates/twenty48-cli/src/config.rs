//! Command-line and environment configuration for the driver.

use clap::Parser;
use twenty48_core::Strategy;

/// Play 2048 with a bot and report the highest tile of each game
#[derive(Parser, Debug, Clone)]
#[command(name = "twenty48")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Number of games to play
    #[arg(short, long, env = "TWENTY48_GAMES", default_value_t = 1)]
    pub games: u32,

    /// Base seed; game `i` uses `seed + i`. Omit for entropy.
    #[arg(short, long, env = "TWENTY48_SEED")]
    pub seed: Option<u64>,

    /// Bot strategy: cycle, random or greedy
    #[arg(long, env = "TWENTY48_STRATEGY", default_value = "greedy")]
    pub strategy: Strategy,

    /// Print each summary as a JSON line
    #[arg(long)]
    pub json: bool,

    /// Print the final board of each game
    #[arg(long)]
    pub show_board: bool,
}

impl Config {
    /// Seed for the `index`-th game, if seeded
    pub fn game_seed(&self, index: u32) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(u64::from(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["twenty48"]);
        assert_eq!(config.games, 1);
        assert_eq!(config.seed, None);
        assert_eq!(config.strategy, Strategy::Greedy);
        assert_eq!(config.game_seed(3), None);
    }

    #[test]
    fn test_flags() {
        let config = Config::parse_from([
            "twenty48",
            "--games",
            "3",
            "--seed",
            "10",
            "--strategy",
            "cycle",
            "--json",
        ]);
        assert_eq!(config.games, 3);
        assert_eq!(config.strategy, Strategy::Cycle);
        assert_eq!(config.game_seed(2), Some(12));
        assert!(config.json);
        assert!(!config.show_board);
    }

    #[test]
    fn test_rejects_unknown_strategy() {
        assert!(Config::try_parse_from(["twenty48", "--strategy", "smart"]).is_err());
    }
}
