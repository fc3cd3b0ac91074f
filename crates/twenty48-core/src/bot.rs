//! Programmatic players.
//!
//! A [`Bot`] picks a direction from the current board. Three strategies are
//! available:
//! - Cycle: Up, Right, Down, Left, ignoring the board
//! - Random: any direction that changes the board
//! - Greedy: the changing direction that leaves the most empty cells

use crate::board::Board;
use crate::direction::Direction;
use crate::session::{GameError, GameSummary, Session, TurnOutcome};
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Order used by [`Strategy::Cycle`]
const CYCLE: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

/// How a bot chooses its move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Cycle,
    Random,
    Greedy,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Cycle, Strategy::Random, Strategy::Greedy];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Cycle => "cycle",
            Strategy::Random => "random",
            Strategy::Greedy => "greedy",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input that does not name a strategy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown strategy: {0:?}")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStrategyError(s.to_string()))
    }
}

/// A bot player that picks directions for a session
pub struct Bot {
    pub strategy: Strategy,
    step: usize,
    rng: StdRng,
}

impl Bot {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            step: 0,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            step: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Switch strategy. The cycle position restarts only on a real change.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        if strategy != self.strategy {
            self.strategy = strategy;
            self.step = 0;
        }
    }

    /// Choose the next direction for `board`
    pub fn choose(&mut self, board: &Board) -> Direction {
        match self.strategy {
            Strategy::Cycle => self.choose_cycle(),
            Strategy::Random => self.choose_random(board),
            Strategy::Greedy => choose_greedy(board),
        }
    }

    /// Cycle: next direction in the fixed rotation
    fn choose_cycle(&mut self) -> Direction {
        let dir = CYCLE[self.step % CYCLE.len()];
        self.step += 1;
        dir
    }

    /// Random: uniform over moves that change the board
    fn choose_random(&mut self, board: &Board) -> Direction {
        let moves: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&dir| board.can_move(dir))
            .collect();
        let pool: &[Direction] = if moves.is_empty() {
            &Direction::ALL
        } else {
            &moves
        };
        // pool is never empty
        *pool.choose(&mut self.rng).unwrap_or(&Direction::Up)
    }

    /// Drive `session` until it ends and report how it went
    pub fn play_out<R: Rng>(&mut self, session: &mut Session<R>) -> GameSummary {
        self.play_out_with(session, |_, _, _| {})
    }

    /// Like [`Bot::play_out`], calling `on_turn` with the direction, the
    /// outcome and the resulting board after every accepted turn
    pub fn play_out_with<R, F>(
        &mut self,
        session: &mut Session<R>,
        mut on_turn: F,
    ) -> GameSummary
    where
        R: Rng,
        F: FnMut(Direction, TurnOutcome, &Board),
    {
        loop {
            let dir = self.choose(session.board());
            match session.play(dir) {
                Ok(outcome) => on_turn(dir, outcome, session.board()),
                Err(GameError::GameOver) => return session.summary(),
            }
        }
    }
}

/// Greedy: keep the most empty cells after the slide
fn choose_greedy(board: &Board) -> Direction {
    let mut best: Option<(Direction, usize)> = None;
    for dir in Direction::ALL {
        let moved = board.move_tiles(dir);
        if moved == *board {
            continue;
        }
        let empty = moved.empty_count();
        if best.map_or(true, |(_, most)| empty > most) {
            best = Some((dir, empty));
        }
    }
    best.map(|(dir, _)| dir).unwrap_or(Direction::Up)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_creation() {
        let bot = Bot::new(Strategy::Greedy);
        assert_eq!(bot.strategy, Strategy::Greedy);
    }

    #[test]
    fn test_cycle_ignores_board() {
        let mut bot = Bot::with_seed(Strategy::Cycle, 0);
        let board = Board::new();
        let moves: Vec<Direction> = (0..5).map(|_| bot.choose(&board)).collect();
        assert_eq!(
            moves,
            vec![
                Direction::Up,
                Direction::Right,
                Direction::Down,
                Direction::Left,
                Direction::Up
            ]
        );
    }

    #[test]
    fn test_random_only_picks_effective_moves() {
        let mut bot = Bot::with_seed(Strategy::Random, 3);
        // Tile in the top-left corner can only go right or down
        let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        for _ in 0..50 {
            let dir = bot.choose(&board);
            assert!(matches!(dir, Direction::Right | Direction::Down));
        }
    }

    #[test]
    fn test_greedy_prefers_merges() {
        let board = Board::from_rows([[2, 2, 0, 0], [4, 0, 0, 0], [0; 4], [0; 4]]);
        // Up changes nothing and Down keeps all three tiles. Left and Right
        // both merge the pair; Left comes first.
        assert_eq!(choose_greedy(&board), Direction::Left);
    }

    #[test]
    fn test_play_out_reaches_game_over() {
        let mut session = Session::with_rng(StdRng::seed_from_u64(2));
        let mut bot = Bot::with_seed(Strategy::Greedy, 2);

        let summary = bot.play_out(&mut session);

        assert!(session.is_over());
        assert!(summary.board.is_full());
        assert!(summary.max_tile >= 8);
        assert_eq!(summary.turns, session.turns());
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("Greedy".parse::<Strategy>(), Ok(Strategy::Greedy));
        assert_eq!("cycle".parse::<Strategy>(), Ok(Strategy::Cycle));
        assert_eq!(
            "smart".parse::<Strategy>(),
            Err(ParseStrategyError("smart".to_string()))
        );
        assert_eq!(
            ParseStrategyError("smart".to_string()).to_string(),
            "Unknown strategy: \"smart\""
        );
    }

    #[test]
    fn test_reused_bot_keeps_cycling_across_hints() {
        // One hint per call, re-selecting the same strategy each time
        let mut bot = Bot::with_seed(Strategy::Greedy, 0);
        let board = Board::from_rows([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let hints: Vec<Direction> = (0..4)
            .map(|_| {
                bot.set_strategy(Strategy::Cycle);
                bot.choose(&board)
            })
            .collect();

        assert_eq!(
            hints,
            vec![
                Direction::Up,
                Direction::Right,
                Direction::Down,
                Direction::Left
            ]
        );
    }

    #[test]
    fn test_changing_strategy_restarts_cycle() {
        let mut bot = Bot::with_seed(Strategy::Cycle, 0);
        let board = Board::new();
        bot.choose(&board);
        bot.choose(&board);

        bot.set_strategy(Strategy::Random);
        bot.set_strategy(Strategy::Cycle);
        assert_eq!(bot.choose(&board), Direction::Up);
    }

    #[test]
    fn test_play_out_with_reports_every_accepted_turn() {
        let mut session = Session::with_rng(StdRng::seed_from_u64(6));
        let mut bot = Bot::with_seed(Strategy::Cycle, 6);
        let mut moved = 0;
        let mut ignored = 0;

        let summary = bot.play_out_with(&mut session, |_, outcome, board| {
            match outcome {
                TurnOutcome::Moved { .. } => moved += 1,
                TurnOutcome::Ignored => ignored += 1,
            }
            assert!(!board.is_empty());
        });

        assert_eq!(moved, summary.turns);
        assert_eq!(ignored, summary.ignored);
    }
}
