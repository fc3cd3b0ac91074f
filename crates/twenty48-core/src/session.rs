//! Turn sequencing for a single game.
//!
//! A [`Session`] owns the current [`Board`] and the random source used to
//! spawn tiles. Each call to [`Session::play`] slides the tiles, skips the
//! turn if nothing moved, and otherwise spawns one new tile. When no tile can
//! be spawned the session terminates with [`GameError::GameOver`].

use crate::board::{Board, Tile};
use crate::direction::Direction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    /// No empty cell is left for a new tile
    #[error("Game is over")]
    GameOver,
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Moves are accepted
    Active,
    /// A tile could not be spawned; absorbing
    Terminated,
}

/// What a successful call to [`Session::play`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Tiles moved and a new tile with value `spawned` appeared
    Moved { spawned: Tile },
    /// Nothing could move in that direction; the board is unchanged
    Ignored,
}

/// Final report of a game, consumed by drivers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Turns that spawned a tile
    pub turns: u32,
    /// Turns skipped because nothing moved
    pub ignored: u32,
    /// Highest tile on the last board
    pub max_tile: Tile,
    /// Last board of the game
    pub board: Board,
}

/// A single game in progress
#[derive(Debug, Clone)]
pub struct Session<R = StdRng> {
    board: Board,
    state: SessionState,
    turns: u32,
    ignored: u32,
    rng: R,
}

impl Session<StdRng> {
    /// Start a game seeded from system entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Start a reproducible game
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Session<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Session<R> {
    /// Start a game on an empty board seeded with two random tiles
    pub fn with_rng(mut rng: R) -> Self {
        let board = Board::seeded(&mut rng);
        Self::from_board(board, rng)
    }

    /// Continue from an existing position
    pub fn from_board(board: Board, rng: R) -> Self {
        Self {
            board,
            state: SessionState::Active,
            turns: 0,
            ignored: 0,
            rng,
        }
    }

    /// Play one turn.
    ///
    /// A move that changes nothing on a board with free cells is ignored and
    /// spawns no tile. Otherwise a tile is spawned; if that fails the session
    /// terminates and keeps its last board. Once terminated, every call
    /// returns [`GameError::GameOver`].
    pub fn play(&mut self, direction: Direction) -> Result<TurnOutcome, GameError> {
        if self.state == SessionState::Terminated {
            return Err(GameError::GameOver);
        }

        let candidate = self.board.move_tiles(direction);
        if candidate == self.board && !self.board.is_full() {
            self.ignored += 1;
            return Ok(TurnOutcome::Ignored);
        }

        match candidate.place_random(&mut self.rng) {
            Ok(next) => {
                let spawned = (next.sum() - candidate.sum()) as Tile;
                self.board = next;
                self.turns += 1;
                Ok(TurnOutcome::Moved { spawned })
            }
            Err(err) => {
                self.state = SessionState::Terminated;
                Err(err)
            }
        }
    }

    /// Current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Check if the game has ended
    pub fn is_over(&self) -> bool {
        self.state == SessionState::Terminated
    }

    /// Highest tile on the current board
    pub fn max_tile(&self) -> Tile {
        self.board.max_tile()
    }

    /// Turns that spawned a tile
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Turns ignored because nothing moved
    pub fn ignored(&self) -> u32 {
        self.ignored
    }

    /// Snapshot of the session for reporting
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            turns: self.turns,
            ignored: self.ignored,
            max_tile: self.max_tile(),
            board: self.board,
        }
    }
}
