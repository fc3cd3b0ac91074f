//! The 4x4 tile grid and its transition rules.
//!
//! This module contains:
//! - Cell addressing with a wall sentinel for out-of-grid reads
//! - The slide-and-merge transition for a single move
//! - Random tile placement
//! - Fullness and summary queries
//!
//! `Board` is a small `Copy` value. Every transition returns a new board and
//! leaves the receiver untouched, so callers can compare before and after.

use crate::direction::Direction;
use crate::session::GameError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Value stored in a cell: 0 for empty, otherwise a power of two
pub type Tile = u32;

/// Width and height of the grid
pub const SIZE: usize = 4;

/// Number of cells on the grid
pub const CELLS: usize = SIZE * SIZE;

/// An empty cell
pub const EMPTY: Tile = 0;

/// Returned by [`Board::get`] for coordinates outside the grid.
///
/// Never equal to a legal tile, so sliding stops at the edge the same way it
/// stops at a tile of a different value.
pub const WALL: Tile = Tile::MAX;

/// Largest tile reachable from an opening position, and the largest value
/// accepted when a board is built or deserialized.
///
/// Hand-built boards can still merge past it, e.g. two adjacent `MAX_TILE`s
/// become `2 * MAX_TILE`. Such values stay far below [`WALL`].
pub const MAX_TILE: Tile = 1 << 17;

/// Odds that a spawned tile is a 2 rather than a 4 (numerator, denominator)
const TWO_ODDS: (u32, u32) = (9, 10);

/// Whether `value` may be placed in a cell when building a board
pub fn is_valid_tile(value: Tile) -> bool {
    value == EMPTY || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}

/// Flat index for `(x, y)`, or `None` outside the grid
fn index(x: i8, y: i8) -> Option<usize> {
    if (0..SIZE as i8).contains(&x) && (0..SIZE as i8).contains(&y) {
        Some(x as usize + SIZE * y as usize)
    } else {
        None
    }
}

/// Visit order along one axis: farthest cells in the direction of travel first
fn traversal(step: i8) -> [i8; SIZE] {
    if step > 0 {
        [3, 2, 1, 0]
    } else {
        [0, 1, 2, 3]
    }
}

/// A cell value rejected while building a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid tile value {0}")]
pub struct InvalidTile(pub Tile);

/// Unchecked wire form of [`Board`]
#[derive(Deserialize)]
struct RawBoard {
    cells: [Tile; CELLS],
}

impl TryFrom<RawBoard> for Board {
    type Error = InvalidTile;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_cells(raw.cells)
    }
}

/// The game grid, stored row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    cells: [Tile; CELLS],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; CELLS],
        }
    }

    /// Build a board from row-major cells, rejecting any value that is
    /// neither 0 nor a power of two between 2 and [`MAX_TILE`]
    pub fn from_cells(cells: [Tile; CELLS]) -> Result<Self, InvalidTile> {
        match cells.iter().find(|&&value| !is_valid_tile(value)) {
            Some(&value) => Err(InvalidTile(value)),
            None => Ok(Self { cells }),
        }
    }

    /// Build a board from rows, top row first.
    ///
    /// Panics on a value [`Board::from_cells`] would reject.
    pub fn from_rows(rows: [[Tile; SIZE]; SIZE]) -> Self {
        let mut cells = [EMPTY; CELLS];
        for (i, value) in rows.iter().flatten().enumerate() {
            cells[i] = *value;
        }
        match Self::from_cells(cells) {
            Ok(board) => board,
            Err(err) => panic!("{}", err),
        }
    }

    /// An empty board with two random tiles, the opening position of a game
    pub fn seeded<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut board = Self::new();
        for _ in 0..2 {
            board = board
                .place_random(rng)
                .unwrap_or_else(|_| unreachable!("an empty board has free cells"));
        }
        board
    }

    /// Read the cell at column `x`, row `y`; [`WALL`] outside the grid
    pub fn get(&self, x: i8, y: i8) -> Tile {
        match index(x, y) {
            Some(i) => self.cells[i],
            None => WALL,
        }
    }

    /// Only called with coordinates already proven in range by `get`
    fn set(&mut self, x: i8, y: i8, value: Tile) {
        debug_assert!(index(x, y).is_some(), "write outside the grid");
        self.cells[x as usize + SIZE * y as usize] = value;
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Tile; CELLS] {
        &self.cells
    }

    /// The grid as rows, top row first
    pub fn rows(&self) -> [[Tile; SIZE]; SIZE] {
        let mut rows = [[EMPTY; SIZE]; SIZE];
        for (i, &value) in self.cells.iter().enumerate() {
            rows[i / SIZE][i % SIZE] = value;
        }
        rows
    }

    /// Slide every tile as far as it goes in `direction`, merging equal
    /// neighbours.
    ///
    /// A tile merges at most once per move, and a cell produced by a merge
    /// does not absorb another tile during the same move.
    pub fn move_tiles(&self, direction: Direction) -> Board {
        let (dx, dy) = direction.vector();
        let mut next = *self;
        let mut merged = [false; CELLS];

        for x in traversal(dx) {
            for y in traversal(dy) {
                let value = next.get(x, y);
                if value == EMPTY {
                    continue;
                }

                let (mut cx, mut cy) = (x, y);
                loop {
                    let (nx, ny) = (cx + dx, cy + dy);
                    let ahead = next.get(nx, ny);

                    if ahead == value {
                        let target = nx as usize + SIZE * ny as usize;
                        if !merged[target] {
                            next.set(nx, ny, value * 2);
                            next.set(cx, cy, EMPTY);
                            merged[target] = true;
                        }
                        break;
                    } else if ahead != EMPTY {
                        // Different tile or the wall
                        break;
                    }

                    next.set(nx, ny, value);
                    next.set(cx, cy, EMPTY);
                    cx = nx;
                    cy = ny;
                }
            }
        }

        next
    }

    /// Put a 2 (9 in 10) or a 4 (1 in 10) on a uniformly chosen empty cell.
    ///
    /// Fails with [`GameError::GameOver`] when the board is full.
    pub fn place_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, GameError> {
        let empty: Vec<usize> = self.empty_cells().collect();
        let &target = empty.choose(rng).ok_or(GameError::GameOver)?;

        let mut next = *self;
        next.cells[target] = if rng.gen_ratio(TWO_ODDS.0, TWO_ODDS.1) {
            2
        } else {
            4
        };
        Ok(next)
    }

    /// Indices of empty cells, row-major
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value == EMPTY)
            .map(|(i, _)| i)
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.empty_cells().count()
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&value| value != EMPTY)
    }

    /// Check if the board is completely empty
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&value| value == EMPTY)
    }

    /// Highest tile on the board (0 when empty)
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(EMPTY)
    }

    /// Sum of all tile values
    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|&value| u64::from(value)).sum()
    }

    /// Whether moving in `direction` would change anything
    pub fn can_move(&self, direction: Direction) -> bool {
        self.move_tiles(direction) != *self
    }

    /// Whether any direction would change the board
    pub fn has_moves(&self) -> bool {
        Direction::ALL.iter().any(|&dir| self.can_move(dir))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Four lines of four space-separated values, each line newline-terminated
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|value| value.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
