//! The four moves a player can make.
//!
//! Each direction maps to an axis-aligned unit vector on the board, where
//! `x` grows to the right and `y` grows downwards:
//! - `Up`: (0, -1)
//! - `Down`: (0, 1)
//! - `Left`: (-1, 0)
//! - `Right`: (1, 0)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Direction in which all tiles slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards row 0
    Up,
    /// Towards row 3
    Down,
    /// Towards column 0
    Left,
    /// Towards column 3
    Right,
}

impl Direction {
    /// All directions, in the order bots break ties
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)` for this direction
    pub fn vector(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The direction pointing the other way
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Lower-case name, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input that does not name one of the four directions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown direction: {0:?}")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts full names plus WASD and vi-style keys.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "w" | "k" => Ok(Direction::Up),
            "down" | "s" | "j" => Ok(Direction::Down),
            "left" | "a" | "h" => Ok(Direction::Left),
            "right" | "d" | "l" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectors_are_unit_steps() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.vector();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn test_opposite_negates_vector() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.vector();
            assert_eq!(dir.opposite().vector(), (-dx, -dy));
        }
    }

    #[test]
    fn test_parse_names_and_keys() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("LEFT".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!(" d ".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!("j".parse::<Direction>(), Ok(Direction::Down));
        assert!("north".parse::<Direction>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>(), Ok(dir));
        }
    }
}
