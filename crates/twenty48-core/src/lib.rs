//! Twenty48 - a board transition engine for the 2048 sliding-tile puzzle
//!
//! This crate provides the core game logic, including:
//! - The four-direction move vocabulary
//! - A 4x4 board with slide-and-merge transitions and random tile spawns
//! - A session that sequences turns and detects game over
//! - Simple bots that drive a session to its end
//!
//! # Architecture
//!
//! The engine is pure and synchronous. Boards are `Copy` snapshots and all
//! randomness comes from an injected [`rand::Rng`], so seeded games replay
//! exactly. It can be compiled to:
//! - Native Rust for console drivers and batch play
//! - WebAssembly for in-browser play (`wasm` feature)
//!
//! # Modules
//!
//! - [`direction`]: Up, Down, Left, Right and their unit vectors
//! - [`board`]: Grid representation and transitions
//! - [`session`]: Turn orchestration and the game-over signal
//! - [`bot`]: Programmatic players

pub mod board;
pub mod bot;
pub mod direction;
pub mod session;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use board::{Board, InvalidTile, Tile, EMPTY, WALL};
pub use bot::{Bot, ParseStrategyError, Strategy};
pub use direction::{Direction, ParseDirectionError};
pub use session::{GameError, GameSummary, Session, SessionState, TurnOutcome};
