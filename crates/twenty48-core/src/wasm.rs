//! WebAssembly bindings for the Twenty48 engine.
//!
//! This module exposes a session to JavaScript through wasm-bindgen.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::bot::{Bot, Strategy};
#[cfg(feature = "wasm")]
use crate::direction::Direction;
#[cfg(feature = "wasm")]
use crate::session::{Session, TurnOutcome};

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed game wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmGame {
    session: Session,
    /// Kept across hints so a cycling bot advances between calls
    bot: Bot,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmGame {
    /// Start a game; a missing seed draws one from browser entropy
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> WasmGame {
        let (session, bot) = match seed {
            Some(seed) => (
                Session::with_seed(seed),
                Bot::with_seed(Strategy::Greedy, seed),
            ),
            None => (Session::new(), Bot::new(Strategy::Greedy)),
        };
        WasmGame { session, bot }
    }

    /// Play a move ("up", "down", "left", "right" or a WASD key).
    /// Returns true if a tile was spawned, false if the move was ignored.
    pub fn play(&mut self, direction: &str) -> Result<bool, JsValue> {
        let direction: Direction = direction
            .parse()
            .map_err(|e| JsValue::from_str(&format!("{}", e)))?;

        match self.session.play(direction) {
            Ok(TurnOutcome::Moved { .. }) => Ok(true),
            Ok(TurnOutcome::Ignored) => Ok(false),
            Err(e) => Err(JsValue::from_str(&format!("{}", e))),
        }
    }

    /// Get the board as a JSON array of four rows
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self) -> String {
        serde_json::to_string(&self.session.board().rows()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get the board as four lines of text
    #[wasm_bindgen(js_name = getBoardText)]
    pub fn get_board_text(&self) -> String {
        self.session.board().to_string()
    }

    /// Check if the game is over
    #[wasm_bindgen(js_name = isOver)]
    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    /// Highest tile on the board
    #[wasm_bindgen(js_name = maxTile)]
    pub fn max_tile(&self) -> u32 {
        self.session.max_tile()
    }

    /// Get the game summary as JSON
    #[wasm_bindgen(js_name = getSummary)]
    pub fn get_summary(&self) -> String {
        serde_json::to_string(&self.session.summary()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get a bot's suggested move
    /// strategy: "cycle", "random" or "greedy"
    #[wasm_bindgen(js_name = getBotMove)]
    pub fn get_bot_move(&mut self, strategy: &str) -> String {
        self.bot.set_strategy(strategy.parse().unwrap_or(Strategy::Greedy));
        self.bot.choose(self.session.board()).to_string()
    }
}
