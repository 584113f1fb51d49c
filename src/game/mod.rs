//! Core Connect Four game logic: board representation, player markers, win and
//! draw detection, and a small turn-tracking state machine for drivers.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, GameOutcome, COLS, CONNECT, ROWS};
pub use player::Player;
pub use state::GameState;
