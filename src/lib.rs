//! # Connect Four
//!
//! Connect Four against a computer opponent with five difficulty levels,
//! played in a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Board, player markers, win/draw detection, turn state
//! - [`ai`]: Agent trait, window evaluator, random/greedy/tactical/minimax strategies
//! - [`ui`]: Terminal game screen and session scoreboard
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
