//! Move selection for the computer player: the `Agent` trait, the window
//! evaluator, and the four strategies behind the five difficulty levels.

mod agent;
mod difficulty;
pub mod eval;
mod greedy;
mod minimax;
mod random;
mod tactical;

pub use agent::Agent;
pub use difficulty::{select_move, select_move_for, Difficulty};
pub use eval::evaluate;
pub use greedy::{greedy_move, GreedyAgent};
pub use minimax::{minimax, MinimaxAgent, SearchResult};
pub use random::RandomAgent;
pub use tactical::{find_immediate_win, TacticalAgent};
