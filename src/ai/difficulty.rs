use std::fmt;

use log::debug;

use crate::error::EngineError;
use crate::game::{Board, Player};

use super::agent::Agent;
use super::greedy::GreedyAgent;
use super::minimax::MinimaxAgent;
use super::random::RandomAgent;
use super::tactical::TacticalAgent;

/// Computer strength, levels 1 (weakest) to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Difficulty {
    /// Uniform-random legal column.
    #[default]
    Random,
    /// Best immediate static score.
    Greedy,
    /// Win, else block, else greedy.
    Tactical,
    /// Minimax to depth 4.
    Hard,
    /// Minimax to depth 5.
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Random,
        Difficulty::Greedy,
        Difficulty::Tactical,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Numeric level, 1..=5.
    pub fn level(self) -> u8 {
        match self {
            Difficulty::Random => 1,
            Difficulty::Greedy => 2,
            Difficulty::Tactical => 3,
            Difficulty::Hard => 4,
            Difficulty::Expert => 5,
        }
    }

    /// Search depth for the minimax levels.
    pub fn search_depth(self) -> Option<usize> {
        match self {
            Difficulty::Hard => Some(4),
            Difficulty::Expert => Some(5),
            _ => None,
        }
    }

    /// Build the strategy for this level playing `player`.
    pub fn agent(self, player: Player) -> Box<dyn Agent> {
        match (self, self.search_depth()) {
            (_, Some(depth)) => Box::new(MinimaxAgent::new(depth, player)),
            (Difficulty::Random, None) => Box::new(RandomAgent::new(player)),
            (Difficulty::Greedy, None) => Box::new(GreedyAgent::new(player)),
            (_, None) => Box::new(TacticalAgent::new(player)),
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = EngineError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Difficulty::Random),
            2 => Ok(Difficulty::Greedy),
            3 => Ok(Difficulty::Tactical),
            4 => Ok(Difficulty::Hard),
            5 => Ok(Difficulty::Expert),
            other => Err(EngineError::InvalidDifficulty(other)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Random => "Easy",
            Difficulty::Greedy => "Simple",
            Difficulty::Tactical => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        };
        write!(f, "Level {} - {}", self.level(), label)
    }
}

/// Pick the computer's column at the given difficulty.
///
/// The board is only read; fails with [`EngineError::NoValidMove`] on a full
/// board.
pub fn select_move(board: &Board, difficulty: Difficulty) -> Result<usize, EngineError> {
    select_move_for(board, difficulty, Player::COMPUTER)
}

/// [`select_move`] for an arbitrary engine marker.
pub fn select_move_for(
    board: &Board,
    difficulty: Difficulty,
    player: Player,
) -> Result<usize, EngineError> {
    let mut agent = difficulty.agent(player);
    let col = agent.select_action(board)?;
    debug!("{} ({}) plays column {col} for {}", agent.name(), difficulty, player.name());
    Ok(col)
}
