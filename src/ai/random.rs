use crate::error::EngineError;
use crate::game::{Board, Player};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::{legal_moves, Agent};

/// An agent that selects uniformly at random from legal columns (level 1).
pub struct RandomAgent {
    player: Player,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(player: Player) -> Self {
        RandomAgent {
            player,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic agent for reproducible games and tests.
    pub fn with_seed(player: Player, seed: u64) -> Self {
        RandomAgent {
            player,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, board: &Board) -> Result<usize, EngineError> {
        let actions = legal_moves(board)?;
        let idx = self.rng.random_range(0..actions.len());
        Ok(actions[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn player(&self) -> Player {
        self.player
    }
}
