use crate::error::EngineError;
use crate::game::{Board, Player};

use super::agent::{legal_moves, Agent};
use super::eval::evaluate;

/// One-ply lookahead: the column whose resulting board scores best for
/// `player`. Ties go to the lowest column.
pub fn greedy_move(board: &Board, player: Player) -> Result<usize, EngineError> {
    let moves = legal_moves(board)?;

    let mut best_move = moves[0];
    let mut best_score = i32::MIN;
    for col in moves {
        let Ok(next) = board.apply_move(col, player) else {
            continue;
        };
        let score = evaluate(&next, player);
        if score > best_score {
            best_score = score;
            best_move = col;
        }
    }

    Ok(best_move)
}

/// Level 2: greedy static evaluation of every immediate move.
pub struct GreedyAgent {
    player: Player,
}

impl GreedyAgent {
    pub fn new(player: Player) -> Self {
        GreedyAgent { player }
    }
}

impl Agent for GreedyAgent {
    fn select_action(&mut self, board: &Board) -> Result<usize, EngineError> {
        greedy_move(board, self.player)
    }

    fn name(&self) -> &str {
        "Greedy"
    }

    fn player(&self) -> Player {
        self.player
    }
}
