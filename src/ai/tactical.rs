use log::debug;

use crate::error::EngineError;
use crate::game::{Board, Player};

use super::agent::{legal_moves, Agent};
use super::eval::{evaluate, FOUR_SCORE};
use super::greedy::greedy_move;

/// First column (ascending) after which `player`'s static score reaches
/// [`FOUR_SCORE`].
///
/// The opponent's open threes still count against the total, so a move that
/// completes four can fall short of the threshold and is not reported.
pub fn find_immediate_win(board: &Board, player: Player) -> Option<usize> {
    board.valid_moves().into_iter().find(|&col| {
        board
            .apply_move(col, player)
            .is_ok_and(|next| evaluate(&next, player) >= FOUR_SCORE)
    })
}

/// Level 3: win if possible, otherwise block, otherwise play greedily.
pub struct TacticalAgent {
    player: Player,
}

impl TacticalAgent {
    pub fn new(player: Player) -> Self {
        TacticalAgent { player }
    }
}

impl Agent for TacticalAgent {
    fn select_action(&mut self, board: &Board) -> Result<usize, EngineError> {
        legal_moves(board)?;

        if let Some(col) = find_immediate_win(board, self.player) {
            debug!("tactical: winning move in column {col}");
            return Ok(col);
        }
        if let Some(col) = find_immediate_win(board, self.player.other()) {
            debug!("tactical: blocking column {col}");
            return Ok(col);
        }
        greedy_move(board, self.player)
    }

    fn name(&self) -> &str {
        "Tactical"
    }

    fn player(&self) -> Player {
        self.player
    }
}
