use log::debug;

use crate::error::EngineError;
use crate::game::{Board, Player};

use super::agent::{legal_moves, Agent};
use super::eval::evaluate;

/// Score of a searched position and the column that achieved it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    /// `None` at leaves (depth exhausted or no legal moves).
    pub best_move: Option<usize>,
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// `player` is the engine's marker. Maximizing layers drop `player`'s pieces
/// and minimizing layers drop the opponent's, but every leaf is scored with
/// `evaluate(board, player)`: the opponent's plies minimize the engine's score
/// rather than maximizing a score of their own. Won positions are not treated
/// as terminal either; the four-in-a-row window weight carries them.
///
/// Columns are tried in ascending order and ties keep the first column found.
pub fn minimax(
    board: &Board,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    player: Player,
) -> SearchResult {
    let moves = board.valid_moves();
    if depth == 0 || moves.is_empty() {
        return SearchResult {
            score: evaluate(board, player),
            best_move: None,
        };
    }

    let mover = if maximizing { player } else { player.other() };
    let mut best = SearchResult {
        score: if maximizing { i32::MIN } else { i32::MAX },
        best_move: Some(moves[0]),
    };

    for col in moves {
        let Ok(next) = board.apply_move(col, mover) else {
            continue;
        };
        let score = minimax(&next, depth - 1, alpha, beta, !maximizing, player).score;

        if maximizing {
            if score > best.score {
                best = SearchResult {
                    score,
                    best_move: Some(col),
                };
            }
            alpha = alpha.max(score);
        } else {
            if score < best.score {
                best = SearchResult {
                    score,
                    best_move: Some(col),
                };
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            break;
        }
    }

    best
}

/// Minimax agent with alpha-beta pruning (levels 4 and 5).
pub struct MinimaxAgent {
    depth: usize,
    player: Player,
}

impl MinimaxAgent {
    pub fn new(depth: usize, player: Player) -> Self {
        MinimaxAgent { depth, player }
    }

    /// Run the search from the root with the engine to move.
    pub fn search(&self, board: &Board) -> Result<SearchResult, EngineError> {
        legal_moves(board)?;
        Ok(minimax(board, self.depth, i32::MIN, i32::MAX, true, self.player))
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, board: &Board) -> Result<usize, EngineError> {
        let result = self.search(board)?;
        debug!(
            "minimax depth {}: column {:?} scores {}",
            self.depth, result.best_move, result.score
        );
        // A root with legal moves and depth >= 1 always records a column; a
        // zero-depth agent falls back to the first legal one.
        match result.best_move {
            Some(col) => Ok(col),
            None => legal_moves(board).map(|moves| moves[0]),
        }
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn player(&self) -> Player {
        self.player
    }
}
