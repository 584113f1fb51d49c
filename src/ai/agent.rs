use crate::error::EngineError;
use crate::game::{Board, Player};

/// Common interface for the computer's move-selection strategies.
///
/// Agents never mutate the board they are given; lookahead works on copies.
pub trait Agent {
    /// Pick a legal column for [`Agent::player`] on `board`.
    ///
    /// Returns [`EngineError::NoValidMove`] when the board is full.
    fn select_action(&mut self, board: &Board) -> Result<usize, EngineError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// The marker this agent plays.
    fn player(&self) -> Player;
}

/// Legal columns of `board`, or `NoValidMove` if there are none.
pub(crate) fn legal_moves(board: &Board) -> Result<Vec<usize>, EngineError> {
    let moves = board.valid_moves();
    if moves.is_empty() {
        return Err(EngineError::NoValidMove);
    }
    Ok(moves)
}
