//! Static position evaluation over every four-cell window of the board.

use crate::game::{Board, Player, COLS, CONNECT, ROWS};

/// Score for a window holding four of the evaluated player's pieces.
pub const FOUR_SCORE: i32 = 100_000;
/// Three own pieces and one empty cell.
pub const THREE_SCORE: i32 = 100;
/// Two own pieces and two empty cells.
pub const TWO_SCORE: i32 = 10;
/// Three opponent pieces and one empty cell.
pub const OPPONENT_THREE_SCORE: i32 = -100;

/// Number of distinct four-cell windows on a 6x7 board.
pub const WINDOW_COUNT: usize = 69;

type Window = [(usize, usize); CONNECT];

/// All windows, grouped by orientation: horizontal, vertical, diagonal
/// down-right, diagonal up-right.
pub(crate) const WINDOWS: [Window; WINDOW_COUNT] = build_windows();

const fn build_windows() -> [Window; WINDOW_COUNT] {
    let mut windows = [[(0, 0); CONNECT]; WINDOW_COUNT];
    let mut n = 0;

    // Horizontal
    let mut row = 0;
    while row < ROWS {
        let mut col = 0;
        while col + CONNECT <= COLS {
            let mut i = 0;
            while i < CONNECT {
                windows[n][i] = (row, col + i);
                i += 1;
            }
            n += 1;
            col += 1;
        }
        row += 1;
    }

    // Vertical
    let mut row = 0;
    while row + CONNECT <= ROWS {
        let mut col = 0;
        while col < COLS {
            let mut i = 0;
            while i < CONNECT {
                windows[n][i] = (row + i, col);
                i += 1;
            }
            n += 1;
            col += 1;
        }
        row += 1;
    }

    // Diagonal (top-left to bottom-right)
    let mut row = 0;
    while row + CONNECT <= ROWS {
        let mut col = 0;
        while col + CONNECT <= COLS {
            let mut i = 0;
            while i < CONNECT {
                windows[n][i] = (row + i, col + i);
                i += 1;
            }
            n += 1;
            col += 1;
        }
        row += 1;
    }

    // Diagonal (bottom-left to top-right)
    let mut row = CONNECT - 1;
    while row < ROWS {
        let mut col = 0;
        while col + CONNECT <= COLS {
            let mut i = 0;
            while i < CONNECT {
                windows[n][i] = (row - i, col + i);
                i += 1;
            }
            n += 1;
            col += 1;
        }
        row += 1;
    }

    assert!(n == WINDOW_COUNT);
    windows
}

/// Score a single window from its piece counts.
pub fn score_window(own: usize, opp: usize, empty: usize) -> i32 {
    if own == 4 {
        FOUR_SCORE
    } else if own == 3 && empty == 1 {
        THREE_SCORE
    } else if own == 2 && empty == 2 {
        TWO_SCORE
    } else if opp == 3 && empty == 1 {
        OPPONENT_THREE_SCORE
    } else {
        0
    }
}

/// Sum of [`score_window`] over all 69 windows, seen from `player`'s side.
///
/// Only ever called with the engine's own marker: minimax does not flip the
/// perspective on the opponent's plies.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    WINDOWS
        .iter()
        .map(|window| {
            let mut own = 0;
            let mut opp = 0;
            let mut empty = 0;
            for &(row, col) in window {
                match board.get(row, col).owner() {
                    Some(p) if p == player => own += 1,
                    Some(_) => opp += 1,
                    None => empty += 1,
                }
            }
            score_window(own, opp, empty)
        })
        .sum()
}
