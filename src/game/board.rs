use std::fmt;
use std::str::FromStr;

use super::player::Player;
use crate::error::{BoardParseError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Pieces in a row needed to win.
pub const CONNECT: usize = 4;

/// Line orientations in scan order: horizontal, vertical, diagonal down-right,
/// diagonal up-right. Offsets are (row, col) steps.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player whose marker occupies this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed.
    /// The board is left untouched on error.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn { column: col });
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull { column: col });
        }

        // Find the lowest empty row in this column
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.cells[row][col] = player.to_cell();
        Ok(row)
    }

    /// Return a copy of this board with `player`'s piece dropped in `col`.
    pub fn apply_move(&self, col: usize, player: Player) -> Result<Board, MoveError> {
        let mut next = *self;
        next.drop_piece(col, player)?;
        Ok(next)
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Find a four-in-a-row anywhere on the board.
    ///
    /// Starting cells are scanned row-major, and each starting cell tries the
    /// orientations in [`DIRECTIONS`] order, so the result is reproducible even
    /// for hand-built boards where both players have a line.
    pub fn check_winner(&self) -> Option<Player> {
        for row in 0..ROWS {
            for col in 0..COLS {
                let Some(player) = self.cells[row][col].owner() else {
                    continue;
                };
                if DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| self.line_from(row, col, dr, dc, player))
                {
                    return Some(player);
                }
            }
        }
        None
    }

    /// Terminal state of the board: `None` while the game is still open.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(player) = self.check_winner() {
            Some(GameOutcome::Winner(player))
        } else if self.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    fn line_from(&self, row: usize, col: usize, dr: isize, dc: isize, player: Player) -> bool {
        (1..CONNECT as isize).all(|i| {
            let r = row as isize + dr * i;
            let c = col as isize + dc * i;
            (0..ROWS as isize).contains(&r)
                && (0..COLS as isize).contains(&c)
                && self.cells[r as usize][c as usize].owner() == Some(player)
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Six lines, top row first: `.` empty, `R` red, `Y` yellow.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != ROWS {
            return Err(BoardParseError::RowCount(lines.len()));
        }

        let mut board = Board::new();
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != COLS {
                return Err(BoardParseError::ColumnCount { row, found });
            }
            for (col, ch) in line.chars().enumerate() {
                board.cells[row][col] = match ch {
                    '.' => Cell::Empty,
                    'R' => Cell::Red,
                    'Y' => Cell::Yellow,
                    _ => return Err(BoardParseError::BadCell { row, col, ch }),
                };
            }
        }

        // Gravity: nothing may sit above an empty cell.
        for col in 0..COLS {
            for row in 0..ROWS - 1 {
                if board.cells[row][col] != Cell::Empty && board.cells[row + 1][col] == Cell::Empty
                {
                    return Err(BoardParseError::FloatingPiece { row, col });
                }
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Fill every column bottom-up from the given patterns.
    fn board_from_columns(columns: [&str; COLS]) -> Board {
        let mut board = Board::new();
        for (col, pattern) in columns.iter().enumerate() {
            for ch in pattern.chars() {
                let player = if ch == 'R' { Player::Red } else { Player::Yellow };
                board.drop_piece(col, player).unwrap();
            }
        }
        board
    }

    fn draw_board() -> Board {
        board_from_columns([
            "RYRYRY", "RYRYRY", "YRYRYR", "YRYRYR", "RYRYRY", "RYRYRY", "YRYRYR",
        ])
    }

    /// Random (not necessarily game-legal) gravity-respecting boards.
    fn random_boards(seed: u64, count: usize) -> Vec<Board> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                let mut board = Board::new();
                let pieces = rng.random_range(0..=ROWS * COLS);
                for _ in 0..pieces {
                    let moves = board.valid_moves();
                    let col = moves[rng.random_range(0..moves.len())];
                    let player = if rng.random_bool(0.5) { Player::Red } else { Player::Yellow };
                    board.drop_piece(col, player).unwrap();
                }
                board
            })
            .collect()
    }

    /// Reference win check that walks the 69 windows orientation by orientation.
    fn has_line(board: &Board, player: Player) -> bool {
        let cell = player.to_cell();
        let mut found = false;
        for row in 0..ROWS {
            for col in 0..COLS {
                if col + 3 < COLS {
                    found |= (0..4).all(|i| board.get(row, col + i) == cell);
                }
                if row + 3 < ROWS {
                    found |= (0..4).all(|i| board.get(row + i, col) == cell);
                }
                if row + 3 < ROWS && col + 3 < COLS {
                    found |= (0..4).all(|i| board.get(row + i, col + i) == cell);
                }
                if row >= 3 && col + 3 < COLS {
                    found |= (0..4).all(|i| board.get(row - i, col + i) == cell);
                }
            }
        }
        found
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.valid_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(board.outcome(), None);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        // Drop first piece in column 3
        let row = board.drop_piece(3, Player::Red).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Red);

        // Drop second piece in same column
        let row = board.drop_piece(3, Player::Yellow).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Yellow);
    }

    #[test]
    fn test_apply_move_changes_exactly_one_cell() {
        for board in random_boards(7, 200) {
            for col in board.valid_moves() {
                let landing = (0..ROWS)
                    .rev()
                    .find(|&row| board.get(row, col) == Cell::Empty)
                    .unwrap();
                let next = board.apply_move(col, Player::Yellow).unwrap();
                for row in 0..ROWS {
                    for c in 0..COLS {
                        if (row, c) == (landing, col) {
                            assert_eq!(next.get(row, c), Cell::Yellow);
                        } else {
                            assert_eq!(next.get(row, c), board.get(row, c));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_apply_move_leaves_original_untouched() {
        let board = Board::new();
        let next = board.apply_move(2, Player::Red).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(next.get(5, 2), Cell::Red);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        // Fill column 0
        for _ in 0..ROWS {
            board.drop_piece(0, Player::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        let before = board;
        assert_eq!(
            board.drop_piece(0, Player::Yellow),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(board, before, "failed drop must not mutate the board");
        assert_eq!(
            board.apply_move(0, Player::Yellow),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert!(!board.valid_moves().contains(&0));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(
            board.drop_piece(7, Player::Red),
            Err(MoveError::InvalidColumn { column: 7 })
        );
    }

    #[test]
    fn test_valid_moves_match_open_columns() {
        for board in random_boards(11, 300) {
            let expected: Vec<usize> = (0..COLS)
                .filter(|&col| board.get(0, col) == Cell::Empty)
                .collect();
            assert_eq!(board.valid_moves(), expected);
            assert_eq!(board.valid_moves().is_empty(), board.is_full());
        }
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Player::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.valid_moves().is_empty());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        // Create horizontal line at bottom row
        for col in 0..4 {
            board.drop_piece(col, Player::Red).unwrap();
        }
        assert_eq!(board.check_winner(), Some(Player::Red));
        assert_eq!(board.outcome(), Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        // Create vertical line in column 3
        for _ in 0..4 {
            board.drop_piece(3, Player::Yellow).unwrap();
        }
        assert_eq!(board.check_winner(), Some(Player::Yellow));
    }

    #[test]
    fn test_diagonal_up_win() {
        let board: Board = "
            .......
            .......
            ...R...
            ..RY...
            .RYY...
            RYYY...
        "
        .parse()
        .unwrap();
        assert_eq!(board.check_winner(), Some(Player::Red));
    }

    #[test]
    fn test_diagonal_down_win() {
        let board: Board = "
            .......
            .......
            ...Y...
            ...RY..
            ...RRY.
            ..RRYRY
        "
        .parse()
        .unwrap();
        assert_eq!(board.check_winner(), Some(Player::Yellow));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Player::Red).unwrap();
        }
        assert_eq!(board.check_winner(), None);
    }

    #[test]
    fn test_check_winner_agrees_with_window_scan() {
        for board in random_boards(23, 500) {
            let red = has_line(&board, Player::Red);
            let yellow = has_line(&board, Player::Yellow);
            match board.check_winner() {
                Some(Player::Red) => assert!(red, "false positive for Red:\n{board}"),
                Some(Player::Yellow) => assert!(yellow, "false positive for Yellow:\n{board}"),
                None => assert!(!red && !yellow, "missed a line:\n{board}"),
            }
        }
    }

    #[test]
    fn test_check_winner_scans_row_major() {
        // Both players have a line; the top-most starting cell wins the scan.
        let board: Board = "
            .......
            .......
            YYYY...
            RRRR...
            YRYR...
            RYRY...
        "
        .parse()
        .unwrap();
        assert_eq!(board.check_winner(), Some(Player::Yellow));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = draw_board();
        assert!(board.is_full());
        assert_eq!(board.check_winner(), None);
        assert!(board.valid_moves().is_empty());
        assert_eq!(board.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_display_matches_parse() {
        let text = "\
.......
.......
.......
...Y...
...R...
..RYR..";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.to_string(), text);
        assert_eq!(board.get(5, 2), Cell::Red);
        assert_eq!(board.get(3, 3), Cell::Yellow);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            ".......\n.......".parse::<Board>(),
            Err(BoardParseError::RowCount(2))
        );
        assert_eq!(
            ".......\n.......\n.......\n.......\n.......\n......".parse::<Board>(),
            Err(BoardParseError::ColumnCount { row: 5, found: 6 })
        );
        assert_eq!(
            ".......\n.......\n.......\n.......\n.......\n..X....".parse::<Board>(),
            Err(BoardParseError::BadCell { row: 5, col: 2, ch: 'X' })
        );
        assert_eq!(
            ".......\n.......\n.......\n.......\n...R...\n.......".parse::<Board>(),
            Err(BoardParseError::FloatingPiece { row: 4, col: 3 })
        );
    }
}
