use crate::ai::{select_move, Difficulty};
use crate::config::GameConfig;
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, Player, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::{error, info};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

use super::game_view::{self, View};
use super::scoreboard::Scoreboard;

pub struct App {
    game_state: GameState,
    difficulty: Difficulty,
    human_starts: bool,
    ai_delay: Duration,
    selected_column: usize,
    scores: Scoreboard,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(difficulty: Difficulty, config: &GameConfig) -> Self {
        let first = if config.human_starts {
            Player::HUMAN
        } else {
            Player::COMPUTER
        };
        App {
            game_state: GameState::with_first_player(first),
            difficulty,
            human_starts: config.human_starts,
            ai_delay: Duration::from_millis(config.ai_delay_ms),
            selected_column: 3, // Start in middle
            scores: Scoreboard::new(),
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_computer_turn() {
                // The computer's move is one atomic step; input typed while
                // it "thinks" is dropped.
                std::thread::sleep(self.ai_delay);
                self.play_computer_turn();
                while event::poll(Duration::ZERO)? {
                    event::read()?;
                }
                continue;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn is_computer_turn(&self) -> bool {
        !self.game_state.is_terminal() && self.game_state.current_player() == Player::COMPUTER
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.restart();
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char(c @ '1'..='5') => {
                let level = c as u8 - b'0';
                if let Ok(difficulty) = Difficulty::try_from(level) {
                    self.difficulty = difficulty;
                    info!("difficulty set to {difficulty}");
                    self.message = Some(format!("Difficulty: {difficulty}"));
                }
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        let first = if self.human_starts {
            Player::HUMAN
        } else {
            Player::COMPUTER
        };
        self.game_state = GameState::with_first_player(first);
        self.selected_column = 3;
    }

    /// Drop the human's piece in the selected column
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.game_state.current_player() != Player::HUMAN {
            return;
        }

        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(()) => self.check_finished(),
            Err(MoveError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Compute, apply and score the computer's move.
    pub fn play_computer_turn(&mut self) {
        if !self.is_computer_turn() {
            return;
        }

        let result = select_move(self.game_state.board(), self.difficulty)
            .map_err(|e| e.to_string())
            .and_then(|col| {
                self.game_state
                    .apply_move_mut(col)
                    .map_err(|e| e.to_string())
            });
        match result {
            Ok(()) => self.check_finished(),
            Err(e) => {
                error!("computer move failed: {e}");
                self.message = Some(format!("Computer could not move: {e}"));
            }
        }
    }

    /// Score the game and announce the result if the last move ended it.
    fn check_finished(&mut self) {
        let Some(outcome) = self.game_state.outcome() else {
            return;
        };
        self.scores.record(outcome);
        info!("game over: {outcome:?} ({})", self.scores);
        self.message = Some(match outcome {
            GameOutcome::Winner(player) if player == Player::HUMAN => "You won!".to_string(),
            GameOutcome::Winner(_) => "Computer won!".to_string(),
            GameOutcome::Draw => "It's a draw!".to_string(),
        });
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        game_view::render(
            frame,
            &View {
                game_state: &self.game_state,
                selected_column: self.selected_column,
                message: self.message.as_deref(),
                difficulty: self.difficulty,
                scores: &self.scores,
            },
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Difficulty::default(), &GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, ROWS};
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn piece_count(state: &GameState) -> usize {
        let board = state.board();
        (0..ROWS)
            .flat_map(|row| (0..COLS).map(move |col| (row, col)))
            .filter(|&(row, col)| board.get(row, col) != Cell::Empty)
            .count()
    }

    fn app(difficulty: Difficulty) -> App {
        App::new(
            difficulty,
            &GameConfig {
                ai_delay_ms: 0,
                ..GameConfig::default()
            },
        )
    }

    #[test]
    fn human_drop_hands_turn_to_computer() {
        let mut app = app(Difficulty::Greedy);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state().board().get(5, 3), Cell::Red);
        assert!(app.is_computer_turn());

        app.play_computer_turn();
        assert_eq!(app.game_state().current_player(), Player::HUMAN);
        assert_eq!(piece_count(app.game_state()), 2);
    }

    #[test]
    fn human_cannot_move_on_computer_turn() {
        let mut app = app(Difficulty::Greedy);
        press(&mut app, KeyCode::Enter);
        let before = *app.game_state();
        press(&mut app, KeyCode::Enter);
        assert_eq!(*app.game_state(), before);
    }

    #[test]
    fn column_selection_is_clamped() {
        let mut app = app(Difficulty::Greedy);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state().board().get(5, 0), Cell::Red);

        app.play_computer_turn();
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        press(&mut app, KeyCode::Enter);
        let board = app.game_state().board();
        assert!((0..ROWS).any(|row| board.get(row, 6) == Cell::Red));
    }

    #[test]
    fn full_column_shows_message() {
        let mut app = app(Difficulty::Greedy);
        // Fill column 3 with alternating pieces, leaving the human to move.
        for _ in 0..ROWS {
            app.game_state.apply_move_mut(3).unwrap();
        }
        assert!(app.game_state().board().is_column_full(3));
        assert_eq!(app.game_state().current_player(), Player::HUMAN);
        assert!(!app.game_state().is_terminal());

        let before = *app.game_state();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Column is full!"));
        assert_eq!(*app.game_state(), before);
        assert!(!app.is_computer_turn());

        press(&mut app, KeyCode::Left);
        assert_eq!(app.message(), None);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state().board().get(5, 2), Cell::Red);
        assert!(app.is_computer_turn());
    }

    #[test]
    fn difficulty_keys() {
        let mut app = app(Difficulty::Random);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.difficulty(), Difficulty::Hard);
        assert_eq!(app.message(), Some("Difficulty: Level 4 - Hard"));
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn finished_game_is_scored() {
        let mut app = app(Difficulty::Tactical);
        // The human always plays the leftmost open column.
        while !app.game_state().is_terminal() {
            let col = app.game_state().legal_actions()[0];
            for _ in 0..COLS {
                press(&mut app, KeyCode::Left);
            }
            for _ in 0..col {
                press(&mut app, KeyCode::Right);
            }
            press(&mut app, KeyCode::Enter);
            app.play_computer_turn();
        }
        assert_eq!(app.scores().games(), 1);
        assert!(app.message().is_some());

        press(&mut app, KeyCode::Char('r'));
        assert!(!app.game_state().is_terminal());
        assert_eq!(piece_count(app.game_state()), 0);
        assert_eq!(app.scores().games(), 1);
    }

    #[test]
    fn computer_can_open_the_game() {
        let mut app = App::new(
            Difficulty::Expert,
            &GameConfig {
                human_starts: false,
                ai_delay_ms: 0,
                ..GameConfig::default()
            },
        );
        assert!(app.is_computer_turn());
        app.play_computer_turn();
        assert_eq!(app.game_state().board().get(5, 3), Cell::Yellow);
    }

    #[test]
    fn quit_key() {
        let mut app = app(Difficulty::Random);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
