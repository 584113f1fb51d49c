use std::fmt;

use crate::game::{GameOutcome, Player};

/// Running tally of finished games in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub human: u32,
    pub computer: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game.
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Winner(player) if player == Player::HUMAN => self.human += 1,
            GameOutcome::Winner(_) => self.computer += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.human + self.computer + self.draws
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You: {} | Computer: {} | Draws: {}",
            self.human, self.computer, self.draws
        )
    }
}
