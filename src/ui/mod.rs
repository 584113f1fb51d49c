//! Terminal UI: the human-vs-computer game screen and session scoreboard.

mod app;
mod game_view;
mod scoreboard;

pub use app::App;
pub use scoreboard::Scoreboard;
