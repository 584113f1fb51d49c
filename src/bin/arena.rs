use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use connect_four::ai::{Agent, Difficulty, RandomAgent};
use connect_four::game::{GameOutcome, GameState, Player};

/// Pit two difficulty levels against each other without a UI.
#[derive(Parser, Debug)]
#[command(name = "arena", about = "Play computer-vs-computer Connect Four matches")]
struct Args {
    /// Difficulty for Red (1-5)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=5))]
    red: u8,

    /// Difficulty for Yellow (1-5)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=5))]
    yellow: u8,

    /// Number of games to play
    #[arg(long, default_value_t = 20)]
    games: usize,

    /// Alternate which colour moves first
    #[arg(long)]
    swap: bool,

    /// Random seed for level-1 players
    #[arg(long, default_value_t = 1u64)]
    seed: u64,
}

#[derive(Debug, Default)]
struct MoveTimes {
    total: Duration,
    max: Duration,
    count: u32,
}

impl MoveTimes {
    fn record(&mut self, elapsed: Duration) {
        self.total += elapsed;
        self.max = self.max.max(elapsed);
        self.count += 1;
    }

    fn mean(&self) -> Duration {
        if self.count == 0 {
            Duration::ZERO
        } else {
            self.total / self.count
        }
    }
}

fn build_agent(difficulty: Difficulty, player: Player, seed: u64) -> Box<dyn Agent> {
    match difficulty {
        Difficulty::Random => Box::new(RandomAgent::with_seed(player, seed)),
        other => other.agent(player),
    }
}

/// Red and Yellow seeds for one game; no two agents in a run share a seed.
fn game_seeds(base: u64, game: usize) -> (u64, u64) {
    let red = base.wrapping_add((game as u64).wrapping_mul(2));
    (red, red.wrapping_add(1))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let red_level = Difficulty::try_from(args.red).context("invalid --red")?;
    let yellow_level = Difficulty::try_from(args.yellow).context("invalid --yellow")?;
    info!("{} games: Red {} vs Yellow {}", args.games, red_level, yellow_level);

    let mut red_wins = 0;
    let mut yellow_wins = 0;
    let mut draws = 0;
    let mut red_times = MoveTimes::default();
    let mut yellow_times = MoveTimes::default();

    for game in 0..args.games {
        let (red_seed, yellow_seed) = game_seeds(args.seed, game);
        let mut red = build_agent(red_level, Player::Red, red_seed);
        let mut yellow = build_agent(yellow_level, Player::Yellow, yellow_seed);

        let first = if args.swap && game % 2 == 1 {
            Player::Yellow
        } else {
            Player::Red
        };
        let mut state = GameState::with_first_player(first);

        while !state.is_terminal() {
            let (agent, times) = match state.current_player() {
                Player::Red => (&mut red, &mut red_times),
                Player::Yellow => (&mut yellow, &mut yellow_times),
            };
            let start = Instant::now();
            let col = agent.select_action(state.board())?;
            times.record(start.elapsed());
            state.apply_move_mut(col)?;
        }

        match state.outcome() {
            Some(GameOutcome::Winner(Player::Red)) => red_wins += 1,
            Some(GameOutcome::Winner(Player::Yellow)) => yellow_wins += 1,
            Some(GameOutcome::Draw) | None => draws += 1,
        }
        debug!("game {} ({:?}):\n{}", game + 1, state.outcome(), state.board());
    }

    println!("Red    ({red_level}): {red_wins} wins");
    println!("Yellow ({yellow_level}): {yellow_wins} wins");
    println!("Draws: {draws}");
    println!(
        "Red move time:    mean {:?}, max {:?}",
        red_times.mean(),
        red_times.max
    );
    println!(
        "Yellow move time: mean {:?}, max {:?}",
        yellow_times.mean(),
        yellow_times.max
    );

    Ok(())
}
