use tracing::info;

use crate::ai::{derive_seed, Difficulty, StrategyConfig};
use crate::error::PlayError;
use crate::game::{GameOutcome, Side};

use super::game_loop::GameLoop;

/// Arena configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    /// Swap who plays X every game; otherwise the first contender is always X.
    pub alternate_sides: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 100,
            alternate_sides: true,
        }
    }
}

/// Aggregate results of a match between two difficulty tiers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MatchReport {
    pub first: Difficulty,
    pub second: Difficulty,
    pub games: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
    pub total_plies: usize,
}

impl MatchReport {
    fn new(first: Difficulty, second: Difficulty) -> Self {
        MatchReport {
            first,
            second,
            games: 0,
            first_wins: 0,
            second_wins: 0,
            draws: 0,
            total_plies: 0,
        }
    }

    fn rate(&self, count: usize) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        count as f32 / self.games as f32
    }

    pub fn first_win_rate(&self) -> f32 {
        self.rate(self.first_wins)
    }

    pub fn second_win_rate(&self) -> f32 {
        self.rate(self.second_wins)
    }

    pub fn draw_rate(&self) -> f32 {
        self.rate(self.draws)
    }

    pub fn average_game_length(&self) -> f32 {
        self.rate(self.total_plies)
    }
}

/// Play a single game. Returns `Some(true)` if `first` won, `Some(false)` if
/// it lost, `None` on a draw, plus the number of plies.
pub fn play_game(
    first: Difficulty,
    second: Difficulty,
    first_is_x: bool,
    config: &StrategyConfig,
) -> Result<(Option<bool>, usize), PlayError> {
    let (x, o) = if first_is_x {
        (first, second)
    } else {
        (second, first)
    };
    let mut game = GameLoop::new(x.build(Side::X, config), o.build(Side::O, config))?;

    let mut plies = 0;
    let outcome = game.run(|ply, _| plies = ply.number)?;

    let result = match outcome {
        GameOutcome::Win(winner) => Some((winner == Side::X) == first_is_x),
        GameOutcome::Draw | GameOutcome::InProgress => None,
    };
    Ok((result, plies))
}

/// Play `arena.games` games between two tiers and tally the results.
pub fn play_match(
    first: Difficulty,
    second: Difficulty,
    arena: &ArenaConfig,
    strategy: &StrategyConfig,
) -> Result<MatchReport, PlayError> {
    let mut report = MatchReport::new(first, second);

    for game_index in 0..arena.games {
        let first_is_x = !arena.alternate_sides || game_index % 2 == 0;
        let config = match strategy.seed {
            Some(seed) => strategy.with_seed(derive_seed(seed, game_index as u64)),
            None => strategy.clone(),
        };

        let (result, plies) = play_game(first, second, first_is_x, &config)?;
        match result {
            Some(true) => report.first_wins += 1,
            Some(false) => report.second_wins += 1,
            None => report.draws += 1,
        }
        report.games += 1;
        report.total_plies += plies;
    }

    info!(
        %first,
        %second,
        games = report.games,
        first_wins = report.first_wins,
        second_wins = report.second_wins,
        draws = report.draws,
        "match complete"
    );
    Ok(report)
}
