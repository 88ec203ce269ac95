use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::ai::{derive_seed, Mover, StrategyConfig};
use crate::config::AppConfig;
use crate::error::PlayError;
use crate::game::{GameOutcome, Side};
use crate::session::{Command, GameLoop, PlayerKind};

use super::console::Console;
use super::human::HumanMover;
use super::render::{outcome_text, render_board};

/// Console front end: reads startup commands and plays games until `exit`.
pub struct App<R, W> {
    console: Console<R, W>,
    config: AppConfig,
    games_started: u64,
}

impl<R: BufRead + 'static, W: Write + 'static> App<R, W> {
    pub fn new(console: Console<R, W>, config: AppConfig) -> Self {
        App {
            console,
            config,
            games_started: 0,
        }
    }

    /// Main application loop. Ends on `exit` or when input runs out.
    pub fn run(&mut self) -> Result<(), PlayError> {
        loop {
            self.console.print("Input command: ")?;
            let Some(line) = self.console.read_line()? else {
                return Ok(());
            };

            match line.parse::<Command>() {
                Ok(Command::Exit) => return Ok(()),
                Ok(Command::Start { x, o }) => match self.play(x, o) {
                    Ok(_) => {}
                    Err(PlayError::InputClosed) => return Ok(()),
                    Err(err) => return Err(err),
                },
                Err(err) => {
                    debug!(%err, "rejected command");
                    self.console.println("Bad parameters!")?;
                    self.console.println(&err.to_string())?;
                }
            }
        }
    }

    /// Play one game, printing the board after every ply.
    pub fn play(&mut self, x: PlayerKind, o: PlayerKind) -> Result<GameOutcome, PlayError> {
        let strategy = self.game_strategy(self.games_started);
        self.games_started += 1;
        let mut game = GameLoop::new(
            self.mover(x, Side::X, &strategy),
            self.mover(o, Side::O, &strategy),
        )?;
        self.console.println(&render_board(game.state().board()))?;

        while let Some(side) = game.state().side_to_move() {
            let kind = if side == Side::X { x } else { o };
            if let PlayerKind::Computer(difficulty) = kind {
                self.console.println(&format!(
                    "Making move level {difficulty} (as {side})."
                ))?;
                self.think();
            }

            game.step()?;
            self.console.println(&render_board(game.state().board()))?;
        }

        let outcome = game.state().outcome();
        self.console.println(&outcome_text(outcome))?;
        Ok(outcome)
    }

    /// Strategy settings for the `game`-th game of this session. A fixed
    /// seed yields a distinct, reproducible stream per game.
    fn game_strategy(&self, game: u64) -> StrategyConfig {
        let strategy = &self.config.strategy;
        match strategy.seed {
            Some(seed) => strategy.with_seed(derive_seed(seed, game)),
            None => strategy.clone(),
        }
    }

    fn mover(&self, kind: PlayerKind, side: Side, strategy: &StrategyConfig) -> Box<dyn Mover> {
        match kind {
            PlayerKind::Human => Box::new(HumanMover::new(side, self.console.clone())),
            PlayerKind::Computer(difficulty) => difficulty.build(side, strategy),
        }
    }

    fn think(&self) {
        let delay = self.config.play.move_delay_ms;
        if delay > 0 {
            thread::sleep(Duration::from_millis(delay));
        }
    }
}
