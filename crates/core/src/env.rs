//! Environment module - game state and the per-tick step scheduler
//!
//! A tick applies exactly one [`Action`] and then, unless that action was
//! `Down`, one automatic-fall check: the piece drops a row if it can, and
//! locks otherwise. Locking stamps the piece, clears full rows, spawns the
//! next piece, and ends the game if that spawn already collides.
//!
//! Once the game is over every further step is a no-op returning `done` until
//! the environment is reset.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::active::{ActivePiece, MoveDown};
use crate::config::EnvConfig;
use crate::error::{EnvError, Result};
use crate::grid::Grid;
use crate::line_clear::lock_and_clear;
use crate::rng::{PieceQueue, PieceRule};
use crate::snapshot::EnvSnapshot;
use crate::types::{Action, GAME_OVER_REWARD, LINE_CLEAR_REWARD, LINE_CLEAR_SCORE};

/// Auxiliary per-step information; always empty, kept for driver compatibility
pub type StepInfo = BTreeMap<String, i64>;

/// Result of one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Locked grid with the active piece drawn on top
    pub observation: Grid,
    pub reward: i32,
    pub done: bool,
    pub info: StepInfo,
}

/// Mutable simulation state for one episode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    active: ActivePiece,
    score: u32,
    game_over: bool,
    lines_cleared: u32,
    pieces_locked: u32,
    ticks: u32,
}

impl GameState {
    /// Start an episode from an explicit grid and falling piece
    pub fn new(grid: Grid, active: ActivePiece) -> Self {
        Self {
            grid,
            active,
            score: 0,
            game_over: false,
            lines_cleared: 0,
            pieces_locked: 0,
            ticks: 0,
        }
    }

    /// Locked cells only, without the falling piece
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Total rows cleared this episode
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Steps that advanced the simulation (no-op steps after game over excluded)
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Copy of the grid with the active piece written at its id
    ///
    /// Piece cells outside the grid are skipped.
    pub fn overlay(&self) -> Grid {
        let mut out = self.grid.clone();
        let id = self.active.id();
        for (row, col) in self.active.cells() {
            if out.in_bounds(row, col) {
                out.write(row as usize, col as usize, id);
            }
        }
        out
    }
}

/// A single, independently owned simulation
#[derive(Debug, Clone)]
pub struct TetrisEnv {
    config: EnvConfig,
    queue: PieceQueue,
    state: GameState,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
}

impl TetrisEnv {
    /// Create an environment and start its first episode
    ///
    /// Without a configured seed one is drawn once; [`TetrisEnv::seed`]
    /// reports it so the run can be replayed.
    pub fn new(config: EnvConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut queue = PieceQueue::new(seed, config.piece_rule);
        let state = Self::fresh_state(&config, &mut queue);

        Ok(Self {
            config,
            queue,
            state,
            episode_id: 1,
        })
    }

    /// Create an environment around a prepared state
    ///
    /// The state's grid must match the configured dimensions.
    pub fn with_state(config: EnvConfig, state: GameState) -> Result<Self> {
        config.validate()?;
        if state.grid.width() != config.width || state.grid.height() != config.height {
            return Err(EnvError::InvalidConfig(format!(
                "state grid is {}x{}, config expects {}x{}",
                state.grid.width(),
                state.grid.height(),
                config.width,
                config.height
            )));
        }
        let seed = config.seed.unwrap_or_else(rand::random);
        let queue = PieceQueue::new(seed, config.piece_rule);

        Ok(Self {
            config,
            queue,
            state,
            episode_id: 1,
        })
    }

    fn fresh_state(config: &EnvConfig, queue: &mut PieceQueue) -> GameState {
        let grid = Grid::new(config.width, config.height);
        let active = ActivePiece::spawn(queue.draw(), config.width);
        GameState::new(grid, active)
    }

    /// The fixed action set, in index order
    pub fn action_space() -> &'static [Action] {
        &Action::ALL
    }

    /// Start a new episode, continuing the current piece stream
    pub fn reset(&mut self) -> Grid {
        self.state = Self::fresh_state(&self.config, &mut self.queue);
        self.episode_id = self.episode_id.wrapping_add(1);
        debug!(episode = self.episode_id, "reset");
        self.state.overlay()
    }

    /// Start a new episode with the piece stream restarted from `seed`
    pub fn reset_with_seed(&mut self, seed: u64) -> Grid {
        self.queue.reseed(seed);
        self.reset()
    }

    /// Current overlay without advancing time
    pub fn overlay(&self) -> Grid {
        self.state.overlay()
    }

    pub fn game(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Seed the current piece stream started from
    pub fn seed(&self) -> u64 {
        self.queue.seed()
    }

    /// Rule the piece stream draws with
    pub fn piece_rule(&self) -> PieceRule {
        self.queue.rule()
    }

    pub fn snapshot(&self) -> EnvSnapshot {
        EnvSnapshot::capture(self)
    }

    /// Step with a raw action index, rejecting anything outside 0..=3
    pub fn step_index(&mut self, index: i64) -> Result<Step> {
        let action = Action::from_index(index).ok_or(EnvError::InvalidAction(index))?;
        Ok(self.step(action))
    }

    /// Advance one tick: the explicit action, then the automatic fall check
    pub fn step(&mut self, action: Action) -> Step {
        if self.state.game_over {
            return self.finish(0);
        }

        self.state.ticks += 1;
        let mut reward = 0;

        let state = &mut self.state;
        match action {
            Action::Left => {
                state.active.move_left(&state.grid);
            }
            Action::Right => {
                state.active.move_right(&state.grid);
            }
            Action::Rotate => {
                state.active.rotate(&state.grid);
            }
            Action::Down => {
                if state.active.move_down(&state.grid) == MoveDown::Blocked {
                    reward += self.lock_sequence();
                }
            }
        }

        // Down already resolved its own fall; a second check would double-lock.
        if action != Action::Down && !self.state.game_over {
            let state = &mut self.state;
            if state.active.move_down(&state.grid) == MoveDown::Blocked {
                reward += self.lock_sequence();
            }
        }

        self.finish(reward)
    }

    fn finish(&self, reward: i32) -> Step {
        Step {
            observation: self.state.overlay(),
            reward,
            done: self.state.game_over,
            info: StepInfo::new(),
        }
    }

    /// Lock the active piece, clear rows, spawn the next piece and check for
    /// a blocked spawn. Returns the reward earned by this lock.
    fn lock_sequence(&mut self) -> i32 {
        let state = &mut self.state;
        let locked = state.active.kind();
        let cleared = lock_and_clear(&mut state.grid, &state.active) as u32;

        state.score += cleared * LINE_CLEAR_SCORE;
        state.lines_cleared += cleared;
        state.pieces_locked += 1;
        let mut reward = cleared as i32 * LINE_CLEAR_REWARD;

        let next = ActivePiece::spawn(self.queue.draw(), self.config.width);
        let blocked = next.collides(&state.grid);
        state.active = next;

        debug!(
            piece = locked.as_str(),
            cleared,
            score = state.score,
            next = state.active.kind().as_str(),
            "piece locked"
        );

        if blocked {
            state.game_over = true;
            reward += GAME_OVER_REWARD;
            info!(
                episode = self.episode_id,
                score = state.score,
                lines = state.lines_cleared,
                ticks = state.ticks,
                "game over"
            );
        }

        reward
    }
}
