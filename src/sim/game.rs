//! Game session lifecycle
//!
//! Uninitialized → Running (start) → Stopped (stop, terminal). The host calls
//! `update`, `collide` and `render` each frame while the game is running.

use rand_pcg::Pcg32;

use super::level::Level;
use super::state::{FinalReport, GameState, RngState};
use crate::GameConfig;
use crate::engine::{Canvas, InputState, SessionControl, SpriteLoader};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Uninitialized,
    Running,
    /// Terminal
    Stopped,
}

/// A game session: configuration, shared state, the level and the RNG
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    rng_state: RngState,
    rng: Pcg32,
    state: GameState,
    level: Option<Level>,
    phase: GamePhase,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let rng_state = RngState::new(seed);
        Self {
            config,
            rng: rng_state.to_rng(),
            rng_state,
            state: GameState::new(),
            level: None,
            phase: GamePhase::Uninitialized,
        }
    }

    /// Reset the score and register the level
    pub fn start(&mut self, loader: &mut dyn SpriteLoader) {
        if self.phase != GamePhase::Uninitialized {
            log::warn!("Game already started ({:?}), ignoring start", self.phase);
            return;
        }

        self.state = GameState::new();
        self.level = Some(Level::alloc(loader, &mut self.rng));
        self.phase = GamePhase::Running;

        log::info!(
            "Game started with seed {} at {} fps",
            self.rng_state.seed,
            self.config.target_fps
        );
    }

    /// Update pass over every entity, in level order
    pub fn update(&mut self, input: InputState, session: &mut dyn SessionControl) {
        if self.phase != GamePhase::Running {
            return;
        }
        if let Some(level) = self.level.as_mut() {
            for entity in level.entities_mut() {
                entity.update(input, session);
            }
        }
    }

    /// Deliver a collision to the entity at `index`, caused by the entity at `other`
    pub fn collide(&mut self, index: usize, other: usize) {
        if self.phase != GamePhase::Running {
            return;
        }
        let Some(level) = self.level.as_mut() else {
            return;
        };
        let Some(other_kind) = level.entities().get(other).map(|e| e.kind()) else {
            return;
        };
        if let Some(entity) = level.entities_mut().get_mut(index) {
            entity.on_collision(other_kind, &mut self.state, &mut self.rng);
        }
    }

    /// Render pass over every entity, in level order
    pub fn render(&self, canvas: &mut dyn Canvas) {
        if self.phase != GamePhase::Running {
            return;
        }
        if let Some(level) = &self.level {
            for entity in level.entities() {
                entity.render(canvas, &self.state);
            }
        }
    }

    /// End the session and report the final score
    ///
    /// Returns `None` unless the game was running.
    pub fn stop(&mut self) -> Option<FinalReport> {
        if self.phase != GamePhase::Running {
            log::warn!("Game not running ({:?}), ignoring stop", self.phase);
            return None;
        }

        self.phase = GamePhase::Stopped;
        let report = FinalReport {
            score: self.state.score(),
        };
        log::info!("{report}");
        Some(report)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    pub fn level_mut(&mut self) -> Option<&mut Level> {
        self.level.as_mut()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }
}
