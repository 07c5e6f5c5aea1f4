//! Touch Target - a single-screen arcade game
//!
//! Core modules:
//! - `sim`: Entity behaviors and the level/game lifecycle (player, target, score)
//! - `engine`: Host engine contract plus an in-process headless host
//! - `settings`: Game configuration record

pub mod engine;
pub mod settings;
pub mod sim;

pub use settings::{ConfigError, GameConfig};

/// Game configuration constants
pub mod consts {
    use glam::IVec2;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: i32 = 128;
    pub const SCREEN_HEIGHT: i32 = 64;

    /// Target frame rate the host should try to keep
    pub const DEFAULT_TARGET_FPS: u32 = 30;
    pub const MAX_TARGET_FPS: u32 = 240;

    /// Player defaults
    pub const PLAYER_SPAWN: IVec2 = IVec2::new(64, 32);
    pub const PLAYER_SIZE: i32 = 10;
    pub const PLAYER_HALF_EXTENT: i32 = PLAYER_SIZE / 2;
    /// Movement per frame per held direction
    pub const PLAYER_STEP: i32 = 2;
    pub const PLAYER_SPRITE: &str = "player.fxbm";

    /// Target defaults
    pub const TARGET_RADIUS: i32 = 3;
    /// Smallest coordinate a target may take on either axis
    pub const TARGET_MIN: i32 = 4;
    /// Number of distinct x / y values a target may take
    pub const TARGET_SPAN_X: i32 = 120;
    pub const TARGET_SPAN_Y: i32 = 58;

    /// Score overlay position (top-left)
    pub const SCORE_TEXT_POS: IVec2 = IVec2::new(0, 7);
}
