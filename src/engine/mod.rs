//! Host engine contract
//!
//! The game logic never owns the frame loop. A host drives it through:
//! - Input snapshots (held / newly pressed keys)
//! - A canvas for draw calls
//! - A sprite loader for named image resources
//! - Session control for stop requests
//!
//! `headless` provides an in-process host for the native binary and tests.

pub mod collider;
pub mod headless;
pub mod input;

pub use collider::Collider;
pub use headless::{DrawCall, HeadlessHost, RecordingCanvas, SpriteLibrary, StopFlag};
pub use input::{GameKey, InputState};

/// Opaque handle to a sprite resource loaded by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    id: u32,
    name: String,
}

impl Sprite {
    /// Hosts mint handles; game code only passes them back to the canvas
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Draw primitives offered by the host
pub trait Canvas {
    /// Draw a sprite with its top-left corner at (x, y)
    fn draw_sprite(&mut self, sprite: &Sprite, x: i32, y: i32);
    /// Draw a filled disc centered at (x, y)
    fn draw_disc(&mut self, x: i32, y: i32, radius: i32);
    /// Draw text with its baseline starting at (x, y)
    fn draw_text(&mut self, x: i32, y: i32, text: &str);
}

/// Sprite resource loading
pub trait SpriteLoader {
    /// Returns `None` when the host has no resource with that name
    fn load_sprite(&mut self, name: &str) -> Option<Sprite>;
}

/// Session control (game loop termination)
pub trait SessionControl {
    /// Ask the host to end the session at the next frame boundary
    fn request_stop(&mut self);
    fn stop_requested(&self) -> bool;
}
