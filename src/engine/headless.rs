//! In-process headless host
//!
//! Drives a `Game` frame by frame without a display: draw calls are recorded,
//! sprites come from a name registry and collisions are found by testing
//! every entity pair. Used by the native binary and by tests.

use std::time::Instant;

use super::{Canvas, InputState, SessionControl, Sprite, SpriteLoader};
use crate::consts::PLAYER_SPRITE;
use crate::sim::{FinalReport, Game};

/// FPS overlay position (top-right)
const FPS_TEXT_POS: (i32, i32) = (96, 7);

/// A recorded draw call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Sprite { name: String, x: i32, y: i32 },
    Disc { x: i32, y: i32, radius: i32 },
    Text { x: i32, y: i32, text: String },
}

/// Canvas that keeps the draw calls of one render pass
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Centers of every disc drawn
    pub fn discs(&self) -> Vec<(i32, i32)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Disc { x, y, .. } => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    /// Every text drawn
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn draw_sprite(&mut self, sprite: &Sprite, x: i32, y: i32) {
        self.calls.push(DrawCall::Sprite {
            name: sprite.name().to_string(),
            x,
            y,
        });
    }

    fn draw_disc(&mut self, x: i32, y: i32, radius: i32) {
        self.calls.push(DrawCall::Disc { x, y, radius });
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.calls.push(DrawCall::Text {
            x,
            y,
            text: text.to_string(),
        });
    }
}

/// Sprite registry keyed by resource name
#[derive(Debug, Clone, Default)]
pub struct SpriteLibrary {
    names: Vec<String>,
    next_id: u32,
}

impl SpriteLibrary {
    /// Library holding the player sprite
    pub fn with_player_sprite() -> Self {
        let mut library = Self::default();
        library.register(PLAYER_SPRITE);
        library
    }

    pub fn register(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }
}

impl SpriteLoader for SpriteLibrary {
    fn load_sprite(&mut self, name: &str) -> Option<Sprite> {
        if !self.names.iter().any(|n| n == name) {
            log::warn!("Sprite {name:?} is not registered");
            return None;
        }
        self.next_id += 1;
        Some(Sprite::new(self.next_id, name))
    }
}

/// Stop request flag
#[derive(Debug, Clone, Copy, Default)]
pub struct StopFlag(bool);

impl SessionControl for StopFlag {
    fn request_stop(&mut self) {
        self.0 = true;
    }

    fn stop_requested(&self) -> bool {
        self.0
    }
}

/// Headless frame driver
#[derive(Debug)]
pub struct HeadlessHost {
    sprites: SpriteLibrary,
    canvas: RecordingCanvas,
    stop: StopFlag,
    prev_held: u8,
    frame: u64,
    // FPS tracking
    started_at: Option<Instant>,
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new(SpriteLibrary::with_player_sprite())
    }
}

impl HeadlessHost {
    pub fn new(sprites: SpriteLibrary) -> Self {
        Self {
            sprites,
            canvas: RecordingCanvas::default(),
            stop: StopFlag::default(),
            prev_held: 0,
            frame: 0,
            started_at: None,
        }
    }

    /// Start a session, clearing whatever the previous one left behind
    pub fn start(&mut self, game: &mut Game) {
        let config = game.config();
        let fps_counter = if config.show_fps { "on" } else { "off" };
        let backlight = if config.always_backlight {
            "always on"
        } else {
            "auto"
        };
        log::info!(
            "Headless host: {} fps target, fps counter {fps_counter}, backlight {backlight}",
            config.target_fps
        );

        self.canvas.clear();
        self.stop = StopFlag::default();
        self.prev_held = 0;
        self.frame = 0;
        game.start(&mut self.sprites);
        self.started_at = Some(Instant::now());
    }

    /// Run one frame with `held` as the held-key mask
    ///
    /// Update pass, collision pass, render pass. A stop requested during the
    /// frame is honored once all three passes are done, which ends the
    /// session and returns its report.
    pub fn run_frame(&mut self, game: &mut Game, held: u8) -> Option<FinalReport> {
        let input = InputState::from_transition(self.prev_held, held);
        self.prev_held = held;

        game.update(input, &mut self.stop);
        Self::collision_pass(game);

        self.canvas.clear();
        game.render(&mut self.canvas);
        if game.config().show_fps {
            let text = format!("FPS: {}", self.measured_fps());
            self.canvas.draw_text(FPS_TEXT_POS.0, FPS_TEXT_POS.1, &text);
        }
        self.frame += 1;

        if self.stop.stop_requested() {
            return game.stop();
        }
        None
    }

    /// External termination request, honored immediately
    pub fn terminate(&mut self, game: &mut Game) -> Option<FinalReport> {
        self.stop.request_stop();
        game.stop()
    }

    /// Deliver a collision to both sides of every touching pair
    fn collision_pass(game: &mut Game) {
        let pairs: Vec<(usize, usize)> = match game.level() {
            Some(level) => {
                let entities = level.entities();
                let mut pairs = Vec::new();
                for (i, a) in entities.iter().enumerate() {
                    for (j, b) in entities.iter().enumerate().skip(i + 1) {
                        if a.touches(b) {
                            pairs.push((i, j));
                        }
                    }
                }
                pairs
            }
            None => return,
        };

        for (a, b) in pairs {
            game.collide(a, b);
            game.collide(b, a);
        }
    }

    fn measured_fps(&self) -> u32 {
        let Some(started_at) = self.started_at else {
            return 0;
        };
        let elapsed = started_at.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            (self.frame as f64 / elapsed).round() as u32
        } else {
            0
        }
    }

    /// Draw calls of the last render pass
    pub fn canvas(&self) -> &RecordingCanvas {
        &self.canvas
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn stop_requested(&self) -> bool {
        self.stop.stop_requested()
    }
}
