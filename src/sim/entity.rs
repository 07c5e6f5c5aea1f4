//! Entities and the closed set of behavior kinds
//!
//! Each entity carries its behavior as a variant; hook dispatch and collision
//! filtering both go through the variant tag.

use glam::IVec2;
use rand::Rng;

use super::player::{self, PlayerState};
use super::state::GameState;
use super::target;
use crate::engine::{Canvas, Collider, InputState, SessionControl};

/// Identity of an entity's behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Target,
}

/// Behavior variant with its per-entity state
#[derive(Debug, Clone)]
pub enum Behavior {
    Player(PlayerState),
    Target,
}

impl Behavior {
    /// Default per-entity state for `kind`
    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Player => Behavior::Player(PlayerState::default()),
            EntityKind::Target => Behavior::Target,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Behavior::Player(_) => EntityKind::Player,
            Behavior::Target => EntityKind::Target,
        }
    }
}

/// An in-game object with a position and an optional collider
#[derive(Debug, Clone)]
pub struct Entity {
    pos: IVec2,
    collider: Option<Collider>,
    behavior: Behavior,
}

impl Entity {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            pos: IVec2::ZERO,
            collider: None,
            behavior,
        }
    }

    #[inline]
    pub fn pos(&self) -> IVec2 {
        self.pos
    }

    #[inline]
    pub fn set_pos(&mut self, pos: IVec2) {
        self.pos = pos;
    }

    pub fn collider(&self) -> Option<&Collider> {
        self.collider.as_ref()
    }

    /// Attach a rectangle centered on the entity position
    pub fn add_rect_collider(&mut self, width: i32, height: i32) {
        self.collider = Some(Collider::Rect { width, height });
    }

    /// Attach a circle centered on the entity position
    pub fn add_circle_collider(&mut self, radius: i32) {
        self.collider = Some(Collider::Circle { radius });
    }

    pub fn kind(&self) -> EntityKind {
        self.behavior.kind()
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    pub fn behavior_mut(&mut self) -> &mut Behavior {
        &mut self.behavior
    }

    /// Check whether the colliders of two entities overlap
    pub fn touches(&self, other: &Entity) -> bool {
        match (self.collider, other.collider) {
            (Some(a), Some(b)) => a.overlaps(self.pos, &b, other.pos),
            _ => false,
        }
    }

    /// Start hook (entity was added to the level)
    pub fn start<R: Rng>(&mut self, rng: &mut R) {
        match self.kind() {
            EntityKind::Player => {}
            EntityKind::Target => target::start(self, rng),
        }
    }

    /// Per-frame update hook
    pub fn update(&mut self, input: InputState, session: &mut dyn SessionControl) {
        match self.kind() {
            EntityKind::Player => player::update(self, input, session),
            EntityKind::Target => {}
        }
    }

    /// Per-frame render hook, runs after every update
    pub fn render(&self, canvas: &mut dyn Canvas, game: &GameState) {
        match &self.behavior {
            Behavior::Player(state) => player::render(self, state, canvas, game),
            Behavior::Target => target::render(self, canvas),
        }
    }

    /// Collision hook, `other` is the kind of the entity we overlap
    pub fn on_collision<R: Rng>(&mut self, other: EntityKind, game: &mut GameState, rng: &mut R) {
        match self.kind() {
            EntityKind::Player => {}
            EntityKind::Target => target::on_collision(self, other, game, rng),
        }
    }
}
