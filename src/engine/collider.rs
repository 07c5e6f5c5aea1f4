//! Collider shapes and overlap tests
//!
//! Shapes are centered on their entity's position. Touching edges count as
//! an overlap.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A collision shape attached to an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collider {
    /// Axis-aligned rectangle
    Rect {
        width: i32,
        height: i32,
    },
    Circle { radius: i32 },
}

impl Collider {
    /// Axis-aligned bounds (min, max) when centered at `pos`
    pub fn bounds(&self, pos: IVec2) -> (IVec2, IVec2) {
        let half = match *self {
            Collider::Rect { width, height } => IVec2::new(width / 2, height / 2),
            Collider::Circle { radius } => IVec2::splat(radius),
        };
        (pos - half, pos + half)
    }

    /// Check whether this shape at `pos` overlaps `other` at `other_pos`
    pub fn overlaps(&self, pos: IVec2, other: &Collider, other_pos: IVec2) -> bool {
        match (*self, *other) {
            (Collider::Circle { radius: a }, Collider::Circle { radius: b }) => {
                let reach = a + b;
                (other_pos - pos).length_squared() <= reach * reach
            }
            (Collider::Rect { .. }, Collider::Circle { radius }) => {
                rect_circle(self.bounds(pos), other_pos, radius)
            }
            (Collider::Circle { radius }, Collider::Rect { .. }) => {
                rect_circle(other.bounds(other_pos), pos, radius)
            }
            (Collider::Rect { .. }, Collider::Rect { .. }) => {
                let (a_min, a_max) = self.bounds(pos);
                let (b_min, b_max) = other.bounds(other_pos);
                a_min.cmple(b_max).all() && b_min.cmple(a_max).all()
            }
        }
    }
}

/// Closest point on the rectangle to the circle center
fn rect_circle((min, max): (IVec2, IVec2), center: IVec2, radius: i32) -> bool {
    let closest = center.clamp(min, max);
    (center - closest).length_squared() <= radius * radius
}
