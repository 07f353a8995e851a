//! Environment prop scatter
//!
//! Attempts scale with room area; each attempt draws one interior point
//! and walks the rule list in declared order, spawning the first prop
//! whose probability sample succeeds. Earlier rules therefore take
//! priority over later ones; the list order is part of the tuning.

use serde::{Deserialize, Serialize};

use super::random_interior_point;
use crate::rng::GameRng;

/// Opaque renderable handle for a prop prefab, owned by the embedder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropHandle(pub u32);

/// Stateless scatter rule shared across all rooms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropRule {
    pub handle: PropHandle,
    /// Per-attempt spawn probability in [0, 1]
    pub chance: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    /// Whether the prop may be horizontally mirrored
    pub can_mirror: bool,
}

/// A prop to instantiate, local to the room center
///
/// Mirroring is carried in the sign of `scale`: a negative scale means
/// the prop is flipped horizontally. `mirrored()` and `magnitude()`
/// unpack the two for hosts that want them separately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropInstance {
    pub handle: PropHandle,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl PropInstance {
    pub fn mirrored(&self) -> bool {
        self.scale < 0.0
    }

    pub fn magnitude(&self) -> f32 {
        self.scale.abs()
    }
}

/// Scatter props through one room interior
///
/// Attempt count = round(room area x density). At most one prop spawns
/// per attempt point.
pub fn scatter_props(
    rules: &[PropRule],
    room_width: f32,
    room_height: f32,
    wall_padding: f32,
    density: f32,
    rng: &mut GameRng,
) -> Vec<PropInstance> {
    let attempts = (room_width * room_height * density).round().max(0.0) as u32;
    let mut placed = Vec::new();

    for _ in 0..attempts {
        let (x, y) = random_interior_point(room_width, room_height, wall_padding, rng);

        for rule in rules {
            if !rng.chance(rule.chance) {
                continue;
            }
            let mut scale = rng.uniform(rule.min_scale, rule.max_scale);
            if rule.can_mirror && rng.one_in(2) {
                scale = -scale;
            }
            placed.push(PropInstance {
                handle: rule.handle,
                x,
                y,
                scale,
            });
            break;
        }
    }

    placed
}
