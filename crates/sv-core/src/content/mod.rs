//! Content population
//!
//! Post-placement pass that fills each finished room: environment props
//! via ordered per-rule probability sampling, and enemies under a
//! distance-gated, cost-budgeted selection rule. Runs only after the
//! room graph is final so placement never conflicts with growth.

mod enemies;
mod props;

pub use enemies::{EnemyHandle, EnemyRule, EnemySpawn, spawn_enemies};
pub use props::{PropHandle, PropInstance, PropRule, scatter_props};

use crate::rng::GameRng;

/// Uniform point inside the room interior, local to the room center.
///
/// The interior is the room's half-extents shrunk by the wall padding on
/// both axes, so content never hugs a wall (or a doorway).
pub(crate) fn random_interior_point(
    room_width: f32,
    room_height: f32,
    wall_padding: f32,
    rng: &mut GameRng,
) -> (f32, f32) {
    let half_w = (room_width / 2.0 - wall_padding).max(0.0);
    let half_h = (room_height / 2.0 - wall_padding).max(0.0);
    (rng.uniform(-half_w, half_w), rng.uniform(-half_h, half_h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_point_respects_padding() {
        let mut rng = GameRng::new(3);
        for _ in 0..500 {
            let (x, y) = random_interior_point(20.0, 12.0, 1.5, &mut rng);
            assert!(x.abs() <= 8.5);
            assert!(y.abs() <= 4.5);
        }
    }

    #[test]
    fn test_interior_point_degenerate_room() {
        // Padding larger than the half-extent collapses to the center.
        let mut rng = GameRng::new(3);
        let (x, y) = random_interior_point(2.0, 2.0, 5.0, &mut rng);
        assert_eq!((x, y), (0.0, 0.0));
    }
}
