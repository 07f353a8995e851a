//! Generation tuning constants
//!
//! Defaults for [`GeneratorConfig`](crate::dungeon::GeneratorConfig);
//! hosts override them per level.

/// Default number of rooms in a level, start and boss rooms included
pub const DEFAULT_TOTAL_ROOMS: u32 = 16;

/// Default number of boss rooms placed at frontier dead-ends
pub const DEFAULT_BOSS_ROOMS: u32 = 1;

/// Default room extent in world units (width)
pub const DEFAULT_ROOM_WIDTH: f32 = 20.0;

/// Default room extent in world units (height)
pub const DEFAULT_ROOM_HEIGHT: f32 = 12.0;

/// Margin kept clear along room walls when scattering content
pub const DEFAULT_WALL_PADDING: f32 = 1.5;

/// Prop attempts per unit of room area
pub const DEFAULT_PROP_DENSITY: f32 = 0.04;

/// Default per-room enemy point budget
pub const DEFAULT_ENEMY_BUDGET: u32 = 10;

/// Safety cap on enemy-selection iterations per room
pub const ENEMY_SPAWN_ITERATION_CAP: u32 = 100;
