//! Dungeon generation
//!
//! Grid model, room templates, frontier queue, and the growth algorithm
//! that turns a template set into a placed, door-consistent room graph.

mod frontier;
mod generation;
mod grid;
mod plan;
mod room;
mod template;

pub use frontier::{Frontier, FrontierEntry};
pub use generation::{GenerationError, GeneratorConfig, LevelGenerator};
pub use grid::{Direction, DungeonGrid, GridPos};
pub use plan::{DungeonPlan, RoomPlan};
pub use room::PlacedRoom;
pub use template::{DoorFlags, RoomTemplate, TemplateId, TemplateSet, find_matching};
