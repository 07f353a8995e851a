//! sv-core: Procedural level generation for the Sever action-roguelike
//!
//! This crate contains the engine-independent dungeon generator: a grid
//! of door-constrained room templates grown outward from a start room,
//! followed by a content population pass (props and enemies).
//!
//! The hosting application supplies room templates and spawn rules and
//! receives a [`dungeon::DungeonPlan`] describing what to instantiate;
//! rendering, physics, and input stay on the host side.

pub mod content;
pub mod dungeon;

mod consts;
mod rng;

pub use consts::*;
pub use rng::GameRng;
