//! Room templates and the template registry
//!
//! A template declares which of the four cardinal walls expose a door
//! and whether the room accepts procedural enemy spawns. The embedding
//! application supplies one start template plus lists of normal and boss
//! templates, each keyed by an opaque handle it can later use to
//! instantiate visuals.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::grid::Direction;
use crate::rng::GameRng;

bitflags! {
    /// Door exposure per cardinal wall
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DoorFlags: u8 {
        const TOP = 0b0001;
        const BOTTOM = 0b0010;
        const LEFT = 0b0100;
        const RIGHT = 0b1000;
    }
}

// Manual serde impl for DoorFlags
impl Serialize for DoorFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DoorFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(DoorFlags::from_bits_truncate(bits))
    }
}

impl DoorFlags {
    /// Check the door bit for a wall
    pub fn has(&self, dir: Direction) -> bool {
        self.contains(dir.door_flag())
    }

    /// Directions whose door bit is set
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.has(*d))
    }
}

/// Opaque renderable handle, owned by the embedder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub u32);

/// Immutable room blueprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTemplate {
    pub id: TemplateId,
    pub doors: DoorFlags,
    /// Whether the content pass may spawn enemies in this room
    pub allows_spawns: bool,
}

impl RoomTemplate {
    pub fn new(id: TemplateId, doors: DoorFlags, allows_spawns: bool) -> Self {
        Self {
            id,
            doors,
            allows_spawns,
        }
    }
}

/// The template registry queried during growth
///
/// A missing start template is the one fatal generation precondition;
/// empty normal or boss lists only limit how far growth can proceed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateSet {
    pub start: Option<RoomTemplate>,
    pub normal: Vec<RoomTemplate>,
    pub boss: Vec<RoomTemplate>,
}

impl TemplateSet {
    pub fn new(
        start: RoomTemplate,
        normal: Vec<RoomTemplate>,
        boss: Vec<RoomTemplate>,
    ) -> Self {
        Self {
            start: Some(start),
            normal,
            boss,
        }
    }
}

/// Pick a uniformly random template exposing a door toward `required`
///
/// Uniform among all qualifying templates rather than first-match, so
/// list order does not bias which rooms get placed.
pub fn find_matching<'a>(
    templates: &'a [RoomTemplate],
    required: Direction,
    rng: &mut GameRng,
) -> Option<&'a RoomTemplate> {
    let matching: Vec<&RoomTemplate> = templates
        .iter()
        .filter(|t| t.doors.has(required))
        .collect();
    rng.choose(&matching).copied()
}
