//! Final placement plan handed to the embedding application

use serde::{Deserialize, Serialize};

use super::grid::GridPos;
use super::template::{DoorFlags, TemplateId};
use crate::content::{EnemySpawn, PropInstance};

/// One room of the finished level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomPlan {
    pub pos: GridPos,
    /// Room center in world units (grid cell scaled by room extent)
    pub world_pos: (f32, f32),
    pub template: TemplateId,
    /// Doors that ended up open toward a neighbor
    pub open_doors: DoorFlags,
    /// Props to instantiate, positions local to the room center
    pub props: Vec<PropInstance>,
    /// Enemies to instantiate, positions local to the room center
    pub enemies: Vec<EnemySpawn>,
}

/// Complete generation result: connected room graph plus per-room content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DungeonPlan {
    pub rooms: Vec<RoomPlan>,
}

impl DungeonPlan {
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Look up a room by its grid cell
    pub fn room_at(&self, pos: GridPos) -> Option<&RoomPlan> {
        self.rooms.iter().find(|r| r.pos == pos)
    }
}
