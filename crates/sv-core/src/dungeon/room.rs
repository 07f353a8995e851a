//! Placed rooms
//!
//! A [`PlacedRoom`] is a template instantiated at a grid cell. Its doors
//! all start closed; a door opens exactly when a matching neighbor is
//! placed on the other side of the shared wall. Identity is the cell:
//! a room never moves and is never destroyed within a generation pass.

use serde::{Deserialize, Serialize};

use super::grid::{Direction, GridPos};
use super::template::{DoorFlags, RoomTemplate, TemplateId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedRoom {
    pub pos: GridPos,
    pub template: TemplateId,
    /// Doors the template exposes (fixed at placement)
    pub doors: DoorFlags,
    /// Doors actually opened by a matched neighbor
    pub open_doors: DoorFlags,
    pub allows_spawns: bool,
}

impl PlacedRoom {
    pub fn new(pos: GridPos, template: &RoomTemplate) -> Self {
        Self {
            pos,
            template: template.id,
            doors: template.doors,
            open_doors: DoorFlags::empty(),
            allows_spawns: template.allows_spawns,
        }
    }

    /// Whether the template exposes a door on this wall
    pub fn has_door(&self, dir: Direction) -> bool {
        self.doors.has(dir)
    }

    /// Whether the door on this wall has been opened to a neighbor
    pub fn is_open(&self, dir: Direction) -> bool {
        self.open_doors.has(dir)
    }

    /// Flip a door open. Only meaningful for walls the template exposes.
    pub fn open_door(&mut self, dir: Direction) {
        debug_assert!(self.has_door(dir), "opening a wall with no door");
        self.open_doors.insert(dir.door_flag());
    }

    /// Room center in world units: grid cell scaled by room extent
    pub fn world_position(&self, room_width: f32, room_height: f32) -> (f32, f32) {
        (
            self.pos.x as f32 * room_width,
            self.pos.y as f32 * room_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> RoomTemplate {
        RoomTemplate::new(TemplateId(3), DoorFlags::TOP | DoorFlags::RIGHT, false)
    }

    #[test]
    fn test_doors_start_closed() {
        let room = PlacedRoom::new(GridPos::new(1, 1), &template());
        for dir in Direction::ALL {
            assert!(!room.is_open(dir));
        }
    }

    #[test]
    fn test_open_door() {
        let mut room = PlacedRoom::new(GridPos::ORIGIN, &template());
        room.open_door(Direction::Top);
        assert!(room.is_open(Direction::Top));
        assert!(!room.is_open(Direction::Right));
    }

    #[test]
    fn test_world_position_scales_by_extent() {
        let room = PlacedRoom::new(GridPos::new(2, -1), &template());
        assert_eq!(room.world_position(20.0, 12.0), (40.0, -12.0));
    }
}
