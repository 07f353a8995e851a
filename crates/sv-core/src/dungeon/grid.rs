//! Grid coordinates, door directions, and the sparse room grid

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use strum::Display;

use super::room::PlacedRoom;
use super::template::DoorFlags;

/// A room cell on the infinite level lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const ORIGIN: GridPos = GridPos { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step in the given direction
    pub fn step(&self, dir: Direction) -> GridPos {
        let (dx, dy) = dir.delta();
        GridPos::new(self.x + dx, self.y + dy)
    }

    /// Manhattan distance to another cell (|dx| + |dy|)
    pub fn manhattan(&self, other: GridPos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Cardinal door direction on a room wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    /// All directions, in door-flag bit order
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Bottom,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction a matching door on a neighboring room must face
    pub const fn opposite(&self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit offset in grid space. Top is +y, Right is +x.
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Top => (0, 1),
            Direction::Bottom => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The door flag bit for this wall
    pub const fn door_flag(&self) -> DoorFlags {
        match self {
            Direction::Top => DoorFlags::TOP,
            Direction::Bottom => DoorFlags::BOTTOM,
            Direction::Left => DoorFlags::LEFT,
            Direction::Right => DoorFlags::RIGHT,
        }
    }
}

/// Sparse mapping from grid cell to placed room
///
/// Owns every placed room for the lifetime of one generation pass.
/// Rooms are never removed mid-pass; a new pass starts with `clear`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DungeonGrid {
    rooms: HashMap<GridPos, PlacedRoom>,
}

impl DungeonGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a room at a cell. Fails if the cell is already occupied.
    pub fn place(&mut self, room: PlacedRoom) -> bool {
        match self.rooms.entry(room.pos) {
            hashbrown::hash_map::Entry::Occupied(_) => false,
            hashbrown::hash_map::Entry::Vacant(slot) => {
                slot.insert(room);
                true
            }
        }
    }

    pub fn get(&self, pos: GridPos) -> Option<&PlacedRoom> {
        self.rooms.get(&pos)
    }

    pub fn get_mut(&mut self, pos: GridPos) -> Option<&mut PlacedRoom> {
        self.rooms.get_mut(&pos)
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        self.rooms.contains_key(&pos)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn clear(&mut self) {
        self.rooms.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GridPos, &PlacedRoom)> {
        self.rooms.iter()
    }
}
