//! Dungeon growth algorithm
//!
//! Seeds the grid with the start room, grows normal rooms outward from a
//! randomly-drawn frontier of open doorways, places boss rooms at the
//! remaining dead-ends, then runs the content population pass per room.
//!
//! Every failure mode except a missing start template is a silent policy
//! outcome: a collision or an unmatched doorway drops that frontier entry
//! and the level simply comes out smaller than requested. The result is
//! always a connected, door-symmetric graph.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::frontier::{Frontier, FrontierEntry};
use super::grid::{DungeonGrid, GridPos};
use super::plan::{DungeonPlan, RoomPlan};
use super::room::PlacedRoom;
use super::template::{RoomTemplate, TemplateSet, find_matching};
use crate::consts::*;
use crate::content::{EnemyRule, PropRule, scatter_props, spawn_enemies};
use crate::rng::GameRng;

/// Per-level generation parameters supplied by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Requested room count, start and boss rooms included (upper bound)
    pub total_rooms: u32,
    pub boss_rooms: u32,
    /// Room extent in world units
    pub room_width: f32,
    pub room_height: f32,
    /// Margin kept clear along walls when placing content
    pub wall_padding: f32,
    /// Prop attempts per unit of room area
    pub prop_density: f32,
    /// Enemy point budget per room
    pub enemy_budget: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            total_rooms: DEFAULT_TOTAL_ROOMS,
            boss_rooms: DEFAULT_BOSS_ROOMS,
            room_width: DEFAULT_ROOM_WIDTH,
            room_height: DEFAULT_ROOM_HEIGHT,
            wall_padding: DEFAULT_WALL_PADDING,
            prop_density: DEFAULT_PROP_DENSITY,
            enemy_budget: DEFAULT_ENEMY_BUDGET,
        }
    }
}

/// The single fatal generation precondition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Without a seed room the whole graph is undefined, so this aborts
    /// before any state mutation.
    #[error("no start room template supplied")]
    MissingStartTemplate,
}

/// Grows one level at a time
///
/// Receives the template registry and spawn rules up front; owns the
/// grid and frontier for the duration of a pass. Each call to
/// [`generate`](Self::generate) discards the previous result and
/// rebuilds from scratch.
#[derive(Debug)]
pub struct LevelGenerator<'a> {
    config: GeneratorConfig,
    templates: &'a TemplateSet,
    prop_rules: &'a [PropRule],
    enemy_rules: &'a [EnemyRule],
    grid: DungeonGrid,
    frontier: Frontier,
    /// Cells in placement order, start room first. Population and plan
    /// output follow this order so results stay deterministic.
    placement_order: Vec<GridPos>,
}

impl<'a> LevelGenerator<'a> {
    pub fn new(
        config: GeneratorConfig,
        templates: &'a TemplateSet,
        prop_rules: &'a [PropRule],
        enemy_rules: &'a [EnemyRule],
    ) -> Self {
        Self {
            config,
            templates,
            prop_rules,
            enemy_rules,
            grid: DungeonGrid::new(),
            frontier: Frontier::new(),
            placement_order: Vec::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run one full generation pass
    pub fn generate(&mut self, rng: &mut GameRng) -> Result<DungeonPlan, GenerationError> {
        let start = self
            .templates
            .start
            .ok_or(GenerationError::MissingStartTemplate)?;

        self.seed(&start);
        self.grow_normal_rooms(rng);
        self.place_boss_rooms(rng);
        Ok(self.populate(rng))
    }

    /// Phase 1: reset state and place the start room at the origin
    fn seed(&mut self, start: &RoomTemplate) {
        self.grid.clear();
        self.frontier.clear();
        self.placement_order.clear();

        let room = PlacedRoom::new(GridPos::ORIGIN, start);
        for dir in room.doors.directions() {
            self.frontier.push(FrontierEntry {
                pos: GridPos::ORIGIN.step(dir),
                entry: dir.opposite(),
            });
        }
        self.grid.place(room);
        self.placement_order.push(GridPos::ORIGIN);
    }

    /// Phase 2: grow normal rooms until the target count or the frontier
    /// runs out
    fn grow_normal_rooms(&mut self, rng: &mut GameRng) {
        let target = self
            .config
            .total_rooms
            .saturating_sub(self.config.boss_rooms)
            .saturating_sub(1);

        let templates = self.templates;
        let mut built = 0;
        while built < target {
            let Some(entry) = self.frontier.pop_random(rng) else {
                break;
            };
            if self.try_place(entry, &templates.normal, rng) {
                built += 1;
            }
        }
    }

    /// Phase 3: fill remaining dead-ends with boss rooms
    ///
    /// Same random-draw placement as normal growth, and still bounded by
    /// the total room count: a saturated budget gets no boss room at all.
    fn place_boss_rooms(&mut self, rng: &mut GameRng) {
        let templates = self.templates;
        let mut placed = 0;
        while placed < self.config.boss_rooms
            && (self.grid.len() as u32) < self.config.total_rooms
        {
            let Some(entry) = self.frontier.pop_random(rng) else {
                break;
            };
            if self.try_place(entry, &templates.boss, rng) {
                placed += 1;
            }
        }
    }

    /// Attempt to resolve one frontier entry against a template list.
    ///
    /// The entry is consumed either way: a collision or a failed template
    /// match abandons the doorway for good.
    fn try_place(
        &mut self,
        entry: FrontierEntry,
        templates: &[RoomTemplate],
        rng: &mut GameRng,
    ) -> bool {
        if self.grid.contains(entry.pos) {
            return false;
        }
        let Some(template) = find_matching(templates, entry.entry, rng) else {
            return false;
        };

        let mut room = PlacedRoom::new(entry.pos, template);

        // Open the shared door on both sides, but only if the room that
        // produced this entry is still there to connect to.
        let origin_pos = entry.pos.step(entry.entry);
        if let Some(origin) = self.grid.get_mut(origin_pos) {
            if origin.has_door(entry.entry.opposite()) {
                origin.open_door(entry.entry.opposite());
                room.open_door(entry.entry);
            }
        }

        // The room's other doors become new frontier candidates.
        for dir in room.doors.directions() {
            if dir == entry.entry {
                continue;
            }
            self.frontier.push(FrontierEntry {
                pos: entry.pos.step(dir),
                entry: dir.opposite(),
            });
        }

        let pos = room.pos;
        self.grid.place(room);
        self.placement_order.push(pos);
        true
    }

    /// Phase 4: per-room content, only after the whole graph is final
    fn populate(&mut self, rng: &mut GameRng) -> DungeonPlan {
        let cfg = &self.config;
        let mut rooms = Vec::with_capacity(self.placement_order.len());

        for &pos in &self.placement_order {
            let Some(room) = self.grid.get(pos) else {
                continue;
            };

            let props = scatter_props(
                self.prop_rules,
                cfg.room_width,
                cfg.room_height,
                cfg.wall_padding,
                cfg.prop_density,
                rng,
            );

            let enemies = if room.allows_spawns {
                spawn_enemies(
                    self.enemy_rules,
                    pos.manhattan(GridPos::ORIGIN),
                    cfg.enemy_budget,
                    cfg.room_width,
                    cfg.room_height,
                    cfg.wall_padding,
                    rng,
                )
            } else {
                Vec::new()
            };

            rooms.push(RoomPlan {
                pos,
                world_pos: room.world_position(cfg.room_width, cfg.room_height),
                template: room.template,
                open_doors: room.open_doors,
                props,
                enemies,
            });
        }

        DungeonPlan { rooms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::grid::Direction;
    use crate::dungeon::template::{DoorFlags, TemplateId};

    fn all_door_set() -> TemplateSet {
        TemplateSet::new(
            RoomTemplate::new(TemplateId(0), DoorFlags::all(), false),
            vec![RoomTemplate::new(TemplateId(1), DoorFlags::all(), true)],
            vec![RoomTemplate::new(TemplateId(2), DoorFlags::all(), true)],
        )
    }

    #[test]
    fn test_missing_start_is_fatal() {
        let templates = TemplateSet::default();
        let mut generator =
            LevelGenerator::new(GeneratorConfig::default(), &templates, &[], &[]);
        let mut rng = GameRng::new(1);

        assert_eq!(
            generator.generate(&mut rng),
            Err(GenerationError::MissingStartTemplate)
        );
    }

    #[test]
    fn test_single_room_level() {
        let templates = all_door_set();
        let config = GeneratorConfig {
            total_rooms: 1,
            boss_rooms: 0,
            ..GeneratorConfig::default()
        };
        let mut generator = LevelGenerator::new(config, &templates, &[], &[]);
        let mut rng = GameRng::new(1);

        let plan = generator.generate(&mut rng).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.rooms[0].pos, GridPos::ORIGIN);
        assert_eq!(plan.rooms[0].template, TemplateId(0));
        assert!(plan.rooms[0].open_doors.is_empty());
    }

    #[test]
    fn test_room_count_upper_bound() {
        let templates = all_door_set();
        let config = GeneratorConfig {
            total_rooms: 12,
            boss_rooms: 2,
            ..GeneratorConfig::default()
        };
        let mut generator = LevelGenerator::new(config, &templates, &[], &[]);

        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let plan = generator.generate(&mut rng).unwrap();
            assert!(plan.len() <= 12, "seed {seed} built {} rooms", plan.len());
        }
    }

    #[test]
    fn test_shared_door_opens_both_sides() {
        let templates = all_door_set();
        let config = GeneratorConfig {
            total_rooms: 2,
            boss_rooms: 0,
            ..GeneratorConfig::default()
        };
        let mut generator = LevelGenerator::new(config, &templates, &[], &[]);
        let mut rng = GameRng::new(7);

        let plan = generator.generate(&mut rng).unwrap();
        assert_eq!(plan.len(), 2);

        let start = plan.room_at(GridPos::ORIGIN).unwrap();
        let other = &plan.rooms[1];
        let dir = Direction::ALL
            .into_iter()
            .find(|d| GridPos::ORIGIN.step(*d) == other.pos)
            .expect("second room must neighbor the start");

        assert!(start.open_doors.has(dir));
        assert!(other.open_doors.has(dir.opposite()));
    }

    #[test]
    fn test_boss_rooms_at_most_requested() {
        let templates = all_door_set();
        let config = GeneratorConfig {
            total_rooms: 10,
            boss_rooms: 2,
            ..GeneratorConfig::default()
        };
        let mut generator = LevelGenerator::new(config, &templates, &[], &[]);

        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let plan = generator.generate(&mut rng).unwrap();
            let bosses = plan
                .rooms
                .iter()
                .filter(|r| r.template == TemplateId(2))
                .count();
            assert!(bosses <= 2, "seed {seed} placed {bosses} boss rooms");
        }
    }

    #[test]
    fn test_boss_phase_respects_total_room_cap() {
        let templates = all_door_set();
        let config = GeneratorConfig {
            total_rooms: 1,
            boss_rooms: 1,
            ..GeneratorConfig::default()
        };
        let mut generator = LevelGenerator::new(config, &templates, &[], &[]);

        // The start room alone saturates the budget, so the boss phase
        // must place nothing.
        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let plan = generator.generate(&mut rng).unwrap();
            assert_eq!(plan.len(), 1, "seed {seed} exceeded the room budget");
        }
    }

    #[test]
    fn test_regenerate_discards_previous_level() {
        let templates = all_door_set();
        let mut generator =
            LevelGenerator::new(GeneratorConfig::default(), &templates, &[], &[]);

        let mut rng = GameRng::new(3);
        let first = generator.generate(&mut rng).unwrap();
        let second = generator.generate(&mut rng).unwrap();

        // Second pass starts from scratch: exactly one start room, never
        // leftovers from the first pass.
        let starts = second
            .rooms
            .iter()
            .filter(|r| r.pos == GridPos::ORIGIN)
            .count();
        assert_eq!(starts, 1);
        assert!(second.len() <= DEFAULT_TOTAL_ROOMS as usize);
        assert!(first.len() <= DEFAULT_TOTAL_ROOMS as usize);
    }
}
