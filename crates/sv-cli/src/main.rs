//! Level preview tool
//!
//! Runs the sv-core generator against a built-in demo template catalog
//! and prints the result as an ASCII room map or as JSON. Stands in for
//! the game host during generator tuning.

use clap::Parser;

use sv_core::GameRng;
use sv_core::content::{EnemyHandle, EnemyRule, PropHandle, PropRule};
use sv_core::dungeon::{
    Direction, DoorFlags, DungeonPlan, GeneratorConfig, GridPos, LevelGenerator, RoomPlan,
    RoomTemplate, TemplateId, TemplateSet,
};

/// Boss templates in the demo catalog start at this id
const BOSS_ID_BASE: u32 = 100;

/// Sever level generator preview
#[derive(Parser, Debug)]
#[command(name = "sever")]
#[command(author, version, about = "Preview procedurally generated levels", long_about = None)]
struct Args {
    /// Generation seed (random when omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Total room count, start and boss rooms included
    #[arg(short = 'r', long = "rooms", default_value_t = 16)]
    rooms: u32,

    /// Number of boss rooms
    #[arg(short = 'b', long = "boss", default_value_t = 1)]
    boss: u32,

    /// Emit the full placement plan as JSON instead of a map
    #[arg(long = "json")]
    json: bool,

    /// Per-room content breakdown
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let templates = demo_templates();
    let props = demo_prop_rules();
    let enemies = demo_enemy_rules();

    let config = GeneratorConfig {
        total_rooms: args.rooms,
        boss_rooms: args.boss,
        ..GeneratorConfig::default()
    };

    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let seed = rng.seed();

    let mut generator = LevelGenerator::new(config, &templates, &props, &enemies);
    let plan = match generator.generate(&mut rng) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("generation failed: {e}");
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&plan) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("failed to encode plan: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("seed {seed}");
    print_map(&plan);
    print_summary(&plan, &config, args.verbose);
}

/// Demo catalog: four-door start, a spread of normal shapes, one boss
fn demo_templates() -> TemplateSet {
    TemplateSet::new(
        RoomTemplate::new(TemplateId(0), DoorFlags::all(), false),
        vec![
            RoomTemplate::new(TemplateId(1), DoorFlags::all(), true),
            RoomTemplate::new(TemplateId(2), DoorFlags::LEFT | DoorFlags::RIGHT, true),
            RoomTemplate::new(TemplateId(3), DoorFlags::TOP | DoorFlags::BOTTOM, true),
            RoomTemplate::new(TemplateId(4), DoorFlags::TOP | DoorFlags::LEFT, true),
            RoomTemplate::new(TemplateId(5), DoorFlags::TOP | DoorFlags::RIGHT, true),
            RoomTemplate::new(TemplateId(6), DoorFlags::BOTTOM | DoorFlags::LEFT, true),
            RoomTemplate::new(TemplateId(7), DoorFlags::BOTTOM | DoorFlags::RIGHT, true),
            RoomTemplate::new(
                TemplateId(8),
                DoorFlags::TOP | DoorFlags::LEFT | DoorFlags::RIGHT,
                true,
            ),
            RoomTemplate::new(TemplateId(9), DoorFlags::LEFT, false),
        ],
        vec![RoomTemplate::new(
            TemplateId(BOSS_ID_BASE),
            DoorFlags::all(),
            true,
        )],
    )
}

fn demo_prop_rules() -> Vec<PropRule> {
    vec![
        PropRule {
            handle: PropHandle(0), // gore pile
            chance: 0.15,
            min_scale: 0.8,
            max_scale: 1.3,
            can_mirror: true,
        },
        PropRule {
            handle: PropHandle(1), // broken crate
            chance: 0.3,
            min_scale: 0.9,
            max_scale: 1.1,
            can_mirror: true,
        },
        PropRule {
            handle: PropHandle(2), // wall torch
            chance: 0.5,
            min_scale: 1.0,
            max_scale: 1.0,
            can_mirror: false,
        },
    ]
}

fn demo_enemy_rules() -> Vec<EnemyRule> {
    vec![
        EnemyRule {
            handle: EnemyHandle(0), // shambler
            cost: 2,
            min_distance: 0,
        },
        EnemyRule {
            handle: EnemyHandle(1), // flayer
            cost: 4,
            min_distance: 2,
        },
        EnemyRule {
            handle: EnemyHandle(2), // butcher
            cost: 7,
            min_distance: 4,
        },
    ]
}

/// Room glyph for the map center
fn room_glyph(room: &RoomPlan) -> char {
    if room.pos == GridPos::ORIGIN {
        'S'
    } else if room.template.0 >= BOSS_ID_BASE {
        'B'
    } else {
        '.'
    }
}

/// Draw the room graph: 5x3 boxes on a grid, open doors as gaps with
/// connectors between neighboring boxes.
fn print_map(plan: &DungeonPlan) {
    let min_x = plan.rooms.iter().map(|r| r.pos.x).min().unwrap_or(0);
    let max_x = plan.rooms.iter().map(|r| r.pos.x).max().unwrap_or(0);
    let min_y = plan.rooms.iter().map(|r| r.pos.y).min().unwrap_or(0);
    let max_y = plan.rooms.iter().map(|r| r.pos.y).max().unwrap_or(0);

    // Cell pitch: 6 columns x 4 rows per room leaves one connector
    // column/row between boxes.
    let cols = (max_x - min_x + 1) as usize * 6 - 1;
    let rows = (max_y - min_y + 1) as usize * 4 - 1;
    let mut canvas = vec![vec![' '; cols]; rows];

    for room in &plan.rooms {
        let col = (room.pos.x - min_x) as usize * 6;
        // y grows upward in grid space, downward on screen
        let row = (max_y - room.pos.y) as usize * 4;

        let box_chars = ["+---+", "|   |", "+---+"];
        for (dr, line) in box_chars.iter().enumerate() {
            for (dc, ch) in line.chars().enumerate() {
                canvas[row + dr][col + dc] = ch;
            }
        }
        canvas[row + 1][col + 2] = room_glyph(room);

        if room.open_doors.has(Direction::Top) {
            canvas[row][col + 2] = ' ';
            if row > 0 {
                canvas[row - 1][col + 2] = '|';
            }
        }
        if room.open_doors.has(Direction::Bottom) {
            canvas[row + 2][col + 2] = ' ';
            if row + 3 < rows {
                canvas[row + 3][col + 2] = '|';
            }
        }
        if room.open_doors.has(Direction::Left) {
            canvas[row + 1][col] = ' ';
            if col > 0 {
                canvas[row + 1][col - 1] = '-';
            }
        }
        if room.open_doors.has(Direction::Right) {
            canvas[row + 1][col + 4] = ' ';
            if col + 5 < cols {
                canvas[row + 1][col + 5] = '-';
            }
        }
    }

    for line in canvas {
        let text: String = line.into_iter().collect();
        println!("{}", text.trim_end());
    }
}

fn print_summary(plan: &DungeonPlan, config: &GeneratorConfig, verbose: bool) {
    let bosses = plan
        .rooms
        .iter()
        .filter(|r| r.template.0 >= BOSS_ID_BASE)
        .count();
    let props: usize = plan.rooms.iter().map(|r| r.props.len()).sum();
    let enemies: usize = plan.rooms.iter().map(|r| r.enemies.len()).sum();

    println!();
    println!(
        "{} rooms ({} requested), {} boss, {} props, {} enemies",
        plan.len(),
        config.total_rooms,
        bosses,
        props,
        enemies
    );

    if verbose {
        println!();
        for room in &plan.rooms {
            let open: Vec<String> = Direction::ALL
                .into_iter()
                .filter(|d| room.open_doors.has(*d))
                .map(|d| d.to_string())
                .collect();
            println!(
                "({:>3},{:>3}) template {:<3} doors [{}] props {} enemies {} dist {}",
                room.pos.x,
                room.pos.y,
                room.template.0,
                open.join(","),
                room.props.len(),
                room.enemies.len(),
                room.pos.manhattan(GridPos::ORIGIN),
            );
        }
    }
}
