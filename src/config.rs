//! Game configuration constants
//!
//! All tunables are static configuration; nothing here is negotiated at
//! runtime. Velocities are per-tick values - the loop runs one tick per
//! display frame, so these assume a near-constant frame interval.

/// Logical canvas size (CSS pixels)
pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;

/// Fonts
pub const FONT_RETRO: &str = "\"Courier New\", Courier, monospace";
pub const FONT_UI: &str = "Arial, sans-serif";

/// Side-scroller tunables
pub mod scroller {
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.30;
    /// Jump impulse (negative = upward)
    pub const JUMP_IMPULSE: f32 = -7.2;
    pub const OBSTACLE_WIDTH: f32 = 70.0;
    pub const OBSTACLE_GAP: f32 = 200.0;
    /// Ticks between obstacle spawns
    pub const SPAWN_INTERVAL: u32 = 140;
    /// Max vertical distance between consecutive gap tops
    pub const MAX_GAP_SHIFT: f32 = 100.0;
    pub const BASE_SPEED: f32 = 2.0;
    /// Speed gained per point of score
    pub const SPEED_PER_POINT: f32 = 0.002;
    pub const FLOOR_HEIGHT: f32 = 50.0;
    /// Minimum clearance from the top edge and the floor for a gap
    pub const MIN_EDGE_MARGIN: f32 = 80.0;
    pub const AVATAR_SIZE: f32 = 25.0;
    pub const AVATAR_X: f32 = 100.0;
    /// Particles emitted per jump
    pub const JUMP_PARTICLES: usize = 5;
    /// Delay before the secondary death cue (seconds)
    pub const DIE_CUE_DELAY: f64 = 0.2;
}

/// Lane-defense tunables
pub mod defense {
    use super::{CANVAS_HEIGHT, CANVAS_WIDTH};

    pub const GRID_ROWS: usize = 5;
    pub const GRID_COLS: usize = 9;
    pub const GRID_X: f32 = CANVAS_WIDTH * 0.1;
    pub const GRID_Y: f32 = CANVAS_HEIGHT * 0.15;
    pub const GRID_WIDTH: f32 = CANVAS_WIDTH * 0.8;
    pub const GRID_HEIGHT: f32 = CANVAS_HEIGHT * 0.7;
    pub const CELL_WIDTH: f32 = GRID_WIDTH / GRID_COLS as f32;
    pub const CELL_HEIGHT: f32 = GRID_HEIGHT / GRID_ROWS as f32;

    /// Starting currency
    pub const STARTING_ENERGY: u32 = 150;
    /// Ticks before the first wave starts
    pub const FIRST_WAVE_DELAY: u32 = 300;
    /// Ticks between a cleared wave and the next one
    pub const INTER_WAVE_DELAY: u32 = 600;

    /// Global pickup spawn cadence and value
    pub const PICKUP_SPAWN_INTERVAL: u32 = 300;
    pub const PICKUP_VALUE: u32 = 25;
    /// Grounded pickup lifetime in ticks
    pub const PICKUP_LIFE: u32 = 300;
    /// Click-collection radius
    pub const PICKUP_RADIUS: f32 = 20.0;
    /// Harvester emission cadence
    pub const HARVESTER_INTERVAL: u32 = 600;

    /// Gunner fire cadence and projectile stats
    pub const FIRE_INTERVAL: u32 = 90;
    pub const PROJECTILE_SPEED: f32 = 4.0;
    pub const PROJECTILE_DAMAGE: i32 = 25;

    /// Ticks a hostile must chew before dealing one bite of damage
    pub const EAT_INTERVAL: u32 = 60;

    /// Detonator fuse and blast radius (cell widths)
    pub const DETONATE_FUSE: u32 = 60;
    pub const BLAST_RADIUS: f32 = CELL_WIDTH * 1.5;

    /// Build-menu packet geometry
    pub const PACKET_WIDTH: f32 = 60.0;
    pub const PACKET_HEIGHT: f32 = 80.0;
    pub const PACKET_SPACING: f32 = 10.0;

    /// Hostiles past this x end the run
    pub const BREACH_X: f32 = GRID_X - 30.0;
}
