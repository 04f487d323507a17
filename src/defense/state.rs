//! Lane-defense world state

use std::collections::HashMap;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::defense as cfg;
use crate::particles::Particle;

/// Placement pop animation length in ticks
pub const PLACE_ANIM_TICKS: u32 = 15;

/// Placeable unit types, in build-menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// Fires projectiles down its lane
    Gunner,
    /// Emits energy pickups periodically
    Harvester,
    /// High-health blocker
    Bulwark,
    /// Explodes after a short fuse
    Detonator,
}

impl UnitKind {
    pub const ALL: [UnitKind; 4] = [
        UnitKind::Gunner,
        UnitKind::Harvester,
        UnitKind::Bulwark,
        UnitKind::Detonator,
    ];

    pub fn cost(self) -> u32 {
        match self {
            UnitKind::Gunner => 100,
            UnitKind::Harvester => 50,
            UnitKind::Bulwark => 50,
            UnitKind::Detonator => 150,
        }
    }

    pub fn max_health(self) -> i32 {
        match self {
            UnitKind::Gunner => 100,
            UnitKind::Harvester => 80,
            UnitKind::Bulwark => 400,
            UnitKind::Detonator => 50,
        }
    }
}

/// Hostile types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostileKind {
    Grunt,
    /// Slower, much tougher
    Brute,
}

impl HostileKind {
    pub fn max_health(self) -> i32 {
        match self {
            HostileKind::Grunt => 150,
            HostileKind::Brute => 400,
        }
    }

    pub fn base_speed(self) -> f32 {
        match self {
            HostileKind::Grunt => 0.3,
            HostileKind::Brute => 0.25,
        }
    }

    /// Score awarded when defeated
    pub fn bounty(self) -> u32 {
        match self {
            HostileKind::Grunt => 10,
            HostileKind::Brute => 15,
        }
    }

    pub fn bite_damage(self) -> i32 {
        10
    }
}

#[derive(Debug, Clone)]
pub struct Unit {
    pub id: u32,
    pub kind: UnitKind,
    pub row: usize,
    pub col: usize,
    pub health: i32,
    /// Gunner fire timer
    pub fire_cooldown: u32,
    /// Harvester emission timer
    pub emit_cooldown: u32,
    /// Ticks of placement pop remaining
    pub place_anim: u32,
    /// Detonator countdown, None for other kinds
    pub fuse: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct Hostile {
    pub id: u32,
    pub kind: HostileKind,
    pub row: usize,
    /// Left edge
    pub x: f32,
    pub health: i32,
    pub speed: f32,
    /// Recomputed every tick, drawing only
    pub eating: bool,
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Vec2,
    pub row: usize,
}

/// An energy pickup, falling until it crosses its landing line, then
/// grounded and fading on a lifetime.
#[derive(Debug, Clone)]
pub struct Pickup {
    pub pos: Vec2,
    pub value: u32,
    /// Zero once grounded
    pub fall_speed: f32,
    /// Landing line chosen at spawn
    pub target_y: f32,
    /// Set when grounded (or for unit-emitted pickups from the start)
    pub life: Option<u32>,
    pub angle: f32,
    pub spin: f32,
}

/// Center of a grid cell in canvas coordinates.
pub fn cell_center(row: usize, col: usize) -> Vec2 {
    Vec2::new(
        cfg::GRID_X + (col as f32 + 0.5) * cfg::CELL_WIDTH,
        cfg::GRID_Y + (row as f32 + 0.5) * cfg::CELL_HEIGHT,
    )
}

/// Cell under a point, or None outside the grid.
pub fn cell_at(pos: Vec2) -> Option<(usize, usize)> {
    let col = ((pos.x - cfg::GRID_X) / cfg::CELL_WIDTH).floor();
    let row = ((pos.y - cfg::GRID_Y) / cfg::CELL_HEIGHT).floor();
    if col >= 0.0 && col < cfg::GRID_COLS as f32 && row >= 0.0 && row < cfg::GRID_ROWS as f32 {
        Some((row as usize, col as usize))
    } else {
        None
    }
}

/// Everything a defense run owns. Replaced wholesale on (re)entry from
/// the menu.
#[derive(Debug)]
pub struct DefenseState {
    pub units: Vec<Unit>,
    pub hostiles: Vec<Hostile>,
    pub projectiles: Vec<Projectile>,
    pub pickups: Vec<Pickup>,
    pub particles: Vec<Particle>,
    pub energy: u32,
    pub selected: Option<UnitKind>,
    /// Per-hostile eating progress, keyed by hostile id
    pub eat_counters: HashMap<u32, u32>,
    pub next_unit_id: u32,
    pub next_hostile_id: u32,
    /// 1-based; 0 means no wave has started yet
    pub wave_index: u32,
    /// Hostiles the active wave still has to spawn
    pub to_spawn: u32,
    /// Hostiles the active wave still has to defeat. Independent of
    /// `to_spawn`; a wave clears only when both are zero.
    pub to_defeat: u32,
    /// Ticks until the next hostile spawn within the active wave
    pub spawn_countdown: u32,
    pub wave_active: bool,
    pub waves_done: bool,
    /// Ticks until the next wave starts (when none is active)
    pub wave_countdown: u32,
    pub pickup_timer: u32,
    pub score: u32,
    pub rng: Pcg32,
}

impl DefenseState {
    pub fn new(seed: u64) -> Self {
        Self {
            units: Vec::new(),
            hostiles: Vec::new(),
            projectiles: Vec::new(),
            pickups: Vec::new(),
            particles: Vec::new(),
            energy: cfg::STARTING_ENERGY,
            selected: None,
            eat_counters: HashMap::new(),
            next_unit_id: 0,
            next_hostile_id: 0,
            wave_index: 0,
            to_spawn: 0,
            to_defeat: 0,
            spawn_countdown: 0,
            wave_active: false,
            waves_done: false,
            wave_countdown: cfg::FIRST_WAVE_DELAY,
            pickup_timer: 0,
            score: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn cell_occupied(&self, row: usize, col: usize) -> bool {
        self.units.iter().any(|u| u.row == row && u.col == col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH};

    #[test]
    fn cell_lookup_round_trips() {
        for row in 0..cfg::GRID_ROWS {
            for col in 0..cfg::GRID_COLS {
                assert_eq!(cell_at(cell_center(row, col)), Some((row, col)));
            }
        }
    }

    #[test]
    fn cell_lookup_rejects_outside_points() {
        assert_eq!(cell_at(Vec2::new(0.0, 0.0)), None);
        assert_eq!(cell_at(Vec2::new(cfg::GRID_X - 1.0, cfg::GRID_Y + 1.0)), None);
        assert_eq!(cell_at(Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT)), None);
    }

    #[test]
    fn fresh_state_waits_for_first_wave() {
        let state = DefenseState::new(1);
        assert!(!state.wave_active);
        assert!(!state.waves_done);
        assert_eq!(state.wave_countdown, cfg::FIRST_WAVE_DELAY);
        assert_eq!(state.energy, cfg::STARTING_ENERGY);
    }
}
