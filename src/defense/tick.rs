//! Lane-defense per-tick update
//!
//! Phase order matters: particles, waves, unit upkeep (including
//! detonations), pickup spawn/update, build-menu clicks, grid clicks,
//! firing, projectiles, hostile spawning, hostile advance/eating, then
//! the deferred defeat sweep. A boundary breach aborts the tick before
//! the sweep.

use glam::Vec2;
use rand::Rng;

use crate::audio::{Cue, CueEvent};
use crate::config::{CANVAS_WIDTH, defense as cfg};
use crate::defense::state::{
    DefenseState, Hostile, PLACE_ANIM_TICKS, Pickup, Projectile, Unit, UnitKind, cell_at,
    cell_center,
};
use crate::defense::waves::WAVES;
use crate::geom::Rect;
use crate::input::InputState;
use crate::particles;

const PARTICLE_GRAVITY: f32 = 0.05;
const COLLECT_PARTICLE_COLOR: &str = "rgba(255, 255, 0, 0.8)";
const PLACE_PARTICLE_COLOR: &str = "rgba(255, 255, 255, 0.7)";
const HIT_PARTICLE_COLOR: &str = "rgba(0, 0, 0, 0.5)";
const BLAST_PARTICLE_COLOR: &str = "rgba(255, 165, 0, 0.7)";

/// Hostiles still sliding in from beyond this x don't draw fire
const FIRE_SIGHT_LIMIT: f32 = CANVAS_WIDTH - 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefenseOutcome {
    Continue,
    /// A hostile crossed the left boundary; the run is over
    Breached,
}

pub fn tick(
    state: &mut DefenseState,
    input: &mut InputState,
    cues: &mut Vec<CueEvent>,
) -> DefenseOutcome {
    particles::update(&mut state.particles, PARTICLE_GRAVITY);
    advance_waves(state);
    spawn_pickups(state);
    update_units(state, cues);
    update_pickups(state, input, cues);
    let clicked_packet = handle_packet_click(state, input);
    handle_grid_click(state, input, cues, clicked_packet);
    fire_gunners(state, cues);
    advance_projectiles(state, cues);
    spawn_hostiles(state);
    if advance_hostiles(state, cues) == DefenseOutcome::Breached {
        // Short-circuit: the world is done, skip the sweep
        return DefenseOutcome::Breached;
    }
    sweep_defeats(state);
    DefenseOutcome::Continue
}

/// Build-menu packet rect for the given slot.
pub fn packet_rect(index: usize) -> Rect {
    Rect::new(
        cfg::GRID_X + index as f32 * (cfg::PACKET_WIDTH + cfg::PACKET_SPACING),
        10.0,
        cfg::PACKET_WIDTH,
        cfg::PACKET_HEIGHT,
    )
}

/// Start the next wave, or flag completion when the schedule runs out.
fn start_next_wave(state: &mut DefenseState) {
    state.wave_index += 1;
    let idx = (state.wave_index - 1) as usize;
    match WAVES.get(idx) {
        None => {
            log::info!("All waves completed");
            state.wave_active = false;
            state.waves_done = true;
        }
        Some(wave) => {
            log::info!("Starting wave {}", state.wave_index);
            state.to_spawn = wave.count;
            state.to_defeat = wave.count;
            state.spawn_countdown = wave.spawn_interval;
            state.wave_active = true;
        }
    }
}

fn advance_waves(state: &mut DefenseState) {
    if state.waves_done {
        // Terminal: nothing left to schedule
    } else if !state.wave_active {
        state.wave_countdown = state.wave_countdown.saturating_sub(1);
        if state.wave_countdown == 0 {
            start_next_wave(state);
        }
    } else if state.to_spawn == 0 && state.to_defeat == 0 {
        log::info!("Wave {} cleared", state.wave_index);
        state.wave_active = false;
        state.wave_countdown = cfg::INTER_WAVE_DELAY;
    }
}

/// Fixed-interval global pickup spawn, falling from the top edge.
fn spawn_pickups(state: &mut DefenseState) {
    state.pickup_timer += 1;
    if state.pickup_timer < cfg::PICKUP_SPAWN_INTERVAL {
        return;
    }
    state.pickup_timer = 0;
    let x = cfg::GRID_X + state.rng.random_range(0.0..cfg::GRID_WIDTH);
    let target_y = cfg::GRID_Y + state.rng.random_range(0.0..cfg::GRID_HEIGHT);
    let fall_speed = 0.5 + state.rng.random_range(0.0..0.5);
    let angle = state.rng.random_range(0.0..std::f32::consts::TAU);
    let spin = state.rng.random_range(-0.05..0.05);
    state.pickups.push(Pickup {
        pos: Vec2::new(x, 0.0),
        value: cfg::PICKUP_VALUE,
        fall_speed,
        target_y,
        life: None,
        angle,
        spin,
    });
}

/// Per-unit upkeep: placement animation, harvester emission, detonator
/// fuses. Detonations resolve after the pass so the unit list is stable
/// while iterating.
fn update_units(state: &mut DefenseState, cues: &mut Vec<CueEvent>) {
    let mut detonated: Vec<u32> = Vec::new();

    for i in 0..state.units.len() {
        if state.units[i].place_anim > 0 {
            state.units[i].place_anim -= 1;
        }

        if state.units[i].kind == UnitKind::Harvester {
            state.units[i].emit_cooldown += 1;
            if state.units[i].emit_cooldown >= cfg::HARVESTER_INTERVAL {
                state.units[i].emit_cooldown = 0;
                let center = cell_center(state.units[i].row, state.units[i].col);
                let pos = Vec2::new(center.x, center.y - cfg::CELL_HEIGHT * 0.2);
                // Grounded from the start, slightly above the unit
                state.pickups.push(Pickup {
                    pos,
                    value: cfg::PICKUP_VALUE,
                    fall_speed: 0.0,
                    target_y: pos.y,
                    life: Some(cfg::PICKUP_LIFE),
                    angle: 0.0,
                    spin: 0.0,
                });
            }
        }

        if let Some(fuse) = state.units[i].fuse {
            let fuse = fuse.saturating_sub(1);
            state.units[i].fuse = Some(fuse);
            if fuse == 0 {
                detonated.push(state.units[i].id);
            }
        }
    }

    for id in detonated {
        detonate(state, id, cues);
    }
}

/// Area blast: zero the health of every hostile within the radius of the
/// unit's cell center, remove the unit, and sweep defeats immediately so
/// wave bookkeeping lands in the same tick.
fn detonate(state: &mut DefenseState, unit_id: u32, cues: &mut Vec<CueEvent>) {
    let Some(idx) = state.units.iter().position(|u| u.id == unit_id) else {
        return;
    };
    let center = cell_center(state.units[idx].row, state.units[idx].col);
    log::info!("Detonation at {:?}", (state.units[idx].row, state.units[idx].col));

    cues.push(CueEvent::now(Cue::Explode));
    particles::burst(
        &mut state.particles,
        &mut state.rng,
        center,
        50,
        BLAST_PARTICLE_COLOR,
        3.0,
        (30.0, 60.0),
    );

    let radius_sq = cfg::BLAST_RADIUS * cfg::BLAST_RADIUS;
    for hostile in &mut state.hostiles {
        let hostile_center = Vec2::new(
            hostile.x + cfg::CELL_WIDTH * 0.3,
            cell_center(hostile.row, 0).y,
        );
        if hostile_center.distance_squared(center) < radius_sq {
            hostile.health = 0;
        }
    }

    state.units.remove(idx);
    sweep_defeats(state);
}

/// Fall, land, collect, expire. Collection claims the click so nothing
/// later this tick double-fires; reverse iteration keeps removal safe.
fn update_pickups(state: &mut DefenseState, input: &mut InputState, cues: &mut Vec<CueEvent>) {
    for i in (0..state.pickups.len()).rev() {
        if state.pickups[i].fall_speed > 0.0 {
            let fall_speed = state.pickups[i].fall_speed;
            let spin = state.pickups[i].spin;
            state.pickups[i].pos.y += fall_speed;
            state.pickups[i].angle += spin;
            if state.pickups[i].pos.y > state.pickups[i].target_y {
                state.pickups[i].fall_speed = 0.0;
                state.pickups[i].spin = 0.0;
                state.pickups[i].life = Some(cfg::PICKUP_LIFE);
            }
        } else if let Some(life) = state.pickups[i].life {
            state.pickups[i].life = Some(life.saturating_sub(1));
        }

        let pos = state.pickups[i].pos;
        let collected = input
            .unclaimed_click()
            .filter(|c| c.pos().distance(pos) < cfg::PICKUP_RADIUS)
            .is_some_and(|c| c.claim());
        if collected {
            state.energy += state.pickups[i].value;
            cues.push(CueEvent::now(Cue::Collect));
            particles::burst(
                &mut state.particles,
                &mut state.rng,
                pos,
                8,
                COLLECT_PARTICLE_COLOR,
                2.0,
                (15.0, 30.0),
            );
            state.pickups.remove(i);
            continue;
        }

        let expired = state.pickups[i].life == Some(0);
        if expired || state.pickups[i].pos.y > crate::config::CANVAS_HEIGHT {
            state.pickups.remove(i);
        }
    }
}

/// A packet click always claims: select if affordable, deselect if not.
/// Returns whether a packet was hit, which blocks grid handling below.
fn handle_packet_click(state: &mut DefenseState, input: &mut InputState) -> bool {
    let Some(click) = input.unclaimed_click() else {
        return false;
    };
    let pos = click.pos();
    for (index, kind) in UnitKind::ALL.iter().enumerate() {
        if packet_rect(index).contains(pos) {
            if state.energy >= kind.cost() {
                state.selected = Some(*kind);
                log::debug!("Selected {:?}", kind);
            } else {
                log::debug!("Cannot afford {:?}", kind);
                state.selected = None;
            }
            click.claim();
            return true;
        }
    }
    false
}

/// Grid placement. Occupied or out-of-bounds cells deselect WITHOUT
/// claiming, so the click can still reach a later handler.
fn handle_grid_click(
    state: &mut DefenseState,
    input: &mut InputState,
    cues: &mut Vec<CueEvent>,
    clicked_packet: bool,
) {
    if clicked_packet {
        return;
    }
    let Some(kind) = state.selected else {
        return;
    };
    let Some(click) = input.unclaimed_click() else {
        return;
    };
    let pos = click.pos();

    let Some((row, col)) = cell_at(pos) else {
        state.selected = None;
        return;
    };
    if state.cell_occupied(row, col) {
        state.selected = None;
        return;
    }
    if state.energy < kind.cost() {
        state.selected = None;
        return;
    }

    click.claim();
    state.energy -= kind.cost();
    let id = state.next_unit_id;
    state.next_unit_id += 1;
    state.units.push(Unit {
        id,
        kind,
        row,
        col,
        health: kind.max_health(),
        fire_cooldown: 0,
        emit_cooldown: 0,
        place_anim: PLACE_ANIM_TICKS,
        fuse: (kind == UnitKind::Detonator).then_some(cfg::DETONATE_FUSE),
    });
    state.selected = None;
    log::info!("Placed {:?} at ({}, {})", kind, row, col);

    cues.push(CueEvent::now(Cue::Place));
    particles::burst(
        &mut state.particles,
        &mut state.rng,
        cell_center(row, col),
        10,
        PLACE_PARTICLE_COLOR,
        1.5,
        (10.0, 20.0),
    );
}

/// Gunners fire on cooldown only while a hostile is in their lane and
/// inside the sight limit.
fn fire_gunners(state: &mut DefenseState, cues: &mut Vec<CueEvent>) {
    for i in 0..state.units.len() {
        if state.units[i].kind != UnitKind::Gunner {
            continue;
        }
        state.units[i].fire_cooldown += 1;
        let row = state.units[i].row;
        let target_in_lane = state
            .hostiles
            .iter()
            .any(|h| h.row == row && h.x < FIRE_SIGHT_LIMIT);
        if target_in_lane && state.units[i].fire_cooldown >= cfg::FIRE_INTERVAL {
            state.units[i].fire_cooldown = 0;
            let col = state.units[i].col;
            state.projectiles.push(Projectile {
                pos: Vec2::new(
                    cfg::GRID_X + (col as f32 + 0.7) * cfg::CELL_WIDTH,
                    cfg::GRID_Y + (row as f32 + 0.5) * cfg::CELL_HEIGHT,
                ),
                row,
            });
            cues.push(CueEvent::now(Cue::Shoot));
        }
    }
}

/// Advance and hit-test projectiles. A hit damages the hostile but its
/// removal is left to the deferred sweep.
fn advance_projectiles(state: &mut DefenseState, cues: &mut Vec<CueEvent>) {
    for i in (0..state.projectiles.len()).rev() {
        state.projectiles[i].pos.x += cfg::PROJECTILE_SPEED;
        if state.projectiles[i].pos.x > CANVAS_WIDTH {
            state.projectiles.remove(i);
            continue;
        }

        let pos = state.projectiles[i].pos;
        let row = state.projectiles[i].row;
        let tip = pos.x + 10.0;
        let hit = state.hostiles.iter_mut().find(|h| {
            h.row == row && tip >= h.x && pos.x < h.x + cfg::CELL_WIDTH * 0.6
        });
        if let Some(hostile) = hit {
            hostile.health -= cfg::PROJECTILE_DAMAGE;
            particles::burst(
                &mut state.particles,
                &mut state.rng,
                pos,
                5,
                HIT_PARTICLE_COLOR,
                1.0,
                (5.0, 15.0),
            );
            state.projectiles.remove(i);
        }
    }
}

fn spawn_hostiles(state: &mut DefenseState) {
    if !state.wave_active || state.to_spawn == 0 {
        return;
    }
    state.spawn_countdown = state.spawn_countdown.saturating_sub(1);
    if state.spawn_countdown > 0 {
        return;
    }

    let wave = &WAVES[(state.wave_index - 1) as usize];
    state.spawn_countdown = wave.spawn_interval;
    state.to_spawn -= 1;

    let row = state.rng.random_range(0..cfg::GRID_ROWS);
    let kind = wave.kinds[state.rng.random_range(0..wave.kinds.len())];
    let id = state.next_hostile_id;
    state.next_hostile_id += 1;

    state.hostiles.push(Hostile {
        id,
        kind,
        row,
        x: CANVAS_WIDTH,
        health: kind.max_health(),
        speed: kind.base_speed() + state.rng.random_range(0.0..0.15),
        eating: false,
    });
    state.eat_counters.insert(id, 0);
    log::debug!(
        "{:?} spawned in row {} ({} left to spawn)",
        kind,
        row,
        state.to_spawn
    );
}

/// Hostiles either chew on an overlapped unit or advance. Crossing the
/// left boundary ends the run immediately.
fn advance_hostiles(state: &mut DefenseState, cues: &mut Vec<CueEvent>) -> DefenseOutcome {
    for i in 0..state.hostiles.len() {
        state.hostiles[i].eating = false;
        let id = state.hostiles[i].id;
        let row = state.hostiles[i].row;
        let x = state.hostiles[i].x;
        let kind = state.hostiles[i].kind;

        // Most recently placed unit wins when cells are adjacent
        let target = (0..state.units.len()).rev().find(|&j| {
            let unit = &state.units[j];
            if unit.row != row {
                return false;
            }
            let right = cfg::GRID_X + (unit.col as f32 + 1.0) * cfg::CELL_WIDTH;
            x <= right - cfg::CELL_WIDTH * 0.1 && x > right - cfg::CELL_WIDTH * 1.1
        });

        if let Some(j) = target {
            state.hostiles[i].eating = true;
            let counter = state.eat_counters.entry(id).or_insert(0);
            *counter += 1;
            let bite = *counter >= cfg::EAT_INTERVAL;
            if bite {
                *counter = 0;
                state.units[j].health -= kind.bite_damage();
                cues.push(CueEvent::now(Cue::Eat));
                if state.units[j].health <= 0 {
                    // Safe to remove inline: this loop indexes hostiles,
                    // not units
                    log::info!("Unit {:?} destroyed", state.units[j].kind);
                    state.units.remove(j);
                }
            }
        } else {
            let speed = state.hostiles[i].speed;
            state.hostiles[i].x -= speed;
            state.eat_counters.insert(id, 0);
        }

        if state.hostiles[i].x < cfg::BREACH_X {
            log::info!("Boundary breached, run over");
            cues.push(CueEvent::now(Cue::Die));
            return DefenseOutcome::Breached;
        }
    }
    DefenseOutcome::Continue
}

/// Deferred defeat sweep: removes every non-positive-health hostile,
/// decrements the wave's defeat counter and awards its bounty.
fn sweep_defeats(state: &mut DefenseState) {
    for j in (0..state.hostiles.len()).rev() {
        if state.hostiles[j].health <= 0 {
            let hostile = state.hostiles.remove(j);
            state.eat_counters.remove(&hostile.id);
            state.to_defeat = state.to_defeat.saturating_sub(1);
            state.score += hostile.kind.bounty();
            log::debug!(
                "{:?} defeated ({} left in wave)",
                hostile.kind,
                state.to_defeat
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defense::state::HostileKind;

    fn idle_tick(state: &mut DefenseState) -> DefenseOutcome {
        let mut input = InputState::new();
        let mut cues = Vec::new();
        tick(state, &mut input, &mut cues)
    }

    fn click_tick(state: &mut DefenseState, pos: Vec2) -> (DefenseOutcome, InputState) {
        let mut input = InputState::new();
        input.pointer_down(pos);
        let mut cues = Vec::new();
        let outcome = tick(state, &mut input, &mut cues);
        (outcome, input)
    }

    fn hostile(id: u32, kind: HostileKind, row: usize, x: f32) -> Hostile {
        Hostile {
            id,
            kind,
            row,
            x,
            health: kind.max_health(),
            speed: kind.base_speed(),
            eating: false,
        }
    }

    #[test]
    fn first_wave_starts_after_countdown() {
        let mut state = DefenseState::new(1);
        state.wave_countdown = 1;
        idle_tick(&mut state);
        assert!(state.wave_active);
        assert_eq!(state.wave_index, 1);
        assert_eq!(state.to_spawn, WAVES[0].count);
        assert_eq!(state.to_defeat, WAVES[0].count);
    }

    #[test]
    fn wave_clears_only_when_both_counters_hit_zero() {
        let mut state = DefenseState::new(1);
        state.wave_index = 1;
        state.wave_active = true;
        state.to_spawn = 0;
        state.to_defeat = 1;

        advance_waves(&mut state);
        assert!(state.wave_active);

        state.to_defeat = 0;
        advance_waves(&mut state);
        assert!(!state.wave_active);
        assert_eq!(state.wave_countdown, cfg::INTER_WAVE_DELAY);
    }

    #[test]
    fn exhausted_schedule_flags_completion() {
        let mut state = DefenseState::new(1);
        state.wave_index = WAVES.len() as u32;
        state.wave_countdown = 1;
        advance_waves(&mut state);
        assert!(state.waves_done);
        assert!(!state.wave_active);

        // Terminal: further ticks change nothing
        advance_waves(&mut state);
        assert!(state.waves_done);
    }

    #[test]
    fn packet_then_grid_click_places_a_unit() {
        let mut state = DefenseState::new(2);
        let (_, mut input) = click_tick(&mut state, packet_rect(0).center());
        assert_eq!(state.selected, Some(UnitKind::Gunner));
        assert!(input.unclaimed_click().is_none());

        let (_, mut input) = click_tick(&mut state, cell_center(2, 3));
        assert!(input.unclaimed_click().is_none());
        assert_eq!(state.units.len(), 1);
        assert_eq!((state.units[0].row, state.units[0].col), (2, 3));
        assert_eq!(
            state.energy,
            cfg::STARTING_ENERGY - UnitKind::Gunner.cost()
        );
        assert_eq!(state.selected, None);
        assert!(!state.particles.is_empty());
    }

    #[test]
    fn occupied_cell_deselects_without_claiming() {
        let mut state = DefenseState::new(2);
        click_tick(&mut state, packet_rect(1).center());
        click_tick(&mut state, cell_center(1, 1));
        assert_eq!(state.units.len(), 1);

        click_tick(&mut state, packet_rect(1).center());
        let (_, mut input) = click_tick(&mut state, cell_center(1, 1));
        assert_eq!(state.units.len(), 1);
        assert_eq!(state.selected, None);
        assert!(input.unclaimed_click().is_some());
    }

    #[test]
    fn out_of_grid_click_deselects_without_claiming() {
        let mut state = DefenseState::new(2);
        click_tick(&mut state, packet_rect(1).center());
        assert_eq!(state.selected, Some(UnitKind::Harvester));

        let (_, mut input) = click_tick(&mut state, Vec2::new(5.0, 300.0));
        assert_eq!(state.selected, None);
        assert!(input.unclaimed_click().is_some());
    }

    #[test]
    fn unaffordable_packet_click_deselects_and_claims() {
        let mut state = DefenseState::new(2);
        state.energy = 50;
        let (_, mut input) = click_tick(&mut state, packet_rect(3).center());
        assert_eq!(state.selected, None);
        assert!(input.unclaimed_click().is_none());
    }

    #[test]
    fn pickup_collection_wins_over_grid_placement() {
        let mut state = DefenseState::new(2);
        state.selected = Some(UnitKind::Bulwark);
        let spot = cell_center(2, 4);
        state.pickups.push(Pickup {
            pos: spot,
            value: cfg::PICKUP_VALUE,
            fall_speed: 0.0,
            target_y: spot.y,
            life: Some(100),
            angle: 0.0,
            spin: 0.0,
        });

        let energy_before = state.energy;
        click_tick(&mut state, spot);

        assert_eq!(state.energy, energy_before + cfg::PICKUP_VALUE);
        assert!(state.pickups.is_empty());
        assert!(state.units.is_empty());
    }

    #[test]
    fn projectile_kill_is_swept_with_bounty() {
        let mut state = DefenseState::new(3);
        state.wave_active = true;
        state.wave_index = 1;
        state.to_defeat = 3;
        let mut target = hostile(0, HostileKind::Grunt, 2, 400.0);
        target.health = cfg::PROJECTILE_DAMAGE;
        state.hostiles.push(target);
        state.eat_counters.insert(0, 0);
        state.projectiles.push(Projectile {
            pos: Vec2::new(395.0, 300.0),
            row: 2,
        });

        idle_tick(&mut state);

        assert!(state.hostiles.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.to_defeat, 2);
        assert_eq!(state.score, HostileKind::Grunt.bounty());
        assert!(!state.eat_counters.contains_key(&0));
    }

    #[test]
    fn detonation_sweeps_in_the_same_tick() {
        let mut state = DefenseState::new(3);
        state.wave_active = true;
        state.wave_index = 1;
        state.to_defeat = 1;
        state.to_spawn = 0;
        state.units.push(Unit {
            id: 0,
            kind: UnitKind::Detonator,
            row: 2,
            col: 4,
            health: UnitKind::Detonator.max_health(),
            fire_cooldown: 0,
            emit_cooldown: 0,
            place_anim: 0,
            fuse: Some(1),
        });
        let center = cell_center(2, 4);
        state
            .hostiles
            .push(hostile(0, HostileKind::Brute, 2, center.x + 10.0));
        state.eat_counters.insert(0, 0);

        idle_tick(&mut state);

        assert!(state.units.is_empty());
        assert!(state.hostiles.is_empty());
        assert_eq!(state.to_defeat, 0);
        assert_eq!(state.score, HostileKind::Brute.bounty());
    }

    #[test]
    fn detonation_spares_hostiles_outside_the_radius() {
        let mut state = DefenseState::new(3);
        state.units.push(Unit {
            id: 0,
            kind: UnitKind::Detonator,
            row: 0,
            col: 0,
            health: UnitKind::Detonator.max_health(),
            fire_cooldown: 0,
            emit_cooldown: 0,
            place_anim: 0,
            fuse: Some(1),
        });
        // Same lane, but several cells away
        state
            .hostiles
            .push(hostile(0, HostileKind::Grunt, 0, CANVAS_WIDTH - 1.0));
        state.eat_counters.insert(0, 0);

        idle_tick(&mut state);
        assert_eq!(state.hostiles.len(), 1);
        assert!(state.hostiles[0].health > 0);
    }

    #[test]
    fn eating_bites_on_the_interval_and_removes_dead_units() {
        let mut state = DefenseState::new(4);
        let mut unit = Unit {
            id: 0,
            kind: UnitKind::Bulwark,
            row: 1,
            col: 2,
            health: 10,
            fire_cooldown: 0,
            emit_cooldown: 0,
            place_anim: 0,
            fuse: None,
        };
        unit.health = HostileKind::Grunt.bite_damage();
        state.units.push(unit);

        let right = cfg::GRID_X + 3.0 * cfg::CELL_WIDTH;
        let mut chewer = hostile(0, HostileKind::Grunt, 1, right - cfg::CELL_WIDTH * 0.5);
        chewer.health = 100;
        state.hostiles.push(chewer);
        state.eat_counters.insert(0, cfg::EAT_INTERVAL - 1);

        let x_before = state.hostiles[0].x;
        idle_tick(&mut state);

        assert!(state.units.is_empty());
        assert_eq!(state.eat_counters[&0], 0);
        // Eating hostiles don't advance
        assert_eq!(state.hostiles[0].x, x_before);
    }

    #[test]
    fn breach_short_circuits_the_tick() {
        let mut state = DefenseState::new(4);
        state
            .hostiles
            .push(hostile(0, HostileKind::Grunt, 0, cfg::BREACH_X + 0.1));
        // A dead hostile that the sweep would normally remove
        let mut dead = hostile(1, HostileKind::Grunt, 4, 500.0);
        dead.health = 0;
        state.hostiles.push(dead);

        let outcome = idle_tick(&mut state);
        assert_eq!(outcome, DefenseOutcome::Breached);
        // Sweep never ran
        assert_eq!(state.hostiles.len(), 2);
    }

    #[test]
    fn harvester_emits_grounded_pickups() {
        let mut state = DefenseState::new(5);
        state.units.push(Unit {
            id: 0,
            kind: UnitKind::Harvester,
            row: 3,
            col: 1,
            health: UnitKind::Harvester.max_health(),
            fire_cooldown: 0,
            emit_cooldown: cfg::HARVESTER_INTERVAL - 1,
            place_anim: 0,
            fuse: None,
        });

        idle_tick(&mut state);
        assert_eq!(state.pickups.len(), 1);
        assert_eq!(state.pickups[0].fall_speed, 0.0);
        // Already aged by one tick: emission precedes the pickup pass
        assert_eq!(state.pickups[0].life, Some(cfg::PICKUP_LIFE - 1));
        assert_eq!(state.units[0].emit_cooldown, 0);
    }

    #[test]
    fn gunner_holds_fire_on_an_empty_lane() {
        let mut state = DefenseState::new(5);
        state.units.push(Unit {
            id: 0,
            kind: UnitKind::Gunner,
            row: 2,
            col: 0,
            health: UnitKind::Gunner.max_health(),
            fire_cooldown: cfg::FIRE_INTERVAL,
            emit_cooldown: 0,
            place_anim: 0,
            fuse: None,
        });
        state.hostiles.push(hostile(0, HostileKind::Grunt, 3, 400.0));
        state.eat_counters.insert(0, 0);

        idle_tick(&mut state);
        assert!(state.projectiles.is_empty());

        state.hostiles[0].row = 2;
        idle_tick(&mut state);
        assert_eq!(state.projectiles.len(), 1);
    }
}
