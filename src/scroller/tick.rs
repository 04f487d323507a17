//! Side-scroller per-tick update
//!
//! All mutation happens here; drawing never writes state. Ending the run
//! short-circuits the rest of the obstacle pass for that tick.

use glam::Vec2;
use rand::Rng;

use crate::audio::{Cue, CueEvent};
use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH, scroller as cfg};
use crate::input::InputState;
use crate::particles::{self, Particle};
use crate::scroller::state::{ObstaclePair, Phase, ScrollerState};

const PARTICLE_GRAVITY: f32 = 0.1;
const PARTICLE_COLOR: &str = "rgba(255, 255, 255, 0.7)";

/// Advance one tick. Returns the new best score if this tick improved it
/// (the caller persists it).
pub fn tick(
    state: &mut ScrollerState,
    input: &mut InputState,
    cues: &mut Vec<CueEvent>,
) -> Option<u32> {
    if take_press(input) {
        handle_press(state, cues);
    }

    let mut best = None;
    match state.phase {
        Phase::Playing => {
            best = integrate_avatar(state, cues);
            // No-op if the ground impact already ended the run
            best = best.or(advance_obstacles(state, cues));
            particles::update(&mut state.particles, PARTICLE_GRAVITY);
        }
        Phase::GetReady | Phase::GameOver => {
            best = integrate_avatar(state, cues);
            particles::update(&mut state.particles, PARTICLE_GRAVITY);
        }
        Phase::Start => {
            particles::update(&mut state.particles, PARTICLE_GRAVITY);
        }
    }
    ease_pose(state);
    best
}

/// A press is Space, ArrowUp, or an unclaimed click. Every phase responds
/// to a press, so the click is always claimed here.
fn take_press(input: &mut InputState) -> bool {
    if input.was_pressed("Space") || input.was_pressed("ArrowUp") {
        return true;
    }
    if let Some(click) = input.unclaimed_click() {
        return click.claim();
    }
    false
}

fn handle_press(state: &mut ScrollerState, cues: &mut Vec<CueEvent>) {
    match state.phase {
        Phase::Start => {
            state.phase = Phase::GetReady;
            state.reset_run();
        }
        Phase::GetReady => {
            jump(state, cues);
            state.phase = Phase::Playing;
            state.frame = 0;
            spawn_obstacle(state);
        }
        Phase::Playing => jump(state, cues),
        Phase::GameOver => {
            state.phase = Phase::Start;
            state.reset_run();
        }
    }
}

fn jump(state: &mut ScrollerState, cues: &mut Vec<CueEvent>) {
    if !matches!(state.phase, Phase::Playing | Phase::GetReady) {
        return;
    }
    state.avatar.vel_y = cfg::JUMP_IMPULSE;
    state.avatar.rotation = -30.0;
    state.avatar.just_jumped = true;
    cues.push(CueEvent::now(Cue::Jump));

    let center = state.avatar.center();
    let ScrollerState { particles, rng, .. } = state;
    for _ in 0..cfg::JUMP_PARTICLES {
        particles.push(Particle {
            pos: center,
            vel: Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-3.0..-1.0)),
            life: 30.0,
            size: rng.random_range(1.0..4.0),
            color: PARTICLE_COLOR,
        });
    }
}

/// Gravity, ground clamp and ceiling clamp. Ground contact during play
/// ends the run as a ground impact.
fn integrate_avatar(state: &mut ScrollerState, cues: &mut Vec<CueEvent>) -> Option<u32> {
    let floor_y = CANVAS_HEIGHT - cfg::FLOOR_HEIGHT;
    let bottom = state.avatar.pos.y + cfg::AVATAR_SIZE;
    let falling_out = state.phase == Phase::GameOver && bottom < floor_y;

    if matches!(state.phase, Phase::Playing | Phase::GetReady) || falling_out {
        state.avatar.vel_y += cfg::GRAVITY;
        state.avatar.pos.y += state.avatar.vel_y;
    }

    let mut best = None;
    if state.phase != Phase::GameOver && state.avatar.pos.y + cfg::AVATAR_SIZE >= floor_y {
        state.avatar.pos.y = floor_y - cfg::AVATAR_SIZE;
        state.avatar.vel_y = 0.0;
        state.avatar.scale = Vec2::ONE;
        if state.phase == Phase::Playing {
            best = end_run(state, true, cues);
        }
    }
    if state.avatar.pos.y < 0.0 {
        state.avatar.pos.y = 0.0;
        state.avatar.vel_y = 0.0;
    }
    best
}

/// Move, collide, score and cull obstacle pairs, then spawn on cadence.
/// Iterates in reverse so removal never skips an element. A collision
/// ends the run and skips the rest of the pass.
fn advance_obstacles(state: &mut ScrollerState, cues: &mut Vec<CueEvent>) -> Option<u32> {
    if state.phase != Phase::Playing {
        return None;
    }

    state.speed = cfg::BASE_SPEED + state.score as f32 * cfg::SPEED_PER_POINT;
    let speed = state.speed;
    let avatar = state.avatar.rect();

    for i in (0..state.obstacles.len()).rev() {
        state.obstacles[i].x -= speed;
        let pipe = &state.obstacles[i];
        let pipe_right = pipe.x + cfg::OBSTACLE_WIDTH;

        let overlap_x = avatar.x + avatar.w > pipe.x && avatar.x < pipe_right;
        if overlap_x && (avatar.y < pipe.gap_top || avatar.y + avatar.h > pipe.gap_bottom) {
            return end_run(state, false, cues);
        }

        if !pipe.scored && avatar.x > pipe_right {
            state.obstacles[i].scored = true;
            state.score += 1;
            cues.push(CueEvent::now(Cue::Score));
        }

        if state.obstacles[i].x + cfg::OBSTACLE_WIDTH < 0.0 {
            state.obstacles.remove(i);
        }
    }

    state.frame += 1;
    if state.frame % cfg::SPAWN_INTERVAL == 0 {
        spawn_obstacle(state);
    }
    None
}

/// Pick a gap position bounded by edge margins and the previous pair's
/// position. The fallback chain never fails to spawn.
fn spawn_obstacle(state: &mut ScrollerState) {
    let gap = cfg::OBSTACLE_GAP.max(cfg::AVATAR_SIZE * 6.0);
    let abs_min = cfg::MIN_EDGE_MARGIN;
    let abs_max = CANVAS_HEIGHT - cfg::FLOOR_HEIGHT - gap - cfg::MIN_EDGE_MARGIN;

    let (mut min, mut max) = (abs_min, abs_max);
    if let Some(last) = state.last_gap_top {
        min = abs_min.max(last - cfg::MAX_GAP_SHIFT);
        max = abs_max.min(last + cfg::MAX_GAP_SHIFT);
    }
    if max <= min {
        log::warn!("Gap shift bounds conflict, using full range");
        min = abs_min;
        max = abs_max;
    }

    let gap_top = if max <= min {
        log::error!("No valid gap range, spawning centered fallback");
        abs_min.max((CANVAS_HEIGHT - cfg::FLOOR_HEIGHT - gap) / 2.0)
    } else {
        state.rng.random_range(min..max)
    };

    state.obstacles.push(ObstaclePair {
        x: CANVAS_WIDTH,
        gap_top,
        gap_bottom: gap_top + gap,
        scored: false,
    });
    state.last_gap_top = Some(gap_top);
}

/// Run end bookkeeping. A non-ground impact also schedules the delayed
/// secondary cue; the delay lives entirely in the audio layer.
fn end_run(state: &mut ScrollerState, hit_ground: bool, cues: &mut Vec<CueEvent>) -> Option<u32> {
    if state.phase != Phase::Playing {
        return None;
    }
    state.phase = Phase::GameOver;
    cues.push(CueEvent::now(Cue::Hit));
    if !hit_ground {
        cues.push(CueEvent::after(Cue::Die, cfg::DIE_CUE_DELAY));
    }
    log::info!("Run over at score {}", state.score);

    if state.score > state.high_score {
        state.high_score = state.score;
        Some(state.score)
    } else {
        None
    }
}

/// Ease rotation toward a velocity-derived target and relax squash back
/// to identity. Visual only.
fn ease_pose(state: &mut ScrollerState) {
    let avatar = &mut state.avatar;
    match state.phase {
        Phase::Playing | Phase::GetReady => {
            let target = (avatar.vel_y * 6.0).clamp(-30.0, 90.0);
            avatar.rotation += (target - avatar.rotation) * 0.15;
        }
        // Terminal tumble: fixed steps until face-down
        Phase::GameOver => avatar.rotation = (avatar.rotation + 5.0).min(90.0),
        Phase::Start => avatar.rotation -= avatar.rotation * 0.15,
    }

    if avatar.just_jumped {
        avatar.scale = Vec2::new(0.8, 1.3);
        avatar.just_jumped = false;
    } else {
        avatar.scale += (Vec2::ONE - avatar.scale) * 0.2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn press(state: &mut ScrollerState, cues: &mut Vec<CueEvent>) -> Option<u32> {
        let mut input = InputState::new();
        input.key_down("Space");
        let best = tick(state, &mut input, cues);
        input.end_tick();
        best
    }

    fn idle_tick(state: &mut ScrollerState, cues: &mut Vec<CueEvent>) -> Option<u32> {
        let mut input = InputState::new();
        tick(state, &mut input, cues)
    }

    #[test]
    fn two_presses_reach_playing() {
        let mut state = ScrollerState::new(3, 0);
        let mut cues = Vec::new();

        press(&mut state, &mut cues);
        assert_eq!(state.phase, Phase::GetReady);
        assert!(state.obstacles.is_empty());

        press(&mut state, &mut cues);
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.obstacles.len(), 1);
        assert!(cues.iter().any(|c| c.cue == Cue::Jump));
        assert!(!state.particles.is_empty());
    }

    #[test]
    fn click_also_counts_as_press() {
        let mut state = ScrollerState::new(3, 0);
        let mut cues = Vec::new();
        let mut input = InputState::new();
        input.pointer_down(Vec2::new(400.0, 300.0));

        tick(&mut state, &mut input, &mut cues);
        assert_eq!(state.phase, Phase::GetReady);
        assert!(input.unclaimed_click().is_none());
    }

    #[test]
    fn ground_impact_ends_run_without_delayed_cue() {
        let mut state = ScrollerState::new(5, 0);
        state.phase = Phase::Playing;
        state.avatar.pos.y = CANVAS_HEIGHT - cfg::FLOOR_HEIGHT - cfg::AVATAR_SIZE - 1.0;
        state.avatar.vel_y = 5.0;
        let mut cues = Vec::new();

        idle_tick(&mut state, &mut cues);

        assert_eq!(state.phase, Phase::GameOver);
        assert!(cues.iter().any(|c| c.cue == Cue::Hit));
        assert!(!cues.iter().any(|c| c.cue == Cue::Die));
        assert_eq!(state.avatar.vel_y, 0.0);
    }

    #[test]
    fn pipe_impact_schedules_delayed_cue() {
        let mut state = ScrollerState::new(5, 0);
        state.phase = Phase::Playing;
        // Pipe right on top of the avatar, gap far below it
        state.obstacles.push(ObstaclePair {
            x: cfg::AVATAR_X,
            gap_top: 500.0,
            gap_bottom: 520.0,
            scored: false,
        });
        let mut cues = Vec::new();

        idle_tick(&mut state, &mut cues);

        assert_eq!(state.phase, Phase::GameOver);
        let die = cues.iter().find(|c| c.cue == Cue::Die);
        assert!(die.is_some_and(|c| c.delay_secs > 0.0));
    }

    #[test]
    fn pair_scores_exactly_once() {
        let mut state = ScrollerState::new(9, 0);
        state.phase = Phase::Playing;
        // Just behind the avatar's leading edge, scores after one move
        state.obstacles.push(ObstaclePair {
            x: cfg::AVATAR_X - cfg::OBSTACLE_WIDTH - 1.0,
            gap_top: 100.0,
            gap_bottom: 300.0,
            scored: false,
        });
        let mut cues = Vec::new();

        idle_tick(&mut state, &mut cues);
        assert_eq!(state.score, 1);

        idle_tick(&mut state, &mut cues);
        assert_eq!(state.score, 1);
        assert_eq!(cues.iter().filter(|c| c.cue == Cue::Score).count(), 1);
        assert_eq!(state.speed, cfg::BASE_SPEED + cfg::SPEED_PER_POINT);
    }

    #[test]
    fn offscreen_pairs_are_culled() {
        let mut state = ScrollerState::new(9, 0);
        state.phase = Phase::Playing;
        state.obstacles.push(ObstaclePair {
            x: -cfg::OBSTACLE_WIDTH,
            gap_top: 100.0,
            gap_bottom: 300.0,
            scored: true,
        });
        let mut cues = Vec::new();

        idle_tick(&mut state, &mut cues);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn game_over_press_returns_to_start() {
        let mut state = ScrollerState::new(2, 0);
        state.phase = Phase::GameOver;
        state.score = 4;
        let mut cues = Vec::new();

        press(&mut state, &mut cues);
        assert_eq!(state.phase, Phase::Start);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn new_best_is_reported_once() {
        let mut state = ScrollerState::new(5, 2);
        state.phase = Phase::Playing;
        state.score = 7;
        state.avatar.pos.y = CANVAS_HEIGHT - cfg::FLOOR_HEIGHT - cfg::AVATAR_SIZE - 1.0;
        state.avatar.vel_y = 5.0;
        let mut cues = Vec::new();

        let best = idle_tick(&mut state, &mut cues);
        assert_eq!(best, Some(7));
        assert_eq!(state.high_score, 7);
    }

    proptest! {
        #[test]
        fn gap_placement_stays_in_bounds(seed in any::<u64>(), spawns in 1usize..60) {
            let mut state = ScrollerState::new(0, 0);
            state.rng = Pcg32::seed_from_u64(seed);

            let floor_y = CANVAS_HEIGHT - cfg::FLOOR_HEIGHT;
            let mut prev: Option<f32> = None;
            for _ in 0..spawns {
                spawn_obstacle(&mut state);
                let pipe = state.obstacles.last().unwrap();
                prop_assert!(pipe.gap_top >= cfg::MIN_EDGE_MARGIN);
                prop_assert!(pipe.gap_bottom <= floor_y - cfg::MIN_EDGE_MARGIN);
                if let Some(prev) = prev {
                    prop_assert!((pipe.gap_top - prev).abs() <= cfg::MAX_GAP_SHIFT);
                }
                prev = Some(pipe.gap_top);
            }
        }
    }
}
