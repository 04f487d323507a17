//! Side-scroller world state

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::{CANVAS_HEIGHT, scroller as cfg};
use crate::geom::Rect;
use crate::particles::Particle;

/// Internal phase of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Title screen, waiting for the first press
    Start,
    /// Press once more to take off
    GetReady,
    Playing,
    GameOver,
}

/// The player square. One instance per run, repositioned on reset.
#[derive(Debug, Clone)]
pub struct Avatar {
    /// Top-left corner
    pub pos: Vec2,
    pub vel_y: f32,
    /// Degrees, eased toward a velocity-derived target each tick
    pub rotation: f32,
    /// Squash/stretch scale, eased back toward 1
    pub scale: Vec2,
    /// Set by a jump, consumed by the next pose update
    pub just_jumped: bool,
}

impl Avatar {
    fn spawn() -> Self {
        Self {
            pos: Vec2::new(
                cfg::AVATAR_X,
                CANVAS_HEIGHT / 2.0 - cfg::AVATAR_SIZE / 2.0,
            ),
            vel_y: 0.0,
            rotation: 0.0,
            scale: Vec2::ONE,
            just_jumped: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, cfg::AVATAR_SIZE, cfg::AVATAR_SIZE)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(cfg::AVATAR_SIZE / 2.0)
    }
}

/// A top/bottom pipe pair with a traversable gap.
#[derive(Debug, Clone)]
pub struct ObstaclePair {
    /// Left edge
    pub x: f32,
    /// Bottom of the top pipe
    pub gap_top: f32,
    /// Top of the bottom pipe
    pub gap_bottom: f32,
    pub scored: bool,
}

/// Everything a run owns. Replaced wholesale on reset, so no entity
/// outlives its world.
#[derive(Debug)]
pub struct ScrollerState {
    pub phase: Phase,
    pub avatar: Avatar,
    pub obstacles: Vec<ObstaclePair>,
    pub particles: Vec<Particle>,
    /// Ticks since the run started, drives spawn cadence
    pub frame: u32,
    pub score: u32,
    pub high_score: u32,
    pub speed: f32,
    /// Gap top of the most recent pair, bounds the next spawn
    pub last_gap_top: Option<f32>,
    pub rng: Pcg32,
}

impl ScrollerState {
    pub fn new(seed: u64, high_score: u32) -> Self {
        Self {
            phase: Phase::Start,
            avatar: Avatar::spawn(),
            obstacles: Vec::new(),
            particles: Vec::new(),
            frame: 0,
            score: 0,
            high_score,
            speed: cfg::BASE_SPEED,
            last_gap_top: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Reset gameplay entities and score. Keeps phase, high score and rng.
    pub fn reset_run(&mut self) {
        self.avatar = Avatar::spawn();
        self.obstacles.clear();
        self.particles.clear();
        self.frame = 0;
        self.score = 0;
        self.speed = cfg::BASE_SPEED;
        self.last_gap_top = None;
        log::debug!("Scroller run reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_run_keeps_high_score() {
        let mut state = ScrollerState::new(1, 42);
        state.score = 17;
        state.obstacles.push(ObstaclePair {
            x: 300.0,
            gap_top: 200.0,
            gap_bottom: 400.0,
            scored: true,
        });
        state.phase = Phase::GameOver;

        state.reset_run();

        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.high_score, 42);
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.avatar.vel_y, 0.0);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut state = ScrollerState::new(1, 9);
        state.score = 3;
        state.last_gap_top = Some(120.0);

        state.reset_run();
        let pos = state.avatar.pos;
        let speed = state.speed;

        state.reset_run();
        assert_eq!(state.avatar.pos, pos);
        assert_eq!(state.speed, speed);
        assert_eq!(state.score, 0);
        assert_eq!(state.last_gap_top, None);
        assert_eq!(state.high_score, 9);
    }
}
