//! Visual particles shared by both games
//!
//! Particles never affect gameplay. Removal uses `retain`, never forward
//! splicing, so decay is safe during iteration.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining lifetime in ticks
    pub life: f32,
    pub size: f32,
    pub color: &'static str,
}

/// Integrate one tick of motion and decay, dropping dead particles.
pub fn update(particles: &mut Vec<Particle>, gravity: f32) {
    for p in particles.iter_mut() {
        p.pos += p.vel;
        p.vel.y += gravity;
        p.life -= 1.0;
    }
    particles.retain(|p| p.life > 0.0);
}

/// Radial burst at `pos`: random directions, speed `(1..3) * speed_mult`,
/// lifetime drawn from `life_range`.
pub fn burst(
    particles: &mut Vec<Particle>,
    rng: &mut Pcg32,
    pos: Vec2,
    count: usize,
    color: &'static str,
    speed_mult: f32,
    life_range: (f32, f32),
) {
    for _ in 0..count {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = rng.random_range(1.0..3.0) * speed_mult;
        particles.push(Particle {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            life: rng.random_range(life_range.0..life_range.1),
            size: rng.random_range(1.0..4.0),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn dead_particles_are_dropped() {
        let mut particles = vec![
            Particle {
                pos: Vec2::ZERO,
                vel: Vec2::new(1.0, 0.0),
                life: 1.0,
                size: 2.0,
                color: "#fff",
            },
            Particle {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                life: 10.0,
                size: 2.0,
                color: "#fff",
            },
        ];
        update(&mut particles, 0.1);
        assert_eq!(particles.len(), 1);
        assert!(particles[0].life > 0.0);
    }

    #[test]
    fn burst_respects_count_and_life_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut particles = Vec::new();
        burst(&mut particles, &mut rng, Vec2::ZERO, 8, "#ff0", 2.0, (15.0, 30.0));
        assert_eq!(particles.len(), 8);
        for p in &particles {
            assert!(p.life >= 15.0 && p.life < 30.0);
            assert!(p.vel.length() >= 2.0 - f32::EPSILON);
        }
    }
}
