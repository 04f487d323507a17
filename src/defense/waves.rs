//! Wave schedule
//!
//! Immutable configuration, consumed by index as the run progresses.

use crate::defense::state::HostileKind;

#[derive(Debug)]
pub struct WaveDef {
    /// Hostiles to spawn (and to defeat)
    pub count: u32,
    /// Types drawn uniformly for each spawn
    pub kinds: &'static [HostileKind],
    /// Ticks between spawns within the wave
    pub spawn_interval: u32,
}

const GRUNTS: &[HostileKind] = &[HostileKind::Grunt];
const MIXED: &[HostileKind] = &[HostileKind::Grunt, HostileKind::Brute];
const BRUTES: &[HostileKind] = &[HostileKind::Brute];

pub const WAVES: [WaveDef; 9] = [
    WaveDef { count: 3, kinds: GRUNTS, spawn_interval: 500 },
    WaveDef { count: 5, kinds: GRUNTS, spawn_interval: 450 },
    WaveDef { count: 7, kinds: MIXED, spawn_interval: 400 },
    WaveDef { count: 10, kinds: MIXED, spawn_interval: 350 },
    WaveDef { count: 12, kinds: MIXED, spawn_interval: 320 },
    WaveDef { count: 15, kinds: MIXED, spawn_interval: 300 },
    WaveDef { count: 10, kinds: BRUTES, spawn_interval: 400 },
    WaveDef { count: 20, kinds: MIXED, spawn_interval: 280 },
    WaveDef { count: 25, kinds: MIXED, spawn_interval: 250 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waves_are_well_formed() {
        assert_eq!(WAVES.len(), 9);
        for wave in &WAVES {
            assert!(wave.count > 0);
            assert!(!wave.kinds.is_empty());
            assert!(wave.spawn_interval > 0);
        }
        assert_eq!(WAVES[6].kinds, BRUTES);
    }
}
