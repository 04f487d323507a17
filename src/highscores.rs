//! Best-run persistence
//!
//! One best run per game, stored as JSON in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::menu::GameId;

/// A single best run
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BestRun {
    /// Final score
    pub score: u32,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// Per-game best runs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BestRuns {
    pub gap_runner: Option<BestRun>,
    pub lane_defense: Option<BestRun>,
}

impl BestRuns {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "mini_arcade_best_runs";

    pub fn new() -> Self {
        Self::default()
    }

    /// Best score recorded for a game, 0 if none yet.
    pub fn best_for(&self, game: GameId) -> u32 {
        self.slot(game).map(|r| r.score).unwrap_or(0)
    }

    /// Record a finished run. Returns true if it beat the previous best,
    /// in which case the new best is stored (caller saves).
    pub fn record(&mut self, game: GameId, score: u32, timestamp: f64) -> bool {
        if score <= self.best_for(game) {
            return false;
        }
        *self.slot_mut(game) = Some(BestRun { score, timestamp });
        true
    }

    fn slot(&self, game: GameId) -> Option<&BestRun> {
        match game {
            GameId::GapRunner => self.gap_runner.as_ref(),
            GameId::LaneDefense => self.lane_defense.as_ref(),
        }
    }

    fn slot_mut(&mut self, game: GameId) -> &mut Option<BestRun> {
        match game {
            GameId::GapRunner => &mut self.gap_runner,
            GameId::LaneDefense => &mut self.lane_defense,
        }
    }

    /// Load best runs from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(runs) = serde_json::from_str::<BestRuns>(&json) {
                    log::info!("Loaded best runs");
                    return runs;
                }
            }
        }

        log::info!("No best runs found, starting fresh");
        Self::new()
    }

    /// Save best runs to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Best runs saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// Current wall-clock time in Unix milliseconds
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_only_improvements() {
        let mut runs = BestRuns::new();
        assert_eq!(runs.best_for(GameId::GapRunner), 0);

        assert!(runs.record(GameId::GapRunner, 5, 1000.0));
        assert_eq!(runs.best_for(GameId::GapRunner), 5);

        assert!(!runs.record(GameId::GapRunner, 3, 2000.0));
        assert_eq!(runs.best_for(GameId::GapRunner), 5);

        assert!(!runs.record(GameId::GapRunner, 5, 3000.0));
        assert!(runs.record(GameId::GapRunner, 9, 4000.0));
        assert_eq!(runs.best_for(GameId::GapRunner), 9);
    }

    #[test]
    fn games_track_independent_bests() {
        let mut runs = BestRuns::new();
        runs.record(GameId::GapRunner, 7, 0.0);
        assert_eq!(runs.best_for(GameId::LaneDefense), 0);

        runs.record(GameId::LaneDefense, 120, 0.0);
        assert_eq!(runs.best_for(GameId::GapRunner), 7);
        assert_eq!(runs.best_for(GameId::LaneDefense), 120);
    }

    #[test]
    fn zero_score_never_records() {
        let mut runs = BestRuns::new();
        assert!(!runs.record(GameId::LaneDefense, 0, 0.0));
        assert!(runs.lane_defense.is_none());
    }
}
