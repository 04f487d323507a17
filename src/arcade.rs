//! Top-level scheduler
//!
//! Runs one tick per display frame: chrome first, then the active
//! screen's update (skipped while paused or when chrome took the click),
//! then drawing, then the one-shot input flags are cleared. No fixed
//! timestep: per-tick velocities assume a near-constant frame interval.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::CueEvent;
use crate::chrome::{Chrome, ChromeAction};
use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::defense::{self, DefenseOutcome, DefenseState};
use crate::highscores::{BestRuns, now_ms};
use crate::input::InputState;
use crate::menu::{GameId, Menu};
use crate::render::Surface;
use crate::scroller::{self, ScrollerState};

const BACKDROP: &str = "#ecf0f1";

/// What the arcade currently shows. Each game's world lives inside its
/// variant and is replaced wholesale on (re)entry.
pub enum Screen {
    Menu,
    GapRunner(ScrollerState),
    LaneDefense(DefenseState),
}

pub struct Arcade {
    screen: Screen,
    menu: Menu,
    chrome: Chrome,
    paused: bool,
    /// Global frame counter, drives visual oscillation only
    frame: u64,
    best: BestRuns,
    /// Sound cues emitted this tick, drained by the shell
    cues: Vec<CueEvent>,
    /// Seeds the per-game rngs
    seed_rng: Pcg32,
}

impl Arcade {
    pub fn new(seed: u64, best: BestRuns) -> Self {
        log::info!("Arcade initialized");
        Self {
            screen: Screen::Menu,
            menu: Menu::new(),
            chrome: Chrome::new(),
            paused: false,
            frame: 0,
            best,
            cues: Vec::new(),
            seed_rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Hand this tick's sound cues to the shell.
    pub fn drain_cues(&mut self) -> std::vec::Drain<'_, CueEvent> {
        self.cues.drain(..)
    }

    /// One frame: input arbitration, conditional update, unconditional
    /// draw, then one-shot input flags are dropped.
    pub fn tick(&mut self, input: &mut InputState, surface: &mut dyn Surface) {
        self.frame += 1;
        surface.clear();
        surface.fill_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT, BACKDROP);

        let mut chrome_consumed = false;
        if !matches!(self.screen, Screen::Menu) {
            match self.chrome.update(input) {
                ChromeAction::Back => {
                    self.leave_game();
                    chrome_consumed = true;
                }
                ChromeAction::TogglePause => {
                    self.paused = !self.paused;
                    chrome_consumed = true;
                }
                ChromeAction::None => {}
            }
            if input.was_pressed("KeyP") {
                self.paused = !self.paused;
                log::debug!("Paused: {}", self.paused);
            }
        }

        if !self.paused && !chrome_consumed {
            self.update_screen(input);
        }

        self.draw(surface);
        input.end_tick();
    }

    fn update_screen(&mut self, input: &mut InputState) {
        let mut start = None;
        let mut defense_over = None;

        match &mut self.screen {
            Screen::Menu => start = self.menu.update(input),
            Screen::GapRunner(state) => {
                if let Some(best) = scroller::tick::tick(state, input, &mut self.cues) {
                    if self.best.record(GameId::GapRunner, best, now_ms()) {
                        self.best.save();
                    }
                }
            }
            Screen::LaneDefense(state) => {
                if defense::tick::tick(state, input, &mut self.cues) == DefenseOutcome::Breached {
                    defense_over = Some(state.score);
                }
            }
        }

        if let Some(score) = defense_over {
            self.finish_defense(score);
        }
        if let Some(game) = start {
            self.start_game(game);
        }
    }

    fn start_game(&mut self, game: GameId) {
        let seed = self.seed_rng.random::<u64>();
        self.screen = match game {
            GameId::GapRunner => {
                Screen::GapRunner(ScrollerState::new(seed, self.best.best_for(game)))
            }
            GameId::LaneDefense => Screen::LaneDefense(DefenseState::new(seed)),
        };
        self.paused = false;
    }

    /// Back button: abandon the current run and return to the menu.
    fn leave_game(&mut self) {
        if let Screen::LaneDefense(state) = &self.screen {
            let score = state.score;
            self.finish_defense(score);
        } else {
            self.screen = Screen::Menu;
        }
        self.paused = false;
    }

    fn finish_defense(&mut self, score: u32) {
        if self.best.record(GameId::LaneDefense, score, now_ms()) {
            self.best.save();
        }
        self.screen = Screen::Menu;
        self.paused = false;
    }

    fn draw(&self, surface: &mut dyn Surface) {
        match &self.screen {
            Screen::Menu => self.menu.draw(surface),
            Screen::GapRunner(state) => scroller::draw::draw(state, self.frame, surface),
            Screen::LaneDefense(state) => defense::draw::draw(state, self.frame, surface),
        }

        if !matches!(self.screen, Screen::Menu) {
            self.chrome.draw(surface, self.paused);
            if self.paused {
                self.chrome.draw_pause_overlay(surface);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NullSurface;
    use crate::scroller::Phase;
    use glam::Vec2;

    fn arcade() -> Arcade {
        Arcade::new(42, BestRuns::new())
    }

    fn tick_with(arcade: &mut Arcade, mut input: InputState) -> InputState {
        let mut surface = NullSurface;
        arcade.tick(&mut input, &mut surface);
        input
    }

    fn click(pos: Vec2) -> InputState {
        let mut input = InputState::new();
        input.pointer_down(pos);
        input
    }

    fn key(code: &str) -> InputState {
        let mut input = InputState::new();
        input.key_down(code);
        input
    }

    // Centers of the two menu items
    const MENU_DEFENSE: Vec2 = Vec2::new(400.0, 175.0);
    const MENU_RUNNER: Vec2 = Vec2::new(400.0, 275.0);

    #[test]
    fn menu_click_starts_the_selected_game() {
        let mut arcade = arcade();
        let mut input = tick_with(&mut arcade, click(MENU_RUNNER));
        assert!(matches!(arcade.screen, Screen::GapRunner(_)));
        // One-shot click is gone after the tick
        assert!(input.unclaimed_click().is_none());

        let mut arcade = self::arcade();
        tick_with(&mut arcade, click(MENU_DEFENSE));
        assert!(matches!(arcade.screen, Screen::LaneDefense(_)));
    }

    #[test]
    fn back_button_returns_to_menu_and_unpauses() {
        let mut arcade = arcade();
        tick_with(&mut arcade, click(MENU_DEFENSE));
        tick_with(&mut arcade, key("KeyP"));
        assert!(arcade.paused);

        tick_with(&mut arcade, click(Vec2::new(20.0, 20.0)));
        assert!(matches!(arcade.screen, Screen::Menu));
        assert!(!arcade.paused);
    }

    #[test]
    fn pause_key_is_ignored_on_the_menu() {
        let mut arcade = arcade();
        tick_with(&mut arcade, key("KeyP"));
        assert!(!arcade.paused);
    }

    #[test]
    fn pause_blocks_game_updates() {
        let mut arcade = arcade();
        tick_with(&mut arcade, click(MENU_RUNNER));
        tick_with(&mut arcade, key("KeyP"));

        tick_with(&mut arcade, key("Space"));
        let Screen::GapRunner(state) = &arcade.screen else {
            panic!("expected scroller");
        };
        assert_eq!(state.phase, Phase::Start);

        tick_with(&mut arcade, key("KeyP"));
        tick_with(&mut arcade, key("Space"));
        let Screen::GapRunner(state) = &arcade.screen else {
            panic!("expected scroller");
        };
        assert_eq!(state.phase, Phase::GetReady);
    }

    #[test]
    fn chrome_click_skips_the_game_update_that_tick() {
        let mut arcade = arcade();
        tick_with(&mut arcade, click(MENU_DEFENSE));
        let timer_before = match &arcade.screen {
            Screen::LaneDefense(state) => state.pickup_timer,
            _ => panic!("expected defense"),
        };

        // Pause button click: chrome consumes, update skipped
        tick_with(&mut arcade, click(Vec2::new(CANVAS_WIDTH - 50.0, 25.0)));
        let Screen::LaneDefense(state) = &arcade.screen else {
            panic!("expected defense");
        };
        assert_eq!(state.pickup_timer, timer_before);
        assert!(arcade.paused);
    }

    #[test]
    fn cues_are_buffered_and_drained() {
        let mut arcade = arcade();
        tick_with(&mut arcade, click(MENU_RUNNER));
        tick_with(&mut arcade, key("Space"));
        tick_with(&mut arcade, key("Space"));

        let cues: Vec<_> = arcade.drain_cues().collect();
        assert!(!cues.is_empty());
        assert!(arcade.drain_cues().next().is_none());
    }

    #[test]
    fn defense_breach_falls_back_to_menu() {
        let mut arcade = arcade();
        tick_with(&mut arcade, click(MENU_DEFENSE));
        if let Screen::LaneDefense(state) = &mut arcade.screen {
            state.score = 30;
            state.hostiles.push(crate::defense::Hostile {
                id: 0,
                kind: crate::defense::HostileKind::Grunt,
                row: 0,
                x: crate::config::defense::BREACH_X,
                health: 150,
                speed: 0.3,
                eating: false,
            });
            state.eat_counters.insert(0, 0);
        }

        tick_with(&mut arcade, InputState::new());
        assert!(matches!(arcade.screen, Screen::Menu));
        assert_eq!(arcade.best.best_for(GameId::LaneDefense), 30);
    }
}
