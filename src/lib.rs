//! Mini Game Arcade - a browser canvas arcade
//!
//! Core modules:
//! - `arcade`: top-level screen state machine and per-tick orchestration
//! - `input`: pointer/keyboard router with single-claim click arbitration
//! - `scroller`: side-scrolling obstacle game (Gap Runner)
//! - `defense`: lane-defense game
//! - `render`: opaque 2D drawing surface trait + canvas backend
//! - `audio`: fire-and-forget sound cues over Web Audio
//! - `highscores`: persisted best run in LocalStorage

pub mod arcade;
pub mod audio;
pub mod chrome;
pub mod config;
pub mod defense;
pub mod geom;
pub mod highscores;
pub mod input;
pub mod menu;
pub mod particles;
pub mod render;
pub mod scroller;

pub use arcade::{Arcade, Screen};
pub use audio::Cue;
pub use input::InputState;
pub use render::Surface;
