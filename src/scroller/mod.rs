//! Gap Runner: side-scrolling obstacle game
//!
//! Tap to jump, thread the gaps. Split into pure state ([`state`]),
//! per-tick update ([`tick`]) and drawing ([`draw`]); the tick owns all
//! mutation, drawing only reads.

pub mod draw;
pub mod state;
pub mod tick;

pub use state::{Avatar, ObstaclePair, Phase, ScrollerState};
