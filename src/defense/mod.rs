//! Lane Defense: grid-based wave-defense game
//!
//! Place units on a 5x9 grid to stop hostiles marching in from the
//! right. Same split as the side-scroller: [`state`] owns the data,
//! [`tick`] owns the mutation, [`draw`] only reads.

pub mod draw;
pub mod state;
pub mod tick;
pub mod waves;

pub use state::{DefenseState, Hostile, HostileKind, Pickup, Projectile, Unit, UnitKind};
pub use tick::DefenseOutcome;
