//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per vertical blank)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod classic;
pub mod state;
pub mod tick;

pub use classic::ClassicGame;
pub use state::{Ball, GameEvent, GameState, Mode, Paddle, Side};
pub use tick::{TickInput, VerticalDir, tick};
