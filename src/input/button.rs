//! Edge-triggered button phase tracking.
//!
//! One `ButtonEdge` per logical button. A button occupies exactly one phase
//! per tick; a full tap walks Pressed -> Held... -> Released -> Idle, so
//! every tap yields exactly one `Released` no matter how long the contact
//! lasts. Menus act on `Released`, never on `Pressed`, so nothing fires
//! before a deliberate tap completes.

use serde::{Deserialize, Serialize};

/// Phase of a logical button within its tap cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ButtonPhase {
    #[default]
    Idle,
    /// First tick of contact
    Pressed,
    /// Every subsequent tick while contact continues
    Held,
    /// Exactly one tick, immediately after contact ends
    Released,
}

/// Per-button finite state machine over [`ButtonPhase`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ButtonEdge {
    phase: ButtonPhase,
}

impl ButtonEdge {
    pub fn phase(&self) -> ButtonPhase {
        self.phase
    }

    /// Advance one tick. `active` is the raw contact condition for this
    /// button (key down, or stylus inside its region on the right screen).
    pub fn advance(&mut self, active: bool) -> ButtonPhase {
        self.phase = match (self.phase, active) {
            (ButtonPhase::Idle, true) => ButtonPhase::Pressed,
            (ButtonPhase::Pressed | ButtonPhase::Held, true) => ButtonPhase::Held,
            (ButtonPhase::Pressed | ButtonPhase::Held, false) => ButtonPhase::Released,
            (ButtonPhase::Released, _) | (ButtonPhase::Idle, false) => ButtonPhase::Idle,
        };
        self.phase
    }

    /// Drop any in-flight tap (used when the screen context changes).
    pub fn reset(&mut self) {
        self.phase = ButtonPhase::Idle;
    }
}
