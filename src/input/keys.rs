//! Raw console key masks.

use bitflags::bitflags;

bitflags! {
    /// One bit per physical key, plus a pseudo-key for panel contact.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Keys: u16 {
        const UP    = 1 << 0;
        const DOWN  = 1 << 1;
        const A     = 1 << 2;
        const B     = 1 << 3;
        const X     = 1 << 4;
        const START = 1 << 5;
        /// Stylus in contact with the touch panel.
        const TOUCH = 1 << 6;
    }
}
