//! Console-collaborator seam.
//!
//! The hardware layer (key scanning, vblank sync, sprite/background
//! engines) sits behind this trait; the core never touches it directly.
//! Startup is the only fallible moment — once resources are acquired, the
//! loop runs until the host process terminates.

use thiserror::Error;

use crate::input::RawInput;
use crate::render::FrameOutput;

/// Fatal startup failures in the platform layer. The core has no
/// recoverable errors of its own; anything failing here aborts bootstrap.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("sprite graphics allocation failed: {0}")]
    SpriteAlloc(String),
    #[error("background layer init failed: {0}")]
    Background(String),
    #[error("audio engine unavailable: {0}")]
    Audio(String),
}

/// One tick's worth of console services.
pub trait Console {
    /// Latest key masks and stylus position.
    fn poll_input(&mut self) -> RawInput;

    /// Block until the next vertical blank (one ~60 Hz tick).
    fn wait_vblank(&mut self);

    /// Push the post-tick sprite/background snapshot to the display
    /// engines. Always called after physics and menu logic settle, so the
    /// engines only ever see consistent frames.
    fn present(&mut self, frame: &FrameOutput);
}
