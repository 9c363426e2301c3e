//! Audio-collaborator interface.
//!
//! Playback is fire-and-forget; the one exception is the hold-gated siren
//! loop, which hands back a handle so the app can cancel it when the key
//! comes up.

use crate::sim::{GameEvent, Side};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball returned by the left paddle
    PaddleHitLeft,
    /// Ball returned by the right paddle
    PaddleHitRight,
    /// A point was scored
    Score,
    /// The match ended
    MatchOver,
    /// A menu button was tapped
    MenuTap,
    /// Looping effect bound to holding the A key
    Siren,
}

/// Handle to a looping effect, for cancelling it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SfxHandle(pub u32);

/// What the mixer behind the platform boundary must provide.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
    /// Start a looping effect; the handle cancels it.
    fn play_looped(&mut self, effect: SoundEffect) -> SfxHandle;
    fn cancel(&mut self, handle: SfxHandle);
}

/// Sink that discards every trigger. Headless runs and tests.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}

    fn play_looped(&mut self, _effect: SoundEffect) -> SfxHandle {
        SfxHandle(0)
    }

    fn cancel(&mut self, _handle: SfxHandle) {}
}

/// Map a simulation event to its sound, if it has one.
pub fn effect_for(event: GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::PaddleHit(Side::Left) => Some(SoundEffect::PaddleHitLeft),
        GameEvent::PaddleHit(Side::Right) => Some(SoundEffect::PaddleHitRight),
        GameEvent::PointScored(_) => Some(SoundEffect::Score),
        GameEvent::MatchOver(_) => Some(SoundEffect::MatchOver),
        GameEvent::WallBounce => None,
    }
}
