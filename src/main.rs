//! Duo Pong demo entry point.
//!
//! Drives the core headlessly: taps through the language and main menus,
//! then lets a simple tracking bot play a one-player match to the score
//! limit, and finishes with a stretch of the first revision's integer
//! model. The scripted console stands in for the real hardware layer and
//! only ever sees the same descriptors that layer would.

use std::collections::VecDeque;

use duo_pong::Game;
use duo_pong::audio::NullAudio;
use duo_pong::input::{Keys, RawInput, TouchPoint};
use duo_pong::platform::{Console, ConsoleError};
use duo_pong::render::{FrameOutput, SpriteId};
use duo_pong::sim::ClassicGame;

/// Derives the pressed/held/released masks from successive key states, the
/// way the console's key scanning does.
#[derive(Debug, Default)]
struct KeyScanner {
    prev: Keys,
}

impl KeyScanner {
    fn snapshot(&mut self, now: Keys, touch: Option<TouchPoint>) -> RawInput {
        let raw = RawInput {
            pressed: now & !self.prev,
            held: now,
            released: self.prev & !now,
            touch,
        };
        self.prev = now;
        raw
    }
}

/// Headless console: a queue of scripted menu taps, then a bot that tracks
/// the ball using nothing but the sprite placements it was handed.
struct HeadlessConsole {
    scanner: KeyScanner,
    taps: VecDeque<TouchPoint>,
    contact_left: u8,
    gap_left: u8,
    ball_y: i32,
    paddle_y: i32,
    frames_presented: u64,
}

impl HeadlessConsole {
    /// The real bootstrap allocates sprite graphics and sound banks here;
    /// headless, there is nothing that can fail.
    fn new(taps: impl IntoIterator<Item = TouchPoint>) -> Result<Self, ConsoleError> {
        Ok(Self {
            scanner: KeyScanner::default(),
            taps: taps.into_iter().collect(),
            contact_left: 0,
            gap_left: 0,
            ball_y: 0,
            paddle_y: 0,
            frames_presented: 0,
        })
    }
}

impl Console for HeadlessConsole {
    fn poll_input(&mut self) -> RawInput {
        // Work through the scripted taps first: a few ticks of contact,
        // a short gap, then the next tap.
        if self.contact_left > 0 {
            self.contact_left -= 1;
            let point = self.taps.front().copied();
            if self.contact_left == 0 {
                self.taps.pop_front();
                self.gap_left = 2;
            }
            return self.scanner.snapshot(Keys::TOUCH, point);
        }
        if self.gap_left > 0 {
            self.gap_left -= 1;
            return self.scanner.snapshot(Keys::empty(), None);
        }
        if !self.taps.is_empty() {
            self.contact_left = 3;
            return self.scanner.snapshot(Keys::empty(), None);
        }

        // Script exhausted: track the ball with the right paddle.
        let keys = if self.ball_y < self.paddle_y {
            Keys::UP
        } else {
            Keys::DOWN
        };
        self.scanner.snapshot(keys, None)
    }

    fn wait_vblank(&mut self) {
        // Nothing to sync with headlessly.
    }

    fn present(&mut self, frame: &FrameOutput) {
        self.frames_presented += 1;
        for sprite in &frame.placements {
            match sprite.id {
                SpriteId::Ball => self.ball_y = sprite.y,
                SpriteId::PaddleRight => self.paddle_y = sprite.y,
                _ => {}
            }
        }
        if let Some(art) = frame.background {
            log::info!("background -> {art:?}");
        }
    }
}

fn main() -> Result<(), ConsoleError> {
    env_logger::init();

    let mut console = HeadlessConsole::new([
        TouchPoint { x: 100, y: 130 }, // Basque
        TouchPoint { x: 100, y: 60 },  // one player
    ])?;
    let mut game = Game::new(NullAudio, 0xD5_C0DE);

    // A generous cap in case the bot and the CPU trade points all day.
    for _ in 0..200_000u32 {
        console.wait_vblank();
        let raw = console.poll_input();
        let frame = game.frame(&raw);
        console.present(&frame);
        if game.state().is_some_and(|s| s.ended.is_some()) {
            break;
        }
    }

    log::debug!("{} frames presented", console.frames_presented);
    match game.state() {
        Some(state) => log::info!(
            "match over after {} ticks: CPU {} - {} player (winner {:?})",
            state.time_ticks,
            state.left.score,
            state.right.score,
            state.ended,
        ),
        None => log::warn!("demo never reached a match"),
    }

    // A taste of the first revision's integer model.
    let mut classic = ClassicGame::new();
    for _ in 0..1800 {
        let keys = if classic.ball.y < classic.player.y {
            Keys::UP
        } else {
            Keys::DOWN
        };
        classic.step(keys);
    }
    log::info!(
        "classic demo: CPU {} - {} player",
        classic.cpu.score,
        classic.player.score,
    );

    Ok(())
}
