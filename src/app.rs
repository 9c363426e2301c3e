//! Per-tick orchestration: menus first, then the simulation, then a
//! consistent post-tick snapshot for the display engines.

use crate::audio::{self, AudioSink, SfxHandle, SoundEffect};
use crate::input::{Keys, RawInput};
use crate::menu::{MenuCommand, MenuMachine, Screen};
use crate::render::{FrameOutput, game_sprites};
use crate::sim::{self, GameState, Mode, TickInput, VerticalDir};

/// The whole game: menu machine, optional active match, audio routing.
pub struct Game<A: AudioSink> {
    menu: MenuMachine,
    match_state: Option<GameState>,
    audio: A,
    /// Handle of the running siren loop while A is held
    siren: Option<SfxHandle>,
    next_seed: u64,
}

impl<A: AudioSink> Game<A> {
    pub fn new(audio: A, seed: u64) -> Self {
        log::info!("duo-pong core up (seed {seed})");
        Self {
            menu: MenuMachine::new(),
            match_state: None,
            audio,
            siren: None,
            next_seed: seed,
        }
    }

    pub fn screen(&self) -> Screen {
        self.menu.screen()
    }

    pub fn state(&self) -> Option<&GameState> {
        self.match_state.as_ref()
    }

    /// One vertical-blank tick. Menu transitions settle before the
    /// simulation runs, and the returned frame is the post-tick snapshot.
    pub fn frame(&mut self, raw: &RawInput) -> FrameOutput {
        let commands = self.menu.update(raw);
        if !commands.is_empty() {
            self.audio.play(SoundEffect::MenuTap);
        }

        let mut background = None;
        for command in commands {
            match command {
                MenuCommand::ShowBackground(art) => background = Some(art),
                MenuCommand::StartGame(mode) => {
                    let seed = self.bump_seed();
                    self.match_state = Some(GameState::new(mode, seed));
                }
                MenuCommand::RestartGame => {
                    if let Some(state) = &mut self.match_state {
                        state.reset();
                    }
                }
                MenuCommand::LeaveGame => {
                    self.match_state = None;
                }
            }
        }

        self.update_siren(raw);

        let mut placements = Vec::new();
        if self.menu.screen().in_game() {
            if let Some(state) = &mut self.match_state {
                let input = tick_input(state.mode, raw.held);
                for event in sim::tick(state, &input) {
                    if let Some(effect) = audio::effect_for(event) {
                        self.audio.play(effect);
                    }
                }
                placements = game_sprites(state);
            }
        }

        FrameOutput {
            placements,
            background,
        }
    }

    /// Pressing A starts the looping siren; releasing A cancels it.
    fn update_siren(&mut self, raw: &RawInput) {
        if raw.pressed.contains(Keys::A) && self.siren.is_none() {
            self.siren = Some(self.audio.play_looped(SoundEffect::Siren));
        }
        if raw.released.contains(Keys::A)
            && let Some(handle) = self.siren.take()
        {
            self.audio.cancel(handle);
        }
    }

    fn bump_seed(&mut self) -> u64 {
        let seed = self.next_seed;
        self.next_seed = self.next_seed.wrapping_add(1);
        seed
    }
}

/// Map held keys onto paddle directions for the active mode. One-player
/// gives the human UP/DOWN; two-player splits the pad (UP/DOWN left, X/B
/// right) so both hands share the console.
fn tick_input(mode: Mode, held: Keys) -> TickInput {
    let dir = |up: Keys, down: Keys| {
        if held.contains(up) {
            Some(VerticalDir::Up)
        } else if held.contains(down) {
            Some(VerticalDir::Down)
        } else {
            None
        }
    };
    match mode {
        Mode::OnePlayer => TickInput {
            left: None,
            right: dir(Keys::UP, Keys::DOWN),
        },
        Mode::TwoPlayer => TickInput {
            left: dir(Keys::UP, Keys::DOWN),
            right: dir(Keys::X, Keys::B),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TouchPoint;
    use crate::render::SpriteId;

    /// Sink that records every trigger for assertions.
    #[derive(Debug, Default)]
    struct RecordingAudio {
        played: Vec<SoundEffect>,
        loops_started: u32,
        cancelled: Vec<SfxHandle>,
    }

    impl AudioSink for RecordingAudio {
        fn play(&mut self, effect: SoundEffect) {
            self.played.push(effect);
        }

        fn play_looped(&mut self, _effect: SoundEffect) -> SfxHandle {
            self.loops_started += 1;
            SfxHandle(self.loops_started)
        }

        fn cancel(&mut self, handle: SfxHandle) {
            self.cancelled.push(handle);
        }
    }

    fn touching(x: i32, y: i32) -> RawInput {
        RawInput {
            pressed: Keys::TOUCH,
            held: Keys::TOUCH,
            released: Keys::empty(),
            touch: Some(TouchPoint { x, y }),
        }
    }

    fn tap<A: AudioSink>(game: &mut Game<A>, x: i32, y: i32) -> FrameOutput {
        game.frame(&touching(x, y));
        game.frame(&touching(x, y));
        let frame = game.frame(&RawInput::default());
        game.frame(&RawInput::default());
        frame
    }

    fn into_one_player(game: &mut Game<RecordingAudio>) {
        tap(game, 100, 50); // English
        tap(game, 100, 60); // one player
        assert_eq!(game.screen(), Screen::OnePlayerGame);
        assert!(game.state().is_some());
    }

    #[test]
    fn menus_emit_no_sprites() {
        let mut game = Game::new(RecordingAudio::default(), 1);
        let frame = game.frame(&RawInput::default());
        assert!(frame.placements.is_empty());
        assert!(frame.background.is_none());
    }

    #[test]
    fn transition_frames_carry_background_and_tap_sound() {
        let mut game = Game::new(RecordingAudio::default(), 1);
        let frame = tap(&mut game, 100, 50);
        assert!(frame.background.is_some());
        assert!(game.audio.played.contains(&SoundEffect::MenuTap));
    }

    #[test]
    fn gameplay_frames_place_all_five_sprites() {
        let mut game = Game::new(RecordingAudio::default(), 1);
        into_one_player(&mut game);
        let frame = game.frame(&RawInput::default());
        assert_eq!(frame.placements.len(), 5);
        assert!(
            frame
                .placements
                .iter()
                .any(|s| s.id == SpriteId::Ball && s.visible)
        );
    }

    #[test]
    fn held_keys_move_the_right_paddle() {
        let mut game = Game::new(RecordingAudio::default(), 1);
        into_one_player(&mut game);
        let y0 = game.state().map(|s| s.right.y);
        game.frame(&RawInput {
            held: Keys::UP,
            ..Default::default()
        });
        let y1 = game.state().map(|s| s.right.y);
        assert!(y1 < y0);
    }

    #[test]
    fn restart_tap_zeroes_the_scores() {
        let mut game = Game::new(RecordingAudio::default(), 1);
        into_one_player(&mut game);
        if let Some(state) = game.match_state.as_mut() {
            state.left.score = 4;
            state.right.score = 6;
        }
        tap(&mut game, 20, 170);
        let state = game.state().unwrap();
        assert_eq!(state.left.score, 0);
        assert_eq!(state.right.score, 0);
        assert!(state.ended.is_none());
    }

    #[test]
    fn back_tap_drops_the_match() {
        let mut game = Game::new(RecordingAudio::default(), 1);
        into_one_player(&mut game);
        let frame = tap(&mut game, 150, 170);
        assert_eq!(game.screen(), Screen::MainMenu);
        assert!(game.state().is_none());
        assert!(frame.placements.is_empty());
    }

    #[test]
    fn siren_loop_follows_the_a_key() {
        let mut game = Game::new(RecordingAudio::default(), 1);
        game.frame(&RawInput {
            pressed: Keys::A,
            held: Keys::A,
            ..Default::default()
        });
        assert_eq!(game.audio.loops_started, 1);
        assert!(game.audio.cancelled.is_empty());

        // Holding longer starts no second loop.
        game.frame(&RawInput {
            held: Keys::A,
            ..Default::default()
        });
        assert_eq!(game.audio.loops_started, 1);

        game.frame(&RawInput {
            released: Keys::A,
            ..Default::default()
        });
        assert_eq!(game.audio.cancelled, vec![SfxHandle(1)]);
    }

    #[test]
    fn successive_matches_use_different_seeds() {
        let mut game = Game::new(RecordingAudio::default(), 1);
        into_one_player(&mut game);
        let first = game.state().map(|s| s.seed);
        tap(&mut game, 150, 170); // back
        tap(&mut game, 100, 60); // one player again
        let second = game.state().map(|s| s.seed);
        assert_ne!(first, second);
    }
}
