//! Match state and entity types for the angle-model simulation.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{cos_deg, sin_deg};

/// Which side of the field a paddle defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Who drives the left paddle. The right paddle is always human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Left paddle is the CPU
    OnePlayer,
    /// Both paddles are human
    TwoPlayer,
}

/// The ball. `pos` is the sprite's top-left corner in screen coordinates
/// (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Scalar speed, pixels per tick
    pub speed: f32,
    /// Heading in degrees: 0 = rightward, clockwise in screen space.
    /// Deliberately unnormalized; the reflection formulas overwrite it
    /// wholesale and trig is periodic, so values outside [0, 360) are fine.
    pub angle: f32,
}

impl Ball {
    /// Ball re-centered on the playfield with a fresh heading.
    pub(crate) fn centered(angle: f32) -> Self {
        Self {
            pos: Vec2::new(
                SCREEN_WIDTH / 2.0 - 1.0 - BALL_SIZE / 2.0,
                SCREEN_HEIGHT / 2.0 - 1.0 - BALL_SIZE / 2.0,
            ),
            speed: BALL_START_SPEED,
            angle,
        }
    }

    /// Horizontal velocity component. Its sign tells which paddle the ball
    /// is approaching.
    #[inline]
    pub fn vx(&self) -> f32 {
        self.speed * cos_deg(self.angle)
    }

    /// Vertical velocity component.
    #[inline]
    pub fn vy(&self) -> f32 {
        self.speed * sin_deg(self.angle)
    }
}

/// A paddle. `x` is fixed per side; only `y` moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub score: u8,
}

impl Paddle {
    fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => 0.0,
            Side::Right => SCREEN_WIDTH - PADDLE_WIDTH,
        };
        Self {
            x,
            y: SCREEN_HEIGHT / 2.0 - 1.0 - PADDLE_HEIGHT / 2.0,
            score: 0,
        }
    }

    /// Step `dir * PADDLE_SPEED` pixels, clamped to the playfield.
    pub(crate) fn step(&mut self, dir: f32) {
        self.y = (self.y + dir * PADDLE_SPEED).clamp(0.0, SCREEN_HEIGHT - PADDLE_HEIGHT);
    }
}

/// Events surfaced to the audio/render collaborators, one batch per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom screen edge
    WallBounce,
    /// Ball returned by the given paddle
    PaddleHit(Side),
    /// The given side scored a point
    PointScored(Side),
    /// The given side reached the score limit
    MatchOver(Side),
}

/// Complete match state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub mode: Mode,
    /// Match seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Winner once a score reaches `SCORE_LIMIT`; the ball is hidden and
    /// frozen from then on.
    pub ended: Option<Side>,
}

impl GameState {
    /// Fresh match. The first serve heads toward the right paddle, like
    /// every revision of the game.
    pub fn new(mode: Mode, seed: u64) -> Self {
        let mut state = Self {
            mode,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ball: Ball::centered(0.0),
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            time_ticks: 0,
            ended: None,
        };
        state.respawn_ball(Side::Left);
        log::info!("new {:?} match (seed {seed})", mode);
        state
    }

    /// Restart in place: scores to zero, entities back to their initial
    /// positions, fresh serve.
    pub fn reset(&mut self) {
        self.left = Paddle::new(Side::Left);
        self.right = Paddle::new(Side::Right);
        self.respawn_ball(Side::Left);
        self.ended = None;
        self.time_ticks = 0;
        log::info!("match restarted");
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub(crate) fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Re-center the ball after it left through `exited`, serving toward the
    /// opposite (scoring) side: integer-degree angle in [270, 450) after a
    /// left exit, [90, 270) after a right exit.
    pub(crate) fn respawn_ball(&mut self, exited: Side) {
        let angle = match exited {
            Side::Left => self.rng.random_range(0..180) as f32 + 270.0,
            Side::Right => self.rng.random_range(0..180) as f32 + 90.0,
        };
        self.ball = Ball::centered(angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn initial_layout() {
        let state = GameState::new(Mode::OnePlayer, 7);
        assert_eq!(state.left.x, 0.0);
        assert_eq!(state.right.x, SCREEN_WIDTH - PADDLE_WIDTH);
        assert_eq!(state.left.y, state.right.y);
        assert_eq!(state.ball.pos.x, SCREEN_WIDTH / 2.0 - 1.0 - BALL_SIZE / 2.0);
        assert_eq!(state.ball.pos.y, SCREEN_HEIGHT / 2.0 - 1.0 - BALL_SIZE / 2.0);
        assert_eq!(state.ball.speed, BALL_START_SPEED);
        assert!(state.ended.is_none());
    }

    #[test]
    fn first_serve_heads_right() {
        for seed in 0..50 {
            let state = GameState::new(Mode::OnePlayer, seed);
            assert!((270.0..450.0).contains(&state.ball.angle));
            assert!(state.ball.vx() > 0.0, "serve angle {}", state.ball.angle);
        }
    }

    #[test]
    fn respawn_serves_toward_scorer() {
        let mut state = GameState::new(Mode::OnePlayer, 3);
        state.respawn_ball(Side::Right);
        assert!((90.0..270.0).contains(&state.ball.angle));
        assert!(state.ball.vx() < 0.0);
        state.respawn_ball(Side::Left);
        assert!((270.0..450.0).contains(&state.ball.angle));
        assert!(state.ball.vx() > 0.0);
    }

    #[test]
    fn reset_restores_initial_layout() {
        let mut state = GameState::new(Mode::TwoPlayer, 11);
        let initial = state.clone();

        state.left.y = 0.0;
        state.right.y = SCREEN_HEIGHT - PADDLE_HEIGHT;
        state.left.score = 4;
        state.right.score = SCORE_LIMIT;
        state.ended = Some(Side::Right);
        state.time_ticks = 9999;
        state.reset();

        assert_eq!(state.left.y, initial.left.y);
        assert_eq!(state.right.y, initial.right.y);
        assert_eq!(state.left.score, 0);
        assert_eq!(state.right.score, 0);
        assert_eq!(state.ball.pos, initial.ball.pos);
        assert_eq!(state.ball.speed, BALL_START_SPEED);
        assert!(state.ended.is_none());
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn paddle_step_clamps() {
        let mut paddle = Paddle::new(Side::Left);
        for _ in 0..1000 {
            paddle.step(-1.0);
        }
        assert_eq!(paddle.y, 0.0);
        for _ in 0..1000 {
            paddle.step(1.0);
        }
        assert_eq!(paddle.y, SCREEN_HEIGHT - PADDLE_HEIGHT);
    }

    proptest! {
        #[test]
        fn serve_angle_always_in_documented_range(seed in any::<u64>(), from_right in any::<bool>()) {
            let mut state = GameState::new(Mode::OnePlayer, seed);
            let exited = if from_right { Side::Right } else { Side::Left };
            state.respawn_ball(exited);
            let range = match exited {
                Side::Left => 270.0..450.0,
                Side::Right => 90.0..270.0,
            };
            prop_assert!(range.contains(&state.ball.angle));
        }
    }
}
