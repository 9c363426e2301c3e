//! Fixed timestep tick for the angle-model game.
//!
//! Order per tick is exactly the original loop's: paddles first, then one
//! reflection/exit check (strict `else if` chain, first match wins), then
//! position integration.

use crate::consts::*;
use crate::{cos_deg, sin_deg};

use super::state::{GameEvent, GameState, Mode, Side};

/// Held paddle direction for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalDir {
    Up,
    Down,
}

impl VerticalDir {
    fn sign(self) -> f32 {
        match self {
            VerticalDir::Up => -1.0,
            VerticalDir::Down => 1.0,
        }
    }
}

/// Held inputs for a single tick. `left` is ignored in one-player mode
/// (the CPU owns that paddle).
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: Option<VerticalDir>,
    pub right: Option<VerticalDir>,
}

/// Advance the match by one tick, returning the events that fired.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    match state.mode {
        Mode::OnePlayer => {
            drive_cpu(state);
            drive_human(state, Side::Right, input.right);
        }
        Mode::TwoPlayer => {
            drive_human(state, Side::Left, input.left);
            drive_human(state, Side::Right, input.right);
        }
    }

    // Terminal sub-state: ball hidden and frozen, paddles still respond.
    if state.ended.is_some() {
        return events;
    }

    let ball = state.ball;
    let next_y = ball.pos.y + ball.vy();
    if next_y >= SCREEN_HEIGHT - 1.0 - BALL_SIZE {
        state.ball.angle = 180.0 - (ball.angle - 180.0);
        events.push(GameEvent::WallBounce);
    } else if next_y <= 0.0 {
        state.ball.angle = -ball.angle;
        events.push(GameEvent::WallBounce);
    } else if ball.pos.x <= state.left.x + PADDLE_WIDTH && in_span(ball.pos.y, state.left.y) {
        return_ball(state, Side::Left, &mut events);
    } else if ball.pos.x >= state.right.x - BALL_SIZE && in_span(ball.pos.y, state.right.y) {
        return_ball(state, Side::Right, &mut events);
    } else if ball.pos.x <= 0.0 {
        score_point(state, Side::Right, &mut events);
    } else if ball.pos.x >= SCREEN_WIDTH - 1.0 {
        score_point(state, Side::Left, &mut events);
    }

    if state.ended.is_none() {
        let ball = &mut state.ball;
        ball.pos.x += ball.speed * cos_deg(ball.angle);
        ball.pos.y += ball.speed * sin_deg(ball.angle);
    }

    events
}

/// Ball y within the paddle span, widened by one ball height on each end.
fn in_span(ball_y: f32, paddle_y: f32) -> bool {
    ball_y > paddle_y - BALL_SIZE && ball_y < paddle_y + PADDLE_HEIGHT + BALL_SIZE
}

/// Remap the contact offset along the paddle to a return heading and bump
/// the speed. Left returns sweep [300, 420] (through due-right at center),
/// right returns sweep [240, 120] (through due-left at center).
fn return_ball(state: &mut GameState, side: Side, events: &mut Vec<GameEvent>) {
    let paddle_y = state.paddle(side).y;
    let hit_y = (state.ball.pos.y - paddle_y).clamp(0.0, PADDLE_HEIGHT);
    state.ball.angle = match side {
        Side::Left => 300.0 + 120.0 * hit_y / PADDLE_HEIGHT,
        Side::Right => 240.0 - 120.0 * hit_y / PADDLE_HEIGHT,
    };
    state.ball.speed += SPEED_INCREMENT;
    events.push(GameEvent::PaddleHit(side));
}

fn score_point(state: &mut GameState, scorer: Side, events: &mut Vec<GameEvent>) {
    let paddle = state.paddle_mut(scorer);
    paddle.score += 1;
    let score = paddle.score;
    events.push(GameEvent::PointScored(scorer));
    log::info!("point for {:?} ({score})", scorer);

    state.respawn_ball(scorer.opposite());
    if score >= SCORE_LIMIT {
        state.ended = Some(scorer);
        events.push(GameEvent::MatchOver(scorer));
        log::info!("{:?} wins the match", scorer);
    }
}

/// CPU heuristic for the left paddle: chase the ball's y while it
/// approaches, drift back toward screen center while it recedes.
fn drive_cpu(state: &mut GameState) {
    if state.ball.vx() < 0.0 {
        if state.ball.pos.y < state.left.y {
            state.left.step(-1.0);
        } else {
            state.left.step(1.0);
        }
    } else {
        let center = SCREEN_HEIGHT / 2.0 - 1.0 - PADDLE_HEIGHT / 2.0;
        if state.left.y > center {
            state.left.step(-1.0);
        } else {
            state.left.step(1.0);
        }
    }
}

fn drive_human(state: &mut GameState, side: Side, held: Option<VerticalDir>) {
    if let Some(dir) = held {
        state.paddle_mut(side).step(dir.sign());
    }
}
