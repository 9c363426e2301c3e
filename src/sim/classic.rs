//! The first revision's integer-velocity ball model.
//!
//! Unit velocities (`speed_x`, `speed_y` in {-1, +1}), sign-flip
//! reflections, and paddle contact tested by exact coordinate equality.
//! Kept behavior-compatible with that revision, including the tunneling
//! gap: a ball moving more than one pixel per tick can cross the equality
//! plane without ever satisfying it.

use serde::{Deserialize, Serialize};

use crate::consts::{BALL_SIZE, PADDLE_HEIGHT, PADDLE_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::input::Keys;

const WIDTH: i32 = SCREEN_WIDTH as i32;
const HEIGHT: i32 = SCREEN_HEIGHT as i32;
const BALL: i32 = BALL_SIZE as i32;
const PAD_W: i32 = PADDLE_WIDTH as i32;
const PAD_H: i32 = PADDLE_HEIGHT as i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicBall {
    pub x: i32,
    pub y: i32,
    pub speed_x: i32,
    pub speed_y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicPaddle {
    pub x: i32,
    pub y: i32,
    pub speed: i32,
    pub score: u8,
}

/// One CPU-vs-player match under the original integer model. No menus, no
/// score limit; it runs until dropped, like the first revision did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicGame {
    pub ball: ClassicBall,
    pub cpu: ClassicPaddle,
    pub player: ClassicPaddle,
}

impl Default for ClassicGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassicGame {
    pub fn new() -> Self {
        Self {
            ball: ClassicBall {
                x: WIDTH / 2 - 1 - BALL / 2,
                y: HEIGHT / 2 - 1 - BALL / 2,
                speed_x: 1,
                speed_y: 1,
            },
            cpu: ClassicPaddle {
                x: 0,
                y: HEIGHT / 2 - 1 - PAD_H / 2,
                speed: 1,
                score: 0,
            },
            player: ClassicPaddle {
                x: WIDTH - PAD_W,
                y: HEIGHT / 2 - 1 - PAD_H / 2,
                speed: 1,
                score: 0,
            },
        }
    }

    /// One tick: CPU paddle, player paddle (held UP/DOWN), border checks,
    /// paddle checks, integration — in the original's order.
    pub fn step(&mut self, held: Keys) {
        self.drive_cpu();
        self.drive_player(held);

        // Top and bottom borders
        if self.ball.y == 0 || self.ball.y == HEIGHT - 1 - BALL {
            self.ball.speed_y = -self.ball.speed_y;
        }

        // Left border: ball fully off-screen scores for the player
        if self.ball.x == -PAD_W {
            self.player.score = self.player.score.wrapping_add(1);
            self.ball = ClassicBall {
                x: WIDTH / 2 - 1 - BALL / 2,
                y: HEIGHT / 2 - 1 - BALL / 2,
                speed_x: 1,
                speed_y: 1,
            };
        }

        // Right border
        if self.ball.x == WIDTH - 1 {
            self.cpu.score = self.cpu.score.wrapping_add(1);
            self.ball = ClassicBall {
                x: WIDTH / 2 - 1 - BALL / 2,
                y: HEIGHT / 2 - 1 - BALL / 2,
                speed_x: -1,
                speed_y: 1,
            };
        }

        // Exact-equality paddle contact
        if self.ball.x == self.cpu.x + PAD_W
            && self.ball.y > self.cpu.y - BALL
            && self.ball.y < self.cpu.y + PAD_H + BALL
        {
            self.ball.speed_x = -self.ball.speed_x;
        }
        if self.ball.x == self.player.x - PAD_W
            && self.ball.y > self.player.y - BALL
            && self.ball.y < self.player.y + PAD_H + BALL
        {
            self.ball.speed_x = -self.ball.speed_x;
        }

        self.ball.x += self.ball.speed_x;
        self.ball.y += self.ball.speed_y;
    }

    fn drive_cpu(&mut self) {
        if self.ball.speed_x < 0 {
            // Ball approaching: chase its y
            if self.ball.y < self.cpu.y {
                if self.cpu.y > 0 {
                    self.cpu.y -= self.cpu.speed;
                }
            } else if self.cpu.y < HEIGHT - PAD_H {
                self.cpu.y += self.cpu.speed;
            }
        } else if self.cpu.y > HEIGHT / 2 - 1 - PAD_H / 2 {
            self.cpu.y -= self.cpu.speed;
        } else {
            self.cpu.y += self.cpu.speed;
        }
    }

    fn drive_player(&mut self, held: Keys) {
        if held.contains(Keys::UP) {
            if self.player.y > 0 {
                self.player.y -= self.player.speed;
            }
        } else if held.contains(Keys::DOWN) && self.player.y < HEIGHT - PAD_H {
            self.player.y += self.player.speed;
        }
    }
}
