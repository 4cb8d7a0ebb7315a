//! Round state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::spawn::place_target;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ball parked at center, waiting for launch input
    Serve,
    /// Ball in flight
    Playing,
}

/// Domain events surfaced by one simulation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball put in flight
    Served,
    /// Ball escaped past the paddle; `fails` is the running miss count
    Failed { fails: u32 },
    /// Third miss ended the round; `score` is the finished round's total
    RoundOver { score: u32 },
    /// Ball entered the target
    TargetHit { score: u32, size: f32 },
}

/// The ball - a square of half extent `BALL_HALF`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Park the ball at the arena center with no motion
    pub fn reset(&mut self) {
        self.pos = Vec2::ZERO;
        self.vel = Vec2::ZERO;
    }
}

/// The player's paddle. Only `y` moves; the face plane and extents are fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub y: f32,
}

impl Paddle {
    /// Track the pointer, clamped to the paddle's travel range
    pub fn track(&mut self, pointer_y: f32) {
        self.y = pointer_y.clamp(-PADDLE_MAX_Y, PADDLE_MAX_Y);
    }
}

/// The goal zone on the left wall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub y: f32,
    pub size: f32,
}

impl Target {
    pub fn top(&self) -> f32 {
        self.y + self.size / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y - self.size / 2.0
    }
}

/// Complete game state, exclusively owned by the frame loop
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed, kept for reporting
    pub seed: u64,
    /// Explicit RNG for serves and target placement
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    /// Misses this round, `0..ROUND_FAILS` between frames
    pub fails: u32,
    pub ball: Ball,
    pub paddle: Paddle,
    pub target: Target,
}

impl GameState {
    /// Create a fresh state with the given seed. The first target is
    /// placed immediately so there is something to aim at before the
    /// first serve.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let target_y = place_target(&mut rng, TARGET_START_SIZE);
        Self {
            seed,
            rng,
            phase: GamePhase::Serve,
            score: 0,
            fails: 0,
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
            },
            paddle: Paddle { y: 0.0 },
            target: Target {
                y: target_y,
                size: TARGET_START_SIZE,
            },
        }
    }

    /// Whether a launch input would be honored this frame
    pub fn launch_ready(&self) -> bool {
        self.phase == GamePhase::Serve
    }

    /// Put the idle ball in flight with a fresh random serve angle
    pub fn serve(&mut self) -> GameEvent {
        let spread: f32 = self.rng.random_range(-0.5..=0.5);
        self.ball.vel = Vec2::new(SERVE_SPEED_X, SERVE_SPREAD * spread);
        self.phase = GamePhase::Playing;
        GameEvent::Served
    }

    /// Ball escaped past the paddle. The third miss closes the round:
    /// score and miss count reset together, and the target respawns at
    /// full size.
    pub fn register_fail(&mut self) -> GameEvent {
        self.fails += 1;
        self.ball.reset();
        self.phase = GamePhase::Serve;

        if self.fails == ROUND_FAILS {
            let score = self.score;
            self.score = 0;
            self.fails = 0;
            self.target.size = TARGET_START_SIZE;
            self.target.y = place_target(&mut self.rng, self.target.size);
            GameEvent::RoundOver { score }
        } else {
            GameEvent::Failed { fails: self.fails }
        }
    }

    /// Ball entered the target: score it, shrink the target, and respawn
    /// it somewhere new.
    pub fn register_hit(&mut self) -> GameEvent {
        self.score += 1;
        self.ball.reset();
        self.phase = GamePhase::Serve;
        self.target.size /= TARGET_SHRINK;
        self.target.y = place_target(&mut self.rng, self.target.size);
        GameEvent::TargetHit {
            score: self.score,
            size: self.target.size,
        }
    }
}
