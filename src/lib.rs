//! Solo Tennis - a single-player wall-tennis arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, round state)
//! - `renderer`: WebGPU rectangle renderer
//! - `settings`: Window/run configuration

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Ball half extent (the ball is a square)
    pub const BALL_HALF: f32 = 0.05;

    /// Paddle face plane on the right side of the arena
    pub const PADDLE_X: f32 = 0.9;
    pub const PADDLE_HALF_WIDTH: f32 = 0.05;
    pub const PADDLE_HALF_HEIGHT: f32 = 0.4;
    /// Paddle center travel limit
    pub const PADDLE_MAX_Y: f32 = 0.6;
    /// Height of one deflection band on the paddle face
    pub const PADDLE_BAND: f32 = 0.2;

    /// Target plane on the left side of the arena
    pub const TARGET_X: f32 = -0.9;
    pub const TARGET_HALF_WIDTH: f32 = 0.05;
    /// Fresh-round target height
    pub const TARGET_START_SIZE: f32 = 1.0;
    /// Per-hit target shrink divisor
    pub const TARGET_SHRINK: f32 = 1.25;

    /// Serve speed magnitudes; paddle returns reuse these, never the
    /// ball's current velocity
    pub const SERVE_SPEED_X: f32 = 0.5;
    pub const SERVE_SPEED_Y: f32 = 0.5;
    /// Serve angle spread: vertical speed is `SERVE_SPREAD * uniform(-0.5, 0.5)`
    pub const SERVE_SPREAD: f32 = 4.0;

    /// Misses that end a round
    pub const ROUND_FAILS: u32 = 3;
}

/// Convert a cursor position in window pixels to normalized device
/// coordinates. Pixel y grows downward; normalized y grows upward.
#[inline]
pub fn pixel_to_ndc(px: f32, py: f32, width: u32, height: u32) -> Vec2 {
    Vec2::new(
        (px + 0.5) / width as f32 * 2.0 - 1.0,
        (py + 0.5) / height as f32 * -2.0 + 1.0,
    )
}
