//! Axis-aligned collision rules for the arena walls, paddle, and target
//!
//! Pure geometry over current positions. Outcomes come back as values;
//! round bookkeeping happens in `state`, never here.

use glam::Vec2;

use super::state::{Ball, Target};
use crate::consts::*;

/// What the arena walls did to the ball this step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallOutcome {
    /// Ball still live (possibly reflected)
    InPlay,
    /// Ball crossed the right edge behind the paddle; it is out of play
    Retired,
}

/// Reflect the ball off the left, bottom, and top walls and detect the
/// right-edge escape. Reflection forces the velocity component to point
/// back into the arena, so applying it again is a no-op.
pub fn resolve_walls(ball: &mut Ball) -> WallOutcome {
    if ball.pos.x < -1.0 {
        ball.vel.x = ball.vel.x.abs();
    }
    if ball.pos.x > 1.0 {
        return WallOutcome::Retired;
    }
    if ball.pos.y < -1.0 {
        ball.vel.y = ball.vel.y.abs();
    }
    if ball.pos.y > 1.0 {
        ball.vel.y = -ball.vel.y.abs();
    }
    WallOutcome::InPlay
}

/// True once the ball's right edge has reached the paddle's face plane
pub fn paddle_in_reach(ball_x: f32) -> bool {
    ball_x + BALL_HALF >= PADDLE_X - PADDLE_HALF_WIDTH
}

/// Outgoing velocity for a paddle contact, by vertical band.
///
/// Five mutually exclusive bands over the paddle face: outer bands return
/// steep, inner bands shallow, dead center flat. Every return heads back
/// toward the left wall at the serve speed regardless of how fast the
/// ball arrived. The flat band requires exact float equality and is all
/// but unreachable in live play; it is kept as the center of the table
/// rather than widened to an epsilon. Returns `None` when the ball is
/// outside the paddle's vertical reach, letting it pass undeflected.
pub fn paddle_band_velocity(ball_y: f32, paddle_y: f32) -> Option<Vec2> {
    let dy = ball_y - paddle_y;
    let steep = 2.0 * SERVE_SPEED_Y;

    if dy >= -2.0 * PADDLE_BAND && dy < -PADDLE_BAND {
        Some(Vec2::new(-SERVE_SPEED_X, -steep))
    } else if dy >= -PADDLE_BAND && dy < 0.0 {
        Some(Vec2::new(-SERVE_SPEED_X, -SERVE_SPEED_Y))
    } else if dy == 0.0 {
        Some(Vec2::new(-SERVE_SPEED_X, 0.0))
    } else if dy > 0.0 && dy < PADDLE_BAND {
        Some(Vec2::new(-SERVE_SPEED_X, SERVE_SPEED_Y))
    } else if dy >= PADDLE_BAND && dy < 2.0 * PADDLE_BAND {
        Some(Vec2::new(-SERVE_SPEED_X, steep))
    } else {
        None
    }
}

/// True when the ball has reached the target plane inside its vertical
/// band. The band is half-open: a ball exactly at the top edge misses.
pub fn target_hit(ball: &Ball, target: &Target) -> bool {
    ball.pos.x - BALL_HALF <= TARGET_X + TARGET_HALF_WIDTH
        && ball.pos.y >= target.bottom()
        && ball.pos.y < target.top()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
        }
    }

    #[test]
    fn test_left_wall_reflects_rightward() {
        let mut ball = ball_at(-1.01, 0.0, -0.5, 0.2);
        assert_eq!(resolve_walls(&mut ball), WallOutcome::InPlay);
        assert_eq!(ball.vel, Vec2::new(0.5, 0.2));
    }

    #[test]
    fn test_bottom_and_top_walls_reflect_inward() {
        let mut ball = ball_at(0.0, -1.05, 0.5, -1.0);
        resolve_walls(&mut ball);
        assert_eq!(ball.vel.y, 1.0);

        let mut ball = ball_at(0.0, 1.05, 0.5, 1.0);
        resolve_walls(&mut ball);
        assert_eq!(ball.vel.y, -1.0);
    }

    #[test]
    fn test_right_wall_retires_without_reflecting() {
        let mut ball = ball_at(1.01, 0.3, 0.5, 0.0);
        assert_eq!(resolve_walls(&mut ball), WallOutcome::Retired);
        // Velocity untouched; the caller retires the ball entirely.
        assert_eq!(ball.vel, Vec2::new(0.5, 0.0));
    }

    #[test]
    fn test_wall_reflection_is_idempotent() {
        let mut ball = ball_at(-1.02, -1.02, -0.5, -0.5);
        resolve_walls(&mut ball);
        let once = ball.vel;
        resolve_walls(&mut ball);
        assert_eq!(ball.vel, once);
        // Reflected velocity points back into the arena.
        assert!(once.x > 0.0);
        assert!(once.y > 0.0);
    }

    #[test]
    fn test_paddle_reach_threshold() {
        assert!(!paddle_in_reach(0.79));
        assert!(paddle_in_reach(0.8));
        assert!(paddle_in_reach(0.95));
    }

    #[test]
    fn test_paddle_bands() {
        let paddle_y = 0.1;
        // Lower steep band.
        assert_eq!(
            paddle_band_velocity(paddle_y - 0.3, paddle_y),
            Some(Vec2::new(-0.5, -1.0))
        );
        // Lower shallow band.
        assert_eq!(
            paddle_band_velocity(paddle_y - 0.1, paddle_y),
            Some(Vec2::new(-0.5, -0.5))
        );
        // Exact center: flat return.
        assert_eq!(
            paddle_band_velocity(paddle_y, paddle_y),
            Some(Vec2::new(-0.5, 0.0))
        );
        // Upper shallow band.
        assert_eq!(
            paddle_band_velocity(paddle_y + 0.1, paddle_y),
            Some(Vec2::new(-0.5, 0.5))
        );
        // Upper steep band.
        assert_eq!(
            paddle_band_velocity(paddle_y + 0.3, paddle_y),
            Some(Vec2::new(-0.5, 1.0))
        );
    }

    #[test]
    fn test_paddle_band_edges() {
        // Band edges: lower bounds inclusive, upper bounds exclusive.
        assert_eq!(
            paddle_band_velocity(-0.4, 0.0),
            Some(Vec2::new(-0.5, -1.0))
        );
        assert_eq!(
            paddle_band_velocity(-0.2, 0.0),
            Some(Vec2::new(-0.5, -0.5))
        );
        assert_eq!(paddle_band_velocity(0.2, 0.0), Some(Vec2::new(-0.5, 1.0)));
        // Beyond the paddle's reach on either side: no deflection.
        assert_eq!(paddle_band_velocity(0.4, 0.0), None);
        assert_eq!(paddle_band_velocity(-0.41, 0.0), None);
        assert_eq!(paddle_band_velocity(0.9, 0.0), None);
    }

    #[test]
    fn test_target_hit_band_is_half_open() {
        let target = Target { y: 0.0, size: 0.4 };
        assert!(target_hit(&ball_at(-0.86, 0.0, -0.5, 0.0), &target));
        // Bottom edge included, top edge excluded.
        assert!(target_hit(&ball_at(-0.86, -0.2, -0.5, 0.0), &target));
        assert!(!target_hit(&ball_at(-0.86, 0.2, -0.5, 0.0), &target));
        // Not yet at the target plane.
        assert!(!target_hit(&ball_at(-0.7, 0.0, -0.5, 0.0), &target));
    }

    proptest! {
        /// Every deflection returns the ball toward the left wall at the
        /// serve speed, with vertical speed from the fixed band table.
        #[test]
        fn prop_deflections_always_return_left(
            ball_y in -1.0f32..1.0,
            paddle_y in -0.6f32..0.6,
        ) {
            if let Some(vel) = paddle_band_velocity(ball_y, paddle_y) {
                prop_assert_eq!(vel.x, -SERVE_SPEED_X);
                prop_assert!(
                    vel.y == 0.0
                        || vel.y.abs() == SERVE_SPEED_Y
                        || vel.y.abs() == 2.0 * SERVE_SPEED_Y
                );
            }
        }

        /// After wall resolution the ball is never moving further out of
        /// a wall it has crossed.
        #[test]
        fn prop_wall_reflection_points_inward(
            x in -1.5f32..=1.0,
            y in -1.5f32..1.5,
            vx in -1.0f32..1.0,
            vy in -1.0f32..1.0,
        ) {
            let mut ball = ball_at(x, y, vx, vy);
            if resolve_walls(&mut ball) == WallOutcome::InPlay {
                if ball.pos.x < -1.0 {
                    prop_assert!(ball.vel.x >= 0.0);
                }
                if ball.pos.y < -1.0 {
                    prop_assert!(ball.vel.y >= 0.0);
                }
                if ball.pos.y > 1.0 {
                    prop_assert!(ball.vel.y <= 0.0);
                }
            }
        }
    }
}
