//! Rectangle draw requests and their triangle-list expansion

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::GameState;

/// One axis-aligned rectangle to draw, in normalized device coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
    pub color: [u8; 4],
}

impl Rect {
    /// Rectangle around `center` with the given half extents
    pub fn centered(center: Vec2, half: Vec2, color: [u8; 4]) -> Self {
        Self {
            min: center - half,
            max: center + half,
            color,
        }
    }
}

fn unpack_color(rgba: [u8; 4]) -> [f32; 4] {
    [
        rgba[0] as f32 / 255.0,
        rgba[1] as f32 / 255.0,
        rgba[2] as f32 / 255.0,
        rgba[3] as f32 / 255.0,
    ]
}

/// Expand a rectangle into two triangles
pub fn rect_vertices(rect: &Rect) -> [Vertex; 6] {
    let color = unpack_color(rect.color);
    let (min, max) = (rect.min, rect.max);

    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, max.y, color),
    ]
}

/// Frame description: every rectangle the renderer must draw this frame,
/// in draw order
pub fn frame_rects(state: &GameState) -> Vec<Rect> {
    vec![
        Rect::centered(state.ball.pos, Vec2::splat(BALL_HALF), colors::BALL),
        Rect::centered(
            Vec2::new(PADDLE_X, state.paddle.y),
            Vec2::new(PADDLE_HALF_WIDTH, PADDLE_HALF_HEIGHT),
            colors::PADDLE,
        ),
        Rect::centered(
            Vec2::new(TARGET_X, state.target.y),
            Vec2::new(TARGET_HALF_WIDTH, state.target.size / 2.0),
            colors::TARGET,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_vertices_cover_corners() {
        let rect = Rect {
            min: Vec2::new(-0.5, -0.25),
            max: Vec2::new(0.5, 0.25),
            color: [255, 0, 0, 255],
        };
        let vertices = rect_vertices(&rect);
        assert_eq!(vertices.len(), 6);

        for corner in [
            [-0.5, -0.25],
            [0.5, -0.25],
            [0.5, 0.25],
            [-0.5, 0.25],
        ] {
            assert!(vertices.iter().any(|v| v.position == corner));
        }
        for v in &vertices {
            assert_eq!(v.color, [1.0, 0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn test_frame_lists_ball_paddle_target() {
        let mut state = GameState::new(11);
        state.paddle.y = 0.25;
        let rects = frame_rects(&state);
        assert_eq!(rects.len(), 3);

        // Ball at center, 0.1 on a side.
        assert_eq!(rects[0].min, Vec2::new(-BALL_HALF, -BALL_HALF));
        assert_eq!(rects[0].max, Vec2::new(BALL_HALF, BALL_HALF));

        // Paddle follows its center on the fixed plane.
        assert_eq!(rects[1].min.x, PADDLE_X - PADDLE_HALF_WIDTH);
        assert_eq!(rects[1].max.x, PADDLE_X + PADDLE_HALF_WIDTH);
        assert_eq!(rects[1].min.y, 0.25 - PADDLE_HALF_HEIGHT);
        assert_eq!(rects[1].max.y, 0.25 + PADDLE_HALF_HEIGHT);

        // Target spans its current size on the left plane.
        let target = &rects[2];
        assert!((target.max.x - target.min.x - 2.0 * TARGET_HALF_WIDTH).abs() < 1e-6);
        assert!((target.max.y - target.min.y - state.target.size).abs() < 1e-6);
        assert_eq!(target.color, colors::TARGET);
    }
}
