//! Per-frame simulation step
//!
//! Advances the game by one frame of elapsed wall-clock time and reports
//! what happened as a list of events for the loop to observe.

use glam::Vec2;

use super::collision::{WallOutcome, paddle_band_velocity, paddle_in_reach, resolve_walls, target_hit};
use super::state::{GameEvent, GamePhase, GameState};

/// Input accumulated by the frame loop for a single step
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest pointer position in normalized coordinates (last one wins)
    pub pointer: Option<Vec2>,
    /// Launch edge (any press this frame wins); honored only while the
    /// ball is waiting to serve, never queued
    pub launch: bool,
}

/// Advance the game by `dt` seconds of elapsed wall-clock time.
///
/// A `dt` of zero is a valid no-op integration; negative values from a
/// stalled clock are treated as zero. Nothing here ever divides by `dt`.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let dt = dt.max(0.0);

    // The paddle tracks the pointer in every phase.
    if let Some(pointer) = input.pointer {
        state.paddle.track(pointer.y);
    }

    match state.phase {
        GamePhase::Serve => {
            if input.launch {
                events.push(state.serve());
                log::debug!("serve: vel = {:?}", state.ball.vel);
            }
        }
        GamePhase::Playing => {
            state.ball.pos += state.ball.vel * dt;

            if resolve_walls(&mut state.ball) == WallOutcome::Retired {
                events.push(state.register_fail());
                return events;
            }

            if paddle_in_reach(state.ball.pos.x) {
                if let Some(vel) = paddle_band_velocity(state.ball.pos.y, state.paddle.y) {
                    state.ball.vel = vel;
                }
            }

            if target_hit(&state.ball, &state.target) {
                events.push(state.register_hit());
            }
        }
    }

    events
}
