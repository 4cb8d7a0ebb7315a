//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only, threaded through explicitly
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{WallOutcome, paddle_band_velocity, paddle_in_reach, resolve_walls, target_hit};
pub use spawn::place_target;
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, Target};
pub use tick::{TickInput, tick};
