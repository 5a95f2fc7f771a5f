//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Integer positions and velocities, one step per tick
//! - Stable iteration order (block creation order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod layout;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{Axis, Collision, Heading, REFLECTION_TABLE, Zone, resolve};
pub use layout::{Layout, LayoutError};
pub use score::ScoreTracker;
pub use state::{
    Ball, Block, BlockGrid, Direction, GameEvent, GameState, Paddle, Rect, RoundState,
};
pub use tick::tick;
