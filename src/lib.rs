//! Tile-maze chase game core.
//!
//! Owns the discretized maze and its collision and consumption queries, the
//! player's validated movement, and the reactive per-color ghost steering.
//! Rendering, audio, and input polling are external collaborators; the crate
//! exposes read surfaces for them and consumes simple per-frame queries.

pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod geometry;
pub mod map;
pub mod systems;
