//! Per-tick game systems and their components and resources.

pub mod components;
pub mod ghost;
pub mod player;
pub mod round;
