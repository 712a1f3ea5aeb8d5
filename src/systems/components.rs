use bevy_ecs::component::Component;
use bevy_ecs::resource::Resource;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use strum_macros::EnumIter;

use crate::constants::{REVIVE_IDLE, TILE_SIZE};
use crate::geometry::Rect;

/// Shared state for any moving entity: a center-pivot pixel position and a
/// heading whose per-axis components are drawn from {-1, 0, 1}.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    pub position: Vec2,
    pub heading: Vec2,
}

impl Actor {
    pub fn new(position: Vec2, heading: Vec2) -> Self {
        Self { position, heading }
    }

    /// The actor's bounding box, shrunk by the given corridor allowance on
    /// every side. The player uses a tighter fit than the ghosts.
    pub fn bounding_box(&self, allowance: f32) -> Rect {
        Rect::from_center(self.position, TILE_SIZE / 2.0 - allowance)
    }
}

/// Player-specific state beyond the shared [`Actor`] data.
///
/// `at_boundary` carries the boundary flag of the most recent grid probe
/// into the next tick, where it arms the teleport wrap.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Player {
    pub score: u32,
    pub moving: bool,
    pub at_boundary: bool,
}

/// The five ghost identities. The color is a pure tag selecting which
/// steering rule variant applies; it carries no other behavior difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum GhostColor {
    Red,
    Blue,
    Pink,
    Purple,
    Orange,
}

impl GhostColor {
    /// The heading each color starts the round with.
    pub fn initial_heading(self) -> Vec2 {
        match self {
            GhostColor::Red => Vec2::new(1.0, 0.0),
            GhostColor::Blue => Vec2::new(0.0, 1.0),
            GhostColor::Pink => Vec2::new(0.0, 1.0),
            GhostColor::Purple => Vec2::new(-1.0, 0.0),
            GhostColor::Orange => Vec2::new(0.0, -1.0),
        }
    }
}

/// Ghost lifecycle state: alive and roaming, or captured and counting down
/// to a revival at the den.
#[derive(Component, Debug, Clone, Copy)]
pub struct Ghost {
    pub color: GhostColor,
    pub alive: bool,
    pub revive: f32,
}

impl Ghost {
    pub fn new(color: GhostColor) -> Self {
        Self {
            color,
            alive: true,
            revive: REVIVE_IDLE,
        }
    }

    /// Marks the ghost captured and starts its revive countdown.
    pub fn capture(&mut self, seconds: f32) {
        self.alive = false;
        self.revive = seconds;
    }
}

/// Wall-clock frame time supplied by the external frame driver, in seconds.
#[derive(Resource, Debug, Clone, Copy)]
pub struct DeltaTime(pub f32);

/// Directional input sampled by the embedder each frame.
///
/// The player moves one direction at a time; when several flags are set the
/// controller picks the first in priority order right, left, down, up.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub right: bool,
    pub left: bool,
    pub down: bool,
    pub up: bool,
}

/// Seedable fair-coin source for the randomized steering variant.
///
/// Injected as a resource so steering decisions are reproducible in tests;
/// nothing in the crate reaches for a process-global RNG.
#[derive(Resource, Debug)]
pub struct SteeringRng(SmallRng);

impl SteeringRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    /// One independent fair Bernoulli draw.
    pub fn coin(&mut self) -> bool {
        self.0.random_bool(0.5)
    }
}
