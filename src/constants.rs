//! This module contains all the constants used in the game.

use glam::Vec2;

/// The size of each tile, in pixels.
pub const TILE_SIZE: f32 = 16.0;

/// Player movement speed, in pixels per second.
pub const PLAYER_SPEED: f32 = 200.0;
/// Ghost movement speed, in pixels per second.
pub const GHOST_SPEED: f32 = 100.0;
/// Ghost movement speed while power mode is active, in pixels per second.
pub const GHOST_POWER_SPEED: f32 = 50.0;

/// How long power mode lasts after eating a power pellet, in seconds.
pub const POWER_DURATION: f32 = 15.0;
/// How long a captured ghost stays down before reviving, in seconds.
pub const REVIVE_SECONDS: f32 = 10.0;
/// Idle value assigned to the revive countdown while a ghost is alive.
/// Large enough that it never crosses zero during normal play.
pub const REVIVE_IDLE: f32 = 1000.0;
/// Where revived ghosts reappear, in pixels.
pub const DEN_POSITION: Vec2 = Vec2::new(282.0, 240.0);

/// The player's bounding box is shrunk by this margin on every side so it
/// fits through single-tile corridors.
pub const PLAYER_ALLOWANCE: f32 = 4.0;
/// Ghosts get a looser fit than the player.
pub const GHOST_ALLOWANCE: f32 = 6.0;
/// How far a ghost is pushed back off a wall after a steering turn, so the
/// same edge does not re-trigger on the next tick.
pub const STEER_NUDGE: f32 = 4.0;

/// The player's starting position, in pixels.
pub const PLAYER_START: Vec2 = Vec2::new(48.0, 244.0);

/// The default board layout: one ASCII digit per tile, mapped by ordinal to
/// `{Open, Wall, Pellet, PowerPellet, Border}`. All rows must be the same
/// length. Row 15 is the teleport corridor, open at both horizontal edges.
pub const RAW_BOARD: [&str; 26] = [
    "444444444444444444444444444444444444",
    "411111111111111111111111111111111114",
    "413222222222222222222222222222222314",
    "412222222222222222222222222222222214",
    "412212221222122212221222122212221214",
    "412222222222222222222222222222222214",
    "412222222222222222222222222222222214",
    "412222222222222222222222222222222214",
    "412212221222122212221222122212221214",
    "412222222222222222222222222222222214",
    "412222222222222222222222222222222214",
    "412222222222222222222222222222222214",
    "412212221222122212221222122212221214",
    "412222222222222222222222222222222214",
    "412222222222222222222222222222222214",
    "002222222222222200022222222222222200",
    "412212221222122212221222122212221214",
    "412222222222222222222222222222222214",
    "412222222222222222222222222222222214",
    "412222222222222222222222222222222214",
    "412212221222122212221222122212221214",
    "412222222222222222222222222222222214",
    "412222222222222222222222222222222214",
    "413222222222222222222222222222222314",
    "411111111111111111111111111111111114",
    "444444444444444444444444444444444444",
];

/// Returns the default board in the plain-text form the parser accepts.
pub fn default_board() -> String {
    RAW_BOARD.join("\n")
}
