//! Player control: input to validated displacement, consumption side effects,
//! and the horizontal teleport wrap.

use bevy_ecs::system::{Query, Res, ResMut};
use glam::Vec2;
use tracing::debug;

use crate::constants::{PLAYER_ALLOWANCE, PLAYER_SPEED, TILE_SIZE};
use crate::geometry::LineSegment;
use crate::map::{TileGrid, TileKind};
use crate::systems::components::{Actor, DeltaTime, InputState, Player};

/// Probes one leading edge and applies consumption side effects.
///
/// Blocking kinds (`Wall`, `Border`) return true. Pellets add to the score;
/// a power pellet additionally arms the grid's power timer. Every probe
/// overwrites the player's boundary flag for the next tick's teleport check.
pub fn tile_collision(grid: &mut TileGrid, player: &mut Player, edge: &LineSegment) -> bool {
    let probe = grid.probe_player(edge);
    player.at_boundary = probe.at_boundary;
    match probe.kind {
        TileKind::Wall | TileKind::Border => true,
        TileKind::Pellet => {
            player.score += 1;
            false
        }
        TileKind::PowerPellet => {
            player.score += 1;
            grid.set_power_timer();
            false
        }
        TileKind::Open => false,
    }
}

/// Clamps a candidate offset per axis against the grid.
///
/// Each axis with a nonzero component probes its own leading edge, displaced
/// by the full candidate offset; a blocking hit zeroes that axis only, so x
/// motion is never blocked by a y collision and vice versa.
pub fn clamp_offset(grid: &mut TileGrid, actor: &Actor, player: &mut Player, offset: &mut Vec2) {
    let bounds = actor.bounding_box(PLAYER_ALLOWANCE);

    if offset.x > 0.0 && tile_collision(grid, player, &bounds.right_edge(offset.x)) {
        offset.x = 0.0;
    }
    if offset.x < 0.0 && tile_collision(grid, player, &bounds.left_edge(offset.x)) {
        offset.x = 0.0;
    }
    if offset.y > 0.0 && tile_collision(grid, player, &bounds.bottom_edge(offset.y)) {
        offset.y = 0.0;
    }
    if offset.y < 0.0 && tile_collision(grid, player, &bounds.top_edge(offset.y)) {
        offset.y = 0.0;
    }
}

/// Per-tick player update: reads directional input (priority right, left,
/// down, up; first match wins), validates the displacement against the grid,
/// applies it, and finishes any pending teleport wrap.
pub fn player_movement_system(
    input: Res<InputState>,
    delta_time: Res<DeltaTime>,
    mut grid: ResMut<TileGrid>,
    mut players: Query<(&mut Actor, &mut Player)>,
) {
    for (mut actor, mut player) in players.iter_mut() {
        let mut offset = Vec2::ZERO;
        let mut right_teleport = false;
        let mut left_teleport = false;

        if input.right {
            player.moving = true;
            actor.heading = Vec2::new(1.0, 0.0);
            offset.x += PLAYER_SPEED * delta_time.0;
            if player.at_boundary {
                right_teleport = true;
            }
        } else if input.left {
            player.moving = true;
            actor.heading = Vec2::new(-1.0, 0.0);
            offset.x -= PLAYER_SPEED * delta_time.0;
            if player.at_boundary {
                left_teleport = true;
            }
        } else if input.down {
            player.moving = true;
            actor.heading = Vec2::new(0.0, 1.0);
            offset.y += PLAYER_SPEED * delta_time.0;
        } else if input.up {
            player.moving = true;
            actor.heading = Vec2::new(0.0, -1.0);
            offset.y -= PLAYER_SPEED * delta_time.0;
        } else {
            player.moving = false;
        }

        clamp_offset(&mut grid, &actor, &mut player, &mut offset);
        actor.position += offset;

        // The teleport overwrite runs after the incremental move, so it wins
        // on the tick it triggers.
        if right_teleport {
            actor.position.x = TILE_SIZE;
            debug!(position = ?actor.position, "teleport wrap right to left edge");
        }
        if left_teleport {
            actor.position.x = grid.max_boundaries().x - TILE_SIZE;
            debug!(position = ?actor.position, "teleport wrap left to right edge");
        }
    }
}
