//! Round-loop systems: grid timing, player-ghost overlap, and win/loss.

use bevy_ecs::event::EventWriter;
use bevy_ecs::system::{Query, Res, ResMut};
use tracing::info;

use crate::constants::{GHOST_ALLOWANCE, PLAYER_ALLOWANCE, REVIVE_SECONDS};
use crate::events::GameEvent;
use crate::game::state::{RoundOutcome, RoundState};
use crate::map::TileGrid;
use crate::systems::components::{Actor, DeltaTime, Ghost, Player};

/// Advances the grid's power timer by one frame.
pub fn grid_tick_system(delta_time: Res<DeltaTime>, mut grid: ResMut<TileGrid>) {
    grid.tick(delta_time.0);
}

/// Tests the player's bounding box against every living ghost.
///
/// An overlap during power mode captures the ghost and starts its revive
/// countdown; an overlap outside power mode ends the round.
pub fn capture_system(
    grid: Res<TileGrid>,
    mut round: ResMut<RoundState>,
    players: Query<(&Actor, &Player)>,
    mut ghosts: Query<(&Actor, &mut Ghost)>,
    mut events: EventWriter<GameEvent>,
) {
    let Ok((player_actor, _)) = players.single() else {
        return;
    };
    let player_box = player_actor.bounding_box(PLAYER_ALLOWANCE);

    for (ghost_actor, mut ghost) in ghosts.iter_mut() {
        if !ghost.alive {
            continue;
        }
        let ghost_box = ghost_actor.bounding_box(GHOST_ALLOWANCE);
        if !player_box.intersects(&ghost_box) {
            continue;
        }

        if grid.power_active() {
            ghost.capture(REVIVE_SECONDS);
            events.write(GameEvent::GhostCaptured(ghost.color));
            info!(color = ?ghost.color, "ghost captured");
        } else {
            round.finish(RoundOutcome::Caught);
            events.write(GameEvent::PlayerCaught);
            info!(color = ?ghost.color, "player caught");
        }
    }
}

/// Ends the round in a win once the last pellet is gone.
pub fn round_clear_system(
    grid: Res<TileGrid>,
    mut round: ResMut<RoundState>,
    mut events: EventWriter<GameEvent>,
) {
    if grid.pellets_remaining() == 0 && !round.is_over() {
        round.finish(RoundOutcome::Cleared);
        events.write(GameEvent::RoundCleared);
        info!("round cleared");
    }
}
