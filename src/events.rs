use bevy_ecs::event::Event;

use crate::systems::components::GhostColor;

/// Gameplay events surfaced to the embedding round loop each step.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A ghost was captured while power mode was active.
    GhostCaptured(GhostColor),
    /// The player touched a ghost outside power mode; the round is lost.
    PlayerCaught,
    /// Every pellet on the board has been consumed; the round is won.
    RoundCleared,
}
