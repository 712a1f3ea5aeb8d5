//! Reactive ghost steering and the capture/revive lifecycle.
//!
//! Steering is a manager pass that runs once per tick before integration:
//! each nonzero axis of a ghost's heading projects a leading edge forward and
//! asks the grid for a wall hit. On a hit the ghost turns according to its
//! color's rule and is nudged back off the wall.

use bevy_ecs::system::{Query, Res, ResMut};
use glam::Vec2;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::constants::{DEN_POSITION, GHOST_ALLOWANCE, GHOST_POWER_SPEED, GHOST_SPEED, REVIVE_IDLE, STEER_NUDGE};
use crate::geometry::LineSegment;
use crate::map::TileGrid;
use crate::systems::components::{Actor, DeltaTime, Ghost, GhostColor, SteeringRng};

/// Which leading edge of the bounding box hit a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockedEdge {
    Right,
    Left,
    Bottom,
    Top,
}

/// How a ghost reacts to a blocked edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurnRule {
    /// Turn onto a fixed full heading.
    Fixed(Vec2),
    /// Reverse the blocked axis, keeping the other component.
    Reverse,
    /// Coin-flip between reversing and a perpendicular turn.
    Random,
}

/// Pink's fixed turn preference: perpendicular to the blocked edge, always
/// with the same sign relative to the blocked direction.
fn pink_turn(edge: BlockedEdge) -> Vec2 {
    match edge {
        BlockedEdge::Right => Vec2::new(0.0, -1.0),
        BlockedEdge::Left => Vec2::new(0.0, 1.0),
        BlockedEdge::Bottom => Vec2::new(1.0, 0.0),
        BlockedEdge::Top => Vec2::new(-1.0, 0.0),
    }
}

/// The turn rule table. Purple is the mirror image of Pink (opposite sign on
/// the perpendicular axis in every case); Orange is the one randomized
/// variant; everything else falls back to a plain reversal.
pub fn turn_rule(color: GhostColor, edge: BlockedEdge) -> TurnRule {
    match color {
        GhostColor::Pink => TurnRule::Fixed(pink_turn(edge)),
        GhostColor::Purple => TurnRule::Fixed(-pink_turn(edge)),
        GhostColor::Orange => TurnRule::Random,
        GhostColor::Red | GhostColor::Blue => TurnRule::Reverse,
    }
}

/// The heading that reverses the blocked axis while keeping the other
/// component of the current heading. The blocked axis is set to the fixed
/// opposite sign rather than negated, matching the reference rule table.
fn reversed_heading(heading: Vec2, edge: BlockedEdge) -> Vec2 {
    match edge {
        BlockedEdge::Right => Vec2::new(-1.0, heading.y),
        BlockedEdge::Left => Vec2::new(1.0, heading.y),
        BlockedEdge::Bottom => Vec2::new(heading.x, -1.0),
        BlockedEdge::Top => Vec2::new(heading.x, 1.0),
    }
}

/// The randomized turn: one coin decides between reversing the blocked axis
/// and turning perpendicular; a second coin picks the perpendicular sign.
/// Either way the other axis is zeroed.
fn random_heading(edge: BlockedEdge, rng: &mut SteeringRng) -> Vec2 {
    let sign = |coin: bool| if coin { -1.0 } else { 1.0 };
    match edge {
        BlockedEdge::Right => {
            if rng.coin() {
                Vec2::new(-1.0, 0.0)
            } else {
                Vec2::new(0.0, sign(rng.coin()))
            }
        }
        BlockedEdge::Left => {
            if rng.coin() {
                Vec2::new(1.0, 0.0)
            } else {
                Vec2::new(0.0, sign(rng.coin()))
            }
        }
        BlockedEdge::Bottom => {
            if rng.coin() {
                Vec2::new(sign(rng.coin()), 0.0)
            } else {
                Vec2::new(0.0, -1.0)
            }
        }
        BlockedEdge::Top => {
            if rng.coin() {
                Vec2::new(sign(rng.coin()), 0.0)
            } else {
                Vec2::new(0.0, 1.0)
            }
        }
    }
}

/// The positional nudge that pushes a turning ghost back off the wall.
fn nudge(edge: BlockedEdge) -> Vec2 {
    match edge {
        BlockedEdge::Right => Vec2::new(-STEER_NUDGE, 0.0),
        BlockedEdge::Left => Vec2::new(STEER_NUDGE, 0.0),
        BlockedEdge::Bottom => Vec2::new(0.0, -STEER_NUDGE),
        BlockedEdge::Top => Vec2::new(0.0, STEER_NUDGE),
    }
}

fn apply_turn(actor: &mut Actor, heading: Vec2, color: GhostColor, edge: BlockedEdge, rng: &mut SteeringRng) {
    let new_heading = match turn_rule(color, edge) {
        TurnRule::Fixed(heading) => heading,
        TurnRule::Reverse => reversed_heading(heading, edge),
        TurnRule::Random => random_heading(edge, rng),
    };
    actor.heading = new_heading;
    actor.position += nudge(edge);
    trace!(?color, ?edge, heading = ?new_heading, "ghost turned");
}

/// Runs one steering decision for a single ghost against the grid.
///
/// The edges are taken from the heading the ghost entered the tick with; a
/// diagonal heading probes one horizontal and one vertical edge in the same
/// pass.
pub fn steer_ghost(grid: &TileGrid, actor: &mut Actor, color: GhostColor, rng: &mut SteeringRng) {
    let bounds = actor.bounding_box(GHOST_ALLOWANCE);
    let heading = actor.heading;

    let mut probes: SmallVec<[(BlockedEdge, LineSegment); 2]> = SmallVec::new();
    if heading.x > 0.0 {
        probes.push((BlockedEdge::Right, bounds.right_edge(heading.x)));
    }
    if heading.x < 0.0 {
        probes.push((BlockedEdge::Left, bounds.left_edge(heading.x)));
    }
    if heading.y > 0.0 {
        probes.push((BlockedEdge::Bottom, bounds.bottom_edge(heading.y)));
    }
    if heading.y < 0.0 {
        probes.push((BlockedEdge::Top, bounds.top_edge(heading.y)));
    }

    for (edge, segment) in probes {
        if grid.check_collision(&segment) {
            apply_turn(actor, heading, color, edge, rng);
        }
    }
}

/// Manager steering pass over every living ghost, before integration.
pub fn ghost_steering_system(
    grid: Res<TileGrid>,
    mut rng: ResMut<SteeringRng>,
    mut ghosts: Query<(&mut Actor, &Ghost)>,
) {
    for (mut actor, ghost) in ghosts.iter_mut() {
        if !ghost.alive {
            continue;
        }
        steer_ghost(&grid, &mut actor, ghost.color, &mut rng);
    }
}

/// Advances one ghost's lifecycle and position by one frame.
///
/// A captured ghost is parked at the origin every tick (off the visible
/// board) until its countdown crosses below zero, at which point it reappears
/// at the den with the countdown reset to its idle value.
pub fn integrate_ghost(actor: &mut Actor, ghost: &mut Ghost, power_active: bool, dt: f32) {
    if ghost.revive < 0.0 {
        ghost.revive = REVIVE_IDLE;
        actor.position = DEN_POSITION;
        ghost.alive = true;
        debug!(color = ?ghost.color, "ghost revived at den");
    }
    ghost.revive -= dt;

    if !ghost.alive {
        actor.position = Vec2::ZERO;
        return;
    }

    let speed = if power_active { GHOST_POWER_SPEED } else { GHOST_SPEED };
    let heading = actor.heading;
    actor.position += heading * speed * dt;
}

/// Per-ghost movement and lifecycle update, after the steering pass.
pub fn ghost_update_system(
    grid: Res<TileGrid>,
    delta_time: Res<DeltaTime>,
    mut ghosts: Query<(&mut Actor, &mut Ghost)>,
) {
    for (mut actor, mut ghost) in ghosts.iter_mut() {
        integrate_ghost(&mut actor, &mut ghost, grid.power_active(), delta_time.0);
    }
}
