//! Round ownership: world construction, frame stepping, and the read surface
//! the embedding renderer and HUD consume.

pub mod state;

use bevy_ecs::entity::Entity;
use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use bevy_ecs::world::World;
use glam::Vec2;

use crate::constants::{default_board, PLAYER_ALLOWANCE, PLAYER_START};
use crate::error::GameResult;
use crate::events::GameEvent;
use crate::geometry::Rect;
use crate::map::TileGrid;
use crate::systems::components::{Actor, DeltaTime, Ghost, GhostColor, InputState, Player, SteeringRng};
use crate::systems::ghost::{ghost_steering_system, ghost_update_system};
use crate::systems::player::player_movement_system;
use crate::systems::round::{capture_system, grid_tick_system, round_clear_system};

use state::{RoundOutcome, RoundState};

/// The ghost roster of the default round: color and spawn position.
pub const GHOST_SPAWNS: [(GhostColor, Vec2); 7] = [
    (GhostColor::Red, Vec2::new(106.0, 106.0)),
    (GhostColor::Blue, Vec2::new(38.0, 38.0)),
    (GhostColor::Pink, Vec2::new(38.0, 60.0)),
    (GhostColor::Purple, Vec2::new(60.0, 342.0)),
    (GhostColor::Orange, Vec2::new(138.0, 342.0)),
    (GhostColor::Orange, Vec2::new(138.0, 242.0)),
    (GhostColor::Orange, Vec2::new(208.0, 142.0)),
];

/// Round setup: board text, spawn points, and the steering RNG seed.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub board: String,
    pub player_start: Vec2,
    pub ghost_spawns: Vec<(GhostColor, Vec2)>,
    pub rng_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: default_board(),
            player_start: PLAYER_START,
            ghost_spawns: GHOST_SPAWNS.to_vec(),
            rng_seed: 0,
        }
    }
}

/// Read-only snapshot of one ghost for rendering and HUD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostView {
    pub color: GhostColor,
    pub position: Vec2,
    pub heading: Vec2,
    pub alive: bool,
}

/// One round of the game: an ECS world plus the frame schedule that drives it.
///
/// The embedder calls [`Game::set_input`] and [`Game::step`] once per frame
/// and reads positions, tiles, and score back for drawing. There are no
/// process-wide singletons; everything lives in this struct.
pub struct Game {
    pub world: World,
    schedule: Schedule,
    player: Entity,
    ghosts: Vec<Entity>,
}

impl Game {
    /// Builds the default round.
    pub fn new() -> GameResult<Self> {
        Self::from_config(GameConfig::default())
    }

    /// Builds a round from an explicit configuration. Fails if the board
    /// text does not parse; a round never starts without a valid grid.
    pub fn from_config(config: GameConfig) -> GameResult<Self> {
        let mut world = World::default();
        EventRegistry::register_event::<GameEvent>(&mut world);

        let grid = TileGrid::parse(&config.board)?;
        world.insert_resource(grid);
        world.insert_resource(DeltaTime(0.0));
        world.insert_resource(InputState::default());
        world.insert_resource(SteeringRng::seeded(config.rng_seed));
        world.insert_resource(RoundState::default());

        let player = world
            .spawn((Actor::new(config.player_start, Vec2::ZERO), Player::default()))
            .id();

        let mut ghosts = Vec::with_capacity(config.ghost_spawns.len());
        for (color, position) in &config.ghost_spawns {
            let entity = world
                .spawn((Actor::new(*position, color.initial_heading()), Ghost::new(*color)))
                .id();
            ghosts.push(entity);
        }

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                grid_tick_system,
                player_movement_system,
                ghost_steering_system,
                ghost_update_system,
                capture_system,
                round_clear_system,
            )
                .chain(),
        );

        Ok(Self {
            world,
            schedule,
            player,
            ghosts,
        })
    }

    /// Replaces the sampled directional input for the coming frames.
    pub fn set_input(&mut self, input: InputState) {
        *self.world.resource_mut::<InputState>() = input;
    }

    /// Advances the round by one frame and returns the gameplay events it
    /// produced. Once the round is over, stepping is a no-op.
    pub fn step(&mut self, dt: f32) -> Vec<GameEvent> {
        if self.world.resource::<RoundState>().is_over() {
            return Vec::new();
        }
        self.world.resource_mut::<DeltaTime>().0 = dt;
        self.schedule.run(&mut self.world);
        self.world.resource_mut::<Events<GameEvent>>().drain().collect()
    }

    pub fn grid(&self) -> &TileGrid {
        self.world.resource::<TileGrid>()
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.world.resource::<RoundState>().outcome()
    }

    pub fn power_active(&self) -> bool {
        self.grid().power_active()
    }

    pub fn pellets_remaining(&self) -> usize {
        self.grid().pellets_remaining()
    }

    pub fn score(&self) -> u32 {
        self.world
            .entity(self.player)
            .get::<Player>()
            .map(|p| p.score)
            .unwrap_or(0)
    }

    pub fn player_position(&self) -> Vec2 {
        self.world
            .entity(self.player)
            .get::<Actor>()
            .map(|a| a.position)
            .unwrap_or(Vec2::ZERO)
    }

    pub fn player_box(&self) -> Rect {
        let actor = self
            .world
            .entity(self.player)
            .get::<Actor>()
            .copied()
            .unwrap_or(Actor::new(Vec2::ZERO, Vec2::ZERO));
        actor.bounding_box(PLAYER_ALLOWANCE)
    }

    /// Snapshots every ghost for rendering and overlap display.
    pub fn ghosts(&self) -> Vec<GhostView> {
        self.ghosts
            .iter()
            .filter_map(|&entity| {
                let actor = self.world.entity(entity).get::<Actor>()?;
                let ghost = self.world.entity(entity).get::<Ghost>()?;
                Some(GhostView {
                    color: ghost.color,
                    position: actor.position,
                    heading: actor.heading,
                    alive: ghost.alive,
                })
            })
            .collect()
    }
}
