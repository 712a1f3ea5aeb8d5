use glam::Vec2;
use pretty_assertions::assert_eq;

use chomp::game::{Game, GameConfig};
use chomp::geometry::LineSegment;
use chomp::map::TileGrid;
use chomp::systems::components::{Actor, InputState, Player};
use chomp::systems::player::{clamp_offset, tile_collision};

fn open_room() -> TileGrid {
    TileGrid::parse("11111\n10001\n10001\n10001\n11111").unwrap()
}

fn corridor_game(board: &str, player_start: Vec2) -> Game {
    Game::from_config(GameConfig {
        board: board.to_string(),
        player_start,
        ghost_spawns: Vec::new(),
        rng_seed: 0,
    })
    .unwrap()
}

#[test]
fn test_axis_independent_clamping() {
    let mut grid = open_room();
    let mut player = Player::default();

    // Diagonal candidate offset with only the x edge blocked: the wall to
    // the right must not bleed into the y axis.
    let actor = Actor::new(Vec2::new(59.0, 40.0), Vec2::ZERO);
    let mut offset = Vec2::new(4.0, 4.0);
    clamp_offset(&mut grid, &actor, &mut player, &mut offset);
    assert_eq!(offset, Vec2::new(0.0, 4.0));

    // And the mirror case: only the y edge blocked.
    let actor = Actor::new(Vec2::new(40.0, 59.0), Vec2::ZERO);
    let mut offset = Vec2::new(4.0, 4.0);
    clamp_offset(&mut grid, &actor, &mut player, &mut offset);
    assert_eq!(offset, Vec2::new(4.0, 0.0));
}

#[test]
fn test_unblocked_offset_passes_through() {
    let mut grid = open_room();
    let mut player = Player::default();
    let actor = Actor::new(Vec2::new(40.0, 40.0), Vec2::ZERO);

    let mut offset = Vec2::new(2.0, -2.0);
    clamp_offset(&mut grid, &actor, &mut player, &mut offset);
    assert_eq!(offset, Vec2::new(2.0, -2.0));
}

#[test]
fn test_pellet_scores_and_does_not_block() {
    let mut grid = TileGrid::parse("111\n121\n111").unwrap();
    let mut player = Player::default();
    let edge = LineSegment::at(Vec2::new(24.0, 24.0));

    assert!(!tile_collision(&mut grid, &mut player, &edge));
    assert_eq!(player.score, 1);

    // The pellet is gone; probing again is open and scores nothing.
    assert!(!tile_collision(&mut grid, &mut player, &edge));
    assert_eq!(player.score, 1);
}

#[test]
fn test_power_pellet_scores_and_arms_power_mode() {
    let mut grid = TileGrid::parse("111\n131\n111").unwrap();
    let mut player = Player::default();
    let edge = LineSegment::at(Vec2::new(24.0, 24.0));

    assert!(!tile_collision(&mut grid, &mut player, &edge));
    assert_eq!(player.score, 1);

    grid.tick(0.1);
    assert!(grid.power_active());
}

#[test]
fn test_border_blocks_like_wall() {
    let mut grid = TileGrid::parse("444\n404\n444").unwrap();
    let mut player = Player::default();

    assert!(tile_collision(&mut grid, &mut player, &LineSegment::at(Vec2::new(24.0, 8.0))));
    assert_eq!(player.score, 0);
}

#[test]
fn test_teleport_wrap_left() {
    // Open corridor across row 1; the pellet on the far right keeps the
    // round from clearing.
    let mut game = corridor_game("11111\n00002\n11111", Vec2::new(18.0, 24.0));
    game.set_input(InputState {
        left: true,
        ..Default::default()
    });

    // First tick probes column 0 and arms the boundary flag.
    game.step(0.05);
    // Second tick triggers the wrap, overriding the incremental move.
    game.step(0.05);

    let expected_x = game.grid().max_boundaries().x - 16.0;
    assert_eq!(game.player_position().x, expected_x);
    assert_eq!(game.player_position().y, 24.0);
}

#[test]
fn test_teleport_wrap_right() {
    let mut game = corridor_game("11111\n20000\n11111", Vec2::new(74.0, 24.0));
    game.set_input(InputState {
        right: true,
        ..Default::default()
    });

    game.step(0.05);
    // The edge beyond the last column blocks, so the position holds until
    // the wrap fires.
    assert_eq!(game.player_position().x, 74.0);

    game.step(0.05);
    assert_eq!(game.player_position().x, 16.0);
}

#[test]
fn test_input_priority_right_wins() {
    let mut game = corridor_game("11111\n20000\n11111", Vec2::new(40.0, 24.0));
    game.set_input(InputState {
        right: true,
        left: true,
        down: true,
        up: true,
    });

    game.step(0.05);
    assert_eq!(game.player_position(), Vec2::new(50.0, 24.0));
}

#[test]
fn test_wall_stops_movement() {
    let mut game = corridor_game("11111\n20000\n11111", Vec2::new(40.0, 24.0));
    game.set_input(InputState {
        down: true,
        ..Default::default()
    });

    // Row 2 is all wall; the candidate offset is zeroed every tick.
    for _ in 0..5 {
        game.step(0.05);
    }
    assert_eq!(game.player_position(), Vec2::new(40.0, 24.0));
}
