use glam::Vec2;
use pretty_assertions::assert_eq;

use chomp::geometry::LineSegment;
use chomp::map::{PlayerProbe, TileGrid, TileKind};

fn pellet_box() -> TileGrid {
    // 3x3 wall ring around a single pellet.
    TileGrid::parse("111\n121\n111").unwrap()
}

fn open_room() -> TileGrid {
    TileGrid::parse("11111\n10001\n10001\n10001\n11111").unwrap()
}

#[test]
fn test_load_dimensions() {
    let grid = pellet_box();
    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.columns(), 3);
    assert_eq!(grid.pellets_remaining(), 1);
}

#[test]
fn test_ragged_board_fails_to_load() {
    assert!(TileGrid::parse("111\n11\n111").is_err());
}

#[test]
fn test_pellet_consumed_at_most_once() {
    let mut grid = pellet_box();
    let probe_point = LineSegment::at(Vec2::new(24.0, 24.0));

    // The triggering probe returns the pre-consumption kind.
    let first = grid.probe_player(&probe_point);
    assert_eq!(
        first,
        PlayerProbe {
            kind: TileKind::Pellet,
            at_boundary: false
        }
    );
    assert_eq!(grid.pellets_remaining(), 0);
    assert_eq!(grid.tile(1, 1), Some(TileKind::Open));

    // Every later probe of the same tile sees it open.
    for _ in 0..3 {
        assert_eq!(grid.probe_player(&probe_point).kind, TileKind::Open);
    }
    assert_eq!(grid.pellets_remaining(), 0);
}

#[test]
fn test_power_pellet_consumed_once() {
    let mut grid = TileGrid::parse("111\n131\n111").unwrap();
    let probe_point = LineSegment::at(Vec2::new(24.0, 24.0));

    assert_eq!(grid.probe_player(&probe_point).kind, TileKind::PowerPellet);
    assert_eq!(grid.probe_player(&probe_point).kind, TileKind::Open);
}

#[test]
fn test_degenerate_span_fails_closed() {
    let mut grid = open_room();
    // Reversed endpoints versus the scan assumption: no tile is visited.
    let reversed = LineSegment::new(Vec2::new(50.0, 50.0), Vec2::new(20.0, 20.0));

    assert!(grid.check_collision(&reversed));
    assert_eq!(
        grid.probe_player(&reversed),
        PlayerProbe {
            kind: TileKind::Wall,
            at_boundary: false
        }
    );
}

#[test]
fn test_out_of_range_reads_as_wall() {
    let grid = open_room();
    let beyond = LineSegment::at(Vec2::new(200.0, 24.0));
    assert!(grid.check_collision(&beyond));
}

#[test]
fn test_check_collision_scans_full_span() {
    let grid = open_room();

    // Span entirely inside the open interior.
    let inside = LineSegment::new(Vec2::new(20.0, 20.0), Vec2::new(60.0, 60.0));
    assert!(!grid.check_collision(&inside));

    // Span reaching into the wall ring.
    let into_wall = LineSegment::new(Vec2::new(20.0, 20.0), Vec2::new(70.0, 60.0));
    assert!(grid.check_collision(&into_wall));
}

#[test]
fn test_probe_player_first_tile_wins() {
    // A span covering both an open tile and a wall reports only the first
    // tile in scan order, derived from the segment's `from` endpoint.
    let mut grid = open_room();
    let span = LineSegment::new(Vec2::new(24.0, 24.0), Vec2::new(70.0, 24.0));
    assert_eq!(grid.probe_player(&span).kind, TileKind::Open);
}

#[test]
fn test_boundary_flag_tracks_probed_column() {
    let mut grid = open_room();

    assert!(grid.probe_player(&LineSegment::at(Vec2::new(8.0, 24.0))).at_boundary);
    assert!(!grid.probe_player(&LineSegment::at(Vec2::new(24.0, 24.0))).at_boundary);

    // One past the last column also counts as the horizontal edge.
    let past_right = grid.probe_player(&LineSegment::at(Vec2::new(80.0, 24.0)));
    assert!(past_right.at_boundary);
    assert_eq!(past_right.kind, TileKind::Wall);
}

#[test]
fn test_max_boundaries() {
    let grid = open_room();
    assert_eq!(grid.max_boundaries(), Vec2::new(72.0, 72.0));
}
