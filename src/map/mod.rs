//! This module defines the maze grid and its collision and consumption queries.

pub mod parser;

use bevy_ecs::resource::Resource;
use glam::Vec2;
use tracing::{debug, trace};

use crate::constants::{POWER_DURATION, TILE_SIZE};
use crate::error::ParseError;
use crate::geometry::LineSegment;

pub use parser::TileKind;

/// Result of a player-side collision probe.
///
/// `kind` is the value of the probed tile before any consumption, so the
/// caller still sees what was eaten. `at_boundary` reports whether the probed
/// x tile coordinate touched either horizontal edge of the grid, which the
/// player controller uses to arm a teleport wrap on the following tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerProbe {
    pub kind: TileKind,
    pub at_boundary: bool,
}

/// The maze: a dense row-major grid of tiles, plus the global power timer.
///
/// Single source of truth for maze geometry and consumable state. Created
/// once at round start; tiles mutate only through [`TileGrid::probe_player`].
#[derive(Resource, Debug)]
pub struct TileGrid {
    tiles: Vec<TileKind>,
    columns: usize,
    rows: usize,
    power_timer: f32,
    power_active: bool,
    pellets_remaining: usize,
}

impl TileGrid {
    /// Parses a plain-text board into a grid. Ragged or malformed boards are
    /// a load-time error; the round cannot start without a valid grid.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let parsed = parser::parse_board(text)?;
        let pellets_remaining = parsed.tiles.iter().filter(|t| t.is_edible()).count();
        debug!(
            rows = parsed.rows,
            columns = parsed.columns,
            pellets = pellets_remaining,
            "board loaded"
        );
        Ok(Self {
            tiles: parsed.tiles,
            columns: parsed.columns,
            rows: parsed.rows,
            power_timer: 0.0,
            power_active: false,
            pellets_remaining,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The tile at the given coordinates, or `None` if out of range.
    pub fn tile(&self, col: usize, row: usize) -> Option<TileKind> {
        if col < self.columns && row < self.rows {
            Some(self.tiles[col + row * self.columns])
        } else {
            None
        }
    }

    /// Iterates all tiles as `(col, row, kind)`, for the rendering collaborator.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, TileKind)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, kind)| (i % self.columns, i / self.columns, *kind))
    }

    /// Whether the tile sits on the outer ring of the grid. The renderer
    /// draws these tiles again on top of the actors so a wrapping player
    /// disappears behind the edge instead of clipping through it.
    pub fn is_boundary(&self, col: usize, row: usize) -> bool {
        col == 0 || row == 0 || col == self.columns - 1 || row == self.rows - 1
    }

    /// Checked tile lookup in signed tile coordinates. Anything outside the
    /// grid reads as a wall, so out-of-range probes fail closed.
    fn tile_or_wall(&self, col: i32, row: i32) -> TileKind {
        if col < 0 || row < 0 {
            return TileKind::Wall;
        }
        self.tile(col as usize, row as usize).unwrap_or(TileKind::Wall)
    }

    /// Converts a segment's endpoints to an inclusive tile coordinate span.
    fn tile_span(segment: &LineSegment) -> (i32, i32, i32, i32) {
        let start_col = (segment.from.x / TILE_SIZE) as i32;
        let start_row = (segment.from.y / TILE_SIZE) as i32;
        let end_col = (segment.to.x / TILE_SIZE) as i32;
        let end_row = (segment.to.y / TILE_SIZE) as i32;
        (start_col, start_row, end_col, end_row)
    }

    /// Wall collision query used for ghost leading edges. Scans the inclusive
    /// tile range covered by the segment and reports true on any wall.
    /// Consumes nothing. A degenerate (reversed) span blocks.
    pub fn check_collision(&self, segment: &LineSegment) -> bool {
        let (start_col, start_row, end_col, end_row) = Self::tile_span(segment);
        if start_col > end_col || start_row > end_row {
            return true;
        }
        for col in start_col..=end_col {
            for row in start_row..=end_row {
                if self.tile_or_wall(col, row) == TileKind::Wall {
                    return true;
                }
            }
        }
        false
    }

    /// Player-side probe: examines only the first tile of the segment's span.
    ///
    /// First-tile-wins is a firm behavioral contract: even when the span
    /// covers several tiles, only the tile derived from `from` is ever
    /// inspected, and ties resolve to it. If that tile is edible it is
    /// consumed (mutated to `Open`) and the pre-consumption kind is returned.
    /// A degenerate span returns `Wall` with the boundary flag clear.
    pub fn probe_player(&mut self, segment: &LineSegment) -> PlayerProbe {
        let (start_col, start_row, end_col, end_row) = Self::tile_span(segment);
        if start_col > end_col || start_row > end_row {
            return PlayerProbe {
                kind: TileKind::Wall,
                at_boundary: false,
            };
        }

        let at_boundary = start_col == 0 || start_col == self.columns as i32;
        let kind = self.tile_or_wall(start_col, start_row);
        if kind.is_edible() {
            self.tiles[start_col as usize + start_row as usize * self.columns] = TileKind::Open;
            self.pellets_remaining -= 1;
            trace!(col = start_col, row = start_row, ?kind, remaining = self.pellets_remaining, "tile consumed");
        }
        PlayerProbe { kind, at_boundary }
    }

    /// The pixel extent of the grid minus half a tile, used by the teleport wrap.
    pub fn max_boundaries(&self) -> Vec2 {
        let half = TILE_SIZE / 2.0;
        Vec2::new(
            self.columns as f32 * TILE_SIZE - half,
            self.rows as f32 * TILE_SIZE - half,
        )
    }

    /// Resets the power timer to its full duration. `power_active` catches up
    /// on the next tick, matching the original frame ordering.
    pub fn set_power_timer(&mut self) {
        self.power_timer = POWER_DURATION;
        debug!("power mode armed");
    }

    pub fn power_active(&self) -> bool {
        self.power_active
    }

    pub fn pellets_remaining(&self) -> usize {
        self.pellets_remaining
    }

    /// Advances the power timer by one frame.
    pub fn tick(&mut self, dt: f32) {
        self.power_timer -= dt;
        self.power_active = self.power_timer > 0.0;
    }
}
