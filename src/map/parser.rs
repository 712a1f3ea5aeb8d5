//! Board parsing: converts raw digit layouts into tile data.

use strum_macros::FromRepr;

use crate::error::ParseError;

/// One cell of the maze, parsed from an ASCII digit by ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u8)]
pub enum TileKind {
    Open = 0,
    Wall = 1,
    Pellet = 2,
    PowerPellet = 3,
    Border = 4,
}

impl TileKind {
    /// Parses a single board character into a tile kind.
    pub fn from_digit(c: char) -> Result<TileKind, ParseError> {
        c.to_digit(10)
            .and_then(|d| TileKind::from_repr(d as u8))
            .ok_or(ParseError::UnknownCharacter(c))
    }

    /// Whether this tile stops the player's movement.
    pub fn blocks_player(self) -> bool {
        matches!(self, TileKind::Wall | TileKind::Border)
    }

    /// Whether this tile can be consumed by the player.
    pub fn is_edible(self) -> bool {
        matches!(self, TileKind::Pellet | TileKind::PowerPellet)
    }
}

/// Tile data parsed from a raw board layout, stored row-major.
#[derive(Debug)]
pub struct ParsedBoard {
    pub tiles: Vec<TileKind>,
    pub columns: usize,
    pub rows: usize,
}

/// Parses a plain-text board (one line per row, one digit per column).
///
/// # Errors
///
/// Returns an error if the board is empty, contains a character outside
/// `'0'..='4'`, or has rows of unequal length.
pub fn parse_board(text: &str) -> Result<ParsedBoard, ParseError> {
    let mut tiles = Vec::new();
    let mut columns = 0;
    let mut rows = 0;

    for (row, line) in text.lines().enumerate() {
        if row == 0 {
            columns = line.len();
        } else if line.len() != columns {
            return Err(ParseError::RaggedRow {
                row,
                len: line.len(),
                expected: columns,
            });
        }
        for c in line.chars() {
            tiles.push(TileKind::from_digit(c)?);
        }
        rows += 1;
    }

    if rows == 0 || columns == 0 {
        return Err(ParseError::EmptyBoard);
    }

    Ok(ParsedBoard { tiles, columns, rows })
}
