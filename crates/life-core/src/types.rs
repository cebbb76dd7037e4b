//! Core type definitions for the simulation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A (row, column) position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Shifted coordinate, or `None` if either component would overflow
    pub fn offset(&self, d_row: i32, d_col: i32) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(d_row)?,
            col: self.col.checked_add(d_col)?,
        })
    }

    /// Chebyshev (king-move) distance to another coordinate
    pub fn chebyshev_distance(&self, other: &Coord) -> u32 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

/// Canonical `row,col` form
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Coord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(',');
        let (row, col) = match (parts.next(), parts.next(), parts.next()) {
            (Some(row), Some(col), None) => (row, col),
            _ => {
                return Err(Error::InvalidCoordinate(format!(
                    "expected `row,col`, got {:?}",
                    s
                )))
            }
        };

        let parse = |part: &str, axis: &str| {
            part.trim().parse::<i32>().map_err(|e| {
                Error::InvalidCoordinate(format!("{} component of {:?}: {}", axis, s, e))
            })
        };

        Ok(Self::new(parse(row, "row")?, parse(col, "column")?))
    }
}

/// The state of a single grid position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    alive: bool,
}

impl Cell {
    pub const fn alive() -> Self {
        Self { alive: true }
    }

    pub const fn dead() -> Self {
        Self { alive: false }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Self { alive }
    }
}
