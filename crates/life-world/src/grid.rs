//! Bounded 2D grid of cells.

use crate::patterns::Pattern;
use life_core::{Cell, Coord, Error, Result, WorldConfig};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Row and column deltas of the Moore neighbourhood, in iteration order
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed-size, non-wrapping grid stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidConfig(format!(
                "grid dimensions must be positive, got {}x{}",
                width, height
            )));
        }

        let size = (width as usize).checked_mul(height as usize).ok_or_else(|| {
            Error::InvalidConfig(format!("grid of {}x{} cells is too large", width, height))
        })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::dead(); size],
        })
    }

    /// Create a randomly seeded grid from world configuration
    pub fn from_config<R: Rng + ?Sized>(config: &WorldConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let mut grid = Self::new(config.width, config.height)?;
        grid.randomize(config.spawn_probability, rng);
        Ok(grid)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row >= 0 && coord.row < self.height && coord.col >= 0 && coord.col < self.width
    }

    /// In-bounds Moore neighbours of `coord`; edges do not wrap
    pub fn neighbors(&self, coord: Coord) -> Vec<Coord> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| coord.offset(d_row, d_col))
            .filter(|&neighbor| self.in_bounds(neighbor))
            .collect()
    }

    /// Number of alive in-bounds neighbours
    pub fn living_neighbors(&self, coord: Coord) -> usize {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| coord.offset(d_row, d_col))
            .filter(|&neighbor| self.is_alive(neighbor))
            .count()
    }

    /// Cell at `coord`, or `None` outside the grid
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index_of(coord).map(|index| self.cells[index])
    }

    pub fn is_alive(&self, coord: Coord) -> bool {
        self.get(coord).map_or(false, |cell| cell.is_alive())
    }

    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<()> {
        let index = self
            .index_of(coord)
            .ok_or_else(|| Error::OutOfBounds(coord.to_string()))?;
        self.cells[index] = cell;
        Ok(())
    }

    /// Set every cell alive independently with the given probability
    pub fn randomize<R: Rng + ?Sized>(&mut self, probability: f64, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = Cell::from(rng.gen::<f64>() < probability);
        }
    }

    /// Stamp a pattern's live cells with its top-left corner at `origin`
    pub fn place(&mut self, pattern: &Pattern, origin: Coord) -> Result<()> {
        let mut targets = Vec::with_capacity(pattern.cells.len());
        for &(row, col) in pattern.cells {
            match origin.offset(row, col) {
                Some(coord) if self.in_bounds(coord) => targets.push(coord),
                _ => {
                    return Err(Error::OutOfBounds(format!(
                        "{}+({},{}) (placing {})",
                        origin, row, col, pattern.name
                    )))
                }
            }
        }

        for coord in targets {
            self.set(coord, Cell::alive())?;
        }
        Ok(())
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.row as usize * self.width as usize + coord.col as usize)
        } else {
            None
        }
    }

    fn coord_of(&self, index: usize) -> Coord {
        let width = self.width as usize;
        // Both quotient and remainder are bounded by positive i32 dimensions
        Coord::new((index / width) as i32, (index % width) as i32)
    }

    /// Iterator over all coordinates, row-major
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cells.len()).map(move |i| self.coord_of(i))
    }

    /// Iterator over all cells with coordinates, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (self.coord_of(i), *cell))
    }

    /// Build a grid of the same shape from one cell per coordinate, row-major
    pub(crate) fn with_cells(&self, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }
}
