//! Conway's Game of Life transition rule.
//!
//! Every cell of generation N+1 is computed from an unmodified view of
//! generation N: the next generation is built as a fresh cell vector and
//! swapped in as a whole, so no cell ever observes a sibling that has
//! already advanced in the same pass.

use crate::grid::Grid;
use life_core::Cell;
use serde::{Deserialize, Serialize};

/// What happens to one cell across a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fate {
    /// Alive with two or three live neighbours
    Survives,
    /// Alive with fewer than two live neighbours
    Underpopulation,
    /// Alive with more than three live neighbours
    Overpopulation,
    /// Dead with exactly three live neighbours
    Birth,
    StaysDead,
}

impl Fate {
    pub fn is_alive(&self) -> bool {
        matches!(self, Fate::Survives | Fate::Birth)
    }
}

/// The B3/S23 rule for a cell with `living_neighbors` live neighbours
pub fn fate(cell: Cell, living_neighbors: usize) -> Fate {
    match (cell.is_alive(), living_neighbors) {
        (true, 2 | 3) => Fate::Survives,
        (true, n) if n < 2 => Fate::Underpopulation,
        (true, _) => Fate::Overpopulation,
        (false, 3) => Fate::Birth,
        (false, _) => Fate::StaysDead,
    }
}

/// Tally of cell fates in one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepStats {
    pub survivals: usize,
    pub births: usize,
    pub underpopulation_deaths: usize,
    pub overpopulation_deaths: usize,
}

impl StepStats {
    fn record(&mut self, fate: Fate) {
        match fate {
            Fate::Survives => self.survivals += 1,
            Fate::Birth => self.births += 1,
            Fate::Underpopulation => self.underpopulation_deaths += 1,
            Fate::Overpopulation => self.overpopulation_deaths += 1,
            Fate::StaysDead => {}
        }
    }

    pub fn deaths(&self) -> usize {
        self.underpopulation_deaths + self.overpopulation_deaths
    }

    /// Population of the generation these stats produced
    pub fn population(&self) -> usize {
        self.survivals + self.births
    }

    /// True when no cell changed state
    pub fn is_still(&self) -> bool {
        self.births == 0 && self.deaths() == 0
    }
}

/// Compute the next generation
pub fn step(grid: &Grid) -> Grid {
    advance(grid).0
}

/// Compute the next generation along with a tally of what happened
pub fn advance(grid: &Grid) -> (Grid, StepStats) {
    let mut stats = StepStats::default();

    let next: Vec<Cell> = grid
        .iter()
        .map(|(coord, cell)| {
            let fate = fate(cell, grid.living_neighbors(coord));
            stats.record(fate);
            Cell::from(fate.is_alive())
        })
        .collect();

    (grid.with_cells(next), stats)
}
