//! Well-known seed patterns.

/// Live cells of a pattern as (row, col) offsets from its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// Bounding box as (rows, cols)
    pub fn extent(&self) -> (i32, i32) {
        let rows = self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0);
        let cols = self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0);
        (rows, cols)
    }
}

pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BEEHIVE: Pattern = Pattern {
    name: "beehive",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)],
};

/// Horizontal phase
pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)],
};

/// Travels down and to the right
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const ALL: &[Pattern] = &[BLOCK, BEEHIVE, BLINKER, TOAD, BEACON, GLIDER];

/// Look up a pattern by name, ignoring case
pub fn find(name: &str) -> Option<&'static Pattern> {
    ALL.iter().find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}
