//! Terminal output for rendered frames.

use life_world::{render, render::RenderConfig, Grid};
use std::io::{self, Write};

/// Clear the screen and move the cursor home
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub struct Console<W: Write> {
    out: W,
    config: RenderConfig,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, config: RenderConfig) -> Self {
        Self { out, config }
    }

    /// Replace whatever is on screen with `grid`
    pub fn present(&mut self, grid: &Grid) -> io::Result<()> {
        self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        self.out.write_all(render(grid, &self.config).as_bytes())?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
