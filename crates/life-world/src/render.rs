//! Plain-text rendering of a grid.

use crate::grid::Grid;
pub use life_core::RenderConfig;

/// Render `grid` row-major, one line per row, each cell as ` <glyph> `
pub fn render(grid: &Grid, config: &RenderConfig) -> String {
    let line_len = grid.width() as usize * 3 + 1;
    let mut output = String::with_capacity(line_len * grid.height() as usize);

    for (coord, cell) in grid.iter() {
        let glyph = if cell.is_alive() {
            config.alive_glyph
        } else {
            config.dead_glyph
        };
        output.push(' ');
        output.push(glyph);
        output.push(' ');

        if coord.col == grid.width() - 1 {
            output.push('\n');
        }
    }

    output
}
