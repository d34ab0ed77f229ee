//! Plain-text rendering of a [`Maze`] from its wall set.
//!
//! Each cell is two characters wide. Corners are `+`, horizontal walls `--`
//! and vertical walls `|`. The outer border is always drawn. Unvisited cells
//! are shaded `::`, so partially carved frames show the growing maze.

use maze_gen_core::maze::UNVISITED;
use maze_gen_core::{Cell, Maze};

/// Renders the maze as `2 * height + 1` newline-terminated lines.
pub fn render_text(maze: &Maze) -> String {
    let (w, h) = (maze.width(), maze.height());
    let walled = |a: Cell, b: Cell| maze.has_wall(a, b).unwrap_or(true);

    let mut out = String::with_capacity((3 * w + 2) * (2 * h + 1));
    out.push('+');
    out.push_str(&"--+".repeat(w));
    out.push('\n');

    for y in 0..h {
        out.push('|');
        for x in 0..w {
            let cell = Cell::new(x, y);
            let shaded = maze.node_value(cell) == Ok(UNVISITED);
            out.push_str(if shaded { "::" } else { "  " });
            let east = x + 1 == w || walled(cell, Cell::new(x + 1, y));
            out.push(if east { '|' } else { ' ' });
        }
        out.push('\n');

        out.push('+');
        for x in 0..w {
            let cell = Cell::new(x, y);
            let south = y + 1 == h || walled(cell, Cell::new(x, y + 1));
            out.push_str(if south { "--+" } else { "  +" });
        }
        out.push('\n');
    }
    out
}
