// src/codec/encoder.rs

//! Turns a grid into a command stream.
//!
//! Emission order is fixed: optional orientation flag, one cell command per
//! active cell in row-major order, then at most two square commands for the
//! first patterns the finder reports.

use log::debug;

use super::token::{Command, ORIENTATION_FLAG};
use crate::grid::Grid;
use crate::pattern::find_patterns;

/// Maximum number of square commands per stream.
const MAX_SQUARE_COMMANDS: usize = 2;

// Square commands always carry the same transform descriptor; only position
// and size vary with the discovered pattern. The fields do not describe a
// transform that reconstructs the square and must not be "corrected" to one.
const SQUARE_QUARTER_TURNS: i32 = 1; // 90 degrees
const SQUARE_MIRROR: bool = false;
const SQUARE_LOG_STRIDE: i32 = 1; // stride 2

/// Encodes `grid` into its textual command stream.
pub fn encode(grid: &Grid) -> String {
    // Orientation heuristic: prefer whichever of the grid and its 90-degree
    // rotation has strictly fewer active cells.
    let rotated = grid.rotate_cw_90();
    let flagged = rotated.population_count() < grid.population_count();
    let working = if flagged { &rotated } else { grid };
    debug!(
        "encoding grid: population={}, rotated={}",
        working.population_count(),
        flagged
    );

    let mut out = String::new();
    if flagged {
        out.push(ORIENTATION_FLAG as char);
    }

    for (row, col) in working.active_cells() {
        Command::Cell {
            row: row as i32,
            col: col as i32,
        }
        .push_encoded(&mut out);
    }

    for pattern in find_patterns(working)
        .into_iter()
        .take(MAX_SQUARE_COMMANDS)
    {
        Command::Square {
            row: pattern.row as i32,
            col: pattern.col as i32,
            size: pattern.size as i32,
            quarter_turns: SQUARE_QUARTER_TURNS,
            mirror: SQUARE_MIRROR,
            log_stride: SQUARE_LOG_STRIDE,
        }
        .push_encoded(&mut out);
    }

    out
}
