// src/codec/decoder.rs

//! Reconstructs a grid from a command stream.
//!
//! The scanner is permissive throughout: unknown bytes are skipped, commands
//! whose targets fall outside the grid stamp nothing, and a command truncated
//! by the end of the stream ends the scan. Malformed input never raises an
//! error; it decodes to whatever its recognizable commands describe.

use log::{trace, warn};

use super::token::{
    field_value, Command, CELL_COMMAND, CELL_FIELDS, ORIENTATION_FLAG, SQUARE_COMMAND,
    SQUARE_FIELDS,
};
use crate::grid::{Grid, GRID_SIZE};

/// A stride whose first nonzero multiple already lies past the far edge of
/// the grid from any corner a one-byte field can express (-48..=207).
/// Stands in for every exponent outside the representable range 0..=6.
const OUT_OF_GRID_STRIDE: i64 = 128;

/// Walks the byte stream and yields one [`Command`] per recognized token.
///
/// Position advance is driven entirely by the command byte: 3 bytes per cell
/// command, 7 per square command, 1 per unrecognized byte.
struct CommandScanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> CommandScanner<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        CommandScanner { bytes, pos: 0 }
    }

    /// Reads `count` field bytes after the command byte at `self.pos`, or
    /// `None` when the stream ends mid-command.
    fn fields(&self, count: usize) -> Option<&'a [u8]> {
        self.bytes.get(self.pos + 1..self.pos + 1 + count)
    }
}

impl Iterator for CommandScanner<'_> {
    type Item = Command;

    fn next(&mut self) -> Option<Command> {
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                CELL_COMMAND => {
                    let Some(f) = self.fields(CELL_FIELDS) else {
                        warn!("stream ends inside a cell command; stopping");
                        self.pos = self.bytes.len();
                        return None;
                    };
                    self.pos += 1 + CELL_FIELDS;
                    return Some(Command::Cell {
                        row: field_value(f[0]),
                        col: field_value(f[1]),
                    });
                }
                SQUARE_COMMAND => {
                    let Some(f) = self.fields(SQUARE_FIELDS) else {
                        warn!("stream ends inside a square command; stopping");
                        self.pos = self.bytes.len();
                        return None;
                    };
                    self.pos += 1 + SQUARE_FIELDS;
                    return Some(Command::Square {
                        row: field_value(f[0]),
                        col: field_value(f[1]),
                        size: field_value(f[2]),
                        quarter_turns: field_value(f[3]),
                        mirror: field_value(f[4]) != 0,
                        log_stride: field_value(f[5]),
                    });
                }
                other => {
                    trace!("skipping unrecognized stream byte {:#04x}", other);
                    self.pos += 1;
                }
            }
        }
        None
    }
}

/// Decodes a command stream into a grid.
pub fn decode(stream: &str) -> Grid {
    let mut bytes = stream.as_bytes();
    let mut needs_unrotate = false;
    if bytes.first() == Some(&ORIENTATION_FLAG) {
        needs_unrotate = true;
        bytes = &bytes[1..];
    }

    let mut grid = Grid::zeroed();
    for command in CommandScanner::new(bytes) {
        apply(&mut grid, command);
    }

    if needs_unrotate {
        grid.rotate_cw_270()
    } else {
        grid
    }
}

fn apply(grid: &mut Grid, command: Command) {
    match command {
        Command::Cell { row, col } => {
            if in_bounds(row as i64) && in_bounds(col as i64) {
                grid.set(row as usize, col as usize, true);
            } else {
                trace!("cell command out of bounds: ({}, {})", row, col);
            }
        }
        Command::Square {
            row,
            col,
            size,
            quarter_turns,
            mirror,
            log_stride,
        } => stamp_square(grid, row, col, size, quarter_turns, mirror, log_stride),
    }
}

/// Regenerates a filled square, re-applies the command's transform, and
/// stamps it onto the grid with the given coordinate stride. Cells landing
/// outside the grid are dropped.
fn stamp_square(
    grid: &mut Grid,
    row: i32,
    col: i32,
    size: i32,
    quarter_turns: i32,
    mirror: bool,
    log_stride: i32,
) {
    if size <= 0 {
        trace!("square command with empty size {}; nothing to stamp", size);
        return;
    }
    let size = size as usize;

    let mut square = vec![vec![true; size]; size];
    // Negative turn counts rotate zero times; rotation is cyclic in 4.
    for _ in 0..quarter_turns.max(0) % 4 {
        square = rotate_square_cw(&square);
    }
    if mirror {
        for line in &mut square {
            line.reverse();
        }
    }

    let stride = if (0..=6).contains(&log_stride) {
        1i64 << log_stride
    } else {
        OUT_OF_GRID_STRIDE
    };

    for (di, line) in square.iter().enumerate() {
        for (dj, &cell) in line.iter().enumerate() {
            let target_row = row as i64 + di as i64 * stride;
            let target_col = col as i64 + dj as i64 * stride;
            if in_bounds(target_row) && in_bounds(target_col) {
                grid.set(target_row as usize, target_col as usize, cell);
            }
        }
    }
}

fn rotate_square_cw(square: &[Vec<bool>]) -> Vec<Vec<bool>> {
    let n = square.len();
    let mut out = vec![vec![false; n]; n];
    for (r, line) in square.iter().enumerate() {
        for (c, &cell) in line.iter().enumerate() {
            out[c][n - 1 - r] = cell;
        }
    }
    out
}

#[inline]
fn in_bounds(coord: i64) -> bool {
    (0..GRID_SIZE as i64).contains(&coord)
}
