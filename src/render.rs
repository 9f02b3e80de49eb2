// src/render.rs

//! Raster output for decoded grids.
//!
//! Each grid cell becomes a scale x scale block of pixels: active cells
//! render black, inactive cells white. Scaling is plain block replication
//! (nearest-neighbor); there is no smoothing.

use std::path::Path;

use image::{GrayImage, Luma};
use log::debug;

use crate::grid::{Grid, GRID_SIZE};

const ACTIVE_PIXEL: u8 = 0;
const INACTIVE_PIXEL: u8 = 255;

/// Renders `grid` into a grayscale image of side `GRID_SIZE * scale`.
/// A scale of zero is treated as one.
pub fn rasterize(grid: &Grid, scale: u32) -> GrayImage {
    let scale = scale.max(1);
    let side = GRID_SIZE as u32 * scale;
    let mut img = GrayImage::from_pixel(side, side, Luma([INACTIVE_PIXEL]));
    for (row, col) in grid.active_cells() {
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(
                    col as u32 * scale + dx,
                    row as u32 * scale + dy,
                    Luma([ACTIVE_PIXEL]),
                );
            }
        }
    }
    img
}

/// Rasterizes `grid` and writes it as a PNG at `path`.
pub fn save_png(grid: &Grid, path: &Path, scale: u32) -> image::ImageResult<()> {
    let img = rasterize(grid, scale);
    debug!(
        "writing {}x{} raster to {}",
        img.width(),
        img.height(),
        path.display()
    );
    img.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raster_has_scaled_dimensions() {
        let img = rasterize(&Grid::zeroed(), 3);
        assert_eq!(img.dimensions(), (GRID_SIZE as u32 * 3, GRID_SIZE as u32 * 3));
    }

    #[test]
    fn zero_scale_is_treated_as_one() {
        let img = rasterize(&Grid::zeroed(), 0);
        assert_eq!(img.dimensions(), (GRID_SIZE as u32, GRID_SIZE as u32));
    }

    #[test]
    fn active_cells_are_black_on_white() {
        let mut grid = Grid::zeroed();
        grid.set(1, 2, true);
        let img = rasterize(&grid, 1);
        assert_eq!(img.get_pixel(2, 1).0[0], ACTIVE_PIXEL);
        assert_eq!(img.get_pixel(0, 0).0[0], INACTIVE_PIXEL);
    }

    #[test]
    fn scaled_cell_fills_its_whole_block() {
        let mut grid = Grid::zeroed();
        grid.set(0, 1, true);
        let img = rasterize(&grid, 4);
        for dy in 0..4 {
            for dx in 0..4 {
                assert_eq!(img.get_pixel(4 + dx, dy).0[0], ACTIVE_PIXEL);
            }
        }
        // The neighboring blocks stay white.
        assert_eq!(img.get_pixel(3, 0).0[0], INACTIVE_PIXEL);
        assert_eq!(img.get_pixel(8, 0).0[0], INACTIVE_PIXEL);
    }

    #[test]
    fn save_png_writes_a_readable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.png");
        let mut grid = Grid::zeroed();
        grid.set(10, 10, true);
        save_png(&grid, &path, 2).unwrap();

        let reloaded = image::open(&path).unwrap().to_luma8();
        assert_eq!(reloaded.dimensions(), (128, 128));
        assert_eq!(reloaded.get_pixel(20, 20).0[0], ACTIVE_PIXEL);
    }
}
