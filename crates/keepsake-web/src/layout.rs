//! World-space geometry of the puzzle board.
//!
//! The presentation layer forwards pointer positions in world units; this
//! module is the pure `position -> cell` resolver the core never does
//! itself. The TypeScript renderer derives its card layout from the same
//! constants.

use glam::Vec2;
use keepsake_core::{Cell, GRID_COLS, GRID_ROWS};

/// World width in game units.
pub const WORLD_WIDTH: f32 = 800.0;
/// World height in game units.
pub const WORLD_HEIGHT: f32 = 600.0;
/// Edge length of one grid cell.
pub const TILE_SIZE: f32 = 48.0;

/// Top-left corner of the board, centered in the world.
pub const GRID_OFFSET_X: f32 = (WORLD_WIDTH - GRID_COLS as f32 * TILE_SIZE) / 2.0;
pub const GRID_OFFSET_Y: f32 = (WORLD_HEIGHT - GRID_ROWS as f32 * TILE_SIZE) / 2.0;

/// Convert world coordinates to the grid cell under them, if any.
pub fn resolve_cell(x: f32, y: f32) -> Option<Cell> {
    let col = ((x - GRID_OFFSET_X) / TILE_SIZE).floor() as i32;
    let row = ((y - GRID_OFFSET_Y) / TILE_SIZE).floor() as i32;
    if row >= 0 && row < GRID_ROWS as i32 && col >= 0 && col < GRID_COLS as i32 {
        Some(Cell::new(row as usize, col as usize))
    } else {
        None
    }
}

/// World-space center of a grid cell.
pub fn cell_center(cell: Cell) -> Vec2 {
    Vec2::new(
        GRID_OFFSET_X + cell.col as f32 * TILE_SIZE + TILE_SIZE * 0.5,
        GRID_OFFSET_Y + cell.row as f32 * TILE_SIZE + TILE_SIZE * 0.5,
    )
}
