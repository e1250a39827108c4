//! Flat view-buffer layout.
//! Must stay in sync with the TypeScript view reader.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Cells: 100 × 2 floats (letter code, flag bits)]
//! ```
//! The presentation layer reads the whole buffer after every tick and
//! renders from it; nothing in here is an input.

use crate::app::Keepsake;
use crate::puzzle::grid::{GRID_COLS, GRID_ROWS, WORDS};
use crate::puzzle::line::Cell;
use crate::puzzle::session::SessionPhase;
use crate::systems::stage::Stage;

/// Number of floats in the header section.
pub const VIEW_HEADER_FLOATS: usize = 16;
/// Floats per grid cell: letter code, flag bits.
pub const VIEW_CELL_FLOATS: usize = 2;
/// Total buffer size in floats.
pub const VIEW_TOTAL_FLOATS: usize = VIEW_HEADER_FLOATS + GRID_ROWS * GRID_COLS * VIEW_CELL_FLOATS;

/// Header field indices.
pub const VIEW_STAGE: usize = 0;
pub const VIEW_OPEN_ENVELOPE: usize = 1;
pub const VIEW_FOUND_COUNT: usize = 2;
pub const VIEW_WORD_TOTAL: usize = 3;
/// 0 none, otherwise a feedback kind code.
pub const VIEW_NOTIFICATION_KIND: usize = 4;
/// Image index in the kind's pool, or -1.
pub const VIEW_NOTIFICATION_IMAGE: usize = 5;
/// Sound index in the kind's pool, or -1.
pub const VIEW_NOTIFICATION_SOUND: usize = 6;
/// 1 while a drag is in flight.
pub const VIEW_SELECTING: usize = 7;
/// 1 while input is dropped (flip in flight).
pub const VIEW_INPUT_LOCKED: usize = 8;
/// Seconds left on the in-flight flip, or 0.
pub const VIEW_FLIP_REMAINING: usize = 9;

/// Cell flag bits.
pub const CELL_SELECTED: u32 = 1;
pub const CELL_FOUND: u32 = 2;

/// Write the full presentation snapshot. The slice must hold at least
/// `VIEW_TOTAL_FLOATS` values.
pub fn write_view(app: &Keepsake, view: &mut [f32]) {
    for slot in view.iter_mut() {
        *slot = 0.0;
    }

    view[VIEW_STAGE] = app.stage().code();
    if let Stage::Envelopes { open } = app.stage() {
        view[VIEW_OPEN_ENVELOPE] = open.code();
    }
    view[VIEW_WORD_TOTAL] = WORDS.len() as f32;
    view[VIEW_NOTIFICATION_IMAGE] = -1.0;
    view[VIEW_NOTIFICATION_SOUND] = -1.0;
    view[VIEW_INPUT_LOCKED] = if app.input_locked() { 1.0 } else { 0.0 };
    view[VIEW_FLIP_REMAINING] = app.flip_remaining();

    let Some(session) = app.puzzle() else {
        return;
    };

    view[VIEW_FOUND_COUNT] = session.found_words().len() as f32;
    view[VIEW_SELECTING] = if session.phase() == SessionPhase::Selecting {
        1.0
    } else {
        0.0
    };
    if let Some(notification) = session.notification() {
        view[VIEW_NOTIFICATION_KIND] = notification.kind().code();
        if let Some(image) = notification.image() {
            view[VIEW_NOTIFICATION_IMAGE] = image as f32;
        }
        if let Some(sound) = notification.sound() {
            view[VIEW_NOTIFICATION_SOUND] = sound as f32;
        }
    }

    let grid = session.grid();
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            let base = VIEW_HEADER_FLOATS + (row * GRID_COLS + col) * VIEW_CELL_FLOATS;
            view[base] = grid.letter_at(row, col) as u32 as f32;
        }
    }
    for cell in session.selection_cells() {
        flag(view, cell, CELL_SELECTED);
    }
    for cell in session.found_cells() {
        flag(view, cell, CELL_FOUND);
    }
}

fn flag(view: &mut [f32], cell: Cell, bit: u32) {
    let base = VIEW_HEADER_FLOATS + (cell.row * GRID_COLS + cell.col) * VIEW_CELL_FLOATS;
    view[base + 1] = (view[base + 1] as u32 | bit) as f32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::experience::{AppContext, Experience};
    use crate::input::queue::{ClickTarget, InputEvent, InputQueue};
    use crate::puzzle::grid::PLACEMENTS;

    fn app_on_puzzle() -> (Keepsake, AppContext) {
        let mut app = Keepsake::new();
        let mut ctx = AppContext::new(42);
        app.init(&mut ctx);
        let mut input = InputQueue::new();
        input.push(InputEvent::BackgroundTap);
        app.update(&mut ctx, &input, 0.016);
        input.drain();
        input.push(InputEvent::Click { target: ClickTarget::Okay });
        app.update(&mut ctx, &input, 0.016);
        input.drain();
        for _ in 0..3 {
            input.push(InputEvent::Click { target: ClickTarget::EnvelopeOne });
        }
        app.update(&mut ctx, &input, 0.016);
        input.drain();
        (app, ctx)
    }

    #[test]
    fn header_reflects_the_stage() {
        let app = Keepsake::new();
        let mut view = [0.0f32; VIEW_TOTAL_FLOATS];
        app.render(&mut view);
        assert_eq!(view[VIEW_STAGE], Stage::Intro.code());
        assert_eq!(view[VIEW_NOTIFICATION_KIND], 0.0);
        assert_eq!(view[VIEW_NOTIFICATION_IMAGE], -1.0);
    }

    #[test]
    fn grid_letters_and_found_flags_land_in_cells() {
        let (mut app, mut ctx) = app_on_puzzle();
        let placement = &PLACEMENTS[0];
        let cells: Vec<Cell> = placement.cells().collect();
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { cell: Some(cells[0]) });
        input.push(InputEvent::PointerMove { cell: Some(*cells.last().unwrap()) });
        input.push(InputEvent::PointerUp);
        app.update(&mut ctx, &input, 0.016);

        let mut view = [0.0f32; VIEW_TOTAL_FLOATS];
        app.render(&mut view);
        assert_eq!(view[VIEW_FOUND_COUNT], 1.0);
        for (i, cell) in cells.iter().enumerate() {
            let base = VIEW_HEADER_FLOATS + (cell.row * GRID_COLS + cell.col) * VIEW_CELL_FLOATS;
            assert_eq!(view[base] as u8 as char, placement.word.as_bytes()[i] as char);
            assert_eq!(view[base + 1] as u32 & CELL_FOUND, CELL_FOUND);
        }
        // Feedback is showing for the found word.
        assert_ne!(view[VIEW_NOTIFICATION_KIND], 0.0);
    }

    #[test]
    fn selection_flags_track_the_drag() {
        let (mut app, mut ctx) = app_on_puzzle();
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { cell: Some(Cell::new(5, 1)) });
        input.push(InputEvent::PointerMove { cell: Some(Cell::new(5, 3)) });
        app.update(&mut ctx, &input, 0.016);

        let mut view = [0.0f32; VIEW_TOTAL_FLOATS];
        app.render(&mut view);
        assert_eq!(view[VIEW_SELECTING], 1.0);
        for col in 1..=3 {
            let base = VIEW_HEADER_FLOATS + (5 * GRID_COLS + col) * VIEW_CELL_FLOATS;
            assert_eq!(view[base + 1] as u32 & CELL_SELECTED, CELL_SELECTED);
        }
    }
}
