pub mod layout;
pub mod runner;

pub use runner::AppRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use keepsake_core::{ClickTarget, InputEvent, Keepsake};

use crate::layout::resolve_cell;

thread_local! {
    static RUNNER: RefCell<Option<AppRunner<Keepsake>>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut AppRunner<Keepsake>) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("App not initialized. Call app_init() first.");
        f(runner)
    })
}

/// Build and initialize the experience. `seed` of 0 derives one from the
/// wall clock so every visit gets a different grid.
#[wasm_bindgen]
pub fn app_init(seed: u32) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let seed = if seed != 0 {
        seed as u64
    } else {
        js_sys::Date::now() as u64
    };
    let mut runner = AppRunner::new(Keepsake::new(), seed);
    runner.init();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("keepsake: initialized");
}

#[wasm_bindgen]
pub fn app_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn app_load_manifest(json: &str) {
    with_runner(|r| r.load_manifest(json));
}

// ---- Input ----

#[wasm_bindgen]
pub fn app_pointer_down(x: f32, y: f32) {
    with_runner(|r| {
        r.push_input(InputEvent::PointerDown {
            cell: resolve_cell(x, y),
        })
    });
}

#[wasm_bindgen]
pub fn app_pointer_move(x: f32, y: f32) {
    with_runner(|r| {
        r.push_input(InputEvent::PointerMove {
            cell: resolve_cell(x, y),
        })
    });
}

#[wasm_bindgen]
pub fn app_pointer_up() {
    with_runner(|r| r.push_input(InputEvent::PointerUp));
}

/// A click on a named control; unknown target codes are dropped.
#[wasm_bindgen]
pub fn app_click(target: u32) {
    if let Some(target) = ClickTarget::from_code(target) {
        with_runner(|r| r.push_input(InputEvent::Click { target }));
    } else {
        log::warn!("dropping click with unknown target code {target}");
    }
}

/// A tap that landed outside every content card. The presentation layer is
/// responsible for that filtering (and for mouse/touch parity).
#[wasm_bindgen]
pub fn app_background_tap() {
    with_runner(|r| r.push_input(InputEvent::BackgroundTap));
}

/// The notification audio finished playing.
#[wasm_bindgen]
pub fn app_audio_ended() {
    with_runner(|r| r.push_input(InputEvent::AudioEnded));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_view_ptr() -> *const f32 {
    with_runner(|r| r.view_ptr())
}

#[wasm_bindgen]
pub fn get_view_floats() -> u32 {
    with_runner(|r| r.view_floats())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len())
}

#[wasm_bindgen]
pub fn get_sounds_ptr() -> *const f32 {
    with_runner(|r| r.sounds_ptr())
}

#[wasm_bindgen]
pub fn get_sounds_len() -> u32 {
    with_runner(|r| r.sounds_len())
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    layout::WORLD_WIDTH
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    layout::WORLD_HEIGHT
}
