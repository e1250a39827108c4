use keepsake_core::{
    AppContext, AssetCatalog, AssetManifest, Experience, ExperienceConfig, FeedbackKind,
    InputEvent, InputQueue, VIEW_TOTAL_FLOATS,
};

/// Longest frame delta fed to the logic. Anything slower (hidden tab,
/// debugger pause) is clamped so gesture windows and deadlines do not leap.
const MAX_FRAME_SECS: f32 = 0.25;

/// Generic runner that wires an experience to the browser frame loop.
///
/// The concrete app creates a `thread_local!` AppRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct AppRunner<E: Experience> {
    app: E,
    ctx: AppContext,
    input: InputQueue,
    view: Vec<f32>,
    config: ExperienceConfig,
    initialized: bool,
}

impl<E: Experience> AppRunner<E> {
    pub fn new(app: E, seed: u64) -> Self {
        let config = app.config();
        Self {
            app,
            ctx: AppContext::new(seed),
            input: InputQueue::new(),
            view: vec![0.0; VIEW_TOTAL_FLOATS],
            config,
            initialized: false,
        }
    }

    /// Initialize the experience. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.app.config();
        self.app.init(&mut self.ctx);
        self.app.render(&mut self.view);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Swap in the categorized media pools. Malformed JSON is logged and
    /// ignored, leaving the previous catalog in place.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                self.ctx.assets = AssetCatalog::from_manifest(&manifest);
                log::info!(
                    "asset manifest loaded: {}+{} images, {}+{} sounds",
                    self.ctx.assets.image_count(FeedbackKind::Correct),
                    self.ctx.assets.image_count(FeedbackKind::Wrong),
                    self.ctx.assets.sound_count(FeedbackKind::Correct),
                    self.ctx.assets.sound_count(FeedbackKind::Wrong),
                );
            }
            Err(err) => log::warn!("ignoring malformed asset manifest: {err}"),
        }
    }

    /// Run one frame tick: update the logic, drain input, rebuild the view.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }
        self.ctx.clear_frame_data();
        let dt = dt.clamp(0.0, MAX_FRAME_SECS);
        self.app.update(&mut self.ctx, &self.input, dt);
        self.input.drain();

        self.ctx.events.truncate(self.config.max_events);
        self.ctx.sounds.truncate(self.config.max_sounds);

        self.app.render(&mut self.view);
    }

    // ---- Pointer accessors for linear-memory reads ----

    pub fn view_ptr(&self) -> *const f32 {
        self.view.as_ptr()
    }

    pub fn view_floats(&self) -> u32 {
        self.view.len() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn sounds_ptr(&self) -> *const f32 {
        self.ctx.sounds.as_ptr() as *const f32
    }

    pub fn sounds_len(&self) -> u32 {
        self.ctx.sounds.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{cell_center, resolve_cell};
    use keepsake_core::view::{VIEW_FOUND_COUNT, VIEW_STAGE};
    use keepsake_core::{Cell, ClickTarget, Keepsake, Stage, PLACEMENTS};

    fn runner_on_puzzle() -> AppRunner<Keepsake> {
        let mut runner = AppRunner::new(Keepsake::new(), 42);
        runner.init();
        runner.push_input(InputEvent::BackgroundTap);
        runner.tick(0.016);
        runner.push_input(InputEvent::Click {
            target: ClickTarget::Okay,
        });
        runner.tick(0.016);
        for _ in 0..3 {
            runner.push_input(InputEvent::Click {
                target: ClickTarget::EnvelopeOne,
            });
        }
        runner.tick(0.016);
        runner
    }

    #[test]
    fn ticks_before_init_are_ignored() {
        let mut runner = AppRunner::new(Keepsake::new(), 1);
        runner.tick(0.016);
        assert_eq!(runner.events_len(), 0);
    }

    #[test]
    fn input_drives_the_experience_through_the_queue() {
        let runner = runner_on_puzzle();
        let stage = runner.view[VIEW_STAGE];
        assert_eq!(stage, Stage::WordSearch.code());
    }

    #[test]
    fn pointer_coordinates_resolve_to_cells_and_find_words() {
        let mut runner = runner_on_puzzle();
        let placement = PLACEMENTS
            .iter()
            .find(|p| p.word == "BURGER")
            .unwrap();
        let cells: Vec<Cell> = placement.cells().collect();
        let start = cell_center(cells[0]);
        let end = cell_center(*cells.last().unwrap());
        assert_eq!(resolve_cell(start.x, start.y), Some(cells[0]));

        runner.push_input(InputEvent::PointerDown {
            cell: resolve_cell(start.x, start.y),
        });
        runner.push_input(InputEvent::PointerMove {
            cell: resolve_cell(end.x, end.y),
        });
        runner.push_input(InputEvent::PointerUp);
        runner.tick(0.016);
        assert_eq!(runner.view[VIEW_FOUND_COUNT], 1.0);
        // The correct-feedback notification reached the wire.
        assert!(runner.events_len() > 0);
    }

    #[test]
    fn frame_spikes_are_clamped() {
        let mut runner = runner_on_puzzle();
        // A huge delta must not skip gesture windows into absurd territory.
        runner.tick(100.0);
        assert_eq!(runner.view[VIEW_STAGE], Stage::WordSearch.code());
    }
}
