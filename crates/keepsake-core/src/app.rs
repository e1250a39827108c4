use crate::api::experience::{AppContext, Experience};
use crate::api::types::{AppEvent, EVENT_PUZZLE_COMPLETE, EVENT_STAGE_CHANGED};
use crate::input::queue::{InputEvent, InputQueue};
use crate::puzzle::session::PuzzleSession;
use crate::systems::stage::{Stage, StageController};

/// Top-level composition: the navigation state machine plus, while the
/// word-search screen is up, one puzzle session. The session is created on
/// entering that screen and discarded on leaving it, so a fresh grid greets
/// every visit and no progress survives backing out.
pub struct Keepsake {
    stages: StageController,
    puzzle: Option<PuzzleSession>,
    clock: f64,
}

impl Keepsake {
    pub fn new() -> Self {
        Self {
            stages: StageController::new(),
            puzzle: None,
            clock: 0.0,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stages.stage()
    }

    pub fn puzzle(&self) -> Option<&PuzzleSession> {
        self.puzzle.as_ref()
    }

    pub fn input_locked(&self) -> bool {
        self.stages.input_locked()
    }

    pub fn flip_remaining(&self) -> f32 {
        self.stages.flip_remaining()
    }

    /// Align the session's existence with the current screen.
    fn sync_puzzle(&mut self, ctx: &mut AppContext) {
        let on_puzzle_screen = self.stages.stage() == Stage::WordSearch;
        if on_puzzle_screen && self.puzzle.is_none() {
            log::info!("starting word search with a fresh grid");
            self.puzzle = Some(PuzzleSession::new(&mut ctx.rng));
        } else if !on_puzzle_screen && self.puzzle.is_some() {
            if let Some(session) = self.puzzle.take() {
                session.abort(ctx);
            }
        }
    }

    /// The session's final feedback resolved with every word found.
    fn finish_puzzle(&mut self, ctx: &mut AppContext) {
        ctx.emit_event(AppEvent::new(EVENT_PUZZLE_COMPLETE, 0.0, 0.0, 0.0));
        self.stages.puzzle_complete(ctx);
        self.sync_puzzle(ctx);
    }
}

impl Experience for Keepsake {
    fn init(&mut self, ctx: &mut AppContext) {
        ctx.emit_event(AppEvent::new(
            EVENT_STAGE_CHANGED,
            self.stages.stage().code(),
            0.0,
            0.0,
        ));
    }

    fn update(&mut self, ctx: &mut AppContext, input: &InputQueue, dt: f32) {
        self.clock += dt as f64;

        // Timers first: a flip may land, a notification deadline may fire.
        self.stages.tick(dt, ctx);
        if let Some(session) = &mut self.puzzle {
            if session.tick(dt, ctx) {
                self.finish_puzzle(ctx);
            }
        }
        self.sync_puzzle(ctx);

        for event in input.iter() {
            // Transitions are exclusive: anything arriving mid-flip is
            // dropped, not queued.
            if self.stages.input_locked() {
                continue;
            }
            match *event {
                InputEvent::PointerDown { cell: Some(cell) } => {
                    if let Some(session) = self.puzzle.as_mut() {
                        session.pointer_down(cell);
                    }
                }
                InputEvent::PointerMove { cell: Some(cell) } => {
                    if let Some(session) = self.puzzle.as_mut() {
                        session.pointer_move(cell);
                    }
                }
                InputEvent::PointerDown { cell: None } | InputEvent::PointerMove { cell: None } => {}
                InputEvent::PointerUp => {
                    if let Some(session) = self.puzzle.as_mut() {
                        session.pointer_up(ctx);
                    }
                }
                InputEvent::Click { target } => {
                    self.stages.click(target, self.clock, ctx);
                    self.sync_puzzle(ctx);
                }
                InputEvent::BackgroundTap => {
                    self.stages.background_tap(self.clock, ctx);
                    self.sync_puzzle(ctx);
                }
                InputEvent::AudioEnded => {
                    if let Some(session) = self.puzzle.as_mut() {
                        if session.audio_ended(ctx) {
                            self.finish_puzzle(ctx);
                        }
                    }
                }
            }
        }
    }

    fn render(&self, view: &mut [f32]) {
        crate::view::write_view(self, view);
    }
}

impl Default for Keepsake {
    fn default() -> Self {
        Self::new()
    }
}
