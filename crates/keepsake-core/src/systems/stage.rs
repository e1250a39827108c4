use crate::api::experience::AppContext;
use crate::api::types::{AppEvent, EVENT_STAGE_CHANGED};
use crate::core::timer::Deadline;
use crate::input::queue::ClickTarget;
use crate::systems::gesture::GestureRecognizer;

/// Which envelope is held open on the envelope screen. At most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenEnvelope {
    #[default]
    None,
    One,
    Two,
}

impl OpenEnvelope {
    pub fn code(self) -> f32 {
        match self {
            OpenEnvelope::None => 0.0,
            OpenEnvelope::One => 1.0,
            OpenEnvelope::Two => 2.0,
        }
    }
}

/// One discrete screen of the experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Intro,
    Greeted,
    Envelopes { open: OpenEnvelope },
    WordSearch,
    Gate,
    NoteFlipIn,
    NoteOpen,
    NoteFlipOut,
}

impl Stage {
    /// Numeric code used in wire events and the view buffer.
    pub fn code(self) -> f32 {
        match self {
            Stage::Intro => 0.0,
            Stage::Greeted => 1.0,
            Stage::Envelopes { .. } => 2.0,
            Stage::WordSearch => 3.0,
            Stage::Gate => 4.0,
            Stage::NoteFlipIn => 5.0,
            Stage::NoteOpen => 6.0,
            Stage::NoteFlipOut => 7.0,
        }
    }

    /// A note flip transition is in flight.
    pub fn is_flip(self) -> bool {
        matches!(self, Stage::NoteFlipIn | Stage::NoteFlipOut)
    }
}

/// Seconds a note flip transition stays in flight.
const FLIP_SECS: f32 = 0.7;
/// Rolling window for the envelope triple-click.
const ENVELOPE_WINDOW_SECS: f64 = 0.4;
/// Rolling window for the background triple-tap.
const BACKGROUND_WINDOW_SECS: f64 = 0.5;
/// Repeats required to trigger a hidden navigation gesture.
const ACTIVATION_TAPS: u32 = 3;

/// The navigation state machine. Sole writer of the current stage; driven
/// by clicks, background taps, the puzzle-complete signal and the flip
/// timer.
pub struct StageController {
    stage: Stage,
    flip: Deadline,
    envelope_clicks: GestureRecognizer,
    background_taps: GestureRecognizer,
}

impl StageController {
    pub fn new() -> Self {
        Self {
            stage: Stage::Intro,
            flip: Deadline::idle(),
            envelope_clicks: GestureRecognizer::scoped(ENVELOPE_WINDOW_SECS, ACTIVATION_TAPS),
            background_taps: GestureRecognizer::new(BACKGROUND_WINDOW_SECS, ACTIVATION_TAPS),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// All input is dropped wholesale while a flip transition is in flight.
    pub fn input_locked(&self) -> bool {
        self.stage.is_flip()
    }

    /// Seconds left on the in-flight flip, or 0.
    pub fn flip_remaining(&self) -> f32 {
        self.flip.remaining()
    }

    fn goto(&mut self, next: Stage, ctx: &mut AppContext) {
        let screen_changed =
            std::mem::discriminant(&self.stage) != std::mem::discriminant(&next);
        log::debug!("stage {:?} -> {next:?}", self.stage);
        self.stage = next;
        if screen_changed {
            // Partial gesture counts must not leak into the next screen.
            self.envelope_clicks.reset();
            self.background_taps.reset();
        }
        ctx.emit_event(AppEvent::new(EVENT_STAGE_CHANGED, next.code(), 0.0, 0.0));
    }

    /// Advance the flip timer, landing the transition when it elapses.
    pub fn tick(&mut self, dt: f32, ctx: &mut AppContext) {
        if self.flip.tick(dt) {
            match self.stage {
                Stage::NoteFlipIn => self.goto(Stage::NoteOpen, ctx),
                Stage::NoteFlipOut => self.goto(Stage::Gate, ctx),
                _ => {}
            }
        }
    }

    /// A tap that landed outside every content card.
    pub fn background_tap(&mut self, now: f64, ctx: &mut AppContext) {
        match self.stage {
            // The opening screen advances on a single tap anywhere.
            Stage::Intro => self.goto(Stage::Greeted, ctx),
            // Backing out of the puzzle or the gate is a full reset to the
            // envelope choice; puzzle progress and the passed gate are gone.
            Stage::WordSearch | Stage::Gate => {
                if self.background_taps.tap(now) {
                    self.goto(
                        Stage::Envelopes {
                            open: OpenEnvelope::None,
                        },
                        ctx,
                    );
                }
            }
            // Backing out of the open note is a local step: flip shut,
            // back to the gate.
            Stage::NoteOpen => {
                if self.background_taps.tap(now) {
                    self.flip.arm(FLIP_SECS);
                    self.goto(Stage::NoteFlipOut, ctx);
                }
            }
            _ => {}
        }
    }

    /// A click on a named control.
    pub fn click(&mut self, target: ClickTarget, now: f64, ctx: &mut AppContext) {
        match (self.stage, target) {
            (Stage::Greeted, ClickTarget::Okay) => {
                self.goto(
                    Stage::Envelopes {
                        open: OpenEnvelope::None,
                    },
                    ctx,
                );
            }
            (
                Stage::Envelopes { open },
                ClickTarget::EnvelopeOne | ClickTarget::EnvelopeTwo,
            ) => {
                let envelope = if target == ClickTarget::EnvelopeOne {
                    OpenEnvelope::One
                } else {
                    OpenEnvelope::Two
                };
                let fired = self
                    .envelope_clicks
                    .observe(envelope.code() as u32, now);
                // Only envelope one hides the puzzle behind its triple-click.
                if fired && envelope == OpenEnvelope::One {
                    self.goto(Stage::WordSearch, ctx);
                } else {
                    // The open/close toggle applies on every click, whatever
                    // the triple-click counter says. Opening one envelope
                    // closes the other.
                    let open = if open == envelope {
                        OpenEnvelope::None
                    } else {
                        envelope
                    };
                    self.goto(Stage::Envelopes { open }, ctx);
                }
            }
            (Stage::WordSearch, ClickTarget::Skip) => self.goto(Stage::Gate, ctx),
            (Stage::Gate, ClickTarget::Open) => {
                self.flip.arm(FLIP_SECS);
                self.goto(Stage::NoteFlipIn, ctx);
            }
            _ => {}
        }
    }

    /// The puzzle reported completion (after its final feedback resolved).
    pub fn puzzle_complete(&mut self, ctx: &mut AppContext) {
        if self.stage == Stage::WordSearch {
            self.goto(Stage::Gate, ctx);
        }
    }
}

impl Default for StageController {
    fn default() -> Self {
        Self::new()
    }
}
