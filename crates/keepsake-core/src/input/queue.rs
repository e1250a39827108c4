use crate::puzzle::line::Cell;

/// Named controls the presentation layer can report clicks on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    EnvelopeOne,
    EnvelopeTwo,
    Okay,
    Open,
    Skip,
}

impl ClickTarget {
    /// Decode the numeric target id used across the wasm boundary.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::EnvelopeOne),
            2 => Some(Self::EnvelopeTwo),
            3 => Some(Self::Okay),
            4 => Some(Self::Open),
            5 => Some(Self::Skip),
            _ => None,
        }
    }
}

/// Input event types the core understands. Pointer events arrive already
/// resolved to a grid cell (or none) by the presentation layer, which is
/// also responsible for mouse/touch parity and for filtering content-card
/// taps out of `BackgroundTap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A press began on the puzzle grid (or missed it: `cell` is None).
    PointerDown { cell: Option<Cell> },
    /// The pointer crossed into a cell mid-drag.
    PointerMove { cell: Option<Cell> },
    /// The press ended (anywhere).
    PointerUp,
    /// A discrete click on a named control.
    Click { target: ClickTarget },
    /// A tap that landed outside every content card.
    BackgroundTap,
    /// The notification audio finished playing.
    AudioEnded,
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
