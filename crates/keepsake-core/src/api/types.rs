use bytemuck::{Pod, Zeroable};

/// An event communicated from Rust to the presentation layer via linear
/// memory. Generic container: `kind` identifies the event, `a/b/c` carry
/// payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct AppEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl AppEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        AppEvent { kind, a, b, c }
    }
}

/// `a` = new stage code.
pub const EVENT_STAGE_CHANGED: f32 = 1.0;
/// `a` = found count, `b` = word total.
pub const EVENT_WORD_FOUND: f32 = 2.0;
/// All words found and the final feedback has resolved.
pub const EVENT_PUZZLE_COMPLETE: f32 = 3.0;
/// `a` = feedback kind code, `b` = image index or -1, `c` = sound index or -1.
pub const EVENT_NOTIFICATION_SHOWN: f32 = 4.0;
/// `a` = feedback kind code.
pub const EVENT_NOTIFICATION_DISMISSED: f32 = 5.0;

/// A playback command for the presentation layer's audio element.
/// The audio element is exclusive to one notification at a time, so the
/// command stream never interleaves two playbacks.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SoundCommand {
    pub op: f32,
    /// Feedback kind code selecting the pool (play only).
    pub kind: f32,
    /// Index into that pool (play only).
    pub index: f32,
}

pub const SOUND_OP_PLAY: f32 = 1.0;
/// Stop playback and rewind to the start.
pub const SOUND_OP_STOP: f32 = 2.0;

impl SoundCommand {
    pub const FLOATS: usize = 3;

    pub fn play(kind: f32, index: u32) -> Self {
        SoundCommand {
            op: SOUND_OP_PLAY,
            kind,
            index: index as f32,
        }
    }

    pub fn stop() -> Self {
        SoundCommand {
            op: SOUND_OP_STOP,
            kind: 0.0,
            index: 0.0,
        }
    }
}
