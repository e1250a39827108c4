use crate::api::experience::AppContext;
use crate::api::types::{
    AppEvent, SoundCommand, EVENT_NOTIFICATION_DISMISSED, EVENT_NOTIFICATION_SHOWN,
};
use crate::assets::catalog::FeedbackKind;
use crate::core::timer::Deadline;

/// Fallback when a sound is attached but its ended event never arrives.
const SOUND_FALLBACK_SECS: f32 = 5.0;
/// Display time when no sound is attached; the deadline is then the only
/// dismissal trigger.
const SILENT_SECS: f32 = 2.0;

/// A correct/wrong feedback card with randomly chosen media attachments.
///
/// Dismissal is a race between the attached sound finishing and the fallback
/// deadline; whichever fires first wins and the owner drops the notification,
/// which cancels the loser. While one of these is live, puzzle input is
/// blocked.
#[derive(Debug, Clone)]
pub struct Notification {
    kind: FeedbackKind,
    image: Option<u32>,
    sound: Option<u32>,
    deadline: Deadline,
}

impl Notification {
    /// Pick media from the kind's pools, start any attached sound, and arm
    /// the dismissal countdown. Empty pools are fine; the attachment is
    /// simply omitted.
    pub fn show(kind: FeedbackKind, ctx: &mut AppContext) -> Self {
        let image = ctx.assets.pick_image(kind, &mut ctx.rng);
        let sound = ctx.assets.pick_sound(kind, &mut ctx.rng);
        let deadline = Deadline::after(if sound.is_some() {
            SOUND_FALLBACK_SECS
        } else {
            SILENT_SECS
        });
        if let Some(index) = sound {
            ctx.emit_sound(SoundCommand::play(kind.code(), index));
        }
        ctx.emit_event(AppEvent::new(
            EVENT_NOTIFICATION_SHOWN,
            kind.code(),
            image.map_or(-1.0, |i| i as f32),
            sound.map_or(-1.0, |i| i as f32),
        ));
        Notification {
            kind,
            image,
            sound,
            deadline,
        }
    }

    pub fn kind(&self) -> FeedbackKind {
        self.kind
    }

    /// Chosen image index in the kind's pool, if any.
    pub fn image(&self) -> Option<u32> {
        self.image
    }

    /// Chosen sound index in the kind's pool, if any.
    pub fn sound(&self) -> Option<u32> {
        self.sound
    }

    pub fn has_sound(&self) -> bool {
        self.sound.is_some()
    }

    /// Advance the fallback countdown. True when the deadline fires.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.deadline.tick(dt)
    }

    /// Resolve the notification: cancel the pending deadline, stop and
    /// rewind any playback, and tell the presentation layer. Consumes self,
    /// so a notification can only ever resolve once.
    pub fn finish(mut self, ctx: &mut AppContext) {
        self.deadline.cancel();
        if self.sound.is_some() {
            ctx.emit_sound(SoundCommand::stop());
        }
        ctx.emit_event(AppEvent::new(
            EVENT_NOTIFICATION_DISMISSED,
            self.kind.code(),
            0.0,
            0.0,
        ));
    }
}
