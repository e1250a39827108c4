/// One-shot countdown. `tick` reports `true` exactly once, on the tick the
/// remaining time crosses zero; an idle or cancelled deadline never fires.
///
/// This is one half of the event-or-timeout races the experience runs: the
/// other trigger (an audio-ended event, a stage change) wins by calling
/// `cancel` before the countdown elapses.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deadline {
    remaining: f32,
    armed: bool,
}

impl Deadline {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn after(secs: f32) -> Self {
        Deadline {
            remaining: secs,
            armed: true,
        }
    }

    /// Start (or restart) the countdown.
    pub fn arm(&mut self, secs: f32) {
        self.remaining = secs;
        self.armed = true;
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.remaining = 0.0;
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Seconds left, or 0 when idle.
    pub fn remaining(&self) -> f32 {
        if self.armed {
            self.remaining
        } else {
            0.0
        }
    }

    /// Advance the countdown. True exactly when it fires.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.armed {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.armed = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_once() {
        let mut d = Deadline::after(1.0);
        assert!(!d.tick(0.5));
        assert!(d.tick(0.6));
        assert!(!d.tick(10.0));
        assert!(!d.is_armed());
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut d = Deadline::after(1.0);
        d.cancel();
        assert!(!d.tick(2.0));
        assert_eq!(d.remaining(), 0.0);
    }

    #[test]
    fn idle_never_fires() {
        let mut d = Deadline::idle();
        assert!(!d.tick(100.0));
    }

    #[test]
    fn rearm_restarts_countdown() {
        let mut d = Deadline::after(1.0);
        assert!(d.tick(1.5));
        d.arm(0.7);
        assert!(d.is_armed());
        assert!(!d.tick(0.5));
        assert!(d.tick(0.3));
    }
}
