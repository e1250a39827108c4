/// Generic repeated-activation detector: N qualifying inputs inside a
/// rolling time window. A scoped recognizer additionally tracks a target
/// key, and switching targets restarts the count instead of accumulating
/// across them.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    window: f64,
    threshold: u32,
    scoped: bool,
    count: u32,
    last: f64,
    active_key: Option<u32>,
}

impl GestureRecognizer {
    /// Unscoped recognizer: every qualifying input counts, whatever it hit.
    pub fn new(window: f64, threshold: u32) -> Self {
        Self {
            window,
            threshold,
            scoped: false,
            count: 0,
            last: 0.0,
            active_key: None,
        }
    }

    /// Scoped recognizer: repeats must stay on one target key.
    pub fn scoped(window: f64, threshold: u32) -> Self {
        Self {
            scoped: true,
            ..Self::new(window, threshold)
        }
    }

    /// Count a tap with no target identity (unscoped recognizers).
    pub fn tap(&mut self, now: f64) -> bool {
        self.observe(0, now)
    }

    /// Count a qualifying input on `key` at time `now` (seconds). True when
    /// the activation threshold is reached; the recognizer then resets.
    pub fn observe(&mut self, key: u32, now: f64) -> bool {
        let expired = now - self.last > self.window;
        let switched = self.scoped && self.active_key != Some(key);
        if expired || switched {
            self.count = 0;
        }
        if self.scoped {
            self.active_key = Some(key);
        }
        self.count += 1;
        self.last = now;
        if self.count >= self.threshold {
            self.reset();
            true
        } else {
            false
        }
    }

    /// Forget any partial activation (used on stage changes so counts never
    /// leak across screens).
    pub fn reset(&mut self) {
        self.count = 0;
        self.last = 0.0;
        self.active_key = None;
    }
}
