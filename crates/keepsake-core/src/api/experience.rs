use crate::api::types::{AppEvent, SoundCommand};
use crate::assets::catalog::AssetCatalog;
use crate::core::rng::Rng;
use crate::input::queue::InputQueue;

/// Configuration for the runner, provided by the experience.
#[derive(Debug, Clone)]
pub struct ExperienceConfig {
    /// Maximum wire events per frame (default: 32).
    pub max_events: usize,
    /// Maximum sound commands per frame (default: 8).
    pub max_sounds: usize,
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            max_events: 32,
            max_sounds: 8,
        }
    }
}

/// The core contract the bridge drives once per animation frame.
pub trait Experience {
    /// Return runner configuration. Called once before init.
    fn config(&self) -> ExperienceConfig {
        ExperienceConfig::default()
    }

    /// Set up initial state. Called once before the first update.
    fn init(&mut self, ctx: &mut AppContext);

    /// One logic tick. `dt` is the elapsed frame time in seconds; `input`
    /// holds every event the presentation queued since the previous tick.
    fn update(&mut self, ctx: &mut AppContext, input: &InputQueue, dt: f32);

    /// Write the presentation snapshot into the view buffer.
    fn render(&self, view: &mut [f32]);
}

/// Mutable access to shared state, passed to `init` and `update`.
pub struct AppContext {
    pub events: Vec<AppEvent>,
    pub sounds: Vec<SoundCommand>,
    pub assets: AssetCatalog,
    pub rng: Rng,
}

impl AppContext {
    pub fn new(seed: u64) -> Self {
        Self {
            events: Vec::new(),
            sounds: Vec::new(),
            assets: AssetCatalog::empty(),
            rng: Rng::new(seed),
        }
    }

    /// Emit an event to be forwarded to the presentation layer.
    pub fn emit_event(&mut self, event: AppEvent) {
        self.events.push(event);
    }

    /// Emit a playback command for the presentation layer's audio element.
    pub fn emit_sound(&mut self, command: SoundCommand) {
        self.sounds.push(command);
    }

    /// Clear per-frame transient data (events, sound commands).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        self.sounds.clear();
    }
}
