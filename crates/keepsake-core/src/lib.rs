pub mod api;
pub mod app;
pub mod assets;
pub mod core;
pub mod input;
pub mod puzzle;
pub mod systems;
pub mod view;

// Re-export key types at crate root for convenience
pub use api::experience::{AppContext, Experience, ExperienceConfig};
pub use api::types::{
    AppEvent, SoundCommand, EVENT_NOTIFICATION_DISMISSED, EVENT_NOTIFICATION_SHOWN,
    EVENT_PUZZLE_COMPLETE, EVENT_STAGE_CHANGED, EVENT_WORD_FOUND, SOUND_OP_PLAY, SOUND_OP_STOP,
};
pub use app::Keepsake;
pub use assets::catalog::{AssetCatalog, FeedbackKind};
pub use assets::manifest::AssetManifest;
pub use core::rng::Rng;
pub use core::timer::Deadline;
pub use input::queue::{ClickTarget, InputEvent, InputQueue};
pub use puzzle::evaluate::{evaluate, MatchOutcome};
pub use puzzle::grid::{Grid, Placement, GRID_COLS, GRID_ROWS, PLACEMENTS, WORDS};
pub use puzzle::line::{line, Cell};
pub use puzzle::session::{PuzzleSession, Selection, SessionPhase};
pub use systems::gesture::GestureRecognizer;
pub use systems::notify::Notification;
pub use systems::stage::{OpenEnvelope, Stage, StageController};
pub use view::{write_view, VIEW_TOTAL_FLOATS};
