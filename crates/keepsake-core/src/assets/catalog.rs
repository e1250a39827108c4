use crate::assets::manifest::AssetManifest;
use crate::core::rng::Rng;

/// The two feedback categories a notification can draw media from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Correct,
    Wrong,
}

impl FeedbackKind {
    /// Numeric code used in wire events and the view buffer.
    pub fn code(self) -> f32 {
        match self {
            FeedbackKind::Correct => 1.0,
            FeedbackKind::Wrong => 2.0,
        }
    }
}

/// Categorized pools of presentation asset references, built from the
/// manifest. Provides random picks for notification media; the core hands
/// indices back to the bridge, never the references themselves.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    correct_images: Vec<String>,
    wrong_images: Vec<String>,
    correct_sounds: Vec<String>,
    wrong_sounds: Vec<String>,
}

impl AssetCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        Self {
            correct_images: manifest.images.correct.clone(),
            wrong_images: manifest.images.wrong.clone(),
            correct_sounds: manifest.sounds.correct.clone(),
            wrong_sounds: manifest.sounds.wrong.clone(),
        }
    }

    fn images(&self, kind: FeedbackKind) -> &[String] {
        match kind {
            FeedbackKind::Correct => &self.correct_images,
            FeedbackKind::Wrong => &self.wrong_images,
        }
    }

    fn sounds(&self, kind: FeedbackKind) -> &[String] {
        match kind {
            FeedbackKind::Correct => &self.correct_sounds,
            FeedbackKind::Wrong => &self.wrong_sounds,
        }
    }

    /// Uniform random image index for the kind, or None when the pool is empty.
    pub fn pick_image(&self, kind: FeedbackKind, rng: &mut Rng) -> Option<u32> {
        rng.next_index(self.images(kind).len()).map(|i| i as u32)
    }

    /// Uniform random sound index for the kind, or None when the pool is empty.
    pub fn pick_sound(&self, kind: FeedbackKind, rng: &mut Rng) -> Option<u32> {
        rng.next_index(self.sounds(kind).len()).map(|i| i as u32)
    }

    pub fn image_count(&self, kind: FeedbackKind) -> usize {
        self.images(kind).len()
    }

    pub fn sound_count(&self, kind: FeedbackKind) -> usize {
        self.sounds(kind).len()
    }
}
