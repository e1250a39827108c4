use serde::{Deserialize, Serialize};

/// Asset manifest describing the categorized feedback media pools.
/// The presentation layer bundles the actual files and hands this over as
/// JSON at startup; the core only ever refers to entries by pool + index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Image references shown on feedback notifications.
    #[serde(default)]
    pub images: FeedbackPools,
    /// Sound references played with feedback notifications.
    #[serde(default)]
    pub sounds: FeedbackPools,
}

/// One pool per feedback category. Empty pools are fine; the notification
/// simply omits that attachment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackPools {
    #[serde(default)]
    pub correct: Vec<String>,
    #[serde(default)]
    pub wrong: Vec<String>,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let json = r#"{
            "images": {
                "correct": ["cat.jpg", "confetti.png"],
                "wrong": ["rain.png"]
            },
            "sounds": {
                "correct": ["yay.mp3"],
                "wrong": ["buzz.mp3", "honk.wav"]
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.images.correct.len(), 2);
        assert_eq!(manifest.images.wrong, vec!["rain.png"]);
        assert_eq!(manifest.sounds.wrong.len(), 2);
    }

    #[test]
    fn parse_minimal_manifest() {
        let manifest = AssetManifest::from_json("{}").unwrap();
        assert!(manifest.images.correct.is_empty());
        assert!(manifest.sounds.wrong.is_empty());
    }

    #[test]
    fn missing_category_defaults_empty() {
        let json = r#"{ "images": { "correct": ["a.png"] } }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.images.correct.len(), 1);
        assert!(manifest.images.wrong.is_empty());
        assert!(manifest.sounds.correct.is_empty());
    }
}
