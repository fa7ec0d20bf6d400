use crate::lookup::{DEFAULT_IMAGE_SEARCH_URL, validate_search_base};
use crate::types::{CardsError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WORDS: &str = "Ant,Bug,Cat,Dog,Egg,Fox,Ice,Jam";
pub const DEFAULT_SPEECH_RATE: f32 = 0.75;
pub const DEFAULT_LANGUAGE_PREFIX: &str = "en";

const SPEECH_RATE_RANGE: std::ops::RangeInclusive<f32> = 0.1..=10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckOptions {
    /// Word list shown when the view first opens
    pub default_words: String,
    /// Multiplier on the platform's normal speaking rate
    pub speech_rate: f32,
    /// Voices are eligible when their language tag starts with this
    pub language_prefix: String,
    /// Re-roll card colors whenever a voice is picked
    pub regenerate_on_voice_change: bool,
    pub image_search_url: String,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            default_words: DEFAULT_WORDS.to_string(),
            speech_rate: DEFAULT_SPEECH_RATE,
            language_prefix: DEFAULT_LANGUAGE_PREFIX.to_string(),
            regenerate_on_voice_change: true,
            image_search_url: DEFAULT_IMAGE_SEARCH_URL.to_string(),
        }
    }
}

impl DeckOptions {
    /// Load options from JSON file
    #[cfg(feature = "fs")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| CardsError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "fs")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CardsError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !self.speech_rate.is_finite() || !SPEECH_RATE_RANGE.contains(&self.speech_rate) {
            return Err(CardsError::Config(format!(
                "Speech rate must be between {} and {}, got {}",
                SPEECH_RATE_RANGE.start(),
                SPEECH_RATE_RANGE.end(),
                self.speech_rate
            )));
        }

        if self.language_prefix.trim().is_empty() {
            return Err(CardsError::Config(
                "Language prefix must not be empty".to_string(),
            ));
        }

        validate_search_base(&self.image_search_url)
    }
}
