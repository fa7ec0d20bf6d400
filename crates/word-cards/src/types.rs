use rand::Rng;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardsError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, CardsError>;

/// RGB color used to decorate a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DisplayColor {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        let [r, g, b] = rng.random::<[u8; 3]>();
        Self { r, g, b }
    }

    /// CSS-style `#rrggbb`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A single displayed word
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub text: String,
    pub border_color: DisplayColor,
    pub text_color: DisplayColor,
}

/// A speakable voice as reported by the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    pub language: String,
}

impl Voice {
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
        }
    }

    pub fn matches_language(&self, prefix: &str) -> bool {
        self.language.starts_with(prefix)
    }
}

/// One request handed to a speech sink
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// `None` means the platform default voice
    pub voice: Option<Voice>,
    pub rate: f32,
}

/// Visibility and target word of the image lookup panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub visible: bool,
    pub target_word: String,
}
