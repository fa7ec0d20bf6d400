use std::path::PathBuf;

// Re-export types from library crates
pub use word_cards::DeckOptions;

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum CardsCommand {
    LoadWordList {
        path: PathBuf,
    },
    LoadOptions {
        path: PathBuf,
    },
    SaveOptions {
        options: DeckOptions,
        path: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum CardsUpdate {
    WordListLoaded {
        raw_input: String,
        word_count: usize,
    },
    OptionsLoaded {
        options: DeckOptions,
    },
    OptionsSaved {
        path: PathBuf,
    },
    Error {
        message: String,
    },
}
