use tokio::sync::mpsc;

use crate::deck::generate_cards;
use crate::lookup::image_search_url;
use crate::options::DeckOptions;
use crate::types::{Card, ModalState, Result, Utterance, Voice};
use crate::voice::{SpeechSink, VoiceSource, eligible_voices};

/// All state behind the word card view.
///
/// Registers for voice inventory changes on construction and deregisters
/// when dropped. Notifications are queued and applied by
/// [`ViewState::process_notifications`], so nothing re-enters the state
/// while an operation is running.
pub struct ViewState {
    options: DeckOptions,
    raw_input: String,
    cards: Vec<Card>,
    voices: Vec<Voice>,
    // Held by name; always present in `voices` when set
    selected_voice: Option<String>,
    modal: ModalState,

    voice_source: Box<dyn VoiceSource>,
    speech_sink: Box<dyn SpeechSink>,
    voices_changed_rx: mpsc::UnboundedReceiver<()>,
}

impl ViewState {
    pub fn new(
        options: DeckOptions,
        voice_source: Box<dyn VoiceSource>,
        speech_sink: Box<dyn SpeechSink>,
    ) -> Self {
        let (voices_changed_tx, voices_changed_rx) = mpsc::unbounded_channel();

        let mut state = Self {
            raw_input: options.default_words.clone(),
            options,
            cards: Vec::new(),
            voices: Vec::new(),
            selected_voice: None,
            modal: ModalState::default(),
            voice_source,
            speech_sink,
            voices_changed_rx,
        };

        state.populate_voices();
        state.generate_cards();

        state
            .voice_source
            .on_voices_changed(Box::new(move || {
                let _ = voices_changed_tx.send(());
            }));

        state
    }

    pub fn options(&self) -> &DeckOptions {
        &self.options
    }

    /// Swap in new options. The word list is kept; voices are re-filtered.
    pub fn apply_options(&mut self, options: DeckOptions) {
        self.options = options;
        self.populate_voices();
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// Direct access for text editors; edits never regenerate cards
    pub fn raw_input_mut(&mut self) -> &mut String {
        &mut self.raw_input
    }

    pub fn update_raw_input(&mut self, text: impl Into<String>) {
        self.raw_input = text.into();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Replace every card with one per word of the current input
    pub fn generate_cards(&mut self) {
        self.cards = generate_cards(&self.raw_input, &mut rand::rng());
        log::debug!("Generated {} cards", self.cards.len());
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    pub fn selected_voice(&self) -> Option<&Voice> {
        let name = self.selected_voice.as_deref()?;
        self.voices.iter().find(|voice| voice.name == name)
    }

    /// Select an eligible voice by exact name. Unknown names leave the
    /// selection alone. Returns whether the name was found.
    pub fn select_voice(&mut self, name: &str) -> bool {
        let found = self.voices.iter().any(|voice| voice.name == name);
        if found {
            self.selected_voice = Some(name.to_string());
        } else {
            log::debug!("Voice '{}' is not in the eligible set", name);
        }

        if self.options.regenerate_on_voice_change {
            self.generate_cards();
        }
        found
    }

    pub fn speak(&mut self, word: &str) {
        let utterance = Utterance {
            text: word.to_string(),
            voice: self.selected_voice().cloned(),
            rate: self.options.speech_rate,
        };
        log::debug!(
            "Speaking '{}' with {}",
            utterance.text,
            utterance
                .voice
                .as_ref()
                .map_or("the default voice", |voice| voice.name.as_str())
        );
        self.speech_sink.speak(utterance);
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Show the image panel for a word on one of the current cards.
    /// Returns false, leaving the panel untouched, for any other word.
    pub fn open_image_lookup(&mut self, word: &str) -> bool {
        if !self.cards.iter().any(|card| card.text == word) {
            log::debug!("Ignoring image lookup for '{}': no such card", word);
            return false;
        }

        self.modal = ModalState {
            visible: true,
            target_word: word.to_string(),
        };
        log::debug!("Opened image lookup for '{}'", word);
        true
    }

    pub fn close_image_lookup(&mut self) {
        if self.modal.visible {
            log::debug!("Closed image lookup for '{}'", self.modal.target_word);
        }
        self.modal.visible = false;
    }

    pub fn image_lookup_url(&self, word: &str) -> Result<String> {
        image_search_url(&self.options.image_search_url, word)
    }

    /// Re-read the voice inventory and select its first eligible voice
    pub fn on_voice_set_changed(&mut self) {
        self.populate_voices();
    }

    /// Apply queued voice change notifications. Several notifications
    /// collapse into one refresh. Returns whether a refresh happened.
    pub fn process_notifications(&mut self) -> bool {
        let mut changed = false;
        while self.voices_changed_rx.try_recv().is_ok() {
            changed = true;
        }

        if changed {
            self.on_voice_set_changed();
        }
        changed
    }

    fn populate_voices(&mut self) {
        self.voices = eligible_voices(
            self.voice_source.list_voices(),
            &self.options.language_prefix,
        );
        self.selected_voice = self.voices.first().map(|voice| voice.name.clone());
        log::debug!(
            "{} eligible voices, selected {:?}",
            self.voices.len(),
            self.selected_voice
        );
    }
}

impl Drop for ViewState {
    fn drop(&mut self) {
        self.voice_source.off_voices_changed();
    }
}
