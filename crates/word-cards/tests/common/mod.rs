#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use word_cards::*;

/// Voice source whose inventory and callback are visible to the test
#[derive(Clone, Default)]
pub struct FakeVoices {
    pub voices: Rc<RefCell<Vec<Voice>>>,
    pub callback: Rc<RefCell<Option<VoicesChangedCallback>>>,
}

impl FakeVoices {
    pub fn with(voices: &[(&str, &str)]) -> Self {
        let fake = Self::default();
        fake.set(voices);
        fake
    }

    pub fn set(&self, voices: &[(&str, &str)]) {
        *self.voices.borrow_mut() = voices
            .iter()
            .map(|(name, language)| Voice::new(*name, *language))
            .collect();
    }

    /// Fire the platform notification
    pub fn notify(&self) {
        if let Some(callback) = self.callback.borrow().as_ref() {
            callback();
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.callback.borrow().is_some()
    }
}

impl VoiceSource for FakeVoices {
    fn list_voices(&self) -> Vec<Voice> {
        self.voices.borrow().clone()
    }

    fn on_voices_changed(&mut self, callback: VoicesChangedCallback) {
        *self.callback.borrow_mut() = Some(callback);
    }

    fn off_voices_changed(&mut self) {
        self.callback.borrow_mut().take();
    }
}

#[derive(Clone, Default)]
pub struct RecordingSink {
    pub spoken: Rc<RefCell<Vec<Utterance>>>,
}

impl SpeechSink for RecordingSink {
    fn speak(&mut self, utterance: Utterance) {
        self.spoken.borrow_mut().push(utterance);
    }
}

pub const MIXED_VOICES: &[(&str, &str)] = &[
    ("Amelie", "fr-FR"),
    ("Daniel", "en-GB"),
    ("Anna", "de-DE"),
    ("Samantha", "en-US"),
    ("Kyoko", "ja-JP"),
];

pub fn view_with(voices: &FakeVoices, sink: &RecordingSink) -> ViewState {
    ViewState::new(
        DeckOptions::default(),
        Box::new(voices.clone()),
        Box::new(sink.clone()),
    )
}

pub fn card_texts(view: &ViewState) -> Vec<String> {
    view.cards().iter().map(|card| card.text.clone()).collect()
}
