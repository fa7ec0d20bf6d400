//! Seams to the platform speech engine.

use crate::types::{Utterance, Voice};

/// Invoked whenever the platform voice inventory changes
pub type VoicesChangedCallback = Box<dyn Fn() + 'static>;

/// Supplies the list of speakable voices
pub trait VoiceSource {
    /// Snapshot of every voice the platform currently offers
    fn list_voices(&self) -> Vec<Voice>;

    /// Register the single change callback, replacing any previous one
    fn on_voices_changed(&mut self, callback: VoicesChangedCallback);

    /// Drop the registered callback, if any
    fn off_voices_changed(&mut self);
}

/// Produces audible speech. Fire-and-forget: completion is never reported.
pub trait SpeechSink {
    fn speak(&mut self, utterance: Utterance);
}

/// Keep only voices whose language tag starts with `prefix`, in source order
pub fn eligible_voices(voices: Vec<Voice>, prefix: &str) -> Vec<Voice> {
    voices
        .into_iter()
        .filter(|voice| voice.matches_language(prefix))
        .collect()
}
