use tts::Tts;
use word_cards::{SpeechSink, Utterance, Voice, VoiceSource, VoicesChangedCallback};

/// Voice source and sink sharing one engine. Both degrade to no-ops when
/// the engine fails to start.
pub fn system_backends() -> (SystemVoices, SystemSpeech) {
    let tts = match Tts::default() {
        Ok(engine) => Some(engine),
        Err(e) => {
            log::warn!("Failed to initialize text-to-speech: {}", e);
            None
        }
    };

    (
        SystemVoices {
            tts: tts.clone(),
            callback: None,
        },
        SystemSpeech { tts },
    )
}

pub struct SystemVoices {
    tts: Option<Tts>,
    // The engine never reports inventory changes
    callback: Option<VoicesChangedCallback>,
}

impl VoiceSource for SystemVoices {
    fn list_voices(&self) -> Vec<Voice> {
        let Some(tts) = &self.tts else {
            return Vec::new();
        };

        match tts.voices() {
            Ok(voices) => voices
                .iter()
                .map(|voice| Voice::new(voice.name(), voice.language().to_string()))
                .collect(),
            Err(e) => {
                log::warn!("Failed to list voices: {}", e);
                Vec::new()
            }
        }
    }

    fn on_voices_changed(&mut self, callback: VoicesChangedCallback) {
        self.callback = Some(callback);
    }

    fn off_voices_changed(&mut self) {
        self.callback = None;
    }
}

pub struct SystemSpeech {
    tts: Option<Tts>,
}

impl SpeechSink for SystemSpeech {
    fn speak(&mut self, utterance: Utterance) {
        let Some(tts) = self.tts.as_mut() else {
            return;
        };

        if let Some(voice) = &utterance.voice {
            match tts.voices() {
                Ok(voices) => {
                    if let Some(platform_voice) = voices.iter().find(|v| v.name() == voice.name) {
                        if let Err(e) = tts.set_voice(platform_voice) {
                            log::warn!("Failed to set voice '{}': {}", voice.name, e);
                        }
                    }
                }
                Err(e) => log::warn!("Failed to list voices: {}", e),
            }
        }

        // Rates are relative to the engine's normal rate
        let rate = (tts.normal_rate() * utterance.rate).clamp(tts.min_rate(), tts.max_rate());
        if let Err(e) = tts.set_rate(rate) {
            log::warn!("Failed to set speech rate: {}", e);
        }

        if let Err(e) = tts.speak(utterance.text.as_str(), false) {
            log::warn!("Failed to speak '{}': {}", utterance.text, e);
        }
    }
}
