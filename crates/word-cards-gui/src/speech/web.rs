use eframe::egui;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance, SpeechSynthesisVoice};
use word_cards::{SpeechSink, Utterance, Voice, VoiceSource, VoicesChangedCallback};

const VOICES_CHANGED: &str = "voiceschanged";

fn synthesis() -> Option<SpeechSynthesis> {
    web_sys::window()?.speech_synthesis().ok()
}

fn platform_voices(synth: &SpeechSynthesis) -> Vec<SpeechSynthesisVoice> {
    synth
        .get_voices()
        .iter()
        .filter_map(|value| value.dyn_into::<SpeechSynthesisVoice>().ok())
        .collect()
}

/// Voices from `window.speechSynthesis`
pub struct WebVoices {
    ctx: egui::Context,
    listener: Option<Closure<dyn Fn()>>,
}

impl WebVoices {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            listener: None,
        }
    }
}

impl VoiceSource for WebVoices {
    fn list_voices(&self) -> Vec<Voice> {
        let Some(synth) = synthesis() else {
            return Vec::new();
        };

        platform_voices(&synth)
            .iter()
            .map(|voice| Voice::new(voice.name(), voice.lang()))
            .collect()
    }

    fn on_voices_changed(&mut self, callback: VoicesChangedCallback) {
        self.off_voices_changed();

        let Some(synth) = synthesis() else {
            log::warn!("Speech synthesis is not available in this browser");
            return;
        };

        // The notification arrives outside egui's input handling, so wake the UI
        let ctx = self.ctx.clone();
        let listener = Closure::<dyn Fn()>::new(move || {
            callback();
            ctx.request_repaint();
        });

        if let Err(e) = synth
            .add_event_listener_with_callback(VOICES_CHANGED, listener.as_ref().unchecked_ref())
        {
            log::warn!("Failed to listen for voice changes: {:?}", e);
            return;
        }
        self.listener = Some(listener);
    }

    fn off_voices_changed(&mut self) {
        let Some(listener) = self.listener.take() else {
            return;
        };

        if let Some(synth) = synthesis() {
            let _ = synth.remove_event_listener_with_callback(
                VOICES_CHANGED,
                listener.as_ref().unchecked_ref(),
            );
        }
    }
}

pub struct WebSpeech;

impl SpeechSink for WebSpeech {
    fn speak(&mut self, utterance: Utterance) {
        let Some(synth) = synthesis() else {
            log::warn!("Speech synthesis is not available in this browser");
            return;
        };

        let request = match SpeechSynthesisUtterance::new_with_text(&utterance.text) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("Failed to create utterance: {:?}", e);
                return;
            }
        };

        if let Some(voice) = &utterance.voice {
            let platform_voice = platform_voices(&synth)
                .into_iter()
                .find(|candidate| candidate.name() == voice.name);
            request.set_voice(platform_voice.as_ref());
        }
        request.set_rate(utterance.rate);

        synth.speak(&request);
    }
}
