use std::process::Command;
use word_cards::{SpeechSink, Utterance, Voice, VoiceSource, VoicesChangedCallback};

const ESPEAK: &str = "espeak";
const NORMAL_WORDS_PER_MINUTE: f32 = 175.0;

/// Parse `espeak --voices` output.
///
/// Columns are `Pty Language Age/Gender VoiceName File Other Languages`;
/// the first line is a header.
fn parse_voice_list(listing: &str) -> Vec<Voice> {
    listing
        .lines()
        .skip(1)
        .filter_map(|line| {
            let columns: Vec<&str> = line.split_whitespace().collect();
            match columns.as_slice() {
                [_priority, language, _gender, name, ..] => Some(Voice::new(*name, *language)),
                _ => None,
            }
        })
        .collect()
}

/// espeak has no change notification; the registered callback is only held
#[derive(Default)]
pub struct EspeakVoices {
    callback: Option<VoicesChangedCallback>,
}

impl VoiceSource for EspeakVoices {
    fn list_voices(&self) -> Vec<Voice> {
        match Command::new(ESPEAK).arg("--voices").output() {
            Ok(output) if output.status.success() => {
                parse_voice_list(&String::from_utf8_lossy(&output.stdout))
            }
            Ok(output) => {
                log::warn!("espeak --voices exited with {}", output.status);
                Vec::new()
            }
            Err(e) => {
                log::warn!("Failed to run espeak: {}", e);
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

pub struct EspeakSpeech;

impl SpeechSink for EspeakSpeech {
    fn speak(&mut self, utterance: Utterance) {
        let words_per_minute = (NORMAL_WORDS_PER_MINUTE * utterance.rate).round() as u32;

        let mut command = Command::new(ESPEAK);
        command.arg("-s").arg(words_per_minute.to_string());
        if let Some(voice) = &utterance.voice {
            command.arg("-v").arg(&voice.name);
        }
        command.arg(&utterance.text);

        std::thread::spawn(move || {
            if let Err(e) = command.output() {
                log::warn!("Failed to run espeak: {}", e);
            }
        });
    }
}
