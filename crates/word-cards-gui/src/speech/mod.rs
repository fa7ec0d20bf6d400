//! Platform speech backends.
//!
//! Browsers go through `speechSynthesis`, Linux through the `espeak`
//! binary, everything else through the `tts` crate.

use eframe::egui;
use word_cards::{SpeechSink, VoiceSource};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(all(not(target_arch = "wasm32"), target_os = "linux"))]
mod espeak;

#[cfg(all(not(target_arch = "wasm32"), not(target_os = "linux")))]
mod system;

#[cfg(target_arch = "wasm32")]
pub fn platform_backends(ctx: &egui::Context) -> (Box<dyn VoiceSource>, Box<dyn SpeechSink>) {
    (
        Box::new(web::WebVoices::new(ctx.clone())),
        Box::new(web::WebSpeech),
    )
}

#[cfg(all(not(target_arch = "wasm32"), target_os = "linux"))]
pub fn platform_backends(_ctx: &egui::Context) -> (Box<dyn VoiceSource>, Box<dyn SpeechSink>) {
    (
        Box::new(espeak::EspeakVoices::default()),
        Box::new(espeak::EspeakSpeech),
    )
}

#[cfg(all(not(target_arch = "wasm32"), not(target_os = "linux")))]
pub fn platform_backends(_ctx: &egui::Context) -> (Box<dyn VoiceSource>, Box<dyn SpeechSink>) {
    let (voices, speech) = system::system_backends();
    (Box::new(voices), Box::new(speech))
}
