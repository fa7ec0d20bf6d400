use eframe::egui;
use word_cards::ViewState;

use crate::ui_components::name_selector;

pub fn show_voice_picker(ui: &mut egui::Ui, view: &mut ViewState) {
    ui.horizontal(|ui| {
        let selected = view.selected_voice().map(|voice| voice.name.clone());
        let names: Vec<String> = view.voices().iter().map(|voice| voice.name.clone()).collect();

        if let Some(name) = name_selector(
            ui,
            "voice",
            "Voice:",
            selected.as_deref(),
            names.iter().map(String::as_str),
        ) {
            log::info!("Selected voice: {}", name);
            view.select_voice(&name);
        }

        // Some platforms never announce new voices
        if ui
            .button("🔄")
            .on_hover_text("Refresh voices")
            .clicked()
        {
            view.on_voice_set_changed();
            log::info!("Found {} voices", view.voices().len());
        }
    });

    if view.voices().is_empty() {
        ui.weak("No matching voices; the system default voice is used");
    }
}
