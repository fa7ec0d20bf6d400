use eframe::egui;
use word_cards::ViewState;

use crate::ui_components::{CardAction, CardTile};

pub fn show_word_input(ui: &mut egui::Ui, view: &mut ViewState) {
    ui.label("Please provide the list of words, separated by commas (,):");
    ui.add(
        egui::TextEdit::multiline(view.raw_input_mut())
            .desired_rows(4)
            .desired_width(f32::INFINITY)
            .font(egui::TextStyle::Heading),
    );

    if ui.button("🃏 Generate Cards").clicked() {
        view.generate_cards();
        log::info!("Generated {} cards", view.cards().len());
    }
}

pub fn show_cards(ui: &mut egui::Ui, view: &mut ViewState) {
    if view.cards().is_empty() {
        ui.centered_and_justified(|ui| {
            ui.vertical_centered(|ui| {
                ui.heading("No Cards");
                ui.label("Enter some words and click 'Generate Cards'");
            });
        });
        return;
    }

    let mut actions = Vec::new();
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);
            for card in view.cards() {
                if let Some(action) = CardTile::new(card).show(ui) {
                    actions.push(action);
                }
            }
        });
    });

    // Cards are borrowed while drawing, so act afterwards
    for action in actions {
        match action {
            CardAction::Speak(word) => view.speak(&word),
            CardAction::Lookup(word) => {
                view.open_image_lookup(&word);
            }
        }
    }
}
