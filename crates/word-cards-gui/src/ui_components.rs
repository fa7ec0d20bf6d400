use eframe::egui;
use word_cards::{Card, DisplayColor};

/// What the user asked for on a card this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Speak(String),
    Lookup(String),
}

pub fn to_color32(color: DisplayColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

/// Builder for a single word card with speak and image buttons
pub struct CardTile<'a> {
    card: &'a Card,
    min_size: egui::Vec2,
    font_size: f32,
}

impl<'a> CardTile<'a> {
    pub fn new(card: &'a Card) -> Self {
        Self {
            card,
            min_size: egui::vec2(200.0, 80.0),
            font_size: 40.0,
        }
    }

    pub fn min_size(mut self, min_size: egui::Vec2) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> Option<CardAction> {
        let mut action = None;

        egui::Frame::new()
            .fill(ui.visuals().extreme_bg_color)
            .stroke(egui::Stroke::new(2.0, to_color32(self.card.border_color)))
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_min_size(self.min_size);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.card.text)
                            .size(self.font_size)
                            .strong()
                            .color(to_color32(self.card.text_color)),
                    );
                    ui.horizontal(|ui| {
                        if ui.button("🔊").on_hover_text("Speak").clicked() {
                            action = Some(CardAction::Speak(self.card.text.clone()));
                        }
                        if ui.button("🖼").on_hover_text("Search images").clicked() {
                            action = Some(CardAction::Lookup(self.card.text.clone()));
                        }
                    });
                });
            });

        action
    }
}

/// ComboBox over a list of names. Returns the name clicked this frame.
pub fn name_selector<'n>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    selected: Option<&str>,
    names: impl IntoIterator<Item = &'n str>,
) -> Option<String> {
    let mut picked = None;
    ui.horizontal(|ui| {
        ui.label(label);

        egui::ComboBox::from_id_salt(id)
            .selected_text(selected.unwrap_or("Default"))
            .show_ui(ui, |ui| {
                for name in names {
                    if ui.selectable_label(selected == Some(name), name).clicked() {
                        picked = Some(name.to_string());
                    }
                }
            });
    });
    picked
}
