use eframe::egui;
use word_cards::ViewState;

/// Image search panel for the modal's target word.
///
/// egui cannot embed a web page, so the panel links out to the results.
pub fn show_image_lookup(ctx: &egui::Context, view: &mut ViewState) {
    if !view.modal().visible {
        return;
    }

    let word = view.modal().target_word.clone();
    let url = view.image_lookup_url(&word);

    let response = egui::Modal::new(egui::Id::new("image_lookup")).show(ctx, |ui| {
        ui.set_min_width(400.0);
        ui.heading(format!("Image Search for \"{}\"", word));
        ui.add_space(10.0);

        let mut close = false;
        match &url {
            Ok(url) => {
                ui.hyperlink_to(url.as_str(), url.as_str());
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("🌐 Open").clicked() {
                        ctx.open_url(egui::OpenUrl::new_tab(url.as_str()));
                    }
                    close = ui.button("❌ Close").clicked();
                });
            }
            Err(e) => {
                ui.colored_label(ui.visuals().error_fg_color, e.to_string());
                close = ui.button("❌ Close").clicked();
            }
        }
        close
    });

    if response.inner || response.should_close() {
        view.close_image_lookup();
    }
}
