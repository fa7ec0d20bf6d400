use eframe::egui;
use tokio::sync::mpsc;
use word_cards::{DeckOptions, ViewState};
use word_cards_runtime::{CardsCommand, CardsUpdate};

use crate::logger::AppLogger;
use crate::views::{show_cards, show_image_lookup, show_voice_picker, show_word_input};

pub struct WordCardsApp {
    view: ViewState,
    status: String,
    logger: AppLogger,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<CardsCommand>,
    update_rx: mpsc::UnboundedReceiver<CardsUpdate>,

    // Runtime handle (native only)
    #[cfg(not(target_arch = "wasm32"))]
    _tokio_handle: tokio::runtime::Handle,
}

impl WordCardsApp {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        logger: AppLogger,
        tokio_handle: tokio::runtime::Handle,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        Self {
            view: new_view(&cc.egui_ctx),
            status: String::new(),
            logger,
            command_tx,
            update_rx,
            _tokio_handle: tokio_handle,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new(cc: &eframe::CreationContext<'_>, logger: AppLogger) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task using wasm-bindgen-futures
        wasm_bindgen_futures::spawn_local(crate::worker::worker_task(command_rx, update_tx));

        Self {
            view: new_view(&cc.egui_ctx),
            status: String::new(),
            logger,
            command_tx,
            update_rx,
        }
    }

    fn process_updates(&mut self, ctx: &egui::Context) {
        while let Ok(update) = self.update_rx.try_recv() {
            match update {
                CardsUpdate::WordListLoaded {
                    raw_input,
                    word_count,
                } => {
                    self.view.update_raw_input(raw_input);
                    self.view.generate_cards();
                    self.status = format!("Loaded {} words", word_count);
                }
                CardsUpdate::OptionsLoaded { options } => {
                    self.view.apply_options(options);
                    self.status = "Options loaded".to_string();
                }
                CardsUpdate::OptionsSaved { path } => {
                    self.status = format!("Options saved → {}", path.display());
                }
                CardsUpdate::Error { message } => {
                    log::error!("{}", message);
                    self.status = format!("Error: {message}");
                }
            }
            ctx.request_repaint();
        }
    }
}

fn new_view(ctx: &egui::Context) -> ViewState {
    let (voice_source, speech_sink) = crate::speech::platform_backends(ctx);
    ViewState::new(DeckOptions::default(), voice_source, speech_sink)
}

impl eframe::App for WordCardsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_updates(ctx);

        if self.view.process_notifications() {
            log::info!("Voice list changed: {} voices", self.view.voices().len());
        }

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                show_voice_picker(ui, &mut self.view);
                ui.separator();
                show_file_buttons(ui, &self.view, &self.command_tx);
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            if !self.status.is_empty() {
                ui.label(&self.status);
            }
            show_log(ui, &self.logger);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            show_word_input(ui, &mut self.view);
            ui.separator();
            show_cards(ui, &mut self.view);
        });

        show_image_lookup(ctx, &mut self.view);
    }
}

fn show_log(ui: &mut egui::Ui, logger: &AppLogger) {
    ui.collapsing("Log", |ui| {
        if ui.button("Clear").clicked() {
            logger.clear();
        }
        egui::ScrollArea::vertical()
            .max_height(150.0)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for entry in logger.entries() {
                    ui.monospace(format!(
                        "{} {:<5} {}",
                        entry.timestamp.format("%H:%M:%S"),
                        entry.level,
                        entry.message
                    ));
                }
            });
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn show_file_buttons(
    ui: &mut egui::Ui,
    view: &ViewState,
    command_tx: &mpsc::UnboundedSender<CardsCommand>,
) {
    if ui.button("📂 Import Words...").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv", "txt"])
            .pick_file()
        {
            log::info!("Loading word list: {}", path.display());
            let _ = command_tx.send(CardsCommand::LoadWordList { path });
        }
    }

    if ui.button("📂 Load Options...").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            let _ = command_tx.send(CardsCommand::LoadOptions { path });
        }
    }

    if ui.button("💾 Save Options...").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("word_cards.json")
            .save_file()
        {
            let _ = command_tx.send(CardsCommand::SaveOptions {
                options: view.options().clone(),
                path,
            });
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn show_file_buttons(
    _ui: &mut egui::Ui,
    _view: &ViewState,
    _command_tx: &mpsc::UnboundedSender<CardsCommand>,
) {
}
