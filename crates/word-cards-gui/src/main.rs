#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
#[cfg(not(target_arch = "wasm32"))]
mod handlers;
mod logger;
mod speech;
mod ui_components;
mod views;
mod worker;

use logger::AppLogger;

const MAX_LOG_ENTRIES: usize = 500;

fn app_logger() -> AppLogger {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let logger = AppLogger::new(MAX_LOG_ENTRIES, level);
    if let Err(e) = logger.clone().init() {
        eprintln!("Failed to install logger: {e}");
    }
    logger
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let logger = app_logger();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to start tokio runtime");
    let tokio_handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("Word Cards"),
        ..Default::default()
    };

    eframe::run_native(
        "Word Cards",
        options,
        Box::new(move |cc| Ok(Box::new(app::WordCardsApp::new(cc, logger, tokio_handle)))),
    )
}

// The wasm build starts from `wasm_main`
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    let logger = app_logger();

    let canvas = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("word_cards_canvas"))
        .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        .expect("Missing #word_cards_canvas element");

    let web_options = eframe::WebOptions::default();
    eframe::WebRunner::new()
        .start(
            canvas,
            web_options,
            Box::new(move |cc| Ok(Box::new(app::WordCardsApp::new(cc, logger)))),
        )
        .await
        .expect("Failed to start eframe");
}
