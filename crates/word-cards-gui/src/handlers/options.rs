use std::path::PathBuf;
use tokio::sync::mpsc;
use word_cards_runtime::{CardsUpdate, DeckOptions};

pub async fn handle_load(path: PathBuf, update_tx: &mpsc::UnboundedSender<CardsUpdate>) {
    match DeckOptions::load(&path).await {
        Ok(options) => {
            let _ = update_tx.send(CardsUpdate::OptionsLoaded { options });
        }
        Err(e) => {
            let _ = update_tx.send(CardsUpdate::Error {
                message: format!("Failed to load options: {e}"),
            });
        }
    }
}

pub async fn handle_save(
    options: DeckOptions,
    path: PathBuf,
    update_tx: &mpsc::UnboundedSender<CardsUpdate>,
) {
    match options.save(&path).await {
        Ok(()) => {
            let _ = update_tx.send(CardsUpdate::OptionsSaved { path });
        }
        Err(e) => {
            let _ = update_tx.send(CardsUpdate::Error {
                message: format!("Failed to save options: {e}"),
            });
        }
    }
}
