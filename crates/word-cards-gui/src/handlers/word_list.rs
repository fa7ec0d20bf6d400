use std::path::PathBuf;
use tokio::sync::mpsc;
use word_cards_runtime::CardsUpdate;

pub async fn handle_load(path: PathBuf, update_tx: &mpsc::UnboundedSender<CardsUpdate>) {
    match word_cards::load_words_from_csv(&path).await {
        Ok(raw_input) => {
            let word_count = word_cards::parse_words(&raw_input).len();
            let _ = update_tx.send(CardsUpdate::WordListLoaded {
                raw_input,
                word_count,
            });
        }
        Err(e) => {
            let _ = update_tx.send(CardsUpdate::Error {
                message: format!("Failed to load word list: {e}"),
            });
        }
    }
}
