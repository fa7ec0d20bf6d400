use tokio::sync::mpsc;
use word_cards_runtime::{CardsCommand, CardsUpdate};

#[cfg(not(target_arch = "wasm32"))]
use crate::handlers;

/// Async worker task that handles file commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<CardsCommand>,
    update_tx: mpsc::UnboundedSender<CardsUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &update_tx).await;
    }
    log::debug!("Worker stopped: command channel closed");
}

#[cfg(not(target_arch = "wasm32"))]
async fn process_command(cmd: CardsCommand, update_tx: &mpsc::UnboundedSender<CardsUpdate>) {
    match cmd {
        CardsCommand::LoadWordList { path } => {
            handlers::word_list::handle_load(path, update_tx).await;
        }
        CardsCommand::LoadOptions { path } => {
            handlers::options::handle_load(path, update_tx).await;
        }
        CardsCommand::SaveOptions { options, path } => {
            handlers::options::handle_save(options, path, update_tx).await;
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn process_command(cmd: CardsCommand, update_tx: &mpsc::UnboundedSender<CardsUpdate>) {
    log::warn!("Ignoring {:?}", cmd);
    let _ = update_tx.send(CardsUpdate::Error {
        message: "File access is not available in the browser".to_string(),
    });
}
