use crate::deck::WORD_SEPARATOR;
use crate::types::Result;
use std::path::Path;

/// Read a header-less CSV file into a raw word list.
///
/// Every non-blank field of every record becomes one entry, joined with
/// commas. A quoted field containing a comma splits when the list is parsed.
pub async fn load_words_from_csv(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref().to_owned();

    let contents = tokio::fs::read_to_string(&path).await?;

    let words = tokio::task::spawn_blocking(move || {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(contents.as_bytes());
        let mut words = Vec::new();

        for result in reader.records() {
            let record = result?;
            words.extend(
                record
                    .iter()
                    .map(str::trim)
                    .filter(|field| !field.is_empty())
                    .map(str::to_string),
            );
        }
        Ok::<_, crate::types::CardsError>(words)
    })
    .await??;

    log::info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words.join(&WORD_SEPARATOR.to_string()))
}
