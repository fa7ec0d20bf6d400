use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use word_cards::{Card, DeckOptions};

#[derive(Parser)]
#[command(name = "wcards", about = "Word card tools CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cards generated from a word list
    Cards {
        /// Comma-separated words (defaults to the configured word list)
        #[arg(short, long, conflicts_with = "input")]
        words: Option<String>,

        /// Header-less CSV file; every field is one word
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Options file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for reproducible card colors
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the image search address for a word
    Lookup {
        word: String,

        /// Options file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write the default options to a JSON file
    InitConfig {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },
}

async fn load_options(config: Option<&Path>) -> Result<DeckOptions> {
    match config {
        Some(path) => DeckOptions::load(path)
            .await
            .with_context(|| format!("Failed to load options from {}", path.display())),
        None => Ok(DeckOptions::default()),
    }
}

fn print_cards(cards: &[Card], options: &DeckOptions) -> Result<()> {
    for (index, card) in cards.iter().enumerate() {
        let url = word_cards::image_search_url(&options.image_search_url, &card.text)?;
        println!(
            "{:>3}  {:<20} {}  {}",
            index + 1,
            card.text,
            card.border_color.hex(),
            url
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Cards {
            words,
            input,
            config,
            seed,
        } => {
            let options = load_options(config.as_deref()).await?;
            let raw_input = match (words, input) {
                (Some(words), _) => words,
                (None, Some(path)) => word_cards::load_words_from_csv(&path).await?,
                (None, None) => options.default_words.clone(),
            };

            let cards = match seed {
                Some(seed) => {
                    word_cards::generate_cards(&raw_input, &mut StdRng::seed_from_u64(seed))
                }
                None => word_cards::generate_cards(&raw_input, &mut rand::rng()),
            };
            log::info!("Generated {} cards", cards.len());

            print_cards(&cards, &options)?;
        }

        Commands::Lookup { word, config } => {
            let options = load_options(config.as_deref()).await?;
            let url = word_cards::image_search_url(&options.image_search_url, word.trim())?;
            println!("{url}");
        }

        Commands::InitConfig { output } => {
            let options = DeckOptions::default();
            options.save(&output).await?;
            println!("Wrote default options → {}", output.display());
        }
    }

    Ok(())
}
