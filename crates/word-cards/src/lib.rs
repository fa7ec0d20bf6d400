mod deck;
mod lookup;
mod options;
mod types;
mod view_state;
mod voice;
#[cfg(feature = "fs")]
mod word_list;

pub use deck::{WORD_SEPARATOR, generate_cards, parse_words};
pub use lookup::{DEFAULT_IMAGE_SEARCH_URL, image_search_url};
pub use options::{DEFAULT_LANGUAGE_PREFIX, DEFAULT_SPEECH_RATE, DEFAULT_WORDS, DeckOptions};
pub use types::{Card, CardsError, DisplayColor, ModalState, Result, Utterance, Voice};
pub use view_state::ViewState;
pub use voice::{SpeechSink, VoiceSource, VoicesChangedCallback, eligible_voices};
#[cfg(feature = "fs")]
pub use word_list::load_words_from_csv;
