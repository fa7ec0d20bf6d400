pub mod deck;
pub mod image_lookup;
pub mod voices;

pub use deck::{show_cards, show_word_input};
pub use image_lookup::show_image_lookup;
pub use voices::show_voice_picker;
