use crate::types::{Card, DisplayColor};
use rand::Rng;

pub const WORD_SEPARATOR: char = ',';

/// Split a raw word list into trimmed, non-empty words.
///
/// Commas cannot be escaped, so a word can never contain one.
pub fn parse_words(raw_input: &str) -> Vec<String> {
    raw_input
        .split(WORD_SEPARATOR)
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build a fresh card sequence with newly rolled colors
pub fn generate_cards(raw_input: &str, rng: &mut impl Rng) -> Vec<Card> {
    parse_words(raw_input)
        .into_iter()
        .map(|text| Card {
            text,
            border_color: DisplayColor::random(&mut *rng),
            text_color: DisplayColor::random(&mut *rng),
        })
        .collect()
}
