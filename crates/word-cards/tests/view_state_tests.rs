mod common;

use common::*;
use word_cards::*;

#[test]
fn test_initial_cards_use_default_words() {
    let view = view_with(&FakeVoices::default(), &RecordingSink::default());
    assert_eq!(
        card_texts(&view),
        vec!["Ant", "Bug", "Cat", "Dog", "Egg", "Fox", "Ice", "Jam"]
    );
    assert_eq!(view.raw_input(), DEFAULT_WORDS);
    assert!(!view.modal().visible);
}

#[test]
fn test_initial_voices_filtered_and_first_selected() {
    let voices = FakeVoices::with(MIXED_VOICES);
    let view = view_with(&voices, &RecordingSink::default());

    let names: Vec<&str> = view.voices().iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Daniel", "Samantha"]);
    assert_eq!(view.selected_voice().map(|v| v.name.as_str()), Some("Daniel"));
}

#[test]
fn test_no_eligible_voices_leaves_selection_empty() {
    let voices = FakeVoices::with(&[("Amelie", "fr-FR"), ("Kyoko", "ja-JP")]);
    let view = view_with(&voices, &RecordingSink::default());

    assert!(view.voices().is_empty());
    assert!(view.selected_voice().is_none());
}

#[test]
fn test_update_raw_input_does_not_regenerate() {
    let mut view = view_with(&FakeVoices::default(), &RecordingSink::default());
    view.update_raw_input("Owl,Pig");

    assert_eq!(view.raw_input(), "Owl,Pig");
    assert_eq!(view.cards().len(), 8);

    view.generate_cards();
    assert_eq!(card_texts(&view), vec!["Owl", "Pig"]);
}

#[test]
fn test_generate_cards_trims_and_skips_blanks() {
    let mut view = view_with(&FakeVoices::default(), &RecordingSink::default());
    view.update_raw_input(" Ant, ,Bug,  Cat ");
    view.generate_cards();
    assert_eq!(card_texts(&view), vec!["Ant", "Bug", "Cat"]);
}

#[test]
fn test_generate_cards_empty_input() {
    let mut view = view_with(&FakeVoices::default(), &RecordingSink::default());
    view.update_raw_input("  , ,,");
    view.generate_cards();
    assert!(view.cards().is_empty());
}

#[test]
fn test_generate_cards_twice_keeps_words() {
    let mut view = view_with(&FakeVoices::default(), &RecordingSink::default());
    view.update_raw_input("Cat,Dog,Cat");
    view.generate_cards();
    let first = card_texts(&view);
    view.generate_cards();
    assert_eq!(card_texts(&view), first);
    assert_eq!(first, vec!["Cat", "Dog", "Cat"]);
}

#[test]
fn test_raw_input_mut_edits_verbatim() {
    let mut view = view_with(&FakeVoices::default(), &RecordingSink::default());
    view.raw_input_mut().push_str(",  Kit ");
    assert!(view.raw_input().ends_with(",  Kit "));
    view.generate_cards();
    assert_eq!(card_texts(&view).last().map(String::as_str), Some("Kit"));
}

#[test]
fn test_select_voice_by_name() {
    let voices = FakeVoices::with(MIXED_VOICES);
    let mut view = view_with(&voices, &RecordingSink::default());

    assert!(view.select_voice("Samantha"));
    assert_eq!(
        view.selected_voice().map(|v| v.name.as_str()),
        Some("Samantha")
    );
}

#[test]
fn test_select_unknown_voice_keeps_selection() {
    let voices = FakeVoices::with(MIXED_VOICES);
    let mut view = view_with(&voices, &RecordingSink::default());
    view.select_voice("Samantha");

    assert!(!view.select_voice("Nobody"));
    // Not eligible, so also a miss
    assert!(!view.select_voice("Amelie"));
    assert_eq!(
        view.selected_voice().map(|v| v.name.as_str()),
        Some("Samantha")
    );
}

#[test]
fn test_select_voice_regenerates_cards_by_default() {
    let voices = FakeVoices::with(MIXED_VOICES);
    let mut view = view_with(&voices, &RecordingSink::default());
    view.update_raw_input("Owl");

    view.select_voice("Samantha");
    assert_eq!(card_texts(&view), vec!["Owl"]);
}

#[test]
fn test_select_voice_without_regeneration() {
    let voices = FakeVoices::with(MIXED_VOICES);
    let options = DeckOptions {
        regenerate_on_voice_change: false,
        ..DeckOptions::default()
    };
    let mut view = ViewState::new(
        options,
        Box::new(voices.clone()),
        Box::new(RecordingSink::default()),
    );
    let before = view.cards().to_vec();
    view.update_raw_input("Owl");

    view.select_voice("Samantha");
    assert_eq!(view.cards(), before.as_slice());
}

#[test]
fn test_speak_uses_selected_voice_and_rate() {
    let voices = FakeVoices::with(MIXED_VOICES);
    let sink = RecordingSink::default();
    let mut view = view_with(&voices, &sink);
    view.select_voice("Samantha");

    view.speak("Cat");

    let spoken = sink.spoken.borrow();
    assert_eq!(spoken.len(), 1);
    assert_eq!(spoken[0].text, "Cat");
    assert_eq!(spoken[0].voice, Some(Voice::new("Samantha", "en-US")));
    assert_eq!(spoken[0].rate, 0.75);
}

#[test]
fn test_speak_without_voices_uses_platform_default() {
    let sink = RecordingSink::default();
    let mut view = view_with(&FakeVoices::default(), &sink);

    view.speak("Dog");
    view.speak("Dog");

    let spoken = sink.spoken.borrow();
    assert_eq!(spoken.len(), 2);
    assert!(spoken.iter().all(|u| u.voice.is_none()));
}

#[test]
fn test_open_and_close_image_lookup() {
    let mut view = view_with(&FakeVoices::default(), &RecordingSink::default());

    assert!(view.open_image_lookup("Cat"));
    assert_eq!(
        view.modal(),
        &ModalState {
            visible: true,
            target_word: "Cat".to_string()
        }
    );

    view.close_image_lookup();
    assert!(!view.modal().visible);
    assert_eq!(view.modal().target_word, "Cat");
}

#[test]
fn test_open_image_lookup_requires_card() {
    let mut view = view_with(&FakeVoices::default(), &RecordingSink::default());

    assert!(!view.open_image_lookup("Zebra"));
    assert!(!view.modal().visible);
}

#[test]
fn test_image_lookup_url_for_target() {
    let view = view_with(&FakeVoices::default(), &RecordingSink::default());
    let url = view.image_lookup_url("Cat").unwrap();
    assert_eq!(url.as_str(), "https://www.bing.com/images/search?q=Cat");
}

#[test]
fn test_voice_change_notification_resets_selection() {
    let voices = FakeVoices::with(MIXED_VOICES);
    let mut view = view_with(&voices, &RecordingSink::default());
    view.select_voice("Samantha");

    voices.set(&[("Karen", "en-AU"), ("Samantha", "en-US"), ("Thomas", "fr-FR")]);
    voices.notify();

    // Nothing applied until the queue is drained
    assert_eq!(view.voices().len(), 2);
    assert!(view.process_notifications());

    let names: Vec<&str> = view.voices().iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Karen", "Samantha"]);
    assert_eq!(view.selected_voice().map(|v| v.name.as_str()), Some("Karen"));
}

#[test]
fn test_voice_change_to_empty_set_clears_selection() {
    let voices = FakeVoices::with(MIXED_VOICES);
    let mut view = view_with(&voices, &RecordingSink::default());

    voices.set(&[("Thomas", "fr-FR")]);
    voices.notify();
    view.process_notifications();

    assert!(view.voices().is_empty());
    assert!(view.selected_voice().is_none());
}

#[test]
fn test_voices_arriving_late() {
    let voices = FakeVoices::default();
    let mut view = view_with(&voices, &RecordingSink::default());
    assert!(view.selected_voice().is_none());

    voices.set(MIXED_VOICES);
    voices.notify();
    voices.notify();
    assert!(view.process_notifications());
    assert!(!view.process_notifications());

    assert_eq!(view.selected_voice().map(|v| v.name.as_str()), Some("Daniel"));
}

#[test]
fn test_on_voice_set_changed_direct() {
    let voices = FakeVoices::with(MIXED_VOICES);
    let mut view = view_with(&voices, &RecordingSink::default());
    view.select_voice("Samantha");

    view.on_voice_set_changed();
    assert_eq!(view.selected_voice().map(|v| v.name.as_str()), Some("Daniel"));
}

#[test]
fn test_eligible_set_never_contains_other_languages() {
    let mut many: Vec<(String, String)> = (0..50)
        .map(|i| (format!("Voice {i}"), format!("de-{i}")))
        .collect();
    many.push(("English".to_string(), "en".to_string()));
    let refs: Vec<(&str, &str)> = many.iter().map(|(n, l)| (n.as_str(), l.as_str())).collect();

    let voices = FakeVoices::with(&refs);
    let view = view_with(&voices, &RecordingSink::default());

    assert_eq!(view.voices(), &[Voice::new("English", "en")]);
}

#[test]
fn test_subscription_released_on_drop() {
    let voices = FakeVoices::with(MIXED_VOICES);
    let view = view_with(&voices, &RecordingSink::default());
    assert!(voices.is_subscribed());

    drop(view);
    assert!(!voices.is_subscribed());
}

#[test]
fn test_apply_options_refilters_and_keeps_input() {
    let voices = FakeVoices::with(MIXED_VOICES);
    let mut view = view_with(&voices, &RecordingSink::default());
    view.update_raw_input("Owl");

    view.apply_options(DeckOptions {
        language_prefix: "fr".to_string(),
        ..DeckOptions::default()
    });

    assert_eq!(view.raw_input(), "Owl");
    assert_eq!(view.selected_voice().map(|v| v.name.as_str()), Some("Amelie"));
}
