use super::*;

#[test]
fn locale_state_defaults_to_english() {
    assert_eq!(LocaleState::default().locale, "en");
}

#[test]
fn base_title_is_translated() {
    assert_eq!(LocaleState::new("en").base_title(), "Study Deck");
    assert_eq!(LocaleState::new("ru").base_title(), "Учебная колода");
}

#[test]
fn base_title_uses_language_subtag() {
    assert_eq!(LocaleState::new("en-US").base_title(), "Study Deck");
    assert_eq!(LocaleState::new("ru_RU").base_title(), "Учебная колода");
}

#[test]
fn unknown_locale_falls_back_to_english() {
    assert_eq!(LocaleState::new("xx").base_title(), "Study Deck");
}

#[test]
fn translation_locale_strips_region() {
    assert_eq!(translation_locale("pt-BR"), "pt");
    assert_eq!(translation_locale("de"), "de");
}
