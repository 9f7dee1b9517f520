//! Active UI locale and the translations derived from it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host app provides `RwSignal<LocaleState>` via context; components
//! such as `SeoHead` read it to pick the site title and the `lang`/`og:locale`
//! values. Translation files live in `locales/` and fall back to English.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use rust_i18n::t;

/// Locale used when nothing else has been chosen.
pub const DEFAULT_LOCALE: &str = "en";

/// Active UI locale, provided via context as `RwSignal<LocaleState>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleState {
    /// BCP 47 language tag, e.g. `en` or `en-US`.
    pub locale: String,
}

impl Default for LocaleState {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_owned(),
        }
    }
}

impl LocaleState {
    pub fn new(locale: impl Into<String>) -> Self {
        Self { locale: locale.into() }
    }

    /// Translated site title for this locale.
    pub fn base_title(&self) -> String {
        t!("seo.base_title", locale = translation_locale(&self.locale)).to_string()
    }
}

/// Language subtag used to pick a translation file (`en-US` reads `en`).
fn translation_locale(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or(DEFAULT_LOCALE)
}
