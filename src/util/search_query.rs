//! Search query normalization.
//!
//! Mobile keyboards (iPad in particular) substitute typographic apostrophes
//! for `'`. Queries are normalized before they reach URLs and API params so
//! the same word always searches the same way.

#[cfg(test)]
#[path = "search_query_test.rs"]
mod search_query_test;

use std::borrow::Cow;

/// Code points rewritten to the ASCII apostrophe.
const APOSTROPHE_LOOKALIKES: [char; 3] = [
    '\u{2019}', // RIGHT SINGLE QUOTATION MARK
    '\u{2018}', // LEFT SINGLE QUOTATION MARK
    '\u{02BC}', // MODIFIER LETTER APOSTROPHE
];

/// Replace apostrophe look-alikes in `query` with `'` (U+0027).
///
/// Borrows the input unchanged when nothing needs replacing.
pub fn normalize_search_query(query: &str) -> Cow<'_, str> {
    if query.contains(APOSTROPHE_LOOKALIKES) {
        Cow::Owned(query.replace(APOSTROPHE_LOOKALIKES, "'"))
    } else {
        Cow::Borrowed(query)
    }
}

/// Normalize an optional query; `None` is passed through untouched.
pub fn normalize_optional_query(query: Option<String>) -> Option<String> {
    query.map(|q| match normalize_search_query(&q) {
        Cow::Borrowed(_) => q,
        Cow::Owned(normalized) => normalized,
    })
}
