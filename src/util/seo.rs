//! Pure derivations behind the `SeoHead` component.
//!
//! DESIGN
//! ======
//! Everything the component registers with `leptos_meta` is computed here
//! from plain strings so the rules (title suffix, description cap, Open
//! Graph set, canonical resolution) are testable without a reactive owner.

#[cfg(test)]
#[path = "seo_test.rs"]
mod seo_test;

/// Longest description emitted, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 160;

/// Value of the `og:type` tag on every page.
pub const OG_TYPE: &str = "website";

/// Attribute that identifies a `<meta>` tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetaAttr {
    /// `<meta name="...">`
    Name(String),
    /// `<meta property="...">`, used by Open Graph.
    Property(String),
}

/// One `<meta>` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub content: String,
    /// Entries sharing a key collapse to the last one registered.
    pub key: Option<String>,
}

impl MetaTag {
    pub fn name(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Name(name.into()),
            content: content.into(),
            key: None,
        }
    }

    pub fn property(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Property(property.into()),
            content: content.into(),
            key: None,
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

/// Page title suffixed with the site title, or the site title alone.
pub fn resolve_title(title: &str, base_title: &str) -> String {
    if title.is_empty() {
        base_title.to_owned()
    } else {
        format!("{title} | {base_title}")
    }
}

/// Cap a description at [`DESCRIPTION_MAX_CHARS`] characters.
pub fn truncate_description(description: &str) -> String {
    description.chars().take(DESCRIPTION_MAX_CHARS).collect()
}

/// Open Graph locale form of a language tag (`en-US` becomes `en_US`).
pub fn og_locale(locale: &str) -> String {
    locale.replacen('-', "_", 1)
}

/// Open Graph tags for a page. `description` is expected already truncated.
pub fn og_tags(title: &str, base_title: &str, locale: &str, description: Option<&str>) -> Vec<MetaTag> {
    let mut tags = vec![
        MetaTag::property("og:title", title),
        MetaTag::property("og:site_name", base_title),
        MetaTag::property("og:type", OG_TYPE),
        MetaTag::property("og:locale", og_locale(locale)),
    ];
    if let Some(description) = description.filter(|d| !d.is_empty()) {
        tags.push(MetaTag::property("og:description", description));
    }
    tags
}

/// Collapse entries sharing a dedupe key. The last entry wins and takes the
/// position of the first.
pub fn dedupe_meta(tags: Vec<MetaTag>) -> Vec<MetaTag> {
    let mut out: Vec<MetaTag> = Vec::with_capacity(tags.len());
    for tag in tags {
        let existing = tag
            .key
            .as_ref()
            .and_then(|key| out.iter().position(|t| t.key.as_ref() == Some(key)));
        match existing {
            Some(index) => out[index] = tag,
            None => out.push(tag),
        }
    }
    out
}

/// Absolute canonical URL, or `None` when no canonical is set.
///
/// Values already starting with `http` are kept; anything else is treated
/// as a path on `origin`.
pub fn canonical_href(canonical: &str, origin: &str) -> Option<String> {
    if canonical.is_empty() {
        return None;
    }
    if canonical.starts_with("http") {
        return Some(canonical.to_owned());
    }
    let sep = if canonical.starts_with('/') { "" } else { "/" };
    Some(format!("{origin}{sep}{canonical}"))
}

/// Inputs for one head computation, all plain values.
#[derive(Clone, Debug, Default)]
pub struct SeoInput<'a> {
    pub title: &'a str,
    pub base_title: &'a str,
    pub locale: &'a str,
    pub description: Option<&'a str>,
    pub canonical: Option<&'a str>,
    pub origin: &'a str,
    pub extra_meta: &'a [MetaTag],
}

/// Everything the page head receives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadTags {
    pub title: String,
    pub meta: Vec<MetaTag>,
    pub canonical: Option<String>,
    pub lang: String,
}

/// Derive the full set of head tags for a page.
pub fn resolve_head(input: &SeoInput<'_>) -> HeadTags {
    let title = resolve_title(input.title, input.base_title);
    let description = input.description.map(truncate_description).filter(|d| !d.is_empty());

    let mut meta = og_tags(&title, input.base_title, input.locale, description.as_deref());
    if let Some(description) = description {
        meta.push(MetaTag::name("description", description).with_key("description"));
    }
    meta.extend(input.extra_meta.iter().cloned());

    HeadTags {
        title,
        meta: dedupe_meta(meta),
        canonical: input.canonical.and_then(|c| canonical_href(c, input.origin)),
        lang: input.locale.to_owned(),
    }
}
