use super::*;

fn property<'a>(tags: &'a [MetaTag], name: &str) -> Option<&'a str> {
    tags.iter().find_map(|t| match &t.attr {
        MetaAttr::Property(p) if p == name => Some(t.content.as_str()),
        _ => None,
    })
}

// =============================================================
// Title
// =============================================================

#[test]
fn title_is_suffixed_with_base_title() {
    assert_eq!(resolve_title("Level 3", "Study Deck"), "Level 3 | Study Deck");
}

#[test]
fn empty_title_falls_back_to_base_title() {
    assert_eq!(resolve_title("", "Study Deck"), "Study Deck");
}

// =============================================================
// Description
// =============================================================

#[test]
fn long_description_is_truncated_to_exactly_160() {
    let long = "x".repeat(400);
    assert_eq!(truncate_description(&long).chars().count(), DESCRIPTION_MAX_CHARS);
}

#[test]
fn short_description_is_unchanged() {
    assert_eq!(truncate_description("Short and sweet."), "Short and sweet.");
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let long = "ж".repeat(200);
    let truncated = truncate_description(&long);
    assert_eq!(truncated.chars().count(), 160);
    assert_eq!(truncated.len(), 320);
}

// =============================================================
// Open Graph
// =============================================================

#[test]
fn og_locale_swaps_first_hyphen_only() {
    assert_eq!(og_locale("en-US"), "en_US");
    assert_eq!(og_locale("zh-Hant-TW"), "zh_Hant-TW");
    assert_eq!(og_locale("ru"), "ru");
}

#[test]
fn og_tags_have_fixed_order_without_description() {
    let tags = og_tags("T | B", "B", "en", None);
    let names: Vec<_> = tags
        .iter()
        .map(|t| match &t.attr {
            MetaAttr::Property(p) | MetaAttr::Name(p) => p.as_str(),
        })
        .collect();
    assert_eq!(names, ["og:title", "og:site_name", "og:type", "og:locale"]);
    assert_eq!(property(&tags, "og:type"), Some("website"));
}

#[test]
fn og_tags_include_description_when_present() {
    let tags = og_tags("T", "B", "en", Some("About"));
    assert_eq!(property(&tags, "og:description"), Some("About"));
}

#[test]
fn og_tags_skip_empty_description() {
    let tags = og_tags("T", "B", "en", Some(""));
    assert_eq!(property(&tags, "og:description"), None);
}

// =============================================================
// Dedupe
// =============================================================

#[test]
fn dedupe_keeps_last_entry_in_first_position() {
    let tags = vec![
        MetaTag::name("description", "first").with_key("description"),
        MetaTag::name("robots", "index"),
        MetaTag::name("description", "second").with_key("description"),
    ];
    let out = dedupe_meta(tags);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].content, "second");
    assert_eq!(out[1].content, "index");
}

#[test]
fn dedupe_leaves_unkeyed_duplicates() {
    let tags = vec![MetaTag::name("a", "1"), MetaTag::name("a", "2")];
    assert_eq!(dedupe_meta(tags).len(), 2);
}

// =============================================================
// Canonical
// =============================================================

#[test]
fn absolute_canonical_is_unchanged() {
    assert_eq!(
        canonical_href("https://example.org/x", "https://origin.test").as_deref(),
        Some("https://example.org/x")
    );
}

#[test]
fn relative_canonical_gets_single_slash() {
    assert_eq!(
        canonical_href("collections/4", "https://origin.test").as_deref(),
        Some("https://origin.test/collections/4")
    );
    assert_eq!(
        canonical_href("/collections/4", "https://origin.test").as_deref(),
        Some("https://origin.test/collections/4")
    );
}

#[test]
fn relative_canonical_without_origin_stays_rooted() {
    assert_eq!(canonical_href("about", "").as_deref(), Some("/about"));
}

#[test]
fn empty_canonical_has_no_link() {
    assert_eq!(canonical_href("", "https://origin.test"), None);
}

// =============================================================
// Full head
// =============================================================

#[test]
fn resolve_head_combines_all_parts() {
    let extra = [MetaTag::name("robots", "noindex")];
    let head = resolve_head(&SeoInput {
        title: "Level 2",
        base_title: "Study Deck",
        locale: "en-GB",
        description: Some("Practice cards"),
        canonical: Some("/c/1"),
        origin: "https://origin.test",
        extra_meta: &extra,
    });

    assert_eq!(head.title, "Level 2 | Study Deck");
    assert_eq!(head.lang, "en-GB");
    assert_eq!(head.canonical.as_deref(), Some("https://origin.test/c/1"));
    assert_eq!(property(&head.meta, "og:title"), Some("Level 2 | Study Deck"));
    assert_eq!(property(&head.meta, "og:locale"), Some("en_GB"));
    assert_eq!(head.meta.len(), 7);
    assert_eq!(head.meta[5], MetaTag::name("description", "Practice cards").with_key("description"));
    assert_eq!(head.meta[6], MetaTag::name("robots", "noindex"));
}

#[test]
fn resolve_head_extra_meta_can_override_description() {
    let extra = [MetaTag::name("description", "Custom").with_key("description")];
    let head = resolve_head(&SeoInput {
        title: "T",
        base_title: "B",
        locale: "en",
        description: Some("Generated"),
        extra_meta: &extra,
        ..SeoInput::default()
    });
    let descriptions: Vec<_> = head
        .meta
        .iter()
        .filter(|t| t.attr == MetaAttr::Name("description".to_owned()))
        .collect();
    assert_eq!(descriptions.len(), 1);
    assert_eq!(descriptions[0].content, "Custom");
}

#[test]
fn resolve_head_without_optional_inputs() {
    let head = resolve_head(&SeoInput {
        title: "",
        base_title: "B",
        locale: "en",
        ..SeoInput::default()
    });
    assert_eq!(head.title, "B");
    assert_eq!(head.canonical, None);
    assert_eq!(head.meta.len(), 4);
}
