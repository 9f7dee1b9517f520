//! Per-page `<head>` metadata: title, description, Open Graph, canonical
//! link and `<html lang>`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages render `<SeoHead .../>` once near the top of their view. Tags are
//! registered through `leptos_meta`, so `provide_meta_context()` must have
//! run in an ancestor. The locale comes from a `RwSignal<LocaleState>`
//! context when one is provided; otherwise the default locale is used.
//!
//! TRADE-OFFS
//! ==========
//! The canonical origin is read once from `window.location` when the
//! component mounts. During SSR there is no origin, so relative canonicals
//! render as root-relative paths until hydration replaces them.

#[cfg(test)]
#[path = "seo_head_test.rs"]
mod seo_head_test;

use leptos::either::Either;
use leptos::prelude::*;
use leptos_meta::{Html, Link, Meta, Title};

use crate::state::locale::LocaleState;
use crate::util::seo::{MetaAttr, MetaTag, SeoInput, resolve_head};

fn page_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

fn meta_view(tag: MetaTag) -> impl IntoView {
    match tag.attr {
        MetaAttr::Name(name) => Either::Left(view! { <Meta name=name content=tag.content/> }),
        MetaAttr::Property(property) => Either::Right(view! { <Meta property=property content=tag.content/> }),
    }
}

/// Register page metadata derived from reactive inputs.
///
/// `title` is suffixed with the translated site title. `description` is
/// capped at 160 characters and also emitted as `og:description`.
/// `canonical` may be an absolute URL or a path on the current origin.
/// `meta` entries are appended last; an entry keyed `"description"`
/// replaces the generated description tag.
#[component]
pub fn SeoHead(
    #[prop(into)] title: Signal<String>,
    #[prop(optional, into)] description: Option<Signal<String>>,
    #[prop(optional, into)] canonical: Option<Signal<String>>,
    #[prop(optional)] meta: Vec<MetaTag>,
) -> impl IntoView {
    let locale = use_context::<RwSignal<LocaleState>>().unwrap_or_else(|| RwSignal::new(LocaleState::default()));
    let origin = page_origin();

    let head = Memo::new(move |_| {
        let locale = locale.get();
        let base_title = locale.base_title();
        let title = title.get();
        let description = description.map(|d| d.get());
        let canonical = canonical.map(|c| c.get());
        resolve_head(&SeoInput {
            title: &title,
            base_title: &base_title,
            locale: &locale.locale,
            description: description.as_deref(),
            canonical: canonical.as_deref(),
            origin: &origin,
            extra_meta: &meta,
        })
    });

    // Mirror the resolved title onto the live document.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let title = head.with(|h| h.title.clone());
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(&title);
        }
    });

    view! {
        <Title text=move || head.with(|h| h.title.clone())/>
        <Html attr:lang=move || head.with(|h| h.lang.clone())/>
        {move || head.with(|h| h.meta.clone()).into_iter().map(meta_view).collect_view()}
        {move || head.with(|h| h.canonical.clone()).map(|href| view! { <Link rel="canonical" href=href/> })}
    }
}
