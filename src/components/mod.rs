//! Reusable UI components.

pub mod seo_head;
