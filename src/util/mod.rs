//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component
//! logic to improve reuse and testability.

pub mod local_storage;
pub mod search_query;
pub mod seo;
