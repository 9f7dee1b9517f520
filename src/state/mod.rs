//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`anon_progress`, `locale`) so pages can depend
//! on small focused models.

pub mod anon_progress;
pub mod locale;
