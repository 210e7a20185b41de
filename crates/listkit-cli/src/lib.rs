//! CLI library components for listkit.

pub mod logging;
pub mod summary;
