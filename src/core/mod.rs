// Internal modules - not part of public API
pub(crate) mod config;
pub(crate) mod discovery;

pub mod command;
pub mod inspect;

// Public API - curated exports only
pub mod api;

// Re-export key items at module level for convenience
pub use api::*;
