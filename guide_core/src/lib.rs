//! guide_core - Rust core for TermGuide
//!
//! Modules:
//! - catalog: built-in command catalog, compiled in and read-only
//! - matcher: token matcher over the catalog
//! - suggestions: fixed example queries for the query field
//! - capabilities: static help grid shown when nothing matches

pub mod catalog;
pub mod matcher;
pub mod suggestions;
pub mod capabilities;

// Re-export key types for convenience
pub use catalog::{catalog, placeholders, CommandEntry};

pub use matcher::{search, Match};

pub use suggestions::default_suggestions;

pub use capabilities::{overview, CapabilityGroup};
