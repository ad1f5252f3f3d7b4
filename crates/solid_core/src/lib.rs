//! Paired bad/good examples of the five SOLID design principles.
//! Each example is namespaced on its own; the catalog lists and walks them.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod principles;

pub use catalog::{
    catalog, examples_for, parse_principle, walk_catalog, CatalogError, Example, Principle,
    Variant,
};
pub use config::{default_log_level, LogConfig};
pub use logging::{flush_logging, init_logging, logging_status, LoggingError};

/// Line printed by the entry point.
pub const BANNER: &str = "Hello, world!!!";

/// Returns the entry-point banner.
pub fn banner() -> &'static str {
    BANNER
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
