//! Catalog entry point.
//!
//! # Responsibility
//! - Print the fixed banner as the only stdout line.
//! - Walk the example catalog, emitting log events when logging is configured.

use solid_core::LogConfig;

fn main() {
    println!("{}", solid_core::banner());

    if let Some(config) = LogConfig::from_env() {
        if let Err(err) = solid_core::init_logging(&config) {
            eprintln!("solid_cli: logging disabled: {err}");
        }
    }

    let walked = solid_core::walk_catalog();
    log::debug!("event=cli_exit module=cli status=ok examples={walked}");
    solid_core::flush_logging();
}
