//! Logger setup for the command-line tool

use log::LevelFilter;
use std::env;

/// Initialize logging to stderr
///
/// Info level by default, debug output with `verbose`. `RUST_LOG`, when
/// set, overrides both. Calling this twice leaves the first logger in place.
pub fn init_logger(verbose: bool) {
    let level = default_level(verbose);

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}

const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_selects_debug() {
        assert_eq!(default_level(true), LevelFilter::Debug);
        assert_eq!(default_level(false), LevelFilter::Info);
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logger(false);
        init_logger(true);
    }
}
