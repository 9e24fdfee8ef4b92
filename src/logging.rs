//! Logger setup for the binary.

use log::LevelFilter;

/// Maps the `-v` count to a level: warn, info, debug, then trace.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs `env_logger` writing to stderr.
///
/// `RUST_LOG`, when set, overrides the level chosen by `-v`. Calling this
/// twice is harmless; the second call is ignored.
pub fn init(verbose: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbose))
        .format_timestamp(None)
        .format_target(verbose >= 2)
        .parse_default_env();

    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}
