use log::LevelFilter;

/// Initialize logging for the command-line tools.
///
/// # Behavior
/// - Logs go to stderr, so stdout carries only the checked records.
/// - `debug_enabled` selects `Debug` over the default `Warn` level.
/// - `RUST_LOG`, if set, overrides both.
pub fn init_logger(debug_enabled: bool) {
    use std::env;

    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

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

    // a second initialization (e.g., from tests) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
