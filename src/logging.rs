use std::env;

use log::LevelFilter;

/// Installs `env_logger` on stderr.
///
/// `Info` by default, `Debug` when `debug_enabled`; an explicit `RUST_LOG`
/// overrides both.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second call (e.g. from tests) keeps the logger already installed.
    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
