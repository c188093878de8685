// utils/logging.rs

use std::io::Write;

use env_logger::Builder;
use log::LevelFilter;

/// Initialize the global logger from the `--log-level` flag.
///
/// Records are written as `LEVEL: message` without timestamps; CI log
/// collectors stamp lines themselves.
pub fn initialize_logger(log_level: &str) {
    let level = log_level
        .to_lowercase()
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Info);

    Builder::new()
        .filter(None, level)
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();
}
