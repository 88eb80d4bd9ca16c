//! Logger initialization.

use std::io::Write;

use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Dependencies that are noisy at the level the user picks for this crate.
const QUIET_MODULES: &[(&str, LevelFilter)] = &[
    ("html5ever", LevelFilter::Error),
    ("selectors", LevelFilter::Warn),
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
    ("tower_http", LevelFilter::Info),
];

/// Installs the global `env_logger` with the given level and line format.
///
/// `RUST_LOG` is read first; `level` then overrides it for the root and for
/// this crate, while a few chatty dependencies are capped.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=metasnap=debug metasnap serve --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for (module, cap) in QUIET_MODULES {
        builder.filter_module(module, *cap);
    }
    builder.filter_module("metasnap", level);

    match format {
        LogFormat::Json => builder.format(|buf, record| {
            let line = json_line(
                chrono::Utc::now().timestamp_millis(),
                record.level(),
                record.target(),
                &record.args().to_string(),
            );
            writeln!(buf, "{}", line)
        }),
        LogFormat::Plain => builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.target().cyan(),
                paint_level(record.level()),
                record.args()
            )
        }),
    };

    builder.try_init()?;
    Ok(())
}

/// One structured log record.
fn json_line(ts_millis: i64, level: Level, target: &str, message: &str) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": level.as_str(),
        "target": target,
        "msg": message,
    })
    .to_string()
}

fn paint_level(level: Level) -> ColoredString {
    let label = level.as_str();
    match level {
        Level::Error => label.red(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.purple(),
    }
}
