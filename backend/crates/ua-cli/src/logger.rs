use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Initialize the CLI logger with fern.
///
/// Logs go to stderr so stdout carries only the JSON result.
pub fn initialize(level: LevelFilter, colored: bool) -> Result<(), log::SetLoggerError> {
    let colors = ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    Dispatch::new()
        .level(level)
        .format(move |out, message, record| {
            let level = if colored {
                colors.color(record.level()).to_string()
            } else {
                record.level().to_string()
            };
            out.finish(format_args!(
                "[{date} - {level}] {message} [{target}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = level,
                message = message,
                target = record.target(),
            ))
        })
        .chain(std::io::stderr())
        .apply()
}
