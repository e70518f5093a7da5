use crate::error::{Result as ServerErrorResult, ServerError};

use fleet_config::LoggingConfig;

use std::fmt::Display;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Where log lines go once the logger is installed.
#[derive(Debug, PartialEq)]
pub(crate) enum Sink {
    File(PathBuf),
    ColoredStdout,
    PlainStdout,
}

impl Sink {
    /// A configured file wins over stdout; colors only apply to stdout.
    pub(crate) fn resolve(logging: &LoggingConfig, config_dir: &Path) -> ServerErrorResult<Self> {
        match logging.file {
            Some(ref filename) => {
                let log_dir = config_dir.join(&logging.dir);
                std::fs::create_dir_all(&log_dir).map_err(|e| ServerError::LogFile {
                    path: log_dir.display().to_string(),
                    source: e,
                })?;
                Ok(Sink::File(log_dir.join(filename)))
            }
            None if logging.colored => Ok(Sink::ColoredStdout),
            None => Ok(Sink::PlainStdout),
        }
    }
}

fn write_line(out: FormatCallback, message: &std::fmt::Arguments, record: &Record, level: impl Display) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{target}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        target = record.target(),
    ))
}

/// Install the global fern logger described by `[logging]`.
///
/// `config_dir` anchors the relative `logging.dir`; the directory is created
/// when a log file is configured. File output is append-only and uncolored.
pub fn initialize(logging: &LoggingConfig, config_dir: &Path) -> ServerErrorResult<()> {
    let level_filter = logging.level.0;
    let sink = Sink::resolve(logging, config_dir)?;

    let output = match sink {
        Sink::File(ref path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ServerError::LogFile {
                    path: path.display().to_string(),
                    source: e,
                })?;

            Dispatch::new()
                .format(|out, message, record| write_line(out, message, record, record.level()))
                .chain(file)
        }
        Sink::ColoredStdout => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.color(record.level()))
                })
                .chain(std::io::stdout())
        }
        Sink::PlainStdout => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        // agent polling would flood debug output with connection chatter
        .level_for("hyper", LevelFilter::Warn)
        .level_for("hyper_util", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match sink {
        Sink::File(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        Sink::ColoredStdout | Sink::PlainStdout => {
            info!("Logger initialized: level={:?}, stdout", level_filter)
        }
    }

    Ok(())
}
