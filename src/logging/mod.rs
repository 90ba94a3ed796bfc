use std::io;

use time::macros::format_description;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, time::LocalTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::cli::types::{LogFormat, LogLevel};
use crate::config::{DEFAULT_MAX_LOG_FILES, LOG_DIRECTORY};

pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub file_path: Option<String>,
    pub max_log_files: Option<usize>,
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn build_filter(level: tracing::Level) -> Result<EnvFilter, BoxError> {
    Ok(EnvFilter::from_default_env()
        .add_directive(format!("cafe_finder={}", level).parse()?)
        .add_directive("tokio=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("tower_http=warn".parse()?))
}

fn file_writer(
    file_path: &str,
    max_files: usize,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard), BoxError> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_path)
        .filename_suffix("log")
        .max_log_files(max_files)
        .build(LOG_DIRECTORY)?;

    Ok(tracing_appender::non_blocking(file_appender))
}

/// Installs the global subscriber. Console output always; a daily rolling
/// file under `./logs` as well when `file_path` is set.
pub fn configure_global_tracing(config: LogConfig) -> Result<(), BoxError> {
    let timer = LocalTime::new(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ));

    let filter = build_filter(config.level.as_tracing_level())?;
    let registry = tracing_subscriber::registry().with(filter);
    let max_files = config.max_log_files.unwrap_or(DEFAULT_MAX_LOG_FILES);

    let file = match config.file_path.as_deref() {
        Some(file_path) => Some(file_writer(file_path, max_files)?),
        None => None,
    };

    // The guard flushes the file writer on drop; it has to live as long as the process.
    let file_writer = file.map(|(writer, guard)| {
        std::mem::forget(guard);
        writer
    });

    match config.format {
        LogFormat::Pretty => {
            let console_layer = fmt::layer()
                .pretty()
                .with_thread_ids(true)
                .with_line_number(false)
                .with_file(true)
                .with_timer(timer.clone())
                .with_writer(io::stdout);

            let file_layer = file_writer.map(|writer| {
                fmt::layer()
                    .with_thread_ids(true)
                    .with_ansi(false)
                    .with_timer(timer.clone())
                    .with_writer(writer)
            });

            registry.with(console_layer).with(file_layer).try_init()?;
        }
        LogFormat::Json => {
            let console_layer = fmt::layer()
                .json()
                .with_timer(timer.clone())
                .with_writer(io::stdout);

            let file_layer = file_writer.map(|writer| {
                fmt::layer()
                    .json()
                    .with_timer(timer.clone())
                    .with_writer(writer)
            });

            registry.with(console_layer).with(file_layer).try_init()?;
        }
        LogFormat::Compact => {
            let console_layer = fmt::layer()
                .compact()
                .with_timer(timer.clone())
                .with_writer(io::stdout);

            let file_layer = file_writer.map(|writer| {
                fmt::layer()
                    .compact()
                    .with_ansi(false)
                    .with_timer(timer.clone())
                    .with_writer(writer)
            });

            registry.with(console_layer).with(file_layer).try_init()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_accepts_every_level() {
        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ] {
            assert!(build_filter(level.as_tracing_level()).is_ok());
        }
    }
}
