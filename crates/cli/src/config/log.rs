//! Configuration and initialization for application logging.
//!
//! `LogConfig` selects where log records go (stdout, stderr, journald, a file)
//! and the minimum level. Table output is written to stdout, so by default
//! only stderr receives log records.
use std::{fs::OpenOptions, path::PathBuf};

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use tracing_subscriber::{
    Layer, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
};

/// Represents the configuration for the application's logging system.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogConfig {
    /// Optional path to a file where logs should be written.
    #[serde(default = "LogConfig::default_file_path")]
    pub file_path: Option<PathBuf>,

    /// Whether logs should be emitted to `journald`.
    #[serde(default = "LogConfig::default_emit_journald")]
    pub emit_journald: bool,

    /// Whether logs should be emitted to standard output.
    ///
    /// Log records interleave with the rendered table when enabled.
    #[serde(default = "LogConfig::default_emit_stdout")]
    pub emit_stdout: bool,

    /// Whether logs should be emitted to standard error.
    #[serde(default = "LogConfig::default_emit_stderr")]
    pub emit_stderr: bool,

    /// The minimum log level to be recorded.
    #[serde(default = "LogConfig::default_log_level")]
    #[serde_as(as = "DisplayFromStr")]
    pub level: tracing::Level,
}

impl Default for LogConfig {
    /// Returns a `LogConfig` that writes `WARN` and above to stderr only.
    fn default() -> Self {
        Self {
            file_path: Self::default_file_path(),
            emit_journald: Self::default_emit_journald(),
            emit_stdout: Self::default_emit_stdout(),
            emit_stderr: Self::default_emit_stderr(),
            level: Self::default_log_level(),
        }
    }
}

impl LogConfig {
    /// Returns the default log level, which is `WARN`.
    #[inline]
    #[must_use]
    pub const fn default_log_level() -> tracing::Level { tracing::Level::WARN }

    /// Returns the default file path for logs, which is `None`.
    #[inline]
    #[must_use]
    pub const fn default_file_path() -> Option<PathBuf> { None }

    /// Returns the default setting for `emit_journald`, which is `false`.
    #[inline]
    #[must_use]
    pub const fn default_emit_journald() -> bool { false }

    /// Returns the default setting for `emit_stdout`, which is `false`.
    #[inline]
    #[must_use]
    pub const fn default_emit_stdout() -> bool { false }

    /// Returns the default setting for `emit_stderr`, which is `true`.
    #[inline]
    #[must_use]
    pub const fn default_emit_stderr() -> bool { true }

    /// Initializes the global `tracing` subscriber registry based on this
    /// `LogConfig`.
    ///
    /// # Panics
    ///
    /// This method panics if called more than once in the same application
    /// lifetime, as `tracing_subscriber::util::SubscriberInitExt::init()`
    /// will panic if a global subscriber is already set.
    pub fn registry(&self) {
        let Self { emit_journald, file_path, emit_stdout, emit_stderr, level: log_level } = self;

        let filter_layer = tracing_subscriber::filter::LevelFilter::from_level(*log_level);

        tracing_subscriber::registry()
            .with(filter_layer)
            .with(emit_journald.then(|| LogDriver::Journald.layer()))
            .with(file_path.clone().map(|path| LogDriver::File(path).layer()))
            .with(emit_stdout.then(|| LogDriver::Stdout.layer()))
            .with(emit_stderr.then(|| LogDriver::Stderr.layer()))
            .init();
    }
}

/// Enumerates the possible log output drivers.
#[derive(Clone, Debug)]
enum LogDriver {
    Stdout,
    Stderr,
    Journald,
    File(PathBuf),
}

impl LogDriver {
    /// Creates a `tracing_subscriber::Layer` writing to this driver's target.
    ///
    /// Returns `None` when the log file cannot be opened or `journald` is not
    /// reachable.
    #[allow(clippy::type_repetition_in_bounds)]
    fn layer<S>(self) -> Option<Box<dyn Layer<S> + Send + Sync + 'static>>
    where
        S: tracing::Subscriber,
        for<'a> S: LookupSpan<'a>,
    {
        let fmt = tracing_subscriber::fmt::layer().with_target(false);

        match self {
            Self::Stdout => Some(Box::new(fmt.with_writer(std::io::stdout))),
            Self::Stderr => Some(Box::new(fmt.with_writer(std::io::stderr))),
            Self::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path).ok()?;
                Some(Box::new(fmt.with_ansi(false).with_writer(file)))
            }
            Self::Journald => Some(Box::new(tracing_journald::layer().ok()?)),
        }
    }
}
