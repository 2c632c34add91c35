//! Tracing subscriber setup for the `regatta` binary.
//!
//! Library crates only emit events; this module decides where they go and
//! in which format.
//!
//! | level   | used for                                         |
//! |---------|--------------------------------------------------|
//! | `error` | fatal pipeline errors                            |
//! | `warn`  | ambiguous cox matches                            |
//! | `info`  | stage completion and headline counts             |
//! | `debug` | row counts per stage, dropped duplicates         |
//! | `trace` | person-level detail, names only with `--log-data`|

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Stand-in for a person's name in log output.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Targets that follow the configured level. Dependencies stay at `warn`.
const REGATTA_TARGETS: &[&str] = &[
    "regatta",
    "regatta_cli",
    "regatta_common",
    "regatta_ingest",
    "regatta_model",
    "regatta_report",
    "regatta_transform",
];

pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Relaxed)
}

/// `value` when `--log-data` is set, [`REDACTED_VALUE`] otherwise.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` take precedence over `level_filter`.
    pub use_env_filter: bool,
    pub format: LogFormat,
    pub with_ansi: bool,
    pub with_timestamps: bool,
    pub with_target: bool,
    /// Append to this file instead of writing to stderr.
    pub log_file: Option<PathBuf>,
    pub log_data: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            format: LogFormat::Pretty,
            with_ansi: true,
            with_timestamps: false,
            with_target: false,
            log_file: None,
            log_data: false,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn with_log_data(mut self, enable: bool) -> Self {
        self.log_data = enable;
        self
    }

    /// Filter directive used when `RUST_LOG` is ignored or unset,
    /// e.g. `warn,regatta=debug,regatta_cli=debug,...`.
    pub fn directive(&self) -> String {
        let level = self.level_filter.to_string().to_lowercase();
        REGATTA_TARGETS
            .iter()
            .fold(String::from("warn"), |mut directive, target| {
                directive.push_str(&format!(",{target}={level}"));
                directive
            })
    }

    fn env_filter(&self) -> EnvFilter {
        if self.use_env_filter
            && let Ok(filter) = EnvFilter::try_from_default_env()
        {
            return filter;
        }
        EnvFilter::new(self.directive())
    }

    fn layer(&self, writer: BoxMakeWriter) -> Box<dyn Layer<Registry> + Send + Sync> {
        let base = fmt::layer()
            .with_writer(writer)
            .with_target(self.with_target);
        match (self.format, self.with_timestamps) {
            (LogFormat::Json, _) => base
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .boxed(),
            (LogFormat::Compact, true) => base.compact().with_ansi(self.with_ansi).boxed(),
            (LogFormat::Compact, false) => base
                .compact()
                .with_ansi(self.with_ansi)
                .without_time()
                .boxed(),
            (LogFormat::Pretty, true) => base.with_ansi(self.with_ansi).boxed(),
            (LogFormat::Pretty, false) => base.with_ansi(self.with_ansi).without_time().boxed(),
        }
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let writer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(io::stderr),
    };
    LOG_DATA_ENABLED.store(config.log_data, Ordering::Relaxed);
    let layer = config.layer(writer).with_filter(config.env_filter());
    tracing_subscriber::registry().with(layer).init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_raises_only_regatta_targets() {
        let config = LogConfig::default().with_level_filter(LevelFilter::DEBUG);
        let directive = config.directive();
        assert!(directive.starts_with("warn,regatta=debug,"));
        assert!(directive.ends_with("regatta_transform=debug"));
        assert_eq!(directive.matches('=').count(), REGATTA_TARGETS.len());
    }

    #[test]
    fn names_are_redacted_unless_enabled() {
        let config = LogConfig::default();
        assert!(!config.log_data);
        assert!(config.with_log_data(true).log_data);
        assert_eq!(redact_value("A. Smith"), REDACTED_VALUE);
    }
}
