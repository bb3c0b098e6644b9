//! Structured logging for the ikura CLI.
//!
//! Diagnostics go to `stderr` so generated structures on `stdout` stay
//! machine-readable. `RUST_LOG` controls the filter; `IKURA_LOG_FORMAT`
//! selects between compact text and JSON events. The `log` facade is bridged
//! so crates using either API end up in the same stream.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

const FORMAT_ENV: &str = "IKURA_LOG_FORMAT";

/// Filter applied when `RUST_LOG` is unset. Generator fallback diagnostics
/// are `debug`-level, so they stay opt-in.
const DEFAULT_FILTER: &str = "info";

static GUARD: OnceLock<()> = OnceLock::new();

/// Output format for diagnostic events.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Compact single-line text for terminals.
    #[default]
    Human,
    /// One JSON object per event, for log collectors.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(LoggingError::UnknownFormat {
                provided: raw.trim().to_owned(),
            }),
        }
    }
}

/// Errors raised while reading the logging configuration.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `IKURA_LOG_FORMAT` held something other than a supported format name.
    #[error("unknown log format `{provided}`; use `human` or `json`")]
    UnknownFormat {
        /// Value the user supplied, trimmed.
        provided: String,
    },
    /// `IKURA_LOG_FORMAT` held bytes that are not valid UTF-8.
    #[error("IKURA_LOG_FORMAT is not valid UTF-8")]
    NonUnicodeFormat,
}

/// Reads the requested format from the environment, defaulting to
/// human-readable output when the variable is absent.
fn format_from_env() -> Result<LogFormat, LoggingError> {
    match env::var_os(FORMAT_ENV) {
        None => Ok(LogFormat::default()),
        Some(raw) => raw
            .into_string()
            .map_err(|_| LoggingError::NonUnicodeFormat)?
            .parse(),
    }
}

/// Install global structured logging once per process.
///
/// Later calls are no-ops, as is running under a harness that already owns
/// the global subscriber; the first configuration wins in both cases.
///
/// # Errors
/// Returns [`LoggingError`] when `IKURA_LOG_FORMAT` is unreadable or names an
/// unsupported format.
pub fn init_logging() -> Result<(), LoggingError> {
    let format = format_from_env()?;
    if GUARD.set(()).is_err() {
        return Ok(());
    }
    install(format);
    Ok(())
}

fn install(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let events = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE);
    let events = match format {
        LogFormat::Human => events.compact().boxed(),
        LogFormat::Json => events.json().boxed(),
    };

    // Route `log` records through tracing; a pre-existing logger keeps its
    // slot.
    let _ = LogTracer::init();

    // try_init only fails when another subscriber already owns the global
    // slot, in which case the existing configuration stands.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(events)
        .try_init();
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{LogFormat, LoggingError, init_logging};

    #[rstest]
    #[case("human", LogFormat::Human)]
    #[case("TEXT", LogFormat::Human)]
    #[case(" json ", LogFormat::Json)]
    fn formats_parse_ignoring_case_and_whitespace(
        #[case] raw: &str,
        #[case] expected: LogFormat,
    ) {
        let format: LogFormat = raw.parse().expect("format must parse");
        assert_eq!(format, expected);
    }

    #[test]
    fn unknown_formats_report_the_supplied_value() {
        let err = "yaml".parse::<LogFormat>().expect_err("yaml is unsupported");
        match err {
            LoggingError::UnknownFormat { provided } => assert_eq!(provided, "yaml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn the_default_format_is_human() {
        assert_eq!(LogFormat::default(), LogFormat::Human);
    }

    #[test]
    fn repeated_initialisation_is_a_no_op() {
        init_logging().expect("logging must initialise");
        init_logging().expect("later calls must be no-ops");
    }
}
