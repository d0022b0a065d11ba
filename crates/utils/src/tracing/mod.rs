use phonemeta_core::PHONEMETA_LOG_VAR;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, span, trace, warn, Level, Span};

/// Default directive when `PHONEMETA_LOG` is unset or invalid
pub const DEFAULT_LOG_DIRECTIVE: &str = "warn";

/// Initialize the tracing system
///
/// Reads the filter from `PHONEMETA_LOG` and writes compact lines to stderr.
/// Fails instead of panicking when a global subscriber is already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = env_filter();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(true)
        .with_thread_ids(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Build the filter from `PHONEMETA_LOG`, falling back to [`DEFAULT_LOG_DIRECTIVE`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(PHONEMETA_LOG_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Create a span covering the cold load of one metadata key
pub fn load_span(source_name: &str) -> Span {
    span!(Level::DEBUG, "metadata_load", source = %source_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error_not_a_panic() {
        // The first call may lose to another test in this binary
        let _ = init();
        assert!(init().is_err());
    }
}
