//! Logging and tracing bootstrap.

use bookshelf_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the level filter: `RUST_LOG` wins, otherwise the configured level
/// applies to bookshelf crates and `tower_http`.
pub fn env_filter(settings: &TelemetrySettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &settings.log_level;
        EnvFilter::new(format!(
            "{level},bookshelf_app={level},bookshelf_http={level},tower_http={level}"
        ))
    })
}

/// Install the global tracing subscriber.
///
/// Returns `false` when a subscriber was already installed, which happens when
/// both the CLI and an embedded bootstrap try to initialise logging.
pub fn init(settings: &TelemetrySettings) -> bool {
    let registry = tracing_subscriber::registry().with(env_filter(settings));

    let installed = match settings.log_format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .try_init(),
    }
    .is_ok();

    if installed {
        tracing::info!(
            target: "bookshelf-telemetry",
            format = ?settings.log_format,
            level = %settings.log_level,
            "telemetry initialised"
        );
    }

    installed
}
