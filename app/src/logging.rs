//! Logging setup with file output for release builds.

use colorex_core::config::log_dir;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_FILTER: &str = "colorex_app=info,colorex_core=info,colorex_platform=info";

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into())
}

/// Initialize logging with console and optional file output.
///
/// In release builds logs are also written to `<config dir>/colorex/logs/`,
/// rotated daily.
pub fn setup(is_production: bool) {
    let console_layer = fmt::layer()
        .with_target(true)
        .with_filter(env_filter(DEFAULT_FILTER));

    let file_layer = if is_production {
        let dir = log_dir();
        match std::fs::create_dir_all(&dir) {
            Ok(()) => {
                let appender = RollingFileAppender::new(Rotation::DAILY, &dir, "colorex.log");
                Some(
                    fmt::layer()
                        .with_target(true)
                        .with_ansi(false)
                        .with_writer(appender)
                        .with_filter(env_filter(DEFAULT_FILTER)),
                )
            }
            Err(e) => {
                eprintln!("Warning: Failed to create log directory {:?}: {}", dir, e);
                None
            }
        }
    } else {
        None
    };

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();

    if is_production {
        tracing::info!("File logging enabled: {:?}", log_dir());
    }
    tracing::info!("Logging initialized (production={})", is_production);
}
