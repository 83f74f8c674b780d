//! Logging and tracing initialization.
//!
//! Logs go to stderr; stdout is reserved for command output such as the
//! run summary. Verbose text logs carry targets and thread ids so lines
//! from concurrent render jobs can be told apart.

use crate::config::LoggingConfig;

/// Initialize the tracing subscriber with the given configuration.
///
/// Only the first call installs a subscriber; later calls are no-ops.
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    if config.json {
        let subscriber = builder.json().finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    } else {
        let subscriber = builder
            .with_target(config.verbose)
            .with_thread_ids(config.verbose)
            .with_file(false)
            .with_line_number(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
}
