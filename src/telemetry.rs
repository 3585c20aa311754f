//! Logging setup.
//!
//! Logs go to stderr so stdout stays free for the rendered workflow.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` directives are honoured; an unparsable value falls back to
/// `info`. `LOG_FORMAT=json` switches to structured JSON lines.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
