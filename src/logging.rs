//! Logging setup shared by both binaries

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber, writing to stderr. `RUST_LOG` overrides
/// `default_level`; `json` switches to one JSON object per line.
pub fn init_logging(default_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("Failed to initialize tracing subscriber: {}", e);
    }
}
