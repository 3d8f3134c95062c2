//! Structured logging
//!
//! Records are JSON objects written to stdout. The subscriber is scoped to one
//! CLI run with [`tracing::subscriber::with_default`] instead of being
//! installed process-wide.

use tracing::Level;

pub fn subscriber(debug: bool) -> impl tracing::Subscriber + Send + Sync + 'static {
    let level = if debug { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stdout)
        .finish()
}
