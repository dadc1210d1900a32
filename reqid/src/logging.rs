use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber. Everything goes to stderr so stdout stays
/// reserved for ids.
///
/// - `RUST_LOG` controls filtering, defaulting to "warn"
/// - JSON lines when stderr is not a terminal, compact text otherwise
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    if io::stderr().is_terminal() {
        builder.compact().init();
    } else {
        builder.json().flatten_event(true).init();
    }
}
