//! Tracing subscriber setup for the binary.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "STORECTL_LOG";

/// Install a compact stderr logger. `verbosity` raises the default level
/// (warn, info, debug, trace); `STORECTL_LOG` overrides it entirely.
pub fn init(verbosity: u8) {
    let default_level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
