// src/log.rs
use tracing_subscriber::{EnvFilter, fmt::time};

/// Level for this crate at a given `-v` count. Dependencies stay at `warn`.
fn directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,cucm_params={level}")
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
/// Timestamps are elapsed time since start, like `[00:00:01.234]`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(verbosity)));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(time::uptime())
        .with_target(false)
        .try_init();
}
