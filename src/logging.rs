//! Tracing subscriber setup for the binary

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter for a `-v` count; `RUST_LOG` wins when set
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "domain_companion=warn",
        1 => "domain_companion=info",
        2 => "domain_companion=debug",
        _ => "domain_companion=trace",
    }
}

/// Install the global subscriber. Logs go to stderr so `--json` stdout
/// stays machine-readable.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
