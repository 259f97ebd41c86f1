// Tracing subscriber setup for the `visions` binary.
//
// Log lines go to stderr so stdout carries only the generated text. The
// filter defaults to `warn` and honours `RUST_LOG`, e.g.
// `RUST_LOG=xanadu_visions=debug` to trace every chain transition.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global fmt subscriber. A second call is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
