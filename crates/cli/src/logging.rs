use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber.
///
/// Levels come from `RESONANCE_LOG` (e.g. `resonance_bond=debug`), falling back
/// to `resonance=info`. Output goes to stderr so tables on stdout stay clean.
pub fn init() {
    let filter =
        EnvFilter::try_from_env("RESONANCE_LOG").unwrap_or_else(|_| EnvFilter::new("resonance=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}
