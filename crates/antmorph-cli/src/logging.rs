//! Tracing subscriber setup
//!
//! Logs go to stderr so generated text and `show` output stay clean on
//! stdout. `RUST_LOG` wins over `--verbose`:
//!
//! ```bash
//! RUST_LOG=antmorph_build=debug antmorph generate
//! ```

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber. Call once, before any command runs.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(layer).init();
}
