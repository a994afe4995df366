//! Logging setup using tracing.
//!
//! Output goes to stderr. The level is controlled by `GO_RESTAURANT_LOG`
//! and defaults to `warn` so the interactive screen stays readable.
//!
//! ```bash
//! GO_RESTAURANT_LOG=debug go_restaurant order 1
//! ```

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GO_RESTAURANT_LOG";

pub fn init() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
