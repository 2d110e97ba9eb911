//! Log setup for the binary.
//!
//! Events go to stderr so they never mix with command output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "EDUDESK_LOG";

/// Level implied by the number of `-v` flags.
#[must_use]
pub const fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// `EDUDESK_LOG` wins over `-v` when set. Calling this twice is harmless.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("edudesk={}", level_for(verbose))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
