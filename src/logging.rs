//! Subscriber setup for binaries embedding the indexer.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the executable so embedders can route events wherever they like.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive that overrides the verbosity flag.
pub const LOG_ENV: &str = "FSINDEX_LOG";

/// Directive used when no override is present.
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
	if verbose { "debug" } else { "info" }
}

/// Install a stderr `fmt` subscriber. Calling this more than once is a no-op.
pub fn initialize(verbose: bool) {
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbose_raises_the_default_level() {
		assert_eq!(default_directive(false), "info");
		assert_eq!(default_directive(true), "debug");
	}

	#[test]
	fn repeated_initialization_does_not_panic() {
		initialize(false);
		initialize(true);
	}
}
