// Copyright 2025 Irreducible Inc.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Safe to call more than once: later calls leave the first subscriber in place.
pub fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_test_writer())
		.try_init();
}
