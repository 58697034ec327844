// Copyright 2025 Irreducible Inc.

use std::{env, sync::OnceLock};

/// When `RAYON_NUM_THREADS=1`, build the global pool with a single thread that is the calling
/// thread. Lanes then run in order on the caller, which keeps profiles and backtraces readable
/// while going through the same code path as the multi-threaded schedule.
///
/// NOTE: rayon allows the global pool to be initialized only once, so if it was built earlier
/// this returns the build error. Call it at the beginning of `main` (or of a benchmark).
/// A reference is returned because `ThreadPoolBuildError` doesn't implement `Clone`.
pub fn adjust_thread_pool() -> &'static Result<(), rayon::ThreadPoolBuildError> {
	static ONCE_GUARD: OnceLock<Result<(), rayon::ThreadPoolBuildError>> = OnceLock::new();

	ONCE_GUARD.get_or_init(|| match env::var("RAYON_NUM_THREADS") {
		Ok(v) if v == "1" => rayon::ThreadPoolBuilder::new()
			.num_threads(1)
			.use_current_thread()
			.build_global(),
		_ => Ok(()),
	})
}
