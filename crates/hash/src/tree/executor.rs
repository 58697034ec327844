// Copyright 2025 Irreducible Inc.

use std::{sync::OnceLock, thread};

use blake2sp_utils::env::boolean_env_flag_set;
use tracing::instrument;

use super::{leaf::LeafHasher, LaneDigest, LANES};

/// Environment flag that forces [`Schedule::from_env`] to pick [`Schedule::Sequential`].
pub const SEQUENTIAL_ENV_FLAG: &str = "BLAKE2SP_SEQUENTIAL";

/// How the leaf lanes are scheduled. All schedules produce identical digests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Schedule {
	/// Lanes run one after another on the calling thread.
	Sequential,
	/// Lanes run on the current rayon pool. Without the `rayon` feature this is sequential.
	#[default]
	Rayon,
	/// One scoped OS thread per lane.
	ScopedThreads,
}

impl Schedule {
	pub const ALL: [Schedule; 3] = [Self::Sequential, Self::Rayon, Self::ScopedThreads];

	/// [`Schedule::Sequential`] if `BLAKE2SP_SEQUENTIAL` is set, the default otherwise.
	pub fn from_env() -> Self {
		if boolean_env_flag_set(SEQUENTIAL_ENV_FLAG) {
			Self::Sequential
		} else {
			Self::default()
		}
	}

	/// [`Schedule::from_env`], read once per process.
	pub fn process_default() -> Self {
		static SCHEDULE: OnceLock<Schedule> = OnceLock::new();

		*SCHEDULE.get_or_init(Self::from_env)
	}
}

/// Run every lane to completion and return the lane digests in lane order.
///
/// Returns only after all lanes have finished.
#[instrument(skip_all, level = "debug", fields(schedule = ?schedule, len = input.len()))]
pub fn hash_lanes(
	leaves: [LeafHasher; LANES],
	input: &[u8],
	schedule: Schedule,
) -> [LaneDigest; LANES] {
	let mut digests = [LaneDigest::default(); LANES];

	match schedule {
		Schedule::Sequential => hash_sequential(leaves, input, &mut digests),
		Schedule::Rayon => hash_rayon(leaves, input, &mut digests),
		Schedule::ScopedThreads => hash_scoped(leaves, input, &mut digests),
	}

	digests
}

fn hash_sequential(leaves: [LeafHasher; LANES], input: &[u8], out: &mut [LaneDigest; LANES]) {
	for (leaf, digest) in leaves.into_iter().zip(out.iter_mut()) {
		*digest = leaf.hash(input);
	}
}

cfg_if::cfg_if! {
	if #[cfg(feature = "rayon")] {
		fn hash_rayon(leaves: [LeafHasher; LANES], input: &[u8], out: &mut [LaneDigest; LANES]) {
			use rayon::prelude::*;

			leaves
				.into_par_iter()
				.zip(out.par_iter_mut())
				.for_each(|(leaf, digest)| *digest = leaf.hash(input));
		}
	} else {
		fn hash_rayon(leaves: [LeafHasher; LANES], input: &[u8], out: &mut [LaneDigest; LANES]) {
			hash_sequential(leaves, input, out)
		}
	}
}

fn hash_scoped(leaves: [LeafHasher; LANES], input: &[u8], out: &mut [LaneDigest; LANES]) {
	thread::scope(|scope| {
		for (leaf, digest) in leaves.into_iter().zip(out.iter_mut()) {
			scope.spawn(move || *digest = leaf.hash(input));
		}
	});
}
