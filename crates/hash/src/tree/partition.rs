// Copyright 2025 Irreducible Inc.

use std::{iter, ops::Range};

use super::LANES;
use crate::blake2s::BLOCK_LEN;

/// Bytes covered by one round of striping: one block per lane.
pub const STRIPE_LEN: usize = LANES * BLOCK_LEN;

/// The byte ranges of an input of length `len` that lane `lane` absorbs, in order.
///
/// The input is striped across lanes one block at a time: block `b` belongs to lane
/// `b % LANES`. Every yielded range is a full block except possibly the last one, and no range
/// is empty. A lane whose first tail block would start past the end of the input yields nothing
/// for the tail.
///
/// # Panics
///
/// Panics if `lane` is not below [`LANES`].
pub fn lane_ranges(
	len: usize,
	lane: usize,
) -> impl DoubleEndedIterator<Item = Range<usize>> + Clone {
	assert!(lane < LANES, "lane {lane} out of range 0..{LANES}");

	let full_stripes = len / STRIPE_LEN;
	let lane_offset = lane * BLOCK_LEN;

	let full = (0..full_stripes).map(move |stripe| {
		let start = stripe * STRIPE_LEN + lane_offset;
		start..start + BLOCK_LEN
	});

	let tail_start = full_stripes * STRIPE_LEN + lane_offset;
	let tail = (tail_start < len)
		.then(|| tail_start..tail_start + (len - tail_start).min(BLOCK_LEN));

	full.chain(iter::once(tail).flatten())
}

/// Total number of bytes lane `lane` absorbs from an input of length `len`.
pub fn lane_len(len: usize, lane: usize) -> usize {
	lane_ranges(len, lane).map(|range| range.len()).sum()
}
