// Copyright 2025 Irreducible Inc.

use super::{
	params::{NodeRole, TreeParams},
	LaneDigest, LANES,
};
use crate::{blake2s::State, error::Error, output::Blake2spHash};

/// The root node: absorbs the lane digests in lane order and emits the final digest.
///
/// The root records the key length in its parameter block but never absorbs the key block.
#[derive(Debug, Clone)]
pub struct RootCombiner {
	state: State,
	outlen: usize,
}

impl RootCombiner {
	pub fn new(params: &TreeParams) -> Result<Self, Error> {
		let mut state = State::new(&params.param_block(NodeRole::Root))?;
		state.mark_last_node();
		Ok(Self {
			state,
			outlen: params.outlen(),
		})
	}

	pub fn combine(mut self, digests: &[LaneDigest; LANES]) -> Blake2spHash {
		for digest in digests {
			self.state.update(digest);
		}
		Blake2spHash::truncate(&self.state.finalize(), self.outlen)
	}
}
