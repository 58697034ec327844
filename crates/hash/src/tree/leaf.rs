// Copyright 2025 Irreducible Inc.

use std::array;

use super::{
	key_block::KeyBlock,
	params::{NodeRole, TreeParams},
	partition::lane_ranges,
	LaneDigest, LANES,
};
use crate::{
	blake2s::{ParamBlock, ParamBlockError, State},
	error::Error,
};

/// The hash state of one leaf lane, keyed and ready to absorb its share of the input.
#[derive(Debug, Clone)]
pub struct LeafHasher {
	lane: usize,
	state: State,
}

impl LeafHasher {
	/// Initialize lane `lane`, absorbing the key block first when keyed.
	pub fn new(
		params: &TreeParams,
		lane: usize,
		key_block: Option<&KeyBlock>,
	) -> Result<Self, ParamBlockError> {
		let block = params.param_block(NodeRole::Leaf { lane });
		block.validate()?;
		Ok(Self::from_validated(lane, &block, key_block))
	}

	fn from_validated(lane: usize, block: &ParamBlock, key_block: Option<&KeyBlock>) -> Self {
		let mut state = State::from_validated(block);
		if lane == LANES - 1 {
			state.mark_last_node();
		}
		if let Some(key_block) = key_block {
			state.update(key_block.as_bytes());
		}
		Self { lane, state }
	}

	pub fn lane(&self) -> usize {
		self.lane
	}

	/// Absorb this lane's stripes of `input` and produce the lane digest.
	///
	/// `input` is the whole message, not just this lane's part.
	pub fn hash(mut self, input: &[u8]) -> LaneDigest {
		for range in lane_ranges(input.len(), self.lane) {
			self.state.update(&input[range]);
		}
		self.state.finalize()
	}
}

/// Initialize all lanes. Every parameter block is validated before any state is built.
pub fn init_leaves(
	params: &TreeParams,
	key_block: Option<&KeyBlock>,
) -> Result<[LeafHasher; LANES], Error> {
	let blocks: [ParamBlock; LANES] =
		array::from_fn(|lane| params.param_block(NodeRole::Leaf { lane }));
	for block in &blocks {
		block.validate()?;
	}

	Ok(array::from_fn(|lane| LeafHasher::from_validated(lane, &blocks[lane], key_block)))
}
