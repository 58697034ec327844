// Copyright 2025 Irreducible Inc.

//! The BLAKE2sp tree: eight BLAKE2s leaves under one BLAKE2s root.

pub mod executor;
pub mod key_block;
pub mod leaf;
pub mod params;
pub mod partition;
pub mod root;

use blake2sp_utils::ensure;
use tracing::instrument;

pub use self::{
	executor::{hash_lanes, Schedule},
	key_block::KeyBlock,
	leaf::{init_leaves, LeafHasher},
	params::{NodeRole, TreeParams},
	partition::{lane_len, lane_ranges},
	root::RootCombiner,
};
use crate::{
	blake2s::OUT_LEN,
	error::{ConfigError, Error},
	output::Blake2spHash,
};

/// Number of leaf lanes, which is also the fan-out of the root.
pub const LANES: usize = 8;
/// Fan-out recorded in every parameter block.
pub const FANOUT: u8 = LANES as u8;
/// Leaves plus root.
pub const TREE_DEPTH: u8 = 2;

/// Output of one leaf lane. Leaves always produce the native digest size.
pub type LaneDigest = [u8; OUT_LEN];

/// Hash `input` through the tree.
///
/// `key` must be exactly as long as `params` records. Every node's parameter block is checked
/// before any lane starts, so a failure never leaves partial work behind. The padded key block
/// lives only while the leaves are initialized.
#[instrument(
	"blake2sp::hash_tree",
	skip_all,
	fields(len = input.len(), outlen = params.outlen(), keyed = !key.is_empty())
)]
pub fn hash_tree(
	params: &TreeParams,
	key: &[u8],
	input: &[u8],
	schedule: Schedule,
) -> Result<Blake2spHash, Error> {
	ensure!(key.len() == params.key_length(), ConfigError::KeyLength(key.len()));

	let root = RootCombiner::new(params)?;
	let leaves = {
		// Dropped, and so wiped, at the end of this block.
		let key_block = KeyBlock::for_key(key)?;
		init_leaves(params, key_block.as_ref())?
	};
	let digests = hash_lanes(leaves, input, schedule);
	Ok(root.combine(&digests))
}
