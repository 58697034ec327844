// Copyright 2025 Irreducible Inc.

use blake2sp_utils::ensure;

use super::{FANOUT, LANES, TREE_DEPTH};
use crate::{
	blake2s::{ParamBlock, KEY_LEN, OUT_LEN, PERSONAL_LEN, SALT_LEN},
	error::ConfigError,
};

/// Position of a node in the two-level tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
	Leaf { lane: usize },
	Root,
}

/// Validated per-call settings shared by every node of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeParams {
	outlen: u8,
	key_length: u8,
	salt: [u8; SALT_LEN],
	personal: [u8; PERSONAL_LEN],
}

impl TreeParams {
	/// Check the caller's lengths against the primitive's bounds.
	///
	/// At most the first 8 bytes of `salt` and `personal` are copied into their fixed-width
	/// fields and the remainder is zeroed. Longer values are truncated, not rejected.
	pub fn new(
		outlen: usize,
		key_length: usize,
		salt: &[u8],
		personal: &[u8],
	) -> Result<Self, ConfigError> {
		ensure!((1..=OUT_LEN).contains(&outlen), ConfigError::OutputLength(outlen));
		ensure!(key_length <= KEY_LEN, ConfigError::KeyLength(key_length));

		Ok(Self {
			outlen: outlen as u8,
			key_length: key_length as u8,
			salt: zero_padded(salt),
			personal: zero_padded(personal),
		})
	}

	pub fn outlen(&self) -> usize {
		self.outlen as usize
	}

	pub fn key_length(&self) -> usize {
		self.key_length as usize
	}

	/// Build the parameter block of the node at `role`.
	///
	/// # Panics
	///
	/// Panics if a leaf lane is not below [`LANES`].
	pub fn param_block(&self, role: NodeRole) -> ParamBlock {
		let (node_offset, node_depth) = match role {
			NodeRole::Leaf { lane } => {
				assert!(lane < LANES, "lane {lane} out of range 0..{LANES}");
				(lane as u64, 0)
			}
			NodeRole::Root => (0, 1),
		};

		ParamBlock {
			digest_length: self.outlen,
			key_length: self.key_length,
			fanout: FANOUT,
			depth: TREE_DEPTH,
			leaf_length: 0,
			node_offset,
			node_depth,
			inner_length: OUT_LEN as u8,
			salt: self.salt,
			personal: self.personal,
		}
	}
}

fn zero_padded<const N: usize>(bytes: &[u8]) -> [u8; N] {
	let len = bytes.len().min(N);
	let mut field = [0u8; N];
	field[..len].copy_from_slice(&bytes[..len]);
	field
}
