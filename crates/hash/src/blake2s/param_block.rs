// Copyright 2025 Irreducible Inc.

use static_assertions::const_assert_eq;

use super::{KEY_LEN, OUT_LEN, PERSONAL_LEN, SALT_LEN};

/// Serialized size of the BLAKE2s parameter block.
pub const PARAM_BLOCK_LEN: usize = 32;

const_assert_eq!(PARAM_BLOCK_LEN, 8 * 4);
const_assert_eq!(16 + SALT_LEN + PERSONAL_LEN, PARAM_BLOCK_LEN);

/// Node offsets are stored in a 48-bit field.
const MAX_NODE_OFFSET: u64 = (1 << 48) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParamBlockError {
	#[error("digest length {0} is out of range 1..={max}", max = OUT_LEN)]
	DigestLength(u8),
	#[error("key length {0} exceeds {max}", max = KEY_LEN)]
	KeyLength(u8),
	#[error("inner length {0} exceeds {max}", max = OUT_LEN)]
	InnerLength(u8),
	#[error("node offset {0} does not fit in 48 bits")]
	NodeOffset(u64),
}

/// The BLAKE2s parameter block.
///
/// The block is XORed into the IV to derive the initial chaining value, so every field takes part
/// in domain separation: two blocks differing in any field start from unrelated states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamBlock {
	pub digest_length: u8,
	pub key_length: u8,
	pub fanout: u8,
	pub depth: u8,
	pub leaf_length: u32,
	pub node_offset: u64,
	pub node_depth: u8,
	pub inner_length: u8,
	pub salt: [u8; SALT_LEN],
	pub personal: [u8; PERSONAL_LEN],
}

impl Default for ParamBlock {
	/// Sequential (non-tree) BLAKE2s-256 without a key.
	fn default() -> Self {
		Self {
			digest_length: OUT_LEN as u8,
			key_length: 0,
			fanout: 1,
			depth: 1,
			leaf_length: 0,
			node_offset: 0,
			node_depth: 0,
			inner_length: 0,
			salt: [0; SALT_LEN],
			personal: [0; PERSONAL_LEN],
		}
	}
}

impl ParamBlock {
	pub fn validate(&self) -> Result<(), ParamBlockError> {
		if self.digest_length == 0 || self.digest_length as usize > OUT_LEN {
			return Err(ParamBlockError::DigestLength(self.digest_length));
		}
		if self.key_length as usize > KEY_LEN {
			return Err(ParamBlockError::KeyLength(self.key_length));
		}
		if self.inner_length as usize > OUT_LEN {
			return Err(ParamBlockError::InnerLength(self.inner_length));
		}
		if self.node_offset > MAX_NODE_OFFSET {
			return Err(ParamBlockError::NodeOffset(self.node_offset));
		}
		Ok(())
	}

	/// Little-endian serialization in the RFC 7693 layout.
	pub fn to_bytes(&self) -> [u8; PARAM_BLOCK_LEN] {
		let mut bytes = [0u8; PARAM_BLOCK_LEN];
		bytes[0] = self.digest_length;
		bytes[1] = self.key_length;
		bytes[2] = self.fanout;
		bytes[3] = self.depth;
		bytes[4..8].copy_from_slice(&self.leaf_length.to_le_bytes());
		bytes[8..14].copy_from_slice(&self.node_offset.to_le_bytes()[..6]);
		bytes[14] = self.node_depth;
		bytes[15] = self.inner_length;
		bytes[16..24].copy_from_slice(&self.salt);
		bytes[24..32].copy_from_slice(&self.personal);
		bytes
	}

	pub(super) fn to_words(&self) -> [u32; 8] {
		let bytes = self.to_bytes();
		let mut words = [0u32; 8];
		for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
			*word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
		}
		words
	}
}
