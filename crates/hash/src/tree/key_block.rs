// Copyright 2025 Irreducible Inc.

use std::fmt;

use static_assertions::assert_impl_all;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::{
	blake2s::{BLOCK_LEN, KEY_LEN},
	error::ConfigError,
};

/// A key padded with zeros to one full block, as absorbed by every keyed leaf.
///
/// The buffer is wiped when the block is dropped, on every exit path. Nothing wipes it earlier,
/// so the key stays in memory exactly as long as the `KeyBlock` value is alive.
#[derive(Clone)]
pub struct KeyBlock(Zeroizing<[u8; BLOCK_LEN]>);

assert_impl_all!(KeyBlock: Zeroize, ZeroizeOnDrop);

impl KeyBlock {
	pub fn new(key: &[u8]) -> Result<Self, ConfigError> {
		if key.len() > KEY_LEN {
			return Err(ConfigError::KeyLength(key.len()));
		}

		let mut block = Zeroizing::new([0u8; BLOCK_LEN]);
		block[..key.len()].copy_from_slice(key);
		Ok(Self(block))
	}

	/// The key block for `key`, or `None` in unkeyed mode.
	pub fn for_key(key: &[u8]) -> Result<Option<Self>, ConfigError> {
		if key.is_empty() {
			return Ok(None);
		}
		Self::new(key).map(Some)
	}

	pub fn as_bytes(&self) -> &[u8; BLOCK_LEN] {
		&self.0
	}
}

impl Zeroize for KeyBlock {
	fn zeroize(&mut self) {
		self.0.zeroize();
	}
}

impl ZeroizeOnDrop for KeyBlock {}

impl fmt::Debug for KeyBlock {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("KeyBlock(..)")
	}
}
