// Copyright 2025 Irreducible Inc.

use std::fmt;

use tracing::instrument;
use zeroize::Zeroizing;

use crate::{
	blake2s::OUT_LEN,
	error::Error,
	output::Blake2spHash,
	tree::{hash_tree, Schedule, TreeParams},
};

/// Builder for a BLAKE2sp computation.
///
/// Setters only record their arguments; all bounds are checked by [`Params::hash`] before any
/// hashing starts.
///
/// ```
/// use blake2sp_hash::{Params, Schedule};
///
/// let hash = Params::new()
/// 	.hash_length(16)
/// 	.key(b"secret key")
/// 	.personal(b"my-app")
/// 	.schedule(Schedule::Sequential)
/// 	.hash(b"message")
/// 	.unwrap();
/// assert_eq!(hash.len(), 16);
/// ```
#[derive(Clone)]
pub struct Params {
	hash_length: usize,
	key: Zeroizing<Vec<u8>>,
	salt: Vec<u8>,
	personal: Vec<u8>,
	schedule: Schedule,
}

impl Params {
	/// 32-byte output, no key, salt or personalization, schedule from [`Schedule::process_default`].
	pub fn new() -> Self {
		Self {
			hash_length: OUT_LEN,
			key: Zeroizing::new(Vec::new()),
			salt: Vec::new(),
			personal: Vec::new(),
			schedule: Schedule::process_default(),
		}
	}

	pub fn hash_length(&mut self, length: usize) -> &mut Self {
		self.hash_length = length;
		self
	}

	/// Set the key. An empty key selects unkeyed mode.
	pub fn key(&mut self, key: &[u8]) -> &mut Self {
		// Growing the old buffer in place could free it without wiping.
		self.key = Zeroizing::new(key.to_vec());
		self
	}

	pub fn salt(&mut self, salt: &[u8]) -> &mut Self {
		self.salt = salt.to_vec();
		self
	}

	pub fn personal(&mut self, personal: &[u8]) -> &mut Self {
		self.personal = personal.to_vec();
		self
	}

	pub fn schedule(&mut self, schedule: Schedule) -> &mut Self {
		self.schedule = schedule;
		self
	}

	#[instrument("blake2sp::hash", skip_all, fields(len = input.len(), outlen = self.hash_length))]
	pub fn hash(&self, input: &[u8]) -> Result<Blake2spHash, Error> {
		let params =
			TreeParams::new(self.hash_length, self.key.len(), &self.salt, &self.personal)?;
		hash_tree(&params, &self.key, input, self.schedule)
	}
}

impl Default for Params {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for Params {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Params")
			.field("hash_length", &self.hash_length)
			.field("key_length", &self.key.len())
			.field("salt", &self.salt)
			.field("personal", &self.personal)
			.field("schedule", &self.schedule)
			.finish()
	}
}

/// Compute BLAKE2sp of `input`.
///
/// `key` may be empty (unkeyed) or up to 32 bytes and `outlen` must be in `1..=32`. Only the first
/// 8 bytes of `salt` and `personal` are used, and shorter values are zero padded.
pub fn blake2sp(
	input: &[u8],
	key: &[u8],
	outlen: usize,
	salt: &[u8],
	personal: &[u8],
) -> Result<Blake2spHash, Error> {
	Params::new()
		.hash_length(outlen)
		.key(key)
		.salt(salt)
		.personal(personal)
		.hash(input)
}
