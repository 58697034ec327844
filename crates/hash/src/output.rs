// Copyright 2025 Irreducible Inc.

use std::fmt;

use subtle::{Choice, ConstantTimeEq};

use crate::blake2s::OUT_LEN;

/// A BLAKE2sp digest of between 1 and 32 bytes.
///
/// Equality comparisons run in constant time.
#[derive(Clone, Copy)]
pub struct Blake2spHash {
	bytes: [u8; OUT_LEN],
	len: u8,
}

impl Blake2spHash {
	/// Keep the first `len` bytes of a native-size root output.
	pub(crate) fn truncate(full: &[u8; OUT_LEN], len: usize) -> Self {
		debug_assert!((1..=OUT_LEN).contains(&len));

		let mut bytes = [0u8; OUT_LEN];
		bytes[..len].copy_from_slice(&full[..len]);
		Self {
			bytes,
			len: len as u8,
		}
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes[..self.len as usize]
	}

	pub fn len(&self) -> usize {
		self.len as usize
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn to_hex(&self) -> String {
		hex::encode(self.as_bytes())
	}
}

impl ConstantTimeEq for Blake2spHash {
	fn ct_eq(&self, other: &Self) -> Choice {
		self.as_bytes().ct_eq(other.as_bytes())
	}
}

impl PartialEq for Blake2spHash {
	fn eq(&self, other: &Self) -> bool {
		self.ct_eq(other).into()
	}
}

impl Eq for Blake2spHash {}

impl PartialEq<[u8]> for Blake2spHash {
	fn eq(&self, other: &[u8]) -> bool {
		self.as_bytes().ct_eq(other).into()
	}
}

impl AsRef<[u8]> for Blake2spHash {
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl fmt::LowerHex for Blake2spHash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_hex())
	}
}

impl fmt::Display for Blake2spHash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::LowerHex::fmt(self, f)
	}
}

impl fmt::Debug for Blake2spHash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Blake2spHash({self:x})")
	}
}
