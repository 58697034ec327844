// Copyright 2025 Irreducible Inc.

use crate::blake2s::{ParamBlockError, KEY_LEN, OUT_LEN};

/// A caller-supplied argument is outside the bounds of the construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
	#[error("output length {0} is out of range 1..={max}", max = OUT_LEN)]
	OutputLength(usize),
	#[error("key length {0} exceeds {max} bytes", max = KEY_LEN)]
	KeyLength(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("invalid configuration: {0}")]
	Configuration(#[from] ConfigError),
	/// The primitive refused a parameter block. Configuration checks make this unreachable, so
	/// seeing it means an internal invariant was broken.
	#[error("BLAKE2s rejected a parameter block: {0}")]
	PrimitiveInit(#[from] ParamBlockError),
}
