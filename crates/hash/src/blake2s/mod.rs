// Copyright 2025 Irreducible Inc.

//! The BLAKE2s primitive (RFC 7693) with full access to the parameter block.
//!
//! Tree hashing needs control over fields that the usual BLAKE2s front-ends don't expose
//! together: fan-out, depth, node offset, node depth, inner length, the last-node flag, and a
//! key length that is recorded without absorbing a key block. This module provides exactly that
//! and nothing more.

mod compression;
mod param_block;
mod state;

pub use param_block::{ParamBlock, ParamBlockError, PARAM_BLOCK_LEN};
pub use state::State;

/// Size of one compression block in bytes.
pub const BLOCK_LEN: usize = 64;
/// Native (maximum) digest length in bytes.
pub const OUT_LEN: usize = 32;
/// Maximum key length in bytes.
pub const KEY_LEN: usize = 32;
/// Width of the salt field in bytes.
pub const SALT_LEN: usize = 8;
/// Width of the personalization field in bytes.
pub const PERSONAL_LEN: usize = 8;

#[cfg(test)]
mod tests;
