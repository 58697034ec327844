// Copyright 2025 Irreducible Inc.

//! BLAKE2sp: the 8-way parallel tree mode of BLAKE2s.
//!
//! The input is striped block by block across eight BLAKE2s leaves with distinct parameter
//! blocks, and the eight leaf digests are combined by a BLAKE2s root node. The result matches
//! the BLAKE2 reference implementation of BLAKE2sp, including keyed mode, and is independent of
//! how the leaves are scheduled.

pub mod blake2s;
pub mod error;
pub mod output;
pub mod params;
pub mod tree;

pub use error::{ConfigError, Error};
pub use output::Blake2spHash;
pub use params::{blake2sp, Params};
pub use tree::{Schedule, LANES};
