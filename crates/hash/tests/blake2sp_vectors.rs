// Copyright 2025 Irreducible Inc.

use blake2sp_hash::{
	blake2s::{ParamBlock, State},
	blake2sp, Params, Schedule, LANES,
};
use blake2sp_utils::tracing::init_tracing;
use hex_literal::hex;
use proptest::prelude::*;

/// The first `N` bytes of `bytes`, zero padded.
fn field<const N: usize>(bytes: &[u8]) -> [u8; N] {
	let mut field = [0u8; N];
	let len = bytes.len().min(N);
	field[..len].copy_from_slice(&bytes[..len]);
	field
}

/// Unkeyed BLAKE2sp assembled by hand: leaves from explicit parameter blocks, root from
/// `blake2s_simd`.
///
/// Leaves record `outlen` as their digest length but always emit the full 32 bytes, which
/// `blake2s_simd` cannot express, so they run on this crate's primitive.
fn reference_tree(input: &[u8], outlen: usize, salt: &[u8], personal: &[u8]) -> Vec<u8> {
	let salt = field::<8>(salt);
	let personal = field::<8>(personal);

	let mut leaves = (0..LANES)
		.map(|lane| {
			let block = ParamBlock {
				digest_length: outlen as u8,
				key_length: 0,
				fanout: LANES as u8,
				depth: 2,
				leaf_length: 0,
				node_offset: lane as u64,
				node_depth: 0,
				inner_length: 32,
				salt,
				personal,
			};
			let mut state = State::new(&block).unwrap();
			if lane == LANES - 1 {
				state.mark_last_node();
			}
			state
		})
		.collect::<Vec<_>>();

	for (block, chunk) in input.chunks(64).enumerate() {
		leaves[block % LANES].update(chunk);
	}

	let mut root = blake2s_simd::Params::new()
		.hash_length(outlen)
		.salt(&salt)
		.personal(&personal)
		.fanout(LANES as u8)
		.max_depth(2)
		.max_leaf_length(0)
		.node_offset(0)
		.node_depth(1)
		.inner_hash_length(32)
		.last_node(true)
		.to_state();
	for leaf in leaves {
		let digest = leaf.finalize();
		assert_eq!(digest.len(), 32);
		root.update(&digest);
	}
	root.finalize().as_bytes().to_vec()
}

fn simd_blake2sp(input: &[u8], key: &[u8], outlen: usize) -> Vec<u8> {
	blake2s_simd::blake2sp::Params::new()
		.hash_length(outlen)
		.key(key)
		.hash(input)
		.as_bytes()
		.to_vec()
}

fn pattern(len: usize) -> Vec<u8> {
	(0..len).map(|i| i as u8).collect()
}

#[test]
fn test_empty_input_known_answer() {
	init_tracing();

	let expected = hex!("dd0e891776933f43c7d032b08a917e25741f8aa9a12c12e1cac8801500f2ca4f");
	for schedule in Schedule::ALL {
		let hash = Params::new().schedule(schedule).hash(b"").unwrap();
		assert_eq!(hash.as_bytes(), &expected, "{schedule:?}");
	}
}

#[test]
fn test_matches_blake2s_simd_unkeyed() {
	init_tracing();

	for len in [0, 1, 63, 64, 65, 511, 512, 513, 1000, 4096, 4097, 10_000] {
		let input = pattern(len);
		let hash = blake2sp(&input, &[], 32, &[], &[]).unwrap();
		assert_eq!(hash.as_bytes(), blake2s_simd::blake2sp::blake2sp(&input).as_bytes(), "len={len}");
	}
}

#[test]
fn test_matches_blake2s_simd_keyed_kat_layout() {
	// The layout of the reference keyed test vectors: key 00..1f, input 00..(len-1).
	let key = pattern(32);
	for len in [0, 1, 2, 63, 64, 65, 255] {
		let input = pattern(len);
		let hash = blake2sp(&input, &key, 32, &[], &[]).unwrap();
		assert_eq!(hash.as_bytes(), simd_blake2sp(&input, &key, 32), "len={len}");
	}
}

#[test]
fn test_matches_blake2s_simd_truncated() {
	let input = pattern(777);
	for outlen in 1..=32 {
		for key in [&[][..], &b"k"[..], &pattern(32)[..]] {
			let hash = blake2sp(&input, key, outlen, &[], &[]).unwrap();
			assert_eq!(
				hash.as_bytes(),
				simd_blake2sp(&input, key, outlen),
				"outlen={outlen} keylen={}",
				key.len()
			);
		}
	}
}

#[test]
fn test_matches_reference_tree_with_salt_and_personal() {
	let input = pattern(3000);
	for (salt, personal) in [
		(&b""[..], &b""[..]),
		(&b"salt"[..], &b""[..]),
		(&b""[..], &b"persona"[..]),
		(&b"12345678"[..], &b"abcdefgh"[..]),
		(&b"0123456789abcdef"[..], &b"personalization"[..]),
	] {
		for outlen in [1, 2, 16, 31, 32] {
			let hash = blake2sp(&input, &[], outlen, salt, personal).unwrap();
			assert_eq!(
				hash.as_bytes(),
				reference_tree(&input, outlen, salt, personal),
				"outlen={outlen} salt={salt:?} personal={personal:?}"
			);
		}
	}
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	#[test]
	fn test_differential_against_blake2s_simd(
		input in proptest::collection::vec(any::<u8>(), 0..4096),
		key in proptest::collection::vec(any::<u8>(), 0..=32),
		outlen in 1usize..=32,
	) {
		let hash = Params::new()
			.hash_length(outlen)
			.key(&key)
			.schedule(Schedule::Sequential)
			.hash(&input)
			.unwrap();
		prop_assert_eq!(hash.as_bytes(), &simd_blake2sp(&input, &key, outlen)[..]);
	}

	#[test]
	fn test_differential_against_reference_tree(
		input in proptest::collection::vec(any::<u8>(), 0..4096),
		salt in proptest::collection::vec(any::<u8>(), 0..=16),
		personal in proptest::collection::vec(any::<u8>(), 0..=16),
		outlen in 1usize..=32,
	) {
		let hash = blake2sp(&input, &[], outlen, &salt, &personal).unwrap();
		prop_assert_eq!(hash.as_bytes(), &reference_tree(&input, outlen, &salt, &personal)[..]);
	}
}
