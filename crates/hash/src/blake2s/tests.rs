// Copyright 2025 Irreducible Inc.

use digest::{FixedOutput, Update};
use hex_literal::hex;
use rand::{rngs::StdRng, RngCore, SeedableRng};

use super::*;

fn blake2s_256(data: &[u8]) -> [u8; OUT_LEN] {
	let mut state = State::new(&ParamBlock::default()).unwrap();
	state.update(data);
	state.finalize()
}

#[test]
fn test_empty_input() {
	let expected = hex!("69217a3079908094e11121d042354a7c1f55b6482ca1a51e1b250dfd1ed0eef9");
	assert_eq!(blake2s_256(b""), expected);
}

#[test]
fn test_abc() {
	let expected = hex!("508c5e8c327c14e2e1a72ba34eeb452f37458b209ed63a294d999b4c86675982");
	assert_eq!(blake2s_256(b"abc"), expected);
}

#[test]
fn test_split_updates_match_one_shot() {
	let mut rng = StdRng::seed_from_u64(0);
	let mut data = vec![0u8; 3 * BLOCK_LEN + 17];
	rng.fill_bytes(&mut data);

	for len in [0, 1, BLOCK_LEN - 1, BLOCK_LEN, BLOCK_LEN + 1, 2 * BLOCK_LEN, data.len()] {
		let expected = blake2s_256(&data[..len]);
		for split in [0, 1, BLOCK_LEN / 2, BLOCK_LEN, BLOCK_LEN + 3] {
			let split = split.min(len);
			let mut state = State::new(&ParamBlock::default()).unwrap();
			state.update(&data[..split]);
			state.update(&[]);
			state.update(&data[split..len]);
			assert_eq!(state.count(), len as u64);
			assert_eq!(state.finalize(), expected, "len={len} split={split}");
		}
	}
}

#[test]
fn test_last_node_changes_output() {
	let mut state = State::new(&ParamBlock::default()).unwrap();
	state.update(b"abc");
	let mut last = state.clone();
	last.mark_last_node();
	assert!(last.is_last_node());
	assert_ne!(state.finalize(), last.finalize());
}

#[test]
fn test_params_change_output() {
	let base = ParamBlock::default();
	let variants = [
		ParamBlock {
			fanout: 8,
			..base
		},
		ParamBlock {
			node_offset: 1,
			..base
		},
		ParamBlock {
			node_depth: 1,
			..base
		},
		ParamBlock {
			salt: *b"saltsalt",
			..base
		},
		ParamBlock {
			personal: *b"personal",
			..base
		},
		ParamBlock {
			key_length: 1,
			..base
		},
	];

	let expected = blake2s_256(b"abc");
	for params in variants {
		let mut state = State::new(&params).unwrap();
		state.update(b"abc");
		assert_ne!(state.finalize(), expected, "{params:?}");
	}
}

#[test]
fn test_rejects_malformed_params() {
	let params = ParamBlock {
		digest_length: 0,
		..Default::default()
	};
	assert_eq!(State::new(&params).unwrap_err(), ParamBlockError::DigestLength(0));
}

#[test]
fn test_digest_traits() {
	let mut state = State::new(&ParamBlock::default()).unwrap();
	Update::update(&mut state, b"a");
	Update::update(&mut state, b"bc");
	let out: [u8; OUT_LEN] = state.finalize_fixed().into();
	assert_eq!(out, blake2s_256(b"abc"));
}
