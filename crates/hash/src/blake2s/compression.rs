// Copyright 2025 Irreducible Inc.

use super::BLOCK_LEN;

pub(super) const IV: [u32; 8] = [
	0x6A09_E667,
	0xBB67_AE85,
	0x3C6E_F372,
	0xA54F_F53A,
	0x510E_527F,
	0x9B05_688C,
	0x1F83_D9AB,
	0x5BE0_CD19,
];

const SIGMA: [[usize; 16]; 10] = [
	[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
	[14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
	[11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
	[7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
	[9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
	[2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
	[12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
	[13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
	[6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
	[10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// Finalization flags of one compression call.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Flags {
	pub last_block: bool,
	pub last_node: bool,
}

#[inline(always)]
fn g(v: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize, x: u32, y: u32) {
	v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
	v[d] = (v[d] ^ v[a]).rotate_right(16);
	v[c] = v[c].wrapping_add(v[d]);
	v[b] = (v[b] ^ v[c]).rotate_right(12);
	v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
	v[d] = (v[d] ^ v[a]).rotate_right(8);
	v[c] = v[c].wrapping_add(v[d]);
	v[b] = (v[b] ^ v[c]).rotate_right(7);
}

#[inline(always)]
fn round(v: &mut [u32; 16], m: &[u32; 16], s: &[usize; 16]) {
	g(v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
	g(v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
	g(v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
	g(v, 3, 7, 11, 15, m[s[6]], m[s[7]]);

	g(v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
	g(v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
	g(v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
	g(v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
}

/// The BLAKE2s compression function `F`.
///
/// `count` is the total number of bytes absorbed so far, including this block's payload.
pub(super) fn compress(h: &mut [u32; 8], block: &[u8; BLOCK_LEN], count: u64, flags: Flags) {
	let mut m = [0u32; 16];
	for (word, chunk) in m.iter_mut().zip(block.chunks_exact(4)) {
		*word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
	}

	let mut v = [0u32; 16];
	v[..8].copy_from_slice(h);
	v[8..].copy_from_slice(&IV);
	v[12] ^= count as u32;
	v[13] ^= (count >> 32) as u32;
	if flags.last_block {
		v[14] = !v[14];
	}
	if flags.last_node {
		v[15] = !v[15];
	}

	for s in &SIGMA {
		round(&mut v, &m, s);
	}

	for (i, word) in h.iter_mut().enumerate() {
		*word ^= v[i] ^ v[i + 8];
	}
}
