// Copyright 2025 Irreducible Inc.

use core::fmt;

use digest::{consts::U32, FixedOutput, HashMarker, Output, OutputSizeUser, Update};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{
	compression::{compress, Flags, IV},
	ParamBlock, ParamBlockError, BLOCK_LEN, OUT_LEN,
};

/// An incremental BLAKE2s state initialized from an arbitrary [`ParamBlock`].
///
/// The last absorbed block is always held back in the buffer, because BLAKE2 can only tell the
/// final block apart once the input has ended. As a consequence the buffer may contain key
/// material, so the whole state is wiped on drop.
#[derive(Clone)]
pub struct State {
	h: [u32; 8],
	buf: [u8; BLOCK_LEN],
	buf_len: usize,
	count: u64,
	last_node: bool,
}

impl State {
	/// Initialize a state from a parameter block.
	///
	/// This doesn't absorb a key block even when `params.key_length` is non-zero; keyed callers
	/// feed the padded key block through [`State::update`] themselves.
	pub fn new(params: &ParamBlock) -> Result<Self, ParamBlockError> {
		params.validate()?;
		Ok(Self::from_validated(params))
	}

	/// Initialize from a parameter block that already passed [`ParamBlock::validate`].
	pub(crate) fn from_validated(params: &ParamBlock) -> Self {
		debug_assert_eq!(params.validate(), Ok(()));

		let mut h = IV;
		for (word, param) in h.iter_mut().zip(params.to_words()) {
			*word ^= param;
		}

		Self {
			h,
			buf: [0; BLOCK_LEN],
			buf_len: 0,
			count: 0,
			last_node: false,
		}
	}

	/// Flag this state as the last node of its sibling group.
	pub fn mark_last_node(&mut self) {
		self.last_node = true;
	}

	pub fn is_last_node(&self) -> bool {
		self.last_node
	}

	/// Total number of bytes absorbed so far.
	pub fn count(&self) -> u64 {
		self.count + self.buf_len as u64
	}

	pub fn update(&mut self, mut input: &[u8]) {
		if input.is_empty() {
			return;
		}

		if self.buf_len > 0 {
			let take = (BLOCK_LEN - self.buf_len).min(input.len());
			self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&input[..take]);
			self.buf_len += take;
			input = &input[take..];
			if input.is_empty() {
				return;
			}

			// The buffer is full and more input follows, so it isn't the final block.
			absorb_block(&mut self.h, &mut self.count, &self.buf);
			self.buf_len = 0;
		}

		while input.len() > BLOCK_LEN {
			let Some((block, rest)) = input.split_first_chunk::<BLOCK_LEN>() else {
				break;
			};
			absorb_block(&mut self.h, &mut self.count, block);
			input = rest;
		}

		self.buf[..input.len()].copy_from_slice(input);
		self.buf_len = input.len();
	}

	/// Finalize and return the native-size output.
	///
	/// Callers that requested a shorter digest take a prefix of the result; the requested length
	/// is already bound into the initial state through the parameter block.
	pub fn finalize(mut self) -> [u8; OUT_LEN] {
		let mut out = [0u8; OUT_LEN];
		self.finalize_into_slice(&mut out);
		out
	}

	fn finalize_into_slice(&mut self, out: &mut [u8; OUT_LEN]) {
		self.count += self.buf_len as u64;
		self.buf[self.buf_len..].fill(0);
		let flags = Flags {
			last_block: true,
			last_node: self.last_node,
		};
		compress(&mut self.h, &self.buf, self.count, flags);

		for (chunk, word) in out.chunks_exact_mut(4).zip(self.h) {
			chunk.copy_from_slice(&word.to_le_bytes());
		}
	}
}

fn absorb_block(h: &mut [u32; 8], count: &mut u64, block: &[u8; BLOCK_LEN]) {
	*count += BLOCK_LEN as u64;
	compress(h, block, *count, Flags::default());
}

impl Zeroize for State {
	fn zeroize(&mut self) {
		self.h.zeroize();
		self.buf.zeroize();
		self.buf_len.zeroize();
		self.count.zeroize();
		self.last_node.zeroize();
	}
}

impl Drop for State {
	fn drop(&mut self) {
		self.zeroize();
	}
}

impl ZeroizeOnDrop for State {}

impl fmt::Debug for State {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("State")
			.field("count", &self.count())
			.field("last_node", &self.last_node)
			.finish_non_exhaustive()
	}
}

impl HashMarker for State {}

impl Update for State {
	fn update(&mut self, data: &[u8]) {
		State::update(self, data);
	}
}

impl OutputSizeUser for State {
	type OutputSize = U32;
}

impl FixedOutput for State {
	fn finalize_into(mut self, out: &mut Output<Self>) {
		let mut bytes = [0u8; OUT_LEN];
		self.finalize_into_slice(&mut bytes);
		out.copy_from_slice(&bytes);
	}
}
