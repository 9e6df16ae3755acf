//! 256-bit Snefru digest, fixed at eight compression rounds.
//!
//! The remote API validates request checksums with PHP's `hash("snefru256", ...)`,
//! so this implementation must match that output byte-for-byte: 32-byte data
//! blocks, big-endian word I/O, zero padding, and a 64-bit bit-length trailer.
//! No Snefru crate exists on crates.io, hence the in-tree implementation; the
//! known-answer tests below pin it against the reference digests.

mod sbox;
use sbox::SBOX;

/// Digest size in bytes.
pub const DIGEST_SIZE: usize = 32;

const BLOCK_WORDS: usize = 16;
const DATA_SIZE: usize = 32;
const DIGEST_WORDS: usize = 8;
const ROTATIONS: [u32; 4] = [16, 8, 16, 24];

/// Incremental Snefru-256 hasher.
///
/// The API mirrors the usual digest shape: [`update`](Self::update) absorbs
/// bytes, [`finalize`](Self::finalize) pads and returns the digest. The
/// one-shot helpers cover the common case of hashing a single buffer.
#[derive(Clone)]
pub struct Snefru256 {
	state: [u32; BLOCK_WORDS],
	buffer: [u8; DATA_SIZE],
	index: usize,
	bit_len: u64,
}
impl Snefru256 {
	/// Creates a fresh hashing state.
	pub fn new() -> Self {
		Self { state: [0; BLOCK_WORDS], buffer: [0; DATA_SIZE], index: 0, bit_len: 0 }
	}

	/// Absorbs `data` into the hashing state.
	pub fn update(&mut self, data: impl AsRef<[u8]>) {
		let mut data = data.as_ref();

		if self.index != 0 {
			let left = DATA_SIZE - self.index;

			if data.len() < left {
				self.buffer[self.index..self.index + data.len()].copy_from_slice(data);
				self.index += data.len();

				return;
			}

			self.buffer[self.index..].copy_from_slice(&data[..left]);
			self.process_buffer();

			self.bit_len += 8 * DATA_SIZE as u64;
			data = &data[left..];
		}

		while data.len() >= DATA_SIZE {
			self.buffer.copy_from_slice(&data[..DATA_SIZE]);
			self.process_buffer();

			self.bit_len += 8 * DATA_SIZE as u64;
			data = &data[DATA_SIZE..];
		}

		self.buffer[..data.len()].copy_from_slice(data);
		self.index = data.len();
	}

	/// Pads the final block, appends the bit-length trailer, and returns the digest.
	pub fn finalize(mut self) -> [u8; DIGEST_SIZE] {
		if self.index != 0 {
			let index = self.index;

			self.buffer[index..].fill(0);
			self.process_buffer();

			self.bit_len += 8 * index as u64;
		}

		for word in &mut self.state[DIGEST_WORDS..BLOCK_WORDS - 2] {
			*word = 0;
		}

		self.state[BLOCK_WORDS - 2] = (self.bit_len >> 32) as u32;
		self.state[BLOCK_WORDS - 1] = self.bit_len as u32;

		transform(&mut self.state);

		let mut digest = [0; DIGEST_SIZE];

		for (i, word) in self.state[..DIGEST_WORDS].iter().enumerate() {
			digest[4 * i..4 * i + 4].copy_from_slice(&word.to_be_bytes());
		}

		digest
	}

	/// One-shot digest of `data`.
	pub fn digest(data: impl AsRef<[u8]>) -> [u8; DIGEST_SIZE] {
		let mut hasher = Self::new();

		hasher.update(data);
		hasher.finalize()
	}

	/// One-shot digest of `data`, lowercase hex-encoded.
	pub fn hex_digest(data: impl AsRef<[u8]>) -> String {
		Self::digest(data).iter().map(|byte| format!("{byte:02x}")).collect()
	}

	fn process_buffer(&mut self) {
		for i in 0..DIGEST_WORDS {
			let j = 4 * i;

			self.state[DIGEST_WORDS + i] = u32::from_be_bytes([
				self.buffer[j],
				self.buffer[j + 1],
				self.buffer[j + 2],
				self.buffer[j + 3],
			]);
		}

		transform(&mut self.state);
	}
}
impl Default for Snefru256 {
	fn default() -> Self {
		Self::new()
	}
}

// The core transform: eight rounds of two alternating S-box lookups feeding both
// word neighbors, with four fixed rotations per round, then the output fold.
fn transform(block: &mut [u32; BLOCK_WORDS]) {
	let mut saved = [0; DIGEST_WORDS];

	saved.copy_from_slice(&block[..DIGEST_WORDS]);

	for round in &SBOX {
		for &rotation in &ROTATIONS {
			for i in 0..BLOCK_WORDS {
				let x = round[((i << 7) & 0x100) + (block[i] & 0xff) as usize];

				block[(i + BLOCK_WORDS - 1) % BLOCK_WORDS] ^= x;
				block[(i + 1) % BLOCK_WORDS] ^= x;
			}

			for word in block.iter_mut() {
				*word = word.rotate_right(rotation);
			}
		}
	}

	for i in 0..DIGEST_WORDS {
		block[i] = block[BLOCK_WORDS - 1 - i] ^ saved[i];
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn known_answer_vectors() {
		// Values cross-checked against PHP's hash("snefru256", ...).
		assert_eq!(
			Snefru256::hex_digest(""),
			"8617f366566a011837f4fb4ba5bedea2b892f3ed8b894023d16ae344b2be5881",
		);
		assert_eq!(
			Snefru256::hex_digest("abc"),
			"7d033205647a2af3dc8339f6cb25643c33ebc622d32979c4b612b02c4903031b",
		);
		assert_eq!(
			Snefru256::hex_digest("The quick brown fox jumps over the lazy dog"),
			"674caa75f9d8fd2089856b95e93a4fb42fa6c8702f8980e11d97a142d76cb358",
		);
	}

	#[test]
	fn block_boundaries() {
		// Exactly one data block, one block plus a byte, and two blocks.
		assert_eq!(
			Snefru256::hex_digest("a".repeat(32)),
			"dbc6238cc321aecba8f057213c3a605d74f21ec352e2183bc3b3853064ffa732",
		);
		assert_eq!(
			Snefru256::hex_digest("a".repeat(33)),
			"7a1133846080dd68d6842df39c86f961925605679bad4ffae07118482b6031fa",
		);
		assert_eq!(
			Snefru256::hex_digest("a".repeat(64)),
			"7a8539c59e192e8d70b1ab82aa86a1b54560d42020bda4e00ddd6d048fe3bcaa",
		);
	}

	#[test]
	fn incremental_updates_match_one_shot() {
		let input = "1704067200.sensor1.abc";

		for split in [0, 1, 5, input.len()] {
			let (head, tail) = input.split_at(split);
			let mut hasher = Snefru256::new();

			hasher.update(head);
			hasher.update(tail);

			assert_eq!(hasher.finalize(), Snefru256::digest(input), "split at {split}");
		}
	}

	#[test]
	fn hex_encoding_is_lowercase_and_fixed_width() {
		let hex = Snefru256::hex_digest("abc");

		assert_eq!(hex.len(), 2 * DIGEST_SIZE);
		assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
	}
}
