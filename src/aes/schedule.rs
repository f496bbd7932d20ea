//! AES key expansion (FIPS-197 section 5.2).

use crate::aes::core::constants::{RCON, SBOX};
use crate::aes::key::{Key, KeySize};

/// Expanded round-key words for one cipher key. Holds `4 * (Nr + 1)` words and is
/// read-only once built, so it can be shared between threads encrypting independent blocks.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct KeySchedule {
    words: Vec<u32>,
    size: KeySize,
}

impl KeySchedule {
    /// Runs the key schedule. Variable names match FIPS-197:
    /// `nk` key length in words, `nr` number of rounds, `w` the expanded words.
    pub fn new(key: &Key) -> Self {
        let size = key.size();
        let nk = size.nk();
        let nr = size.nr();
        let nw = 4 * (nr + 1);

        let mut w: Vec<u32> = Vec::with_capacity(nw);

        // first nk words are the key itself, big-endian
        for chunk in key.as_bytes().chunks_exact(4) {
            w.push(u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }

        for i in nk..nw {
            let mut temp = w[i - 1];
            if i % nk == 0 {
                temp = sub_word(rot_word(temp)) ^ RCON[i / nk];
            } else if nk > 6 && i % nk == 4 {
                // extra substitution, AES-256 only
                temp = sub_word(temp);
            }
            w.push(w[i - nk] ^ temp);
        }

        Self { words: w, size }
    }

    /// All expanded words, in order.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Number of rounds `Nr` this schedule drives.
    pub fn rounds(&self) -> usize {
        self.size.nr()
    }

    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// The four words used by `AddRoundKey` in `round` (0 ..= Nr).
    ///
    /// # Panics
    /// If `round` is greater than [`rounds`](Self::rounds).
    #[inline(always)]
    pub fn round_key(&self, round: usize) -> [u32; 4] {
        let w = &self.words[4 * round..4 * round + 4];
        [w[0], w[1], w[2], w[3]]
    }

    /// The round key of `round` serialized into 16 bytes, one big-endian word per column.
    pub fn round_key_bytes(&self, round: usize) -> [u8; 16] {
        let mut out = [0u8; 16];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.round_key(round)) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

/// Cyclic left rotation by one byte: `[a0, a1, a2, a3] -> [a1, a2, a3, a0]`.
#[inline(always)]
pub(crate) fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// Applies the S-box to each byte of the word.
#[inline(always)]
pub(crate) fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(|b| SBOX[b as usize]))
}
