//! The family of `k` hash functions mapping a key to bit positions.

use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Seed used by [`HashFamily::default`].
pub const DEFAULT_SEED: u64 = 9001;

/// [`MurmurHash3`]'s 64-bit finalization mix, causing bits to [avalanche].
///
/// [`MurmurHash3`]: https://github.com/spaolacci/murmur3
/// [avalanche]: https://en.wikipedia.org/wiki/Avalanche_effect
#[inline]
const fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= k >> 33;
    k
}

/// The `round`'th output of Sebastiano Vigna's [`SplitMix64`] generator started at `seed`.
///
/// [`SplitMix64`]: http://xoroshiro.di.unimi.it/splitmix64.c
#[inline]
const fn splitmix64(seed: u64, round: u32) -> u64 {
    let mut z = seed.wrapping_add((round as u64 + 1).wrapping_mul(0x9e37_79b9_7f4a_7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// A deterministic family of hash functions indexed by a round number.
///
/// Each round is a logically independent function from a key to `[0, m)`. A key is digested once
/// with XXH3 under the family's seed; round `i` then finalizes the digest salted with the `i`'th
/// SplitMix64 output of the same seed and reduces it modulo `m`.
///
/// The seed is plain data, so two families with the same seed agree on every key, in every process.
/// This rules out hashers like [`std::collections::hash_map::RandomState`], whose keys are
/// randomized per process.
///
/// ```
/// use bloomf::HashFamily;
///
/// let family = HashFamily::default();
/// let index = family.index(b"a@x.com", 3, 9586);
///
/// assert!(index < 9586);
/// assert_eq!(index, HashFamily::default().index(b"a@x.com", 3, 9586));
/// ```
///
/// [`std::collections::hash_map::RandomState`]: https://doc.rust-lang.org/std/collections/hash_map/struct.RandomState.html
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HashFamily {
    seed: u64,
}

impl Default for HashFamily {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl HashFamily {
    /// Creates a family keyed by `seed`.
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Returns the family's seed.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Maps `key` to an index in `[0, bits)` using hash function `round`.
    ///
    /// `bits` must be positive.
    pub fn index(&self, key: &[u8], round: u32, bits: usize) -> usize {
        self.locate(self.digest(key), round, bits)
    }

    /// Returns the indices of hash functions `0..rounds` for `key`, in round order.
    ///
    /// Equivalent to calling [`index`](Self::index) for each round, but digests `key` only once.
    pub fn probes(&self, key: &[u8], rounds: u32, bits: usize) -> Probes {
        Probes {
            family: *self,
            digest: self.digest(key),
            round: 0,
            rounds,
            bits,
        }
    }

    #[inline]
    fn digest(&self, key: &[u8]) -> u64 {
        xxh3_64_with_seed(key, self.seed)
    }

    #[inline]
    fn locate(&self, digest: u64, round: u32, bits: usize) -> usize {
        debug_assert!(bits > 0);
        let hash = fmix64(digest ^ splitmix64(self.seed, round));
        (hash % bits as u64) as usize
    }
}

/// Iterator over the bit indices of one key, created by [`HashFamily::probes`].
#[derive(Debug, Clone)]
pub struct Probes {
    family: HashFamily,
    digest: u64,
    round: u32,
    rounds: u32,
    bits: usize,
}

impl Iterator for Probes {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.round == self.rounds {
            return None;
        }
        let index = self.family.locate(self.digest, self.round, self.bits);
        self.round += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.rounds - self.round) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Probes {}
