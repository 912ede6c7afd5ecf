//! Implements classic Bloom filters as described in [Space/Time Trade-offs in Hash Coding with
//! Allowable Errors].
//!
//! [Space/Time Trade-offs in Hash Coding with Allowable Errors]: https://doi.org/10.1145/362686.362692

use crate::{BitVector, Error, Fill, Filter, HashFamily, Membership, Params, Word};
use libm::pow;

/// A Bloom filter over byte-sequence keys.
///
/// A `BloomFilter` owns a bit vector of `m` bits, packed into words of type `W`, and probes it with
/// `k` rounds of a [`HashFamily`]. Both are fixed at construction; the filter never resizes and
/// keys can never be removed. Inserting and querying may interleave freely.
///
/// ```
/// # extern crate alloc;
/// use bloomf::{BloomFilter, Filter, Params};
/// # use alloc::{format, string::String, vec::Vec};
///
/// const SAMPLE_SIZE: usize = 10_000;
/// let params = Params::optimal(SAMPLE_SIZE, 0.01).unwrap();
/// let mut filter: BloomFilter = BloomFilter::new(params);
///
/// let keys: Vec<String> = (0..SAMPLE_SIZE).map(|i| format!("user{}@example.com", i)).collect();
/// for key in &keys {
///     filter.insert(key);
/// }
///
/// // no false negatives
/// for key in &keys {
///     assert!(filter.contains(key));
/// }
///
/// // false positive rate
/// let false_positives = (0..SAMPLE_SIZE)
///     .map(|i| format!("user{}@example.org", i))
///     .filter(|key| filter.contains(key))
///     .count();
/// let fp_rate = false_positives as f64 / SAMPLE_SIZE as f64;
/// assert!(fp_rate < 0.02, "False positive rate is {}", fp_rate);
/// ```
///
/// The filter is read-only while queried, so any number of threads may query a shared filter.
/// Inserting requires `&mut self`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilter<W: Word = u64> {
    params: Params,
    hasher: HashFamily,
    bits: BitVector<W>,
}

impl<W: Word> BloomFilter<W> {
    /// Creates an empty filter with the given dimensions, hashing with [`HashFamily::default`].
    pub fn new(params: Params) -> Self {
        Self::with_hasher(params, HashFamily::default())
    }

    /// Creates an empty filter with the given dimensions and hash family.
    pub fn with_hasher(params: Params, hasher: HashFamily) -> Self {
        log::debug!(
            "allocating bloom filter: m={} bits in {}-bit words, k={} rounds, seed={}",
            params.bits(),
            W::BITS,
            params.hashes(),
            hasher.seed()
        );
        // Params guarantees a positive bit count.
        let bits = match BitVector::new(params.bits(), Fill::Zeros) {
            Ok(bits) => bits,
            Err(_) => unreachable!("params with zero bits"),
        };
        Self {
            params,
            hasher,
            bits,
        }
    }

    /// Sizes a filter for the keys in `keys` at `false_positive_rate` and inserts all of them.
    ///
    /// Fails if `keys` is empty or `false_positive_rate` is not strictly between 0 and 1.
    pub fn try_from_iterator<I>(keys: I, false_positive_rate: f64) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
        I::Item: AsRef<[u8]>,
    {
        let keys = keys.into_iter();
        let mut filter = Self::new(Params::optimal(keys.len(), false_positive_rate)?);
        for key in keys {
            filter.insert(key.as_ref());
        }
        Ok(filter)
    }

    /// Queries `key`, then inserts it, hashing it only once.
    ///
    /// Returns the membership `key` had before it was inserted.
    pub fn check_and_insert<T: AsRef<[u8]> + ?Sized>(&mut self, key: &T) -> Membership {
        let mut membership = Membership::ProbablyPresent;
        for index in self.probes(key.as_ref()) {
            if !self.bits.test(index) {
                membership = Membership::Absent;
                self.bits.set(index);
            }
        }
        membership
    }

    /// Returns the filter's dimensions.
    pub const fn params(&self) -> Params {
        self.params
    }

    /// Returns the hash family used to probe the filter.
    pub const fn hasher(&self) -> HashFamily {
        self.hasher
    }

    /// Returns the underlying bit vector.
    pub const fn bit_vector(&self) -> &BitVector<W> {
        &self.bits
    }

    /// Returns the number of bits in the filter.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns the number of bits set to 1.
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Returns the fraction of bits set.
    ///
    /// Values above 0.5 mean the filter holds more keys than it was sized for.
    pub fn load_factor(&self) -> f64 {
        self.bits_set() as f64 / self.params.bits() as f64
    }

    /// Estimates the current false positive rate as `load_factor^k`.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        pow(self.load_factor(), self.params.hashes() as f64)
    }

    #[inline]
    fn probes(&self, key: &[u8]) -> crate::Probes {
        self.hasher.probes(key, self.params.hashes(), self.params.bits())
    }
}

impl<T, W> Filter<T> for BloomFilter<W>
where
    T: AsRef<[u8]> + ?Sized,
    W: Word,
{
    /// Sets the `k` bits `key` hashes to.
    fn insert(&mut self, key: &T) {
        for index in self.probes(key.as_ref()) {
            self.bits.set(index);
        }
    }

    /// Checks the `k` bits `key` hashes to, stopping at the first unset one.
    fn may_contain(&self, key: &T) -> Membership {
        if self.probes(key.as_ref()).all(|index| self.bits.test(index)) {
            Membership::ProbablyPresent
        } else {
            Membership::Absent
        }
    }

    fn len(&self) -> usize {
        BloomFilter::len(self)
    }
}
