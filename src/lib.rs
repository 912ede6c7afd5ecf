//! This library implements classic Bloom filters -- data structures for fast approximation of set
//! membership using little memory. A Bloom filter answers "definitely absent" or "probably
//! present" for a key, never producing a false negative, at a false positive rate chosen when the
//! filter is sized. They are useful for quickly ruling out an expensive lookup, for example
//! checking whether an email address has [already been seen] before touching a database.
//!
//! A filter is a fixed-size bit vector plus `k` hash rounds. Inserting a key sets the `k` bits it
//! hashes to; querying checks them and stops at the first unset bit. Filters are insert-only and
//! never resize. The optimal bit count `m` and round count `k` are derived from the expected
//! number of keys and the target false positive rate (see [`Params::optimal`]).
//!
//! Keys are opaque byte sequences. Hashing uses [XXH3] with an explicit fixed seed followed by a
//! per-round [MurmurHash3] finalizer, so a key maps to the same bits in every process on every
//! machine. This library is `no_std` and only needs an allocator.
//!
//! ```
//! use bloomf::{build_filter, Filter, Membership};
//!
//! let filter = build_filter(["a@x.com", "b@x.com", "c@x.com"], 1e-6).unwrap();
//!
//! assert_eq!(filter.may_contain("a@x.com"), Membership::ProbablyPresent);
//! assert_eq!(filter.may_contain("z@y.org"), Membership::Absent);
//! ```
//!
//! [already been seen]: https://en.wikipedia.org/wiki/Bloom_filter#Examples
//! [XXH3]: https://github.com/Cyan4973/xxHash
//! [MurmurHash3]: https://github.com/spaolacci/murmur3

#![no_std]
// Configuration attributes
#![warn(missing_docs)]
#![forbid(clippy::all, clippy::cargo, clippy::nursery)]
#![allow(clippy::len_without_is_empty, clippy::useless_attribute)]

extern crate alloc;

mod bitvec;
mod bloom;
mod error;
mod hash;
mod membership;
mod sizing;

pub use bitvec::{BitVector, Fill, Word};
pub use bloom::BloomFilter;
pub use error::Error;
pub use hash::{HashFamily, Probes, DEFAULT_SEED};
pub use membership::Membership;
pub use sizing::{Params, DEFAULT_FALSE_POSITIVE_RATE};

/// Methods common to membership filters.
pub trait Filter<T: ?Sized> {
    /// Adds `key` to the filter. Inserting a key more than once has no further effect.
    fn insert(&mut self, key: &T);

    /// Returns [`Membership::Absent`] if `key` was definitely never inserted, and
    /// [`Membership::ProbablyPresent`] otherwise.
    ///
    /// There can never be a false negative, but there is a small possibility of false positives.
    fn may_contain(&self, key: &T) -> Membership;

    /// Returns `true` if the filter probably contains the specified key.
    fn contains(&self, key: &T) -> bool {
        self.may_contain(key).is_probably_present()
    }

    /// Returns the number of bits in the filter.
    fn len(&self) -> usize;
}

/// Sizes a [`BloomFilter`] for `items` at `false_positive_rate` and inserts every item.
///
/// This is [`Params::optimal`] with `n = items.len()`, followed by construction and one insert per
/// item. Fails with a configuration [`Error`] if `items` is empty or `false_positive_rate` is not
/// strictly between 0 and 1; no partial filter is produced.
pub fn build_filter<I>(items: I, false_positive_rate: f64) -> Result<BloomFilter, Error>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    I::Item: AsRef<[u8]>,
{
    BloomFilter::try_from_iterator(items, false_positive_rate)
}
