//! Fixed-capacity bit vectors packed into unsigned words.

use crate::Error;
use alloc::{boxed::Box, vec};
use core::fmt::Debug;
use num_traits::{PrimInt, Unsigned};

/// An unsigned integer type used as the backing storage unit of a [`BitVector`].
pub trait Word: PrimInt + Unsigned + Debug {
    /// Number of bits in one word.
    const BITS: usize;
}

macro_rules! impl_word(
    ($($ty:ty),*) => {
        $(
            impl Word for $ty {
                const BITS: usize = <$ty>::BITS as usize;
            }
        )*
    };
);

impl_word!(u8, u16, u32, u64, u128);

/// The initial pattern of a freshly constructed [`BitVector`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Fill {
    /// Every bit starts unset.
    Zeros,
    /// Every bit starts set.
    Ones,
}

/// A fixed-length sequence of bits stored in `ceil(len / W::BITS)` words of type `W`.
///
/// A `BitVector` never grows or shrinks, and bits can only be set, never cleared.
///
/// ```
/// use bloomf::{BitVector, Fill};
///
/// let mut bits: BitVector<u32> = BitVector::new(100, Fill::Zeros).unwrap();
/// assert_eq!(bits.word_count(), 4);
///
/// bits.set(42);
/// assert!(bits.test(42));
/// assert!(!bits.test(43));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVector<W: Word = u64> {
    len: usize,
    words: Box<[W]>,
}

impl<W: Word> BitVector<W> {
    /// Allocates a vector of `len` bits, all zero or all one according to `fill`.
    ///
    /// Fails with [`Error::ZeroBits`] if `len` is 0.
    pub fn new(len: usize, fill: Fill) -> Result<Self, Error> {
        if len == 0 {
            return Err(Error::ZeroBits);
        }

        let word_count = len.div_ceil(W::BITS);
        let pattern = match fill {
            Fill::Zeros => W::zero(),
            Fill::Ones => !W::zero(),
        };
        let mut words = vec![pattern; word_count].into_boxed_slice();

        // Keep the padding of the last word clear so popcounts only see addressable bits.
        let tail = len % W::BITS;
        if fill == Fill::Ones && tail != 0 {
            words[word_count - 1] = (W::one() << tail) - W::one();
        }

        Ok(Self { len, words })
    }

    /// Returns whether the bit at `index` is set.
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub fn test(&self, index: usize) -> bool {
        debug_assert!(index < self.len, "bit {} out of range {}", index, self.len);
        let (word, offset) = (index / W::BITS, index % W::BITS);
        (self.words[word] >> offset) & W::one() == W::one()
    }

    /// Sets the bit at `index`. Setting an already-set bit has no effect.
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub fn set(&mut self, index: usize) {
        debug_assert!(index < self.len, "bit {} out of range {}", index, self.len);
        let (word, offset) = (index / W::BITS, index % W::BITS);
        self.words[word] = self.words[word] | (W::one() << offset);
    }

    /// Returns the number of addressable bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of backing words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns the backing words.
    pub fn words(&self) -> &[W] {
        &self.words
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod test {
    use crate::{BitVector, Error, Fill};

    use rand::Rng;

    #[test]
    fn test_rejects_empty_vector() {
        assert_eq!(BitVector::<u64>::new(0, Fill::Zeros), Err(Error::ZeroBits));
        assert_eq!(BitVector::<u32>::new(0, Fill::Ones), Err(Error::ZeroBits));
    }

    #[test]
    fn test_word_count() {
        assert_eq!(BitVector::<u32>::new(1, Fill::Zeros).unwrap().word_count(), 1);
        assert_eq!(BitVector::<u32>::new(32, Fill::Zeros).unwrap().word_count(), 1);
        assert_eq!(BitVector::<u32>::new(33, Fill::Zeros).unwrap().word_count(), 2);
        assert_eq!(BitVector::<u64>::new(9586, Fill::Zeros).unwrap().word_count(), 150);
        assert_eq!(BitVector::<u8>::new(17, Fill::Zeros).unwrap().word_count(), 3);
    }

    #[test]
    fn test_zero_fill() {
        let bits: BitVector<u32> = BitVector::new(1000, Fill::Zeros).unwrap();
        assert!((0..1000).all(|i| !bits.test(i)));
        assert_eq!(bits.count_ones(), 0);
    }

    #[test]
    fn test_one_fill() {
        let bits: BitVector<u32> = BitVector::new(1000, Fill::Ones).unwrap();
        assert!((0..1000).all(|i| bits.test(i)));
        // 1000 is not a multiple of 32; padding must not be counted.
        assert_eq!(bits.count_ones(), 1000);

        let bits: BitVector<u64> = BitVector::new(128, Fill::Ones).unwrap();
        assert_eq!(bits.words(), &[u64::MAX, u64::MAX]);
    }

    #[test]
    fn test_set_only_touches_one_bit() {
        const LEN: usize = 777;
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let i = rng.gen_range(0..LEN);
            let mut bits: BitVector<u32> = BitVector::new(LEN, Fill::Zeros).unwrap();
            bits.set(i);

            assert!(bits.test(i));
            assert!((0..LEN).filter(|&j| j != i).all(|j| !bits.test(j)));
            assert_eq!(bits.count_ones(), 1);
        }
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut once: BitVector = BitVector::new(130, Fill::Zeros).unwrap();
        let mut twice = once.clone();

        once.set(129);
        twice.set(129);
        twice.set(129);

        assert_eq!(once, twice);
        assert!(twice.test(129));
    }

    #[test]
    fn test_word_boundaries() {
        let mut bits: BitVector<u8> = BitVector::new(24, Fill::Zeros).unwrap();
        for i in [0, 7, 8, 15, 16, 23] {
            bits.set(i);
        }
        assert_eq!(bits.words(), &[0b1000_0001, 0b1000_0001, 0b1000_0001]);
    }
}
