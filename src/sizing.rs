//! Derives Bloom filter dimensions from a target accuracy.

use crate::Error;
use core::f64::consts::LN_2;
use libm::{ceil, exp, log, pow, round};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// False positive rate used by callers that do not choose one.
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 1e-7;

/// Largest bit vector length a filter may be sized to.
const MAX_BITS: usize = isize::MAX as usize;

/// The dimensions of a Bloom filter: its bit vector length `m` and hash round count `k`.
///
/// ```
/// use bloomf::Params;
///
/// let params = Params::optimal(1000, 0.01).unwrap();
/// assert_eq!(params.bits(), 9586);
/// assert_eq!(params.hashes(), 7);
/// ```
///
/// Deserialized parameters are checked the same way as [`Params::new`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawParams"))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Params {
    bits: usize,
    hashes: u32,
}

/// Unvalidated wire form of [`Params`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawParams {
    bits: usize,
    hashes: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawParams> for Params {
    type Error = Error;

    fn try_from(raw: RawParams) -> Result<Self, Error> {
        Self::new(raw.bits, raw.hashes)
    }
}

/// Converts a computed bit count to `usize`, or `None` if it cannot be addressed.
#[inline]
fn addressable_bits(m: f64) -> Option<usize> {
    // MAX_BITS as f64 rounds up to 2^63, so equality is already out of range.
    if !m.is_finite() || m >= MAX_BITS as f64 {
        return None;
    }
    Some((m as usize).max(1))
}

impl Params {
    /// Creates parameters for a filter of `bits` bits probed by `hashes` hash rounds.
    pub fn new(bits: usize, hashes: u32) -> Result<Self, Error> {
        if bits == 0 {
            return Err(Error::ZeroBits);
        }
        if hashes == 0 {
            return Err(Error::ZeroHashes);
        }
        Ok(Self { bits, hashes })
    }

    /// Computes the optimal parameters for holding `items` keys at a false positive rate of
    /// `false_positive_rate`:
    ///
    /// - `m = ceil(-n ln(p) / ln(2)^2)`
    /// - `k = max(1, round(m / n * ln(2)))`
    ///
    /// Fails if `items` is 0, if `false_positive_rate` is not strictly between 0 and 1, or if the
    /// resulting bit vector would be too large to address.
    pub fn optimal(items: usize, false_positive_rate: f64) -> Result<Self, Error> {
        if items == 0 {
            return Err(Error::ZeroItems);
        }
        // Written this way round so NaN is rejected too.
        if !(false_positive_rate > 0.0 && false_positive_rate < 1.0) {
            return Err(Error::FalsePositiveRate(false_positive_rate));
        }

        let n = items as f64;
        let m = ceil(-n * log(false_positive_rate) / (LN_2 * LN_2));
        let bits = addressable_bits(m).ok_or(Error::TooManyBits {
            items,
            rate: false_positive_rate,
        })?;

        // A filter with no rounds would report every key as present.
        let k = round(bits as f64 / n * LN_2);
        let hashes = k.clamp(1.0, u32::MAX as f64) as u32;

        log::debug!(
            "sized bloom filter for {} items at p={}: m={} bits, k={} rounds",
            items,
            false_positive_rate,
            bits,
            hashes
        );
        Ok(Self { bits, hashes })
    }

    /// Returns the bit vector length `m`.
    pub const fn bits(&self) -> usize {
        self.bits
    }

    /// Returns the number of hash rounds `k`.
    pub const fn hashes(&self) -> u32 {
        self.hashes
    }

    /// Returns the theoretical false positive rate `(1 - e^(-kn/m))^k` of a filter with these
    /// parameters after `items` distinct keys have been inserted.
    pub fn false_positive_rate(&self, items: usize) -> f64 {
        let k = self.hashes as f64;
        let fill = 1.0 - exp(-k * items as f64 / self.bits as f64);
        pow(fill, k)
    }
}
