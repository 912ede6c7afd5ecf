//! Errors raised while configuring a filter.

use thiserror::Error;

/// A filter configuration error.
///
/// Errors are only ever produced at construction time. Once a filter exists, inserting and
/// querying keys cannot fail.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum Error {
    /// The expected number of items was 0.
    #[error("expected item count must be positive")]
    ZeroItems,
    /// The target false positive rate was not strictly between 0 and 1.
    #[error("false positive rate must be strictly between 0 and 1, got {0}")]
    FalsePositiveRate(f64),
    /// A bit vector of length 0 was requested.
    #[error("bit vector length must be positive")]
    ZeroBits,
    /// A filter with 0 hash rounds was requested.
    #[error("hash round count must be positive")]
    ZeroHashes,
    /// The optimal bit vector for the requested accuracy is too large to address.
    #[error("{items} items at false positive rate {rate} need more bits than can be addressed")]
    TooManyBits {
        /// Expected number of items.
        items: usize,
        /// Target false positive rate.
        rate: f64,
    },
}
