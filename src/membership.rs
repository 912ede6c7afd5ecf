//! The answer to a membership query.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The answer to a membership query.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Membership {
    /// The key was definitely never inserted.
    Absent,
    /// The key was probably inserted. This may be a false positive.
    ProbablyPresent,
}

impl Membership {
    /// Returns `true` for [`Membership::ProbablyPresent`].
    pub const fn is_probably_present(self) -> bool {
        matches!(self, Self::ProbablyPresent)
    }

    /// Returns `true` for [`Membership::Absent`].
    pub const fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<Membership> for bool {
    fn from(membership: Membership) -> Self {
        membership.is_probably_present()
    }
}
