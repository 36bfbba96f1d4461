/*!
# Utilities

Provides helper structs and traits used by the algorithms and generators:
- [`VersionedUnionFind`](self::union_find::VersionedUnionFind): a union-find whose elements are
  tagged with an epoch so that the whole structure can be reset in `O(1)`,
- [`Probability`]: validation helper for generator parameters.

You probably do not need to interact with this module directly.
*/

use num::{One, Zero};

pub mod union_find;

pub use union_find::VersionedUnionFind;

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probility(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probabilities() {
        assert!(0.0f64.is_valid_probility());
        assert!(0.3f64.is_valid_probility());
        assert!(1.0f64.is_valid_probility());
        assert!(!(-0.1f64).is_valid_probility());
        assert!(!1.5f64.is_valid_probility());
        assert!(!f64::NAN.is_valid_probility());
    }
}
