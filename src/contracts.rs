//! Runtime contracts for equality definitions.
//!
//! Debug-mode assertions for the properties every definition is expected to
//! uphold. These checks:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//!
//! The builder keeps one extractor list for both operations, so a violation
//! can only come from an ill-behaved leaf type, e.g. a `PartialEq` impl that
//! disagrees with its `Hash` impl, or an extractor with hidden state.
//!
//! # Usage
//!
//! ```
//! use alike::contracts::check_hash_consistent;
//! use alike::testing::{point_equality, Point};
//!
//! let definition = point_equality();
//! let a = Point { x: 1, y: 2 };
//! let b = Point { x: 1, y: 2 };
//!
//! // In debug builds, panics if equal values hash differently
//! check_hash_consistent(&definition, &a, &b);
//! ```

use crate::equality::Equality;
use std::any::Any;

/// Every value must compare equal to itself.
pub fn check_reflexive<T: Any>(definition: &Equality<T>, subject: &T) {
    debug_assert!(
        definition.equals(subject, subject),
        "Contract violation: value does not equal itself"
    );
}

/// Comparison of two typed subjects must not depend on argument order.
pub fn check_symmetric<T: Any>(definition: &Equality<T>, first: &T, second: &T) {
    debug_assert!(
        definition.equals(first, second) == definition.equals(second, first),
        "Contract violation: equals(first, second) != equals(second, first)"
    );
}

/// Values that compare equal must produce identical hashes.
pub fn check_hash_consistent<T: Any>(definition: &Equality<T>, first: &T, second: &T) {
    debug_assert!(
        !definition.equals(first, second)
            || definition.hash_code(first) == definition.hash_code(second),
        "Contract violation: equal values produced different hashes"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{point_equality, Point};
    use std::hash::{Hash, Hasher};

    /// Ill-behaved leaf: compares equal to everything, hashes its payload.
    struct AbsorbEverything(u32);

    impl PartialEq for AbsorbEverything {
        fn eq(&self, _other: &Self) -> bool {
            true
        }
    }

    impl Hash for AbsorbEverything {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.0.hash(state);
        }
    }

    #[test]
    fn test_well_behaved_definition_passes() {
        let definition = point_equality();
        let a = Point { x: 1, y: 2 };
        let b = Point { x: 1, y: 2 };
        let c = Point { x: 3, y: 4 };

        // Should not panic
        check_reflexive(&definition, &a);
        check_symmetric(&definition, &a, &b);
        check_symmetric(&definition, &a, &c);
        check_hash_consistent(&definition, &a, &b);
        check_hash_consistent(&definition, &a, &c);
    }

    #[test]
    #[should_panic(expected = "Contract violation")]
    fn test_inconsistent_leaf_type_is_caught() {
        let definition = Equality::<u32>::on_type()
            .check_equality(|n: &u32| AbsorbEverything(*n))
            .define();

        // Equal by the absorbing PartialEq, but the payload hashes differ.
        check_hash_consistent(&definition, &1_u32, &2_u32);
    }
}
