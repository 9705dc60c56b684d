#![cfg(feature = "maybe")]
//! Property-based tests for `Maybe<T>`.
//!
//! Verifies the container laws:
//! - Absence propagation: mapping over an absent container preserves the
//!   original marker for any function
//! - Functor identity: mapping the identity function changes nothing
//! - Monad laws for `flat_map`: left identity, right identity,
//!   associativity

use maybers::option::{Absence, Maybe};
use proptest::prelude::*;

// =============================================================================
// Absence Propagation
// =============================================================================

proptest! {
    /// Mapping any function over an absent container yields the same
    /// marker unchanged.
    #[test]
    fn prop_map_preserves_marker(offset: i32) {
        let function = move |n: i32| n.wrapping_add(offset);

        prop_assert_eq!(
            Maybe::<i32>::nothing(Absence::Null).map(function).value(),
            Err(Absence::Null)
        );
        prop_assert_eq!(
            Maybe::<i32>::nothing(Absence::Missing).map(function).value(),
            Err(Absence::Missing)
        );
    }

    /// Chaining any computation after an absent container yields the same
    /// marker unchanged.
    #[test]
    fn prop_flat_map_preserves_marker(factor: i32) {
        let function = move |n: i32| Maybe::just(n.wrapping_mul(factor));

        prop_assert_eq!(
            Maybe::<i32>::nothing(Absence::Missing).flat_map(function).value(),
            Err(Absence::Missing)
        );
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Identity Law: map(id) == id
    #[test]
    fn prop_map_identity(value: i32) {
        prop_assert_eq!(Maybe::just(value).map(|x| x).value(), Ok(value));
    }

    /// Composition Law: map(f).map(g) == map(g . f)
    #[test]
    fn prop_map_composition(value: i32) {
        let first = |n: i32| n.wrapping_add(1);
        let second = |n: i32| n.wrapping_mul(2);

        let left = Maybe::just(value).map(first).map(second);
        let right = Maybe::just(value).map(move |x| second(first(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity Law: just(a).flat_map(f) == f(a)
    #[test]
    fn prop_flat_map_left_identity(value: i32) {
        let function = |n: i32| {
            if n % 2 == 0 {
                Maybe::just(n.wrapping_mul(2))
            } else {
                Maybe::nothing(Absence::Null)
            }
        };

        prop_assert_eq!(Maybe::just(value).flat_map(function), function(value));
    }

    /// Right Identity Law: m.flat_map(just) == m
    #[test]
    fn prop_flat_map_right_identity(value: i32) {
        prop_assert_eq!(Maybe::just(value).flat_map(Maybe::just), Maybe::just(value));
    }

    /// Associativity Law:
    /// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
    #[test]
    fn prop_flat_map_associativity(value: i32) {
        let first = |n: i32| {
            if n % 3 == 0 {
                Maybe::nothing(Absence::Missing)
            } else {
                Maybe::just(n.wrapping_add(1))
            }
        };
        let second = |n: i32| Maybe::just(n.wrapping_mul(2));

        let left = Maybe::just(value).flat_map(first).flat_map(second);
        let right = Maybe::just(value).flat_map(move |x| first(x).flat_map(second));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Recovery Laws
// =============================================================================

proptest! {
    /// `with_default` always yields a present container.
    #[test]
    fn prop_with_default_always_present(value: i32, default: i32) {
        prop_assert!(Maybe::just(value).with_default(default).is_just());
        prop_assert!(
            Maybe::<i32>::nothing(Absence::Null).with_default(default).is_just()
        );
        prop_assert!(
            Maybe::<i32>::nothing(Absence::Missing).with_default(default).is_just()
        );
    }

    /// `get_or_else` returns the value when present and the default when
    /// absent, for any pair.
    #[test]
    fn prop_get_or_else_total(value: i32, default: i32) {
        prop_assert_eq!(Maybe::just(value).get_or_else(default), value);
        prop_assert_eq!(
            Maybe::<i32>::nothing(Absence::Missing).get_or_else(default),
            default
        );
    }
}
