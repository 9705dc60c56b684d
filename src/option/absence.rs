//! Classification of the two ambient absence markers.
//!
//! An input value can be "nothing" for two different reasons: it was an
//! explicit null, or it was never provided at all. Pipelines keep the two
//! apart, so a consumer at the end of a chain can still tell which one was
//! originally observed.

use std::fmt;

/// The reason a container holds no value.
///
/// Two markers are tracked so that a pipeline preserves *which* kind of
/// absence it started from, rather than collapsing both into a single
/// "nothing".
///
/// # Examples
///
/// ```rust
/// use maybers::option::{Absence, Maybe};
///
/// let maybe: Maybe<i32> = Maybe::nothing(Absence::Missing);
/// assert_eq!(maybe.map(|x| x + 1).value(), Err(Absence::Missing));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Absence {
    /// The value was an explicit null.
    Null,
    /// The value was never provided.
    Missing,
}

impl Absence {
    /// The fixed marker produced when a combinator rejects a *present*
    /// value: a failed `filter` predicate, a non-record base in
    /// `extend`/`assign`, or an absent property computation.
    ///
    /// This choice is a stable contract of the algebra, not data-dependent.
    pub const REJECTED: Self = Self::Null;

    /// The fixed marker produced by `filter_map` when a present value does
    /// not have sequence shape.
    ///
    /// Deliberately distinct from [`Absence::REJECTED`]: a sequence-shaped
    /// absence (the container was already `Nothing`, original marker
    /// preserved) and a present non-sequence value are different outcomes.
    pub const NOT_A_SEQUENCE: Self = Self::Missing;

    /// Returns `true` if this marker is [`Absence::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if this marker is [`Absence::Missing`].
    #[inline]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns the marker's name, suitable for diagnostics.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Missing => "missing",
        }
    }
}

impl fmt::Display for Absence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Values that can themselves encode one of the two absence markers.
///
/// Implementors report whether a given value *is* an absence marker, which
/// is what lets [`Maybe::from_value`](crate::option::Maybe::from_value)
/// classify raw inputs at construction time.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "serde")] {
/// use maybers::option::{Absence, Nullable};
/// use serde_json::json;
///
/// assert_eq!(json!(null).absence(), Some(Absence::Null));
/// assert_eq!(json!(42).absence(), None);
/// # }
/// ```
pub trait Nullable {
    /// Returns the absence marker this value encodes, if any.
    fn absence(&self) -> Option<Absence>;
}

#[cfg(feature = "serde")]
impl Nullable for serde_json::Value {
    fn absence(&self) -> Option<Absence> {
        match self {
            Self::Null => Some(Absence::Null),
            _ => None,
        }
    }
}

/// Returns `true` if the value does not encode an absence marker.
#[inline]
pub fn is_present<T: Nullable>(value: &T) -> bool {
    value.absence().is_none()
}

/// Returns `true` if the value encodes an absence marker.
#[inline]
pub fn is_absent<T: Nullable>(value: &T) -> bool {
    value.absence().is_some()
}
