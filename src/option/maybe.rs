//! Maybe type - a value that may be absent for one of two reasons.
//!
//! This module provides the `Maybe<T>` type, the synchronous optional-value
//! container. A `Maybe` is either `Just(value)` or `Nothing(reason)`, where
//! the reason records which of the two ambient absence markers was observed
//! (see [`Absence`]). Combinators short-circuit on `Nothing` and carry the
//! original marker through the chain.
//!
//! # Examples
//!
//! ```rust
//! use maybers::option::{Absence, Maybe};
//!
//! // Creating Maybe values
//! let present = Maybe::just(42);
//! let absent: Maybe<i32> = Maybe::nothing(Absence::Null);
//!
//! // Pattern matching
//! match present {
//!     Maybe::Just(n) => println!("Got value: {}", n),
//!     Maybe::Nothing(reason) => println!("Got nothing: {}", reason),
//! }
//!
//! // Chaining combinators
//! let result = Maybe::just(21)
//!     .map(|x| x * 2)
//!     .filter(|x| *x > 0)
//!     .get_or_else(0);
//! assert_eq!(result, 42);
//! ```

use std::fmt;

use super::absence::{Absence, Nullable};
use super::shape::{Record, Sequence};

/// A boxed property computation used by [`Maybe::assign`].
///
/// Entries are boxed so one `assign` call can carry differently-shaped
/// closures; use [`boxed_field`] or the [`fields!`](crate::fields) macro to
/// build them.
pub type FieldFn<T: Record> = Box<dyn FnOnce(&T) -> Maybe<T::Field> + Send>;

/// Boxes a property computation for [`Maybe::assign`] or
/// [`AsyncMaybe::assign`](crate::option::AsyncMaybe::assign).
///
/// # Examples
///
/// ```rust
/// use maybers::option::{Maybe, boxed_field};
/// use std::collections::HashMap;
///
/// let entry = (
///     String::from("upper"),
///     boxed_field(|user: &HashMap<String, String>| {
///         Maybe::just(user["name"].to_uppercase())
///     }),
/// );
/// let mut user = HashMap::new();
/// user.insert("name".to_string(), "alice".to_string());
/// let result = Maybe::just(user).assign(vec![entry]);
/// assert!(result.is_just());
/// ```
pub fn boxed_field<T, R, F>(function: F) -> Box<dyn FnOnce(&T) -> R + Send>
where
    F: FnOnce(&T) -> R + Send + 'static,
{
    Box::new(function)
}

/// Builds the entry table for `assign` from `key => closure` pairs.
///
/// Works for both containers: closures may return
/// [`Maybe`](crate::option::Maybe) (synchronous `assign`) or
/// [`Outcome`](crate::option::Outcome) (asynchronous `assign`).
///
/// # Examples
///
/// ```rust
/// use maybers::fields;
/// use maybers::option::Maybe;
/// use std::collections::HashMap;
///
/// let mut user = HashMap::new();
/// user.insert("name".to_string(), "alice".to_string());
///
/// let result = Maybe::just(user).assign(fields![
///     "upper" => |u: &HashMap<String, String>| Maybe::just(u["name"].to_uppercase()),
/// ]);
/// assert!(result.is_just());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::new()
    };
    ($($key:expr => $function:expr),+ $(,)?) => {
        ::std::vec![
            $((::std::string::String::from($key), $crate::option::boxed_field($function))),+
        ]
    };
}

/// A value that may be absent for one of two reasons.
///
/// `Maybe<T>` is either `Just(value)` or `Nothing(reason)`. The reason
/// distinguishes an explicit null from a value that was never provided, and
/// every combinator that short-circuits on `Nothing` preserves the marker it
/// found, except where a combinator *rejects* a present value, in which
/// case the fixed markers [`Absence::REJECTED`] and
/// [`Absence::NOT_A_SEQUENCE`] apply.
///
/// Containers are immutable: every combinator consumes `self` and returns a
/// new container.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use maybers::option::{Absence, Maybe};
///
/// let doubled = Maybe::just(21).map(|x| x * 2);
/// assert_eq!(doubled, Maybe::just(42));
///
/// let absent: Maybe<i32> = Maybe::nothing(Absence::Missing);
/// assert_eq!(absent.map(|x| x * 2).value(), Err(Absence::Missing));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// An absent value, tagged with the marker that was observed.
    Nothing(Absence),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Classifies a raw value into a container.
    ///
    /// If the value encodes one of the two absence markers, the container is
    /// `Nothing` tagged accordingly; otherwise the value is wrapped as
    /// `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "serde")] {
    /// use maybers::option::{Absence, Maybe};
    /// use serde_json::json;
    ///
    /// assert_eq!(Maybe::from_value(json!(5)), Maybe::just(json!(5)));
    /// assert_eq!(Maybe::from_value(json!(null)).value(), Err(Absence::Null));
    /// # }
    /// ```
    pub fn from_value(value: T) -> Self
    where
        T: Nullable,
    {
        match value.absence() {
            Some(reason) => Self::Nothing(reason),
            None => Self::Just(value),
        }
    }

    /// Wraps a value that is known to be present.
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// Creates an absent container tagged with the given marker.
    #[inline]
    pub const fn nothing(reason: Absence) -> Self {
        Self::Nothing(reason)
    }

    /// Converts an `Option` into a container.
    ///
    /// `None` carries no information about *why* the value is absent, so it
    /// maps to [`Absence::Missing`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{Absence, Maybe};
    ///
    /// assert_eq!(Maybe::from_option(Some(1)), Maybe::just(1));
    /// assert_eq!(Maybe::<i32>::from_option(None).value(), Err(Absence::Missing));
    /// ```
    pub fn from_option(option: Option<T>) -> Self {
        option.map_or(Self::Nothing(Absence::Missing), Self::Just)
    }

    /// Converts a double `Option` into a container, following the
    /// "field absent vs field null" convention: the outer `None` means the
    /// value was never provided, `Some(None)` means it was explicitly null.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{Absence, Maybe};
    ///
    /// assert_eq!(Maybe::from_nested_option(Some(Some(1))), Maybe::just(1));
    /// assert_eq!(Maybe::<i32>::from_nested_option(Some(None)).value(), Err(Absence::Null));
    /// assert_eq!(Maybe::<i32>::from_nested_option(None).value(), Err(Absence::Missing));
    /// ```
    pub fn from_nested_option(option: Option<Option<T>>) -> Self {
        match option {
            None => Self::Nothing(Absence::Missing),
            Some(None) => Self::Nothing(Absence::Null),
            Some(Some(value)) => Self::Just(value),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if the value is absent.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing(_))
    }

    /// Returns the absence marker, if the value is absent.
    #[inline]
    pub const fn absence(&self) -> Option<Absence> {
        match self {
            Self::Just(_) => None,
            Self::Nothing(reason) => Some(*reason),
        }
    }

    /// Returns a reference to the contained value, if present.
    #[inline]
    pub const fn just_ref(&self) -> Option<&T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing(_) => None,
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies a function to the contained value.
    ///
    /// `Just(v)` becomes `Just(function(v))`; `Nothing` is returned with
    /// its marker untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::Maybe;
    ///
    /// assert_eq!(Maybe::just(2).map(|x| x * 10), Maybe::just(20));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing(reason) => Maybe::Nothing(reason),
        }
    }

    /// Chains a computation that itself returns a container.
    ///
    /// `Just(v)` becomes `function(v)` as-is, including whatever marker the
    /// callback chose when it returned `Nothing`; an absent input is
    /// returned with its marker untouched and the callback is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{Absence, Maybe};
    ///
    /// let half = |x: i32| {
    ///     if x % 2 == 0 {
    ///         Maybe::just(x / 2)
    ///     } else {
    ///         Maybe::nothing(Absence::Null)
    ///     }
    /// };
    /// assert_eq!(Maybe::just(4).flat_map(half), Maybe::just(2));
    /// assert_eq!(Maybe::just(3).flat_map(half).value(), Err(Absence::Null));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing(reason) => Maybe::Nothing(reason),
        }
    }

    /// Alias for `flat_map`.
    ///
    /// This is the conventional Rust name for monadic bind.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.flat_map(function)
    }

    /// Keeps the value only if the predicate holds.
    ///
    /// An absent input keeps its original marker and the predicate is never
    /// invoked. A present value that fails the predicate collapses to the
    /// fixed marker [`Absence::REJECTED`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{Absence, Maybe};
    ///
    /// assert_eq!(Maybe::just(4).filter(|x| x % 2 == 0), Maybe::just(4));
    /// assert_eq!(Maybe::just(3).filter(|x| x % 2 == 0).value(), Err(Absence::Null));
    /// ```
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) => {
                if predicate(&value) {
                    Self::Just(value)
                } else {
                    Self::Nothing(Absence::REJECTED)
                }
            }
            Self::Nothing(reason) => Self::Nothing(reason),
        }
    }

    /// Runs a side effect on the contained value, if present, and returns
    /// the container unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::Maybe;
    ///
    /// let mut seen = None;
    /// let maybe = Maybe::just(7).effect(|x| seen = Some(*x));
    /// assert_eq!(seen, Some(7));
    /// assert_eq!(maybe, Maybe::just(7));
    /// ```
    #[must_use]
    pub fn effect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Just(value) = &self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Recovery and Extraction
    // =========================================================================

    /// Replaces an absent value with a default, keeping the chain alive.
    ///
    /// The result is always `Just`; a present value passes through
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{Absence, Maybe};
    ///
    /// let recovered = Maybe::nothing(Absence::Null).with_default(10);
    /// assert_eq!(recovered, Maybe::just(10));
    /// assert_eq!(Maybe::just(1).with_default(10), Maybe::just(1));
    /// ```
    #[must_use]
    pub fn with_default(self, default: T) -> Self {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing(_) => Self::Just(default),
        }
    }

    /// Terminal extraction: returns the contained value or the default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{Absence, Maybe};
    ///
    /// assert_eq!(Maybe::just(1).get_or_else(0), 1);
    /// assert_eq!(Maybe::<i32>::nothing(Absence::Missing).get_or_else(0), 0);
    /// ```
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing(_) => default,
        }
    }

    /// Escape hatch: returns the raw tagged payload, exposing whichever
    /// absence marker was recorded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{Absence, Maybe};
    ///
    /// assert_eq!(Maybe::just(1).value(), Ok(1));
    /// assert_eq!(Maybe::<i32>::nothing(Absence::Missing).value(), Err(Absence::Missing));
    /// ```
    pub fn value(self) -> Result<T, Absence> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing(reason) => Err(reason),
        }
    }
}

// =============================================================================
// Record Operations
// =============================================================================

impl<T: Record> Maybe<T> {
    /// Grows the contained record with one computed field.
    ///
    /// The callback receives the record and produces the new field's value.
    /// A present non-record value, or an absent callback result, collapses
    /// to [`Absence::REJECTED`]; an absent input keeps its original marker
    /// and the callback is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::Maybe;
    /// use std::collections::HashMap;
    ///
    /// let mut user = HashMap::new();
    /// user.insert("name".to_string(), "alice".to_string());
    ///
    /// let result = Maybe::just(user)
    ///     .extend("upper", |u| Maybe::just(u["name"].to_uppercase()));
    /// assert_eq!(
    ///     result.value().unwrap()["upper"],
    ///     "ALICE".to_string()
    /// );
    /// ```
    pub fn extend<F>(self, key: &str, function: F) -> Self
    where
        F: FnOnce(&T) -> Maybe<T::Field>,
    {
        match self {
            Self::Nothing(reason) => Self::Nothing(reason),
            Self::Just(record) if !record.is_record() => Self::Nothing(Absence::REJECTED),
            Self::Just(record) => match function(&record) {
                Maybe::Just(field) => Self::Just(record.with_field(key, field)),
                Maybe::Nothing(_) => Self::Nothing(Absence::REJECTED),
            },
        }
    }

    /// Grows the contained record with several independently computed
    /// fields in one step.
    ///
    /// Every entry function receives the *original* record; entries may
    /// not depend on one another, and their evaluation order is
    /// unspecified. All successful fields merge into the record in a single
    /// step; if the base is absent its marker is preserved, while a
    /// non-record base or any absent entry collapses the whole result to
    /// [`Absence::REJECTED`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::fields;
    /// use maybers::option::{Absence, Maybe};
    /// use std::collections::HashMap;
    ///
    /// let mut user = HashMap::new();
    /// user.insert("name".to_string(), "alice".to_string());
    ///
    /// let result = Maybe::just(user).assign(fields![
    ///     "upper" => |u: &HashMap<String, String>| Maybe::just(u["name"].to_uppercase()),
    ///     "greeting" => |u: &HashMap<String, String>| Maybe::just(format!("hi {}", u["name"])),
    /// ]);
    /// let merged = result.value().unwrap();
    /// assert_eq!(merged["upper"], "ALICE");
    /// assert_eq!(merged["greeting"], "hi alice");
    /// ```
    pub fn assign(self, entries: Vec<(String, FieldFn<T>)>) -> Self {
        let record = match self {
            Self::Nothing(reason) => return Self::Nothing(reason),
            Self::Just(record) if !record.is_record() => {
                return Self::Nothing(Absence::REJECTED);
            }
            Self::Just(record) => record,
        };

        // Every entry sees the original record; merging happens afterwards
        // in one step.
        let mut computed = Vec::with_capacity(entries.len());
        for (key, function) in entries {
            computed.push((key, function(&record)));
        }

        let mut merged = record;
        for (key, field) in computed {
            match field {
                Maybe::Just(field) => merged = merged.with_field(&key, field),
                Maybe::Nothing(_) => return Self::Nothing(Absence::REJECTED),
            }
        }
        Self::Just(merged)
    }
}

// =============================================================================
// Sequence Operations
// =============================================================================

impl<T: Sequence> Maybe<T> {
    /// Maps every element of the contained sequence, keeping only present
    /// results.
    ///
    /// An absent input keeps its original marker. A present value that is
    /// not sequence-shaped collapses to [`Absence::NOT_A_SEQUENCE`], a
    /// different outcome than an absent input. Elements whose callback
    /// result is absent are dropped; the survivors keep their original
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{Absence, Maybe};
    ///
    /// let result: Maybe<Vec<i32>> = Maybe::just(vec![1, 2, 3, 4, 5]).filter_map(|x| {
    ///     if x % 2 == 0 {
    ///         Maybe::just(x * 10)
    ///     } else {
    ///         Maybe::nothing(Absence::Null)
    ///     }
    /// });
    /// assert_eq!(result, Maybe::just(vec![20, 40]));
    /// ```
    pub fn filter_map<Out, F>(self, mut function: F) -> Maybe<Out>
    where
        Out: Sequence,
        F: FnMut(T::Item) -> Maybe<Out::Item>,
    {
        match self {
            Self::Nothing(reason) => Maybe::Nothing(reason),
            Self::Just(value) => match value.into_elements() {
                None => Maybe::Nothing(Absence::NOT_A_SEQUENCE),
                Some(elements) => {
                    let mut kept = Vec::new();
                    for element in elements {
                        if let Maybe::Just(mapped) = function(element) {
                            kept.push(mapped);
                        }
                    }
                    Maybe::Just(Out::from_elements(kept))
                }
            },
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing(reason) => formatter.debug_tuple("Nothing").field(reason).finish(),
        }
    }
}

impl<T> Default for Maybe<T> {
    /// The default container is absent with [`Absence::Missing`]: a value
    /// that was never provided. Lets struct fields deserialized with
    /// `#[serde(default)]` distinguish a missing field from an explicit
    /// null.
    #[inline]
    fn default() -> Self {
        Self::Nothing(Absence::Missing)
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Maybe<T>> for Result<T, Absence> {
    /// Converts a `Maybe` to a `Result`, equivalent to [`Maybe::value`].
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.value()
    }
}

impl<T> From<Result<T, Absence>> for Maybe<T> {
    /// Converts a `Result` whose error is an absence marker back into a
    /// container.
    #[inline]
    fn from(result: Result<T, Absence>) -> Self {
        match result {
            Ok(value) => Self::Just(value),
            Err(reason) => Self::Nothing(reason),
        }
    }
}

// =============================================================================
// Serde Integration
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    /// Serializes `Just(v)` as `v` and either `Nothing` as the format's
    /// null (JSON has a single null, so the marker distinction does not
    /// survive serialization).
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Just(value) => serializer.serialize_some(value),
            Self::Nothing(_) => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    /// Deserializes the format's null as `Nothing(Absence::Null)` and any
    /// other value as `Just`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?
            .map_or(Self::Nothing(Absence::Null), Self::Just))
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);
