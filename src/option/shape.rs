//! Structural views over record- and sequence-shaped values.
//!
//! The `extend`/`assign` combinators need a value they can grow with new
//! string-keyed fields; `filter_map` needs a value it can break into
//! elements and rebuild. These traits express those two capabilities,
//! including the runtime shape checks that dynamic values require.

use std::collections::{BTreeMap, HashMap};

/// String-keyed structured values that `extend` and `assign` can grow.
///
/// `with_field` returns the updated record instead of mutating in place,
/// matching the container algebra's copy-semantics: combinators consume
/// their input and produce a new value.
///
/// Map types are records by construction; dynamically typed values such as
/// `serde_json::Value` answer `is_record` at runtime.
pub trait Record: Sized {
    /// The type a field holds.
    type Field;

    /// Whether this value actually has record shape.
    fn is_record(&self) -> bool;

    /// Returns this record with `key` set to `value`.
    ///
    /// Only meaningful after `is_record` has been checked; on a non-record
    /// value the input is returned unchanged.
    #[must_use]
    fn with_field(self, key: &str, value: Self::Field) -> Self;
}

impl<V> Record for HashMap<String, V> {
    type Field = V;

    fn is_record(&self) -> bool {
        true
    }

    fn with_field(mut self, key: &str, value: V) -> Self {
        self.insert(key.to_owned(), value);
        self
    }
}

impl<V> Record for BTreeMap<String, V> {
    type Field = V;

    fn is_record(&self) -> bool {
        true
    }

    fn with_field(mut self, key: &str, value: V) -> Self {
        self.insert(key.to_owned(), value);
        self
    }
}

#[cfg(feature = "serde")]
impl Record for serde_json::Value {
    type Field = Self;

    fn is_record(&self) -> bool {
        self.is_object()
    }

    fn with_field(mut self, key: &str, value: Self) -> Self {
        if let Self::Object(fields) = &mut self {
            fields.insert(key.to_owned(), value);
        }
        self
    }
}

/// Ordered element collections that `filter_map` can decompose and rebuild.
///
/// `into_elements` returns `None` when the value turns out not to be
/// sequence-shaped at runtime, which only dynamically typed implementors
/// can report.
pub trait Sequence: Sized {
    /// The element type.
    type Item;

    /// Breaks the value into its elements, or `None` when it is not
    /// sequence-shaped.
    fn into_elements(self) -> Option<Vec<Self::Item>>;

    /// Rebuilds a value of this shape from elements.
    fn from_elements(elements: Vec<Self::Item>) -> Self;
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn into_elements(self) -> Option<Vec<T>> {
        Some(self)
    }

    fn from_elements(elements: Vec<T>) -> Self {
        elements
    }
}

#[cfg(feature = "serde")]
impl Sequence for serde_json::Value {
    type Item = Self;

    fn into_elements(self) -> Option<Vec<Self>> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    fn from_elements(elements: Vec<Self>) -> Self {
        Self::Array(elements)
    }
}
