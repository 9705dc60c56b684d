//! # maybers
//!
//! Optional-value containers for Rust with synchronous/asynchronous interop
//! and chainable combinators.
//!
//! ## Overview
//!
//! This library provides pipelines over values that may be absent, without
//! manual presence checks at every step. It includes:
//!
//! - **`Maybe<T>`**: a synchronous container that is either `Just(value)` or
//!   `Nothing(reason)`, where the reason keeps track of *which* of the two
//!   ambient absence markers was observed
//! - **`AsyncMaybe<T>`**: an asynchronous container wrapping a deferred
//!   computation that resolves to the same shape, normalizing mixed
//!   synchronous/asynchronous callback results along the way
//! - **Combinators**: `map`, `flat_map`, `filter`, `filter_map`, `extend`,
//!   `assign`, `with_default`, `get_or_else`, `effect`, `value`
//! - **Point-free layer**: curried free functions in [`pipe`] that forward
//!   to whichever container they are applied to
//!
//! ## Feature Flags
//!
//! - `maybe`: the synchronous container and support traits
//! - `async`: the asynchronous container and callback-shape normalization
//! - `pipe`: the curried combinator layer
//! - `serde`: `serde_json::Value` support and serde interop for `Maybe`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybers::option::Maybe;
//!
//! let greeting = Maybe::just("alice")
//!     .map(|name| format!("hello, {name}"))
//!     .get_or_else(String::from("hello, stranger"));
//! assert_eq!(greeting, "hello, alice");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use maybers::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "maybe")]
    pub use crate::option::*;

    #[cfg(feature = "pipe")]
    pub use crate::pipe::Optional;
}

#[cfg(feature = "maybe")]
pub mod option;

#[cfg(feature = "pipe")]
pub mod pipe;

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        assert!(true);
    }
}
