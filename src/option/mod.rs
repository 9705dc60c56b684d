//! Optional-value containers and their support traits.
//!
//! This module provides the container algebra:
//!
//! - [`Maybe`]: the synchronous container, either `Just(value)` or
//!   `Nothing(reason)`
//! - [`AsyncMaybe`]: the asynchronous container wrapping a deferred
//!   computation that resolves to a [`Maybe`] (requires the `async` feature)
//! - [`Absence`]: the two distinguishable "nothing" markers
//! - [`Nullable`]: values that can themselves encode an absence marker
//! - [`Record`] / [`Sequence`]: structural views used by the `extend`,
//!   `assign`, and `filter_map` combinators
//! - [`Outcome`]: the closed set of shapes an asynchronous callback may
//!   return, together with its single-level normalization rule
//!
//! # Examples
//!
//! ## Absence propagation
//!
//! ```rust
//! use maybers::option::{Absence, Maybe};
//!
//! let missing: Maybe<i32> = Maybe::nothing(Absence::Missing);
//! let result = missing.map(|x| x * 2).filter(|x| *x > 0);
//! // The original marker survives the whole chain.
//! assert_eq!(result.value(), Err(Absence::Missing));
//! ```
//!
//! ## Mixing synchronous and asynchronous steps
//!
//! ```rust,ignore
//! use maybers::option::{AsyncMaybe, Outcome};
//!
//! #[tokio::main]
//! async fn main() {
//!     let result = AsyncMaybe::just(2)
//!         .flat_map(|x| Outcome::future_value(async move { x * 10 }))
//!         .map(|x| x + 1)
//!         .get_or_else(0)
//!         .await;
//!     assert_eq!(result, 21);
//! }
//! ```

mod absence;
mod maybe;
mod shape;

#[cfg(feature = "async")]
mod async_maybe;
#[cfg(feature = "async")]
mod outcome;

pub use absence::{Absence, Nullable, is_absent, is_present};
pub use maybe::{FieldFn, Maybe, boxed_field};
pub use shape::{Record, Sequence};

#[cfg(feature = "async")]
pub use async_maybe::{AsyncFieldFn, AsyncMaybe};
#[cfg(feature = "async")]
pub use outcome::{Outcome, Resolved};
