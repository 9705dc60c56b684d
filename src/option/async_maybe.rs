//! `AsyncMaybe` - the asynchronous optional-value container.
//!
//! `AsyncMaybe<T>` wraps a single deferred computation that resolves to a
//! [`Maybe<T>`]. Combinators stay lazy: nothing runs until the container is
//! forced via `run`, `value`, `get_or_else`, or a direct `.await`, which
//! should happen at the program's "edge".
//!
//! Every synchronous rule has an asynchronous counterpart here, and the
//! asynchronous combinators additionally accept heterogeneous callback
//! shapes through [`Outcome`], so synchronous and asynchronous steps mix in
//! one pipeline without manual unwrapping.
//!
//! # Examples
//!
//! ```rust,ignore
//! use maybers::option::{AsyncMaybe, Maybe, Outcome};
//!
//! #[tokio::main]
//! async fn main() {
//!     let result = AsyncMaybe::just(10)
//!         .map(|x| x * 2)
//!         .flat_map(|x| Outcome::future_value(async move { x + 1 }))
//!         .run()
//!         .await;
//!     assert_eq!(result, Maybe::just(21));
//! }
//! ```
//!
//! # Deferred Evaluation
//!
//! ```rust,ignore
//! use maybers::option::{AsyncMaybe, Maybe};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! #[tokio::main]
//! async fn main() {
//!     let executed = Arc::new(AtomicBool::new(false));
//!     let flag = executed.clone();
//!
//!     let pipeline = AsyncMaybe::new(move || async move {
//!         flag.store(true, Ordering::SeqCst);
//!         Maybe::just(42)
//!     });
//!
//!     // Not executed yet
//!     assert!(!executed.load(Ordering::SeqCst));
//!
//!     let result = pipeline.run().await;
//!     assert!(executed.load(Ordering::SeqCst));
//!     assert_eq!(result, Maybe::just(42));
//! }
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{BoxFuture, join_all};

use super::absence::{Absence, Nullable};
use super::maybe::Maybe;
use super::outcome::Outcome;
use super::shape::{Record, Sequence};

/// A boxed property computation used by [`AsyncMaybe::assign`].
///
/// The asynchronous counterpart of [`FieldFn`](crate::option::FieldFn):
/// entries return an [`Outcome`] in any of the accepted shapes. Use
/// [`boxed_field`](crate::option::boxed_field) or the
/// [`fields!`](crate::fields) macro to build them.
pub type AsyncFieldFn<T: Record> = Box<dyn FnOnce(&T) -> Outcome<T::Field> + Send>;

/// An optional value produced by a deferred computation.
///
/// `AsyncMaybe<T>` holds one boxed computation, created at construction,
/// that resolves to `Just(value)` or `Nothing(reason)`. Rust futures are
/// consumed by value, so a container is forced at most once; until then
/// every combinator composes lazily.
///
/// # Type Parameters
///
/// * `T` - The type of the eventual value
///
/// # Examples
///
/// ```rust,ignore
/// use maybers::option::{AsyncMaybe, Maybe};
///
/// #[tokio::main]
/// async fn main() {
///     let result = AsyncMaybe::just(2).map(|x| x * 10).run().await;
///     assert_eq!(result, Maybe::just(20));
/// }
/// ```
pub struct AsyncMaybe<T> {
    /// The wrapped computation resolving to the tagged result.
    computation: BoxFuture<'static, Maybe<T>>,
}

impl<T: Send + 'static> AsyncMaybe<T> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Creates a container from a producer of a deferred computation.
    ///
    /// The producer is not invoked until the container is forced.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use maybers::option::{AsyncMaybe, Maybe};
    ///
    /// let pipeline = AsyncMaybe::new(|| async {
    ///     // e.g. a remote lookup
    ///     Maybe::just(42)
    /// });
    /// ```
    pub fn new<F, Fut>(producer: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Maybe<T>> + Send + 'static,
    {
        Self {
            computation: Box::pin(async move { producer().await }),
        }
    }

    /// Creates a container from an existing deferred computation.
    ///
    /// The future should not have been polled yet.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Maybe<T>> + Send + 'static,
    {
        Self {
            computation: Box::pin(future),
        }
    }

    /// Creates a container from a deferred computation that always
    /// produces a present value.
    pub fn from_future_value<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::from_future(async move { Maybe::Just(future.await) })
    }

    /// Lifts a settled container into an immediately-resolving deferred
    /// one.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use maybers::option::{AsyncMaybe, Maybe};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let lifted = AsyncMaybe::from_sync(Maybe::just(5));
    ///     assert_eq!(lifted.value().await, Ok(5));
    /// }
    /// ```
    pub fn from_sync(maybe: Maybe<T>) -> Self {
        Self::from_future(async move { maybe })
    }

    /// Wraps a value that is known to be present.
    pub fn just(value: T) -> Self {
        Self::from_sync(Maybe::Just(value))
    }

    /// Creates an absent container tagged with the given marker.
    pub fn nothing(reason: Absence) -> Self {
        Self::from_sync(Maybe::Nothing(reason))
    }

    /// Classifies a raw value into a container, as
    /// [`Maybe::from_value`] does.
    pub fn from_value(value: T) -> Self
    where
        T: Nullable,
    {
        Self::from_sync(Maybe::from_value(value))
    }

    // =========================================================================
    // Forcing Operations
    // =========================================================================

    /// Executes the deferred computation and returns the settled container.
    ///
    /// This is a forcing operation; everything before it composes lazily.
    pub async fn run(self) -> Maybe<T> {
        self.computation.await
    }

    /// Escape hatch: forces evaluation and returns the raw tagged payload.
    pub async fn value(self) -> Result<T, Absence> {
        self.run().await.value()
    }

    /// Terminal extraction: forces evaluation and returns the value or the
    /// default.
    pub async fn get_or_else(self, default: T) -> T {
        self.run().await.get_or_else(default)
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies a synchronous function to the eventual value.
    ///
    /// An absent result keeps its original marker; a present value is
    /// transformed and wrapped as `Just`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let result = AsyncMaybe::just(21).map(|x| x * 2).run().await;
    /// assert_eq!(result, Maybe::just(42));
    /// ```
    pub fn map<U, F>(self, function: F) -> AsyncMaybe<U>
    where
        F: FnOnce(T) -> U + Send + 'static,
        U: Send + 'static,
    {
        AsyncMaybe::from_future(async move {
            match self.run().await {
                Maybe::Just(value) => Maybe::Just(function(value)),
                Maybe::Nothing(reason) => Maybe::Nothing(reason),
            }
        })
    }

    /// Chains a computation that may return any accepted shape.
    ///
    /// The callback runs only after the predecessor resolves to a present
    /// value; its result is normalized once (see [`Outcome::normalize`]).
    /// An absent predecessor keeps its marker and the callback is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let result = AsyncMaybe::just(4)
    ///     .flat_map(|x| Outcome::future_value(async move { x / 2 }))
    ///     .run()
    ///     .await;
    /// assert_eq!(result, Maybe::just(2));
    /// ```
    pub fn flat_map<U, F>(self, function: F) -> AsyncMaybe<U>
    where
        F: FnOnce(T) -> Outcome<U> + Send + 'static,
        U: Send + 'static,
    {
        AsyncMaybe::from_future(async move {
            match self.run().await {
                Maybe::Just(value) => function(value).normalize().await,
                Maybe::Nothing(reason) => Maybe::Nothing(reason),
            }
        })
    }

    /// Alias for `flat_map`.
    ///
    /// This is the conventional Rust name for monadic bind.
    pub fn and_then<U, F>(self, function: F) -> AsyncMaybe<U>
    where
        F: FnOnce(T) -> Outcome<U> + Send + 'static,
        U: Send + 'static,
    {
        self.flat_map(function)
    }

    /// Keeps the eventual value only if the predicate holds.
    ///
    /// Same contract as [`Maybe::filter`]: an absent result keeps its
    /// original marker, a rejected present value collapses to
    /// [`Absence::REJECTED`].
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        Self::from_future(async move {
            match self.run().await {
                Maybe::Just(value) => {
                    if predicate(&value) {
                        Maybe::Just(value)
                    } else {
                        Maybe::Nothing(Absence::REJECTED)
                    }
                }
                Maybe::Nothing(reason) => Maybe::Nothing(reason),
            }
        })
    }

    /// Runs a side effect on the eventual value, if present, and passes
    /// the settled container through unchanged.
    ///
    /// The effect is deferred with the rest of the chain: it does not run
    /// until the container is forced.
    #[must_use]
    pub fn effect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        Self::from_future(async move {
            let settled = self.run().await;
            if let Maybe::Just(value) = &settled {
                function(value);
            }
            settled
        })
    }

    /// Replaces an eventual absence with a default, keeping the chain
    /// alive.
    #[must_use]
    pub fn with_default(self, default: T) -> Self {
        Self::from_future(async move { self.run().await.with_default(default) })
    }
}

// =============================================================================
// Record Operations
// =============================================================================

impl<T> AsyncMaybe<T>
where
    T: Record + Send + 'static,
    T::Field: Send + 'static,
{
    /// Grows the eventual record with one computed field.
    ///
    /// Behaves as `filter(is-record)` followed by `flat_map`: the record
    /// check and the callback's normalized result gate the merge, and both
    /// failure paths collapse to [`Absence::REJECTED`]. An absent input
    /// keeps its original marker and the callback is never invoked.
    pub fn extend<F>(self, key: &str, function: F) -> Self
    where
        F: FnOnce(&T) -> Outcome<T::Field> + Send + 'static,
    {
        let key = key.to_owned();
        Self::from_future(async move {
            let record = match self.run().await {
                Maybe::Nothing(reason) => return Maybe::Nothing(reason),
                Maybe::Just(record) if !record.is_record() => {
                    return Maybe::Nothing(Absence::REJECTED);
                }
                Maybe::Just(record) => record,
            };
            match function(&record).normalize().await {
                Maybe::Just(field) => Maybe::Just(record.with_field(&key, field)),
                Maybe::Nothing(_) => Maybe::Nothing(Absence::REJECTED),
            }
        })
    }

    /// Grows the eventual record with several concurrently computed
    /// fields in one step.
    ///
    /// Every entry is issued before any result is awaited, so independent
    /// remote calls overlap; completion order is unconstrained and the
    /// merge waits for all of them. Entries see the original record and
    /// may not depend on one another. An absent base keeps its marker; a
    /// non-record base or any absent entry collapses the whole result to
    /// [`Absence::REJECTED`].
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use maybers::fields;
    /// use maybers::option::{AsyncMaybe, Outcome};
    /// use serde_json::json;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let user = AsyncMaybe::just(json!({"id": 1}))
    ///         .assign(fields![
    ///             "name" => |_: &serde_json::Value| Outcome::future_value(async {
    ///                 json!("Alice") // e.g. a profile-service call
    ///             }),
    ///             "score" => |_: &serde_json::Value| Outcome::future_value(async {
    ///                 json!(100) // e.g. a score-service call, issued concurrently
    ///             }),
    ///         ])
    ///         .run()
    ///         .await;
    ///     assert_eq!(user.value().unwrap()["name"], json!("Alice"));
    /// }
    /// ```
    pub fn assign(self, entries: Vec<(String, AsyncFieldFn<T>)>) -> Self {
        Self::from_future(async move {
            let record = match self.run().await {
                Maybe::Nothing(reason) => return Maybe::Nothing(reason),
                Maybe::Just(record) if !record.is_record() => {
                    return Maybe::Nothing(Absence::REJECTED);
                }
                Maybe::Just(record) => record,
            };

            // Issue every entry before awaiting any of them.
            let pending: Vec<_> = entries
                .into_iter()
                .map(|(key, function)| {
                    let outcome = function(&record);
                    async move { (key, outcome.normalize().await) }
                })
                .collect();

            let mut merged = record;
            for (key, field) in join_all(pending).await {
                match field {
                    Maybe::Just(field) => merged = merged.with_field(&key, field),
                    Maybe::Nothing(_) => return Maybe::Nothing(Absence::REJECTED),
                }
            }
            Maybe::Just(merged)
        })
    }
}

// =============================================================================
// Sequence Operations
// =============================================================================

impl<T> AsyncMaybe<T>
where
    T: Sequence + Send + 'static,
    T::Item: Send + 'static,
{
    /// Maps every element of the eventual sequence concurrently, keeping
    /// only present results in their original order.
    ///
    /// An absent input keeps its original marker exactly. A present value
    /// that is not sequence-shaped collapses to
    /// [`Absence::NOT_A_SEQUENCE`], deliberately a different outcome than
    /// an absent input. Per-element computations are all issued before any
    /// is awaited; completion order is unconstrained, but the output
    /// preserves element order, not completion order.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let result: Maybe<Vec<i32>> = AsyncMaybe::just(vec![1, 2, 3, 4, 5])
    ///     .filter_map(|x| {
    ///         if x % 2 == 0 {
    ///             Outcome::just(x * 10)
    ///         } else {
    ///             Outcome::nothing(Absence::Null)
    ///         }
    ///     })
    ///     .run()
    ///     .await;
    /// assert_eq!(result, Maybe::just(vec![20, 40]));
    /// ```
    pub fn filter_map<Out, F>(self, mut function: F) -> AsyncMaybe<Out>
    where
        Out: Sequence + Send + 'static,
        Out::Item: Send + 'static,
        F: FnMut(T::Item) -> Outcome<Out::Item> + Send + 'static,
    {
        AsyncMaybe::from_future(async move {
            let elements = match self.run().await {
                Maybe::Nothing(reason) => return Maybe::Nothing(reason),
                Maybe::Just(value) => match value.into_elements() {
                    None => return Maybe::Nothing(Absence::NOT_A_SEQUENCE),
                    Some(elements) => elements,
                },
            };

            // Issue one computation per element before awaiting any of
            // them; join_all keeps element order.
            let pending: Vec<_> = elements
                .into_iter()
                .map(|element| function(element).normalize())
                .collect();

            let mut kept = Vec::new();
            for settled in join_all(pending).await {
                if let Maybe::Just(element) = settled {
                    kept.push(element);
                }
            }
            Maybe::Just(Out::from_elements(kept))
        })
    }
}

// =============================================================================
// Future Implementation
// =============================================================================

impl<T> Future for AsyncMaybe<T> {
    type Output = Maybe<T>;

    /// Polls the wrapped computation, enabling `.await` directly on the
    /// container.
    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.get_mut().computation.as_mut().poll(context)
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T> fmt::Debug for AsyncMaybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("AsyncMaybe(<deferred>)")
    }
}

static_assertions::assert_impl_all!(AsyncMaybe<i32>: Send, Unpin);
