//! The closed set of shapes an asynchronous callback may return.
//!
//! Asynchronous pipelines accept callbacks written in four styles: a plain
//! value, an already-settled [`Maybe`], a deferred [`AsyncMaybe`], or a
//! future that settles to one of those. [`Outcome`] enumerates the accepted
//! shapes, and [`Outcome::normalize`] applies the single-level unwrapping
//! rule that turns any of them into a settled [`Maybe`].
//!
//! Unwrapping is deliberately single-level: a future settles to a
//! [`Resolved`], which cannot itself contain another future, so deeper
//! nesting is unrepresentable rather than merely rejected.

use std::future::Future;

use futures::future::BoxFuture;

use super::absence::{Absence, Nullable};
use super::async_maybe::AsyncMaybe;
use super::maybe::Maybe;

/// A shape an asynchronous callback may return.
///
/// # Examples
///
/// ```rust,ignore
/// use maybers::option::{AsyncMaybe, Maybe, Outcome};
///
/// #[tokio::main]
/// async fn main() {
///     // All four shapes normalize to the same settled result.
///     let a = AsyncMaybe::just(1).flat_map(|x| Outcome::value(x + 1));
///     let b = AsyncMaybe::just(1).flat_map(|x| Outcome::maybe(Maybe::just(x + 1)));
///     let c = AsyncMaybe::just(1).flat_map(|x| Outcome::deferred(AsyncMaybe::just(x + 1)));
///     let d = AsyncMaybe::just(1).flat_map(|x| Outcome::future_value(async move { x + 1 }));
///     for pipeline in [a, b, c, d] {
///         assert_eq!(pipeline.run().await, Maybe::just(2));
///     }
/// }
/// ```
pub enum Outcome<T> {
    /// A plain value, taken as present.
    Value(T),
    /// An already-settled container.
    Maybe(Maybe<T>),
    /// A deferred container.
    Async(AsyncMaybe<T>),
    /// A deferred computation that settles to one of the accepted shapes.
    Future(BoxFuture<'static, Resolved<T>>),
}

/// A shape a deferred producer may settle to.
///
/// This is [`Outcome`] minus the deferred wrapper, which is what limits
/// normalization to a single level of unwrapping.
pub enum Resolved<T> {
    /// A plain value, taken as present.
    Value(T),
    /// An already-settled container.
    Maybe(Maybe<T>),
    /// A deferred container.
    Async(AsyncMaybe<T>),
}

impl<T: Send + 'static> Outcome<T> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Wraps a plain value, taken as present.
    #[inline]
    pub const fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// Classifies a raw value that may itself encode an absence marker.
    ///
    /// Unlike [`Outcome::value`], a value equal to one of the markers
    /// normalizes to `Nothing` with that marker.
    pub fn of(value: T) -> Self
    where
        T: Nullable,
    {
        match value.absence() {
            Some(reason) => Self::Maybe(Maybe::Nothing(reason)),
            None => Self::Value(value),
        }
    }

    /// Wraps a value that is known to be present.
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Maybe(Maybe::Just(value))
    }

    /// An absent result tagged with the given marker.
    #[inline]
    pub const fn nothing(reason: Absence) -> Self {
        Self::Maybe(Maybe::Nothing(reason))
    }

    /// Wraps an already-settled container.
    #[inline]
    pub const fn maybe(maybe: Maybe<T>) -> Self {
        Self::Maybe(maybe)
    }

    /// Wraps a deferred container.
    #[inline]
    pub const fn deferred(deferred: AsyncMaybe<T>) -> Self {
        Self::Async(deferred)
    }

    /// Wraps a future that settles to any accepted shape.
    pub fn future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Resolved<T>> + Send + 'static,
    {
        Self::Future(Box::pin(future))
    }

    /// Wraps a future that settles to a plain present value.
    pub fn future_value<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::Future(Box::pin(async move { Resolved::Value(future.await) }))
    }

    /// Wraps a future that settles to a synchronous container.
    pub fn future_maybe<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Maybe<T>> + Send + 'static,
    {
        Self::Future(Box::pin(async move { Resolved::Maybe(future.await) }))
    }

    // =========================================================================
    // Normalization
    // =========================================================================

    /// Applies the single-level unwrapping rule.
    ///
    /// Any deferred wrapper is awaited first; then a deferred container is
    /// resolved to its tagged result, a settled container is taken as-is,
    /// and anything else becomes the `Just` payload. Values that encode a
    /// marker are only classified when the callback opted in via
    /// [`Outcome::of`].
    pub async fn normalize(self) -> Maybe<T> {
        let resolved = match self {
            Self::Value(value) => Resolved::Value(value),
            Self::Maybe(maybe) => Resolved::Maybe(maybe),
            Self::Async(deferred) => Resolved::Async(deferred),
            Self::Future(future) => future.await,
        };
        match resolved {
            Resolved::Value(value) => Maybe::Just(value),
            Resolved::Maybe(maybe) => maybe,
            Resolved::Async(deferred) => deferred.run().await,
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T: Send + 'static> Maybe<T> {
    /// Wraps this settled container as a callback outcome.
    ///
    /// Convenient at the end of a synchronous helper used inside an
    /// asynchronous chain.
    #[inline]
    pub fn into_outcome(self) -> Outcome<T> {
        Outcome::Maybe(self)
    }
}

impl<T: Send + 'static> AsyncMaybe<T> {
    /// Wraps this deferred container as a callback outcome.
    #[inline]
    pub fn into_outcome(self) -> Outcome<T> {
        Outcome::Async(self)
    }
}

impl<T> From<Maybe<T>> for Outcome<T> {
    /// Equivalent to [`Maybe::into_outcome`].
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        Self::Maybe(maybe)
    }
}

impl<T> From<AsyncMaybe<T>> for Outcome<T> {
    /// Equivalent to [`AsyncMaybe::into_outcome`].
    #[inline]
    fn from(deferred: AsyncMaybe<T>) -> Self {
        Self::Async(deferred)
    }
}
