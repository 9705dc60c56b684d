//! Point-free combinator layer.
//!
//! Every container operation is mirrored here as a curried free function:
//! `op(args…)` returns a function from container to container, so pipelines
//! compose without naming the container first. The functions dispatch
//! through the [`Optional`] capability interface, which both containers
//! implement; there is no runtime type branching and no independent logic
//! in this layer.
//!
//! # Examples
//!
//! ```rust
//! use maybers::option::Maybe;
//! use maybers::pipe;
//!
//! let double = pipe::map(|x: i32| x * 2);
//! let positive = pipe::filter(|x: &i32| *x > 0);
//!
//! assert_eq!(positive(double(Maybe::just(21))), Maybe::just(42));
//! ```
//!
//! The same combinator applies to the asynchronous container:
//!
//! ```rust,ignore
//! use maybers::option::AsyncMaybe;
//! use maybers::pipe;
//!
//! #[tokio::main]
//! async fn main() {
//!     let double = pipe::map(|x: i32| x * 2);
//!     let result = double(AsyncMaybe::just(21)).run().await;
//!     assert_eq!(result.value(), Ok(42));
//! }
//! ```

use crate::option::{Absence, Maybe, Record, Sequence};

#[cfg(feature = "async")]
use crate::option::{AsyncMaybe, Outcome};
#[cfg(feature = "async")]
use futures::future::BoxFuture;

// =============================================================================
// Capability Interface
// =============================================================================

/// The capability interface shared by both optional-value containers.
///
/// The associated types carry the shapes that differ per container:
///
/// - `Of<U>`: the container produced by a value transformation
/// - `Bound<U>`: the shape a chaining callback must return
///   ([`Maybe`] for the synchronous container, [`Outcome`] for the
///   asynchronous one)
/// - `Forced<V>`: the result of a forcing operation (the plain value
///   synchronously, a boxed future asynchronously)
///
/// The combinator functions in this module operate purely through this
/// interface; the semantics of each operation are defined by the
/// containers themselves.
pub trait Optional<T: Send + 'static>: Sized {
    /// Container of `U` produced by transforming this container.
    type Of<U: Send + 'static>: Optional<U>;

    /// Shape a chaining callback must return for this container.
    type Bound<U: Send + 'static>;

    /// Result shape of a forcing operation.
    type Forced<V: Send + 'static>;

    /// Applies a function to the contained value.
    fn map<U, F>(self, function: F) -> Self::Of<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static;

    /// Chains a computation returning this container's callback shape.
    fn flat_map<U, F>(self, function: F) -> Self::Of<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Self::Bound<U> + Send + 'static;

    /// Keeps the value only if the predicate holds.
    fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static;

    /// Grows the contained record with one computed field.
    fn extend<F>(self, key: &str, function: F) -> Self
    where
        T: Record,
        T::Field: Send + 'static,
        F: FnOnce(&T) -> Self::Bound<T::Field> + Send + 'static;

    /// Grows the contained record with independently computed fields.
    #[allow(clippy::type_complexity)]
    fn assign(
        self,
        entries: Vec<(String, Box<dyn FnOnce(&T) -> Self::Bound<T::Field> + Send>)>,
    ) -> Self
    where
        T: Record,
        T::Field: Send + 'static;

    /// Maps sequence elements, keeping only present results.
    fn filter_map<Out, F>(self, function: F) -> Self::Of<Out>
    where
        T: Sequence,
        T::Item: Send + 'static,
        Out: Sequence + Send + 'static,
        Out::Item: Send + 'static,
        F: FnMut(T::Item) -> Self::Bound<Out::Item> + Send + 'static;

    /// Replaces an absent value with a default, keeping the chain alive.
    fn with_default(self, default: T) -> Self;

    /// Runs a side effect on the value, if present.
    fn effect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static;

    /// Forces evaluation, returning the value or the default.
    fn get_or_else(self, default: T) -> Self::Forced<T>;

    /// Forces evaluation, returning the raw tagged payload.
    fn value(self) -> Self::Forced<Result<T, Absence>>;
}

impl<T: Send + 'static> Optional<T> for Maybe<T> {
    type Of<U: Send + 'static> = Maybe<U>;
    type Bound<U: Send + 'static> = Maybe<U>;
    type Forced<V: Send + 'static> = V;

    fn map<U, F>(self, function: F) -> Maybe<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        self.map(function)
    }

    fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Maybe<U> + Send + 'static,
    {
        self.flat_map(function)
    }

    fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        self.filter(predicate)
    }

    fn extend<F>(self, key: &str, function: F) -> Self
    where
        T: Record,
        T::Field: Send + 'static,
        F: FnOnce(&T) -> Maybe<T::Field> + Send + 'static,
    {
        self.extend(key, function)
    }

    fn assign(
        self,
        entries: Vec<(String, Box<dyn FnOnce(&T) -> Maybe<T::Field> + Send>)>,
    ) -> Self
    where
        T: Record,
        T::Field: Send + 'static,
    {
        self.assign(entries)
    }

    fn filter_map<Out, F>(self, function: F) -> Maybe<Out>
    where
        T: Sequence,
        T::Item: Send + 'static,
        Out: Sequence + Send + 'static,
        Out::Item: Send + 'static,
        F: FnMut(T::Item) -> Maybe<Out::Item> + Send + 'static,
    {
        self.filter_map(function)
    }

    fn with_default(self, default: T) -> Self {
        self.with_default(default)
    }

    fn effect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        self.effect(function)
    }

    fn get_or_else(self, default: T) -> T {
        self.get_or_else(default)
    }

    fn value(self) -> Result<T, Absence> {
        self.value()
    }
}

#[cfg(feature = "async")]
impl<T: Send + 'static> Optional<T> for AsyncMaybe<T> {
    type Of<U: Send + 'static> = AsyncMaybe<U>;
    type Bound<U: Send + 'static> = Outcome<U>;
    type Forced<V: Send + 'static> = BoxFuture<'static, V>;

    fn map<U, F>(self, function: F) -> AsyncMaybe<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        self.map(function)
    }

    fn flat_map<U, F>(self, function: F) -> AsyncMaybe<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Outcome<U> + Send + 'static,
    {
        self.flat_map(function)
    }

    fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        self.filter(predicate)
    }

    fn extend<F>(self, key: &str, function: F) -> Self
    where
        T: Record,
        T::Field: Send + 'static,
        F: FnOnce(&T) -> Outcome<T::Field> + Send + 'static,
    {
        self.extend(key, function)
    }

    fn assign(
        self,
        entries: Vec<(String, Box<dyn FnOnce(&T) -> Outcome<T::Field> + Send>)>,
    ) -> Self
    where
        T: Record,
        T::Field: Send + 'static,
    {
        self.assign(entries)
    }

    fn filter_map<Out, F>(self, function: F) -> AsyncMaybe<Out>
    where
        T: Sequence,
        T::Item: Send + 'static,
        Out: Sequence + Send + 'static,
        Out::Item: Send + 'static,
        F: FnMut(T::Item) -> Outcome<Out::Item> + Send + 'static,
    {
        self.filter_map(function)
    }

    fn with_default(self, default: T) -> Self {
        self.with_default(default)
    }

    fn effect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        self.effect(function)
    }

    fn get_or_else(self, default: T) -> BoxFuture<'static, T> {
        Box::pin(self.get_or_else(default))
    }

    fn value(self) -> BoxFuture<'static, Result<T, Absence>> {
        Box::pin(self.value())
    }
}

// =============================================================================
// Curried Combinators
// =============================================================================

/// Curried [`Optional::map`]: `map(f)` returns a function applying `f`
/// inside whichever container it receives.
///
/// # Examples
///
/// ```rust
/// use maybers::option::Maybe;
/// use maybers::pipe;
///
/// let double = pipe::map(|x: i32| x * 2);
/// assert_eq!(double(Maybe::just(21)), Maybe::just(42));
/// ```
pub fn map<C, T, U, F>(function: F) -> impl FnOnce(C) -> C::Of<U>
where
    C: Optional<T>,
    T: Send + 'static,
    U: Send + 'static,
    F: FnOnce(T) -> U + Send + 'static,
{
    move |container| container.map(function)
}

/// Curried [`Optional::flat_map`].
pub fn flat_map<C, T, U, F>(function: F) -> impl FnOnce(C) -> C::Of<U>
where
    C: Optional<T>,
    T: Send + 'static,
    U: Send + 'static,
    F: FnOnce(T) -> C::Bound<U> + Send + 'static,
{
    move |container| container.flat_map(function)
}

/// Curried [`Optional::filter`].
///
/// # Examples
///
/// ```rust
/// use maybers::option::{Absence, Maybe};
/// use maybers::pipe;
///
/// let even = pipe::filter(|x: &i32| x % 2 == 0);
/// assert_eq!(even(Maybe::just(3)).value(), Err(Absence::Null));
/// ```
pub fn filter<C, T, P>(predicate: P) -> impl FnOnce(C) -> C
where
    C: Optional<T>,
    T: Send + 'static,
    P: FnOnce(&T) -> bool + Send + 'static,
{
    move |container| container.filter(predicate)
}

/// Curried [`Optional::extend`].
pub fn extend<C, T, F>(key: &str, function: F) -> impl FnOnce(C) -> C
where
    C: Optional<T>,
    T: Record + Send + 'static,
    T::Field: Send + 'static,
    F: FnOnce(&T) -> C::Bound<T::Field> + Send + 'static,
{
    move |container| container.extend(key, function)
}

/// Curried [`Optional::assign`].
#[allow(clippy::type_complexity)]
pub fn assign<C, T>(
    entries: Vec<(String, Box<dyn FnOnce(&T) -> C::Bound<T::Field> + Send>)>,
) -> impl FnOnce(C) -> C
where
    C: Optional<T>,
    T: Record + Send + 'static,
    T::Field: Send + 'static,
{
    move |container| container.assign(entries)
}

/// Curried [`Optional::filter_map`].
pub fn filter_map<C, T, Out, F>(function: F) -> impl FnOnce(C) -> C::Of<Out>
where
    C: Optional<T>,
    T: Sequence + Send + 'static,
    T::Item: Send + 'static,
    Out: Sequence + Send + 'static,
    Out::Item: Send + 'static,
    F: FnMut(T::Item) -> C::Bound<Out::Item> + Send + 'static,
{
    move |container| container.filter_map(function)
}

/// Curried [`Optional::with_default`].
pub fn with_default<C, T>(default: T) -> impl FnOnce(C) -> C
where
    C: Optional<T>,
    T: Send + 'static,
{
    move |container| container.with_default(default)
}

/// Curried [`Optional::effect`].
pub fn effect<C, T, F>(function: F) -> impl FnOnce(C) -> C
where
    C: Optional<T>,
    T: Send + 'static,
    F: FnOnce(&T) + Send + 'static,
{
    move |container| container.effect(function)
}

/// Curried [`Optional::get_or_else`].
///
/// # Examples
///
/// ```rust
/// use maybers::option::{Absence, Maybe};
/// use maybers::pipe;
///
/// let or_zero = pipe::get_or_else(0);
/// assert_eq!(or_zero(Maybe::nothing(Absence::Missing)), 0);
/// ```
pub fn get_or_else<C, T>(default: T) -> impl FnOnce(C) -> C::Forced<T>
where
    C: Optional<T>,
    T: Send + 'static,
{
    move |container| container.get_or_else(default)
}

/// Curried [`Optional::value`].
pub fn value<C, T>() -> impl FnOnce(C) -> C::Forced<Result<T, Absence>>
where
    C: Optional<T>,
    T: Send + 'static,
{
    |container| container.value()
}
