#![cfg(feature = "async")]
//! Unit tests for the `AsyncMaybe<T>` container.
//!
//! Covers construction, lifting, deferred evaluation, the combinators'
//! marker rules, and the normalization of heterogeneous callback shapes.

use maybers::option::{Absence, AsyncMaybe, Maybe, Outcome, Resolved};
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

// =============================================================================
// Construction and Forcing
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_async_maybe_just_resolves_to_present_value() {
    assert_eq!(AsyncMaybe::just(42).run().await, Maybe::just(42));
}

#[rstest]
#[tokio::test]
async fn test_async_maybe_nothing_resolves_to_tagged_absence() {
    let result = AsyncMaybe::<i32>::nothing(Absence::Missing).run().await;
    assert_eq!(result.value(), Err(Absence::Missing));
}

#[rstest]
#[tokio::test]
async fn test_async_maybe_from_future_value_wraps_result_as_present() {
    let result = AsyncMaybe::from_future_value(async { 10 }).run().await;
    assert_eq!(result, Maybe::just(10));
}

#[rstest]
#[tokio::test]
async fn test_async_maybe_new_defers_the_producer() {
    let invoked = Arc::new(AtomicBool::new(false));
    let flag = invoked.clone();

    let pipeline = AsyncMaybe::new(move || async move {
        flag.store(true, Ordering::SeqCst);
        Maybe::just(42)
    });

    // Not yet executed at this point
    assert!(!invoked.load(Ordering::SeqCst));

    let result = pipeline.run().await;
    assert!(invoked.load(Ordering::SeqCst));
    assert_eq!(result, Maybe::just(42));
}

#[rstest]
#[tokio::test]
async fn test_async_maybe_container_can_be_awaited_directly() {
    let settled: Maybe<i32> = AsyncMaybe::just(3).map(|x| x + 1).await;
    assert_eq!(settled, Maybe::just(4));
}

// =============================================================================
// Lifting
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_async_maybe_lift_round_trips_present_value() {
    let lifted = AsyncMaybe::from_sync(Maybe::just(7));
    assert_eq!(lifted.value().await, Ok(7));
}

#[rstest]
#[tokio::test]
async fn test_async_maybe_lift_round_trips_both_markers() {
    let null = AsyncMaybe::<i32>::from_sync(Maybe::nothing(Absence::Null));
    assert_eq!(null.value().await, Err(Absence::Null));

    let missing = AsyncMaybe::<i32>::from_sync(Maybe::nothing(Absence::Missing));
    assert_eq!(missing.value().await, Err(Absence::Missing));
}

// =============================================================================
// Mapping and Chaining
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_async_maybe_map_transforms_present_value() {
    let result = AsyncMaybe::just(21).map(|x| x * 2).run().await;
    assert_eq!(result, Maybe::just(42));
}

#[rstest]
#[tokio::test]
async fn test_async_maybe_map_preserves_marker() {
    let result = AsyncMaybe::<i32>::nothing(Absence::Missing)
        .map(|x| x * 2)
        .run()
        .await;
    assert_eq!(result.value(), Err(Absence::Missing));
}

#[rstest]
#[tokio::test]
async fn test_async_maybe_flat_map_accepts_plain_value() {
    let result = AsyncMaybe::just(1)
        .flat_map(|x| Outcome::value(x + 1))
        .run()
        .await;
    assert_eq!(result, Maybe::just(2));
}

#[rstest]
#[tokio::test]
async fn test_async_maybe_flat_map_accepts_settled_container() {
    let result = AsyncMaybe::just(1)
        .flat_map(|x| Outcome::maybe(Maybe::just(x + 1)))
        .run()
        .await;
    assert_eq!(result, Maybe::just(2));
}

#[rstest]
#[tokio::test]
async fn test_async_maybe_flat_map_accepts_deferred_container() {
    let result = AsyncMaybe::just(1)
        .flat_map(|x| Outcome::deferred(AsyncMaybe::just(x + 1)))
        .run()
        .await;
    assert_eq!(result, Maybe::just(2));
}

#[rstest]
#[tokio::test]
async fn test_async_maybe_flat_map_accepts_deferred_computation() {
    let result = AsyncMaybe::just(1)
        .flat_map(|x| Outcome::future_value(async move { x + 1 }))
        .run()
        .await;
    assert_eq!(result, Maybe::just(2));
}

#[rstest]
#[tokio::test]
async fn test_async_maybe_flat_map_keeps_callback_marker() {
    let result = AsyncMaybe::just(1)
        .flat_map(|_| Outcome::<i32>::nothing(Absence::Missing))
        .run()
        .await;
    assert_eq!(result.value(), Err(Absence::Missing));
}

#[rstest]
#[tokio::test]
async fn test_async_maybe_flat_map_skips_callback_when_absent() {
    let result = AsyncMaybe::<i32>::nothing(Absence::Null)
        .flat_map(|_| -> Outcome<i32> { panic!("callback must not run") })
        .run()
        .await;
    assert_eq!(result.value(), Err(Absence::Null));
}

#[rstest]
#[tokio::test]
async fn test_async_maybe_and_then_is_flat_map() {
    let result = AsyncMaybe::just(10)
        .and_then(|x| Outcome::just(x + 5))
        .run()
        .await;
    assert_eq!(result, Maybe::just(15));
}

// =============================================================================
// Filtering
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_async_maybe_filter_keeps_passing_value() {
    let result = AsyncMaybe::just(4).filter(|x| x % 2 == 0).run().await;
    assert_eq!(result, Maybe::just(4));
}

#[rstest]
#[tokio::test]
async fn test_async_maybe_filter_failure_collapses_to_null() {
    let result = AsyncMaybe::just(3).filter(|x| x % 2 == 0).run().await;
    assert_eq!(result.value(), Err(Absence::Null));
}

#[rstest]
#[tokio::test]
async fn test_async_maybe_filter_preserves_marker_when_absent() {
    let result = AsyncMaybe::<i32>::nothing(Absence::Missing)
        .filter(|_| panic!("predicate must not run"))
        .run()
        .await;
    assert_eq!(result.value(), Err(Absence::Missing));
}

// =============================================================================
// Effects and Laziness
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_async_maybe_effect_is_deferred_until_forced() {
    let counter = Arc::new(AtomicUsize::new(0));
    let seen = counter.clone();

    let pipeline = AsyncMaybe::just(5).effect(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    // Composition alone must not run the effect.
    assert_eq!(counter.load(Ordering::SeqCst), 0);

    let result = pipeline.run().await;
    assert_eq!(counter.load(Ordering::SeqCst), 1);
    assert_eq!(result, Maybe::just(5));
}

#[rstest]
#[tokio::test]
async fn test_async_maybe_effect_skips_absent_value() {
    let result = AsyncMaybe::<i32>::nothing(Absence::Null)
        .effect(|_| panic!("effect must not run"))
        .run()
        .await;
    assert_eq!(result.value(), Err(Absence::Null));
}

// =============================================================================
// Recovery and Extraction
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_async_maybe_with_default_recovers_absent_value() {
    let result = AsyncMaybe::<i32>::nothing(Absence::Null)
        .with_default(10)
        .run()
        .await;
    assert_eq!(result, Maybe::just(10));
}

#[rstest]
#[tokio::test]
async fn test_async_maybe_get_or_else_forces_evaluation() {
    assert_eq!(AsyncMaybe::just(1).get_or_else(0).await, 1);
    assert_eq!(
        AsyncMaybe::<i32>::nothing(Absence::Missing).get_or_else(0).await,
        0
    );
}

#[rstest]
#[tokio::test]
async fn test_async_maybe_marker_survives_a_mixed_chain() {
    let result = AsyncMaybe::<i32>::nothing(Absence::Missing)
        .map(|x| x + 1)
        .flat_map(|x| Outcome::future_value(async move { x * 2 }))
        .filter(|x| *x > 0)
        .run()
        .await;
    assert_eq!(result.value(), Err(Absence::Missing));
}

// =============================================================================
// Normalization Shapes in One Chain
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_async_maybe_future_settling_to_deferred_container_unwraps_once() {
    let result = AsyncMaybe::just(1)
        .flat_map(|x| {
            Outcome::future(async move { Resolved::Async(AsyncMaybe::just(x + 1)) })
        })
        .run()
        .await;
    assert_eq!(result, Maybe::just(2));
}
