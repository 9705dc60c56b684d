#![cfg(feature = "serde")]
//! Serde interop tests for `Maybe<T>`.
//!
//! A present container serializes as its payload and an absent one as the
//! format's null; JSON's single null deserializes to the explicit-null
//! marker, while a field that is absent altogether surfaces as the
//! never-provided marker through `#[serde(default)]`.

use maybers::option::{Absence, Maybe};
use rstest::rstest;
use serde::{Deserialize, Serialize};
use serde_json::json;

// =============================================================================
// Direct Round-Trips
// =============================================================================

#[rstest]
fn serialize_just_as_payload() {
    let encoded = serde_json::to_value(Maybe::just(42)).unwrap();
    assert_eq!(encoded, json!(42));
}

#[rstest]
fn serialize_either_marker_as_null() {
    // JSON has a single null; the marker distinction does not survive
    // serialization.
    let null = serde_json::to_value(Maybe::<i32>::nothing(Absence::Null)).unwrap();
    let missing = serde_json::to_value(Maybe::<i32>::nothing(Absence::Missing)).unwrap();
    assert_eq!(null, json!(null));
    assert_eq!(missing, json!(null));
}

#[rstest]
fn deserialize_null_as_explicit_null_marker() {
    let decoded: Maybe<i32> = serde_json::from_value(json!(null)).unwrap();
    assert_eq!(decoded.value(), Err(Absence::Null));
}

#[rstest]
fn deserialize_payload_as_just() {
    let decoded: Maybe<String> = serde_json::from_value(json!("hello")).unwrap();
    assert_eq!(decoded, Maybe::just(String::from("hello")));
}

#[rstest]
fn round_trip_preserves_present_values() {
    let original = Maybe::just(vec![1, 2, 3]);
    let encoded = serde_json::to_string(&original).unwrap();
    let decoded: Maybe<Vec<i32>> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, original);
}

// =============================================================================
// Struct Fields
// =============================================================================

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Profile {
    id: u32,
    #[serde(default)]
    nickname: Maybe<String>,
}

#[rstest]
fn struct_field_present_value() {
    let decoded: Profile =
        serde_json::from_value(json!({"id": 1, "nickname": "ace"})).unwrap();
    assert_eq!(decoded.nickname, Maybe::just(String::from("ace")));
}

#[rstest]
fn struct_field_null_keeps_null_marker() {
    let decoded: Profile = serde_json::from_value(json!({"id": 1, "nickname": null})).unwrap();
    assert_eq!(decoded.nickname.value(), Err(Absence::Null));
}

#[rstest]
fn struct_field_absent_keeps_missing_marker() {
    // The two markers reproduce the "field absent vs field null" split.
    let decoded: Profile = serde_json::from_value(json!({"id": 1})).unwrap();
    assert_eq!(decoded.nickname.value(), Err(Absence::Missing));
}

#[rstest]
fn struct_field_serializes_back_to_null() {
    let profile = Profile {
        id: 1,
        nickname: Maybe::nothing(Absence::Missing),
    };
    assert_eq!(
        serde_json::to_value(&profile).unwrap(),
        json!({"id": 1, "nickname": null})
    );
}

// =============================================================================
// Dynamic Value Classification
// =============================================================================

#[rstest]
fn from_value_classifies_json_null() {
    assert_eq!(
        Maybe::from_value(json!(null)).value(),
        Err(Absence::Null)
    );
    assert_eq!(Maybe::from_value(json!(0)), Maybe::just(json!(0)));
    assert_eq!(Maybe::from_value(json!("")), Maybe::just(json!("")));
    assert_eq!(Maybe::from_value(json!(false)), Maybe::just(json!(false)));
}

#[rstest]
fn classified_values_flow_through_a_pipeline() {
    let result = Maybe::from_value(json!({"id": 1, "name": "Alice"}))
        .filter(|user| user["id"].as_u64().is_some())
        .extend("upper", |user| {
            Maybe::from_option(user["name"].as_str().map(str::to_uppercase)).map(|u| json!(u))
        })
        .value()
        .unwrap();
    assert_eq!(result, json!({"id": 1, "name": "Alice", "upper": "ALICE"}));
}
