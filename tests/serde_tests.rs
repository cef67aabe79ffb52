#![cfg(feature = "serde")]

//! Serialization of the value wrappers produced by folds.

use focal::optics::{Traversal, traversal};
use focal::typeclass::{All, Any, First, Identity, Last, Max, Min, Product, Sum};
use rstest::rstest;

#[rstest]
fn test_sum_and_product_are_transparent() {
    assert_eq!(serde_json::to_string(&Sum(6)).ok(), Some("6".to_string()));
    assert_eq!(serde_json::to_string(&Product(2.5)).ok(), Some("2.5".to_string()));
    assert_eq!(serde_json::from_str::<Sum<i64>>("-3").ok(), Some(Sum(-3)));
}

#[rstest]
#[case(First(Some(1)), "1")]
#[case(First(None), "null")]
fn test_first_serializes_inner_option(#[case] value: First<i32>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&value).ok(), Some(expected.to_string()));
}

#[rstest]
fn test_roundtrip_wrappers() {
    let max: Max<u8> = serde_json::from_str(&serde_json::to_string(&Max(9_u8)).unwrap()).unwrap();
    let min: Min<i8> = serde_json::from_str(&serde_json::to_string(&Min(-9_i8)).unwrap()).unwrap();
    let last: Last<String> =
        serde_json::from_str(&serde_json::to_string(&Last(Some("z".to_string()))).unwrap())
            .unwrap();
    let flags: (All, Any) =
        serde_json::from_str(&serde_json::to_string(&(All(true), Any(false))).unwrap()).unwrap();
    let identity: Identity<Vec<u8>> =
        serde_json::from_str(&serde_json::to_string(&Identity(vec![1, 2])).unwrap()).unwrap();

    assert_eq!(max, Max(9));
    assert_eq!(min, Min(-9));
    assert_eq!(last, Last(Some("z".to_string())));
    assert_eq!(flags, (All(true), Any(false)));
    assert_eq!(identity, Identity(vec![1, 2]));
}

#[rstest]
fn test_fold_result_serializes() {
    let totals = traversal::from_traversable::<Vec<u32>>().fold_map(vec![1, 2, 3], |value| {
        (Sum(value), Max(value))
    });

    assert_eq!(serde_json::to_string(&totals).ok(), Some("[6,3]".to_string()));
}
