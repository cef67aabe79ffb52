//! Property-based tests for Prism laws.
//!
//! 1. **GetOptionReverseGet**: `prism.get_option(&prism.reverse_get(a)) == Some(a)`
//! 2. **ReverseGetGetOption**: if `prism.get_option(&s) == Some(a)` then
//!    `prism.reverse_get(a) == s`
//! 3. **Modify identity**: `prism.modify(s, |a| a) == s`
//! 4. **Category**: `id` is neutral for `compose`, and `compose` is associative

use focal::optics::{Prism, left, prism, right, some};
use focal::prism;
use focal::typeclass::{Identity, IdentityContext};
use proptest::prelude::*;

// =============================================================================
// Test data types
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
enum Shape {
    Circle(i32),
    Rectangle((i32, i32)),
    Empty,
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    prop_oneof![
        any::<i32>().prop_map(Shape::Circle),
        any::<(i32, i32)>().prop_map(Shape::Rectangle),
        Just(Shape::Empty),
    ]
}

fn nested_strategy() -> impl Strategy<Value = Option<Result<Option<i32>, String>>> {
    proptest::option::of(prop_oneof![
        proptest::option::of(any::<i32>()).prop_map(Ok),
        "[a-z]{0,4}".prop_map(Err),
    ])
}

// =============================================================================
// Round trips
// =============================================================================

proptest! {
    #[test]
    fn prop_circle_get_option_reverse_get(radius in any::<i32>()) {
        let circle = prism!(Shape, Circle);
        prop_assert_eq!(circle.get_option(&circle.reverse_get(radius)), Some(radius));
    }

    #[test]
    fn prop_circle_reverse_get_get_option(shape in shape_strategy()) {
        let circle = prism!(Shape, Circle);
        if let Some(radius) = circle.get_option(&shape) {
            prop_assert_eq!(circle.reverse_get(radius), shape);
        }
    }

    #[test]
    fn prop_rectangle_round_trip(size in any::<(i32, i32)>()) {
        let rectangle = prism!(Shape, Rectangle);
        prop_assert_eq!(rectangle.get_option(&rectangle.reverse_get(size)), Some(size));
    }

    #[test]
    fn prop_modify_identity(shape in shape_strategy()) {
        let circle = prism!(Shape, Circle);
        prop_assert_eq!(circle.modify(shape.clone(), |radius| radius), shape);
    }

    #[test]
    fn prop_composed_round_trip(value in any::<i32>()) {
        let deep = some::<Result<Option<i32>, String>>()
            .compose(right::<Option<i32>, String>())
            .compose(some::<i32>());

        prop_assert_eq!(deep.get_option(&deep.reverse_get(value)), Some(value));
    }

    #[test]
    fn prop_composed_reverse_get_get_option(source in nested_strategy()) {
        let deep = some::<Result<Option<i32>, String>>()
            .compose(right::<Option<i32>, String>())
            .compose(some::<i32>());

        if let Some(value) = deep.get_option(&source) {
            prop_assert_eq!(deep.reverse_get(value), source);
        }
    }

    #[test]
    fn prop_left_round_trip(message in "[a-z]{0,8}") {
        let failure = left::<i32, String>();
        prop_assert_eq!(failure.get_option(&failure.reverse_get(message.clone())), Some(message));
    }
}

// =============================================================================
// Category laws
// =============================================================================

proptest! {
    #[test]
    fn prop_left_identity(shape in shape_strategy(), radius in any::<i32>()) {
        let circle = prism!(Shape, Circle);
        let composed = prism::id::<Shape>().compose(circle.clone());

        prop_assert_eq!(composed.get_option(&shape), circle.get_option(&shape));
        prop_assert_eq!(composed.reverse_get(radius), circle.reverse_get(radius));
    }

    #[test]
    fn prop_right_identity(shape in shape_strategy(), radius in any::<i32>()) {
        let circle = prism!(Shape, Circle);
        let composed = circle.clone().compose(prism::id::<i32>());

        prop_assert_eq!(composed.get_option(&shape), circle.get_option(&shape));
        prop_assert_eq!(composed.reverse_get(radius), circle.reverse_get(radius));
    }

    #[test]
    fn prop_associativity(source in nested_strategy(), value in any::<i32>()) {
        let outer = || some::<Result<Option<i32>, String>>();
        let middle = || right::<Option<i32>, String>();
        let inner = || some::<i32>();

        let left_nested = outer().compose(middle()).compose(inner());
        let right_nested = outer().compose(middle().compose(inner()));

        prop_assert_eq!(left_nested.get_option(&source), right_nested.get_option(&source));
        prop_assert_eq!(left_nested.reverse_get(value), right_nested.reverse_get(value));
    }

    #[test]
    fn prop_modify_f_agrees_with_modify(shape in shape_strategy()) {
        let circle = prism!(Shape, Circle);
        let effectful = circle
            .modify_f::<IdentityContext, _>(shape.clone(), |radius| Identity::new(radius.wrapping_mul(3)))
            .into_inner();

        prop_assert_eq!(effectful, circle.modify(shape, |radius| radius.wrapping_mul(3)));
    }
}
