//! Tests for the `Lenses` and `Prisms` derive macros.
//!
//! - `#[derive(Lenses)]`: one `<field>_lens()` per named field
//! - `#[derive(Prisms)]`: one `<variant>_prism()` per variant, focusing the
//!   field, a tuple of the fields, or `()` depending on the variant shape

use focal::optics::{Lens, Optional, Prism, Traversal, traversal};
use focal::{Lenses, Prisms};
use rstest::rstest;

// =============================================================================
// Lenses
// =============================================================================

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Customer {
    name: String,
    point: Point,
    status: Status,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Labelled<T> {
    value: T,
    label: String,
}

#[test]
fn test_derived_lens_get_and_set() {
    let point = Point { x: 1, y: 2 };

    assert_eq!(Point::x_lens().get(&point), 1);
    assert_eq!(Point::y_lens().set(point, 5), Point { x: 1, y: 5 });
}

#[test]
fn test_derived_lenses_compose() {
    let customer = Customer {
        name: "c".into(),
        point: Point { x: 0, y: 0 },
        status: Status::Active,
    };

    let x = Customer::point_lens().compose(Point::x_lens());
    assert_eq!(x.modify(customer, |x| x + 3).point, Point { x: 3, y: 0 });
}

#[test]
fn test_derived_lens_on_generic_struct() {
    let labelled = Labelled {
        value: 2.5_f64,
        label: "weight".into(),
    };

    assert!((Labelled::<f64>::value_lens().get(&labelled) - 2.5).abs() < f64::EPSILON);
    assert_eq!(
        Labelled::<f64>::label_lens().set(labelled, "mass".into()).label,
        "mass"
    );
}

// =============================================================================
// Prisms
// =============================================================================

#[derive(Clone, PartialEq, Debug, Prisms)]
enum Status {
    Active,
    Suspended(String),
    Moved(i32, i32),
    Closed { year: u16, reason: String },
}

#[derive(Clone, PartialEq, Debug, Prisms)]
enum Tagged<T> {
    Value(T),
    Nothing,
}

#[rstest]
#[case(Status::Active, true)]
#[case(Status::Suspended("late".into()), false)]
#[case(Status::Moved(1, 2), false)]
fn test_unit_variant_prism(#[case] status: Status, #[case] expected: bool) {
    assert_eq!(Status::active_prism().is_match(&status), expected);
}

#[test]
fn test_unit_variant_round_trip() {
    assert_eq!(Status::active_prism().get_option(&Status::Active), Some(()));
    assert_eq!(Status::active_prism().reverse_get(()), Status::Active);
}

#[test]
fn test_single_field_variant_prism() {
    let suspended = Status::suspended_prism();

    assert_eq!(
        suspended.get_option(&Status::Suspended("late".into())),
        Some("late".to_string())
    );
    assert_eq!(suspended.get_option(&Status::Active), None);
    assert_eq!(
        suspended.modify(Status::Suspended("late".into()), |reason| reason.to_uppercase()),
        Status::Suspended("LATE".into())
    );
}

#[test]
fn test_multi_field_variant_prism() {
    let moved = Status::moved_prism();

    assert_eq!(moved.get_option(&Status::Moved(1, 2)), Some((1, 2)));
    assert_eq!(moved.reverse_get((3, 4)), Status::Moved(3, 4));
    assert_eq!(
        moved.modify(Status::Moved(1, 2), |(x, y)| (y, x)),
        Status::Moved(2, 1)
    );
}

#[test]
fn test_struct_variant_prism() {
    let closed = Status::closed_prism();
    let status = Status::Closed {
        year: 2020,
        reason: "done".into(),
    };

    assert_eq!(closed.get_option(&status), Some((2020, "done".to_string())));
    assert_eq!(
        closed.reverse_get((2021, "moved".into())),
        Status::Closed {
            year: 2021,
            reason: "moved".into()
        }
    );
}

#[test]
fn test_generic_enum_prism() {
    let value = Tagged::<Vec<u8>>::value_prism();

    assert_eq!(value.get_option(&Tagged::Value(vec![1])), Some(vec![1]));
    assert_eq!(value.get_option(&Tagged::Nothing), None);
    assert_eq!(value.reverse_get(vec![2]), Tagged::Value(vec![2]));
}

#[test]
fn test_derived_optics_chain() {
    let customers = vec![
        Customer {
            name: "a".into(),
            point: Point { x: 0, y: 0 },
            status: Status::Suspended("late".into()),
        },
        Customer {
            name: "b".into(),
            point: Point { x: 0, y: 0 },
            status: Status::Active,
        },
    ];

    let reasons = traversal::from_traversable::<Vec<Customer>>()
        .prop(Customer::status_lens())
        .compose_prism(Status::suspended_prism());

    assert_eq!(reasons.get_all(customers.clone()), vec!["late".to_string()]);

    let cleared = reasons.set(customers, String::new());
    assert_eq!(cleared[0].status, Status::Suspended(String::new()));
    assert_eq!(cleared[1].status, Status::Active);

    let year = Customer::status_lens()
        .compose_prism(Status::closed_prism())
        .compose_lens(focal::optics::component::<(u16, String), 0>());
    let closed = Customer {
        name: "c".into(),
        point: Point { x: 0, y: 0 },
        status: Status::Closed {
            year: 1999,
            reason: "r".into(),
        },
    };
    assert_eq!(year.get_option(&closed), Some(1999));
}
