//! Integration tests for the sub-type policy and untyped-operand resolution.

use alike::testing::{Point, Point3};
use alike::Equality;
use std::sync::Arc;
use std::thread;

fn coords_with_wrapper() -> Equality<Point> {
    Equality::<Point>::on_type()
        .or_sub_type::<Point3>()
        .check_equality(|p: &Point| p.x)
        .check_equality(|p: &Point| p.y)
        .define()
}

#[test]
fn exact_policy_rejects_wrapper_even_with_matching_components() {
    let definition = Equality::<Point>::on_type()
        .check_equality(|p: &Point| p.x)
        .check_equality(|p: &Point| p.y)
        .define();
    let base = Point { x: 1, y: 2 };
    let wrapper = Point3 {
        base: Point { x: 1, y: 2 },
        z: 0,
    };

    assert!(!definition.allows_sub_types());
    assert!(!definition.equals(&base, &wrapper));
}

#[test]
fn registered_wrapper_matches_through_its_view() {
    let definition = coords_with_wrapper();
    let base = Point { x: 1, y: 2 };
    let wrapper = Point3 {
        base: Point { x: 1, y: 2 },
        z: 42,
    };

    assert!(definition.allows_sub_types());
    assert!(definition.equals(&base, &wrapper));
}

#[test]
fn wrapper_with_different_base_does_not_match() {
    let definition = coords_with_wrapper();
    let base = Point { x: 1, y: 2 };
    let wrapper = Point3 {
        base: Point { x: 1, y: 3 },
        z: 42,
    };

    assert!(!definition.equals(&base, &wrapper));
}

#[test]
fn unrelated_type_is_a_defined_false() {
    let definition = coords_with_wrapper();
    let base = Point { x: 1, y: 2 };

    assert!(!definition.equals(&base, &"point".to_string()));
    assert!(!definition.equals(&base, &[1_i32, 2_i32]));
}

#[test]
fn or_any_sub_type_is_idempotent() {
    let definition = Equality::<Point>::on_type()
        .or_any_sub_type()
        .or_any_sub_type()
        .check_equality(|p: &Point| p.x)
        .define();

    assert!(definition.allows_sub_types());
    assert!(definition.equals(&Point { x: 1, y: 2 }, &Point { x: 1, y: 9 }));
}

#[test]
fn exact_type_still_matches_under_sub_type_policy() {
    let definition = coords_with_wrapper();
    let a = Point { x: 7, y: 8 };
    let b = Point { x: 7, y: 8 };

    assert!(definition.equals(&a, &b));
}

#[test]
fn definitions_are_shareable_across_threads() {
    let definition = Arc::new(coords_with_wrapper());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let definition = Arc::clone(&definition);
            thread::spawn(move || {
                let a = Point { x: i, y: i + 1 };
                let b = Point { x: i, y: i + 1 };
                definition.equals(&a, &b) && definition.hash_code(&a) == definition.hash_code(&b)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
