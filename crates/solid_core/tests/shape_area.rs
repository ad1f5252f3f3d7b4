use solid_core::principles::liskov_substitution::bad::{self, stretch_to_area, RectangleLike};
use solid_core::principles::liskov_substitution::good::{total_area, Rectangle, Shape, Square};

#[test]
fn rectangle_area_is_height_times_width() {
    assert_eq!(Rectangle { height: 4, width: 5 }.compute_area(), 20);
}

#[test]
fn square_area_is_side_squared() {
    assert_eq!(Square { side: 5 }.compute_area(), 25);
}

#[test]
fn shapes_are_interchangeable_behind_trait_objects() {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle { height: 4, width: 5 }),
        Box::new(Square { side: 5 }),
    ];
    let areas: Vec<i64> = shapes.iter().map(|shape| shape.compute_area()).collect();
    assert_eq!(areas, vec![20, 25]);
}

#[test]
fn mutable_rectangle_honors_stretch_contract() {
    let mut rectangle = bad::Rectangle::new(1, 1);
    assert!(stretch_to_area(&mut rectangle, 5, 4));
    assert_eq!(rectangle.area(), 20);
}

#[test]
fn square_posing_as_rectangle_breaks_stretch_contract() {
    let mut square = bad::Square::new(5);
    assert!(!stretch_to_area(&mut square, 5, 4));
    assert_eq!(square.area(), 16);
}

#[test]
fn stretch_contract_breaks_through_dyn_dispatch() {
    let mut shapes: Vec<Box<dyn RectangleLike>> =
        vec![Box::new(bad::Rectangle::new(2, 3)), Box::new(bad::Square::new(2))];
    let holds: Vec<bool> = shapes
        .iter_mut()
        .map(|shape| stretch_to_area(shape.as_mut(), 5, 4))
        .collect();
    assert_eq!(holds, vec![true, false]);
}

#[test]
fn oversized_rectangle_area_wraps_instead_of_panicking() {
    let rectangle = Rectangle {
        height: i64::MAX,
        width: 2,
    };
    assert_eq!(rectangle.compute_area(), i64::MAX.wrapping_mul(2));
    assert_eq!(rectangle.compute_area(), -2);
}

#[test]
fn total_area_wraps_on_overflow() {
    let square = Square {
        side: 3_037_000_500,
    };
    let expected = square.compute_area().wrapping_add(square.compute_area());
    assert_eq!(total_area(&[&square, &square]), expected);
}

#[test]
fn stretch_to_area_handles_overflowing_sides() {
    let mut rectangle = bad::Rectangle::new(1, 1);
    assert!(stretch_to_area(&mut rectangle, i64::MAX, 2));
}
