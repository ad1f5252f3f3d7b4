//! Liskov Substitution: subtypes must keep the contract of the type they replace.
//!
//! # Responsibility
//! - `bad` models a square posing as a mutable rectangle.
//! - `good` models rectangle and square as independent shapes.
//!
//! # Invariants
//! - Rectangle area is `height * width`; square area is `side * side`.
//! - Area arithmetic wraps on `i64` overflow in every build profile.
//! - `good` shapes are immutable once built, so area queries are pure.

/// Square masquerades as a rectangle whose sides can be set independently.
pub mod bad {
    /// Mutable-rectangle contract: width and height move independently.
    pub trait RectangleLike {
        fn set_width(&mut self, width: i64);
        fn set_height(&mut self, height: i64);
        fn area(&self) -> i64;
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Rectangle {
        pub height: i64,
        pub width: i64,
    }

    impl Rectangle {
        pub fn new(height: i64, width: i64) -> Self {
            Self { height, width }
        }
    }

    impl RectangleLike for Rectangle {
        fn set_width(&mut self, width: i64) {
            self.width = width;
        }

        fn set_height(&mut self, height: i64) {
            self.height = height;
        }

        fn area(&self) -> i64 {
            self.height.wrapping_mul(self.width)
        }
    }

    /// Keeps both sides equal, so every setter overwrites the other side.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Square {
        side: i64,
    }

    impl Square {
        pub fn new(side: i64) -> Self {
            Self { side }
        }

        pub fn side(&self) -> i64 {
            self.side
        }
    }

    impl RectangleLike for Square {
        fn set_width(&mut self, width: i64) {
            self.side = width;
        }

        fn set_height(&mut self, height: i64) {
            self.side = height;
        }

        fn area(&self) -> i64 {
            self.side.wrapping_mul(self.side)
        }
    }

    /// Reshapes any rectangle to `width` x `height` and reports whether the
    /// resulting area matches what a rectangle caller expects.
    pub fn stretch_to_area<R: RectangleLike + ?Sized>(
        shape: &mut R,
        width: i64,
        height: i64,
    ) -> bool {
        shape.set_width(width);
        shape.set_height(height);
        shape.area() == width.wrapping_mul(height)
    }
}

/// Rectangle and square share only the `Shape` query.
pub mod good {
    pub trait Shape {
        fn compute_area(&self) -> i64;
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Rectangle {
        pub height: i64,
        pub width: i64,
    }

    impl Shape for Rectangle {
        fn compute_area(&self) -> i64 {
            self.height.wrapping_mul(self.width)
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Square {
        pub side: i64,
    }

    impl Shape for Square {
        fn compute_area(&self) -> i64 {
            self.side.wrapping_mul(self.side)
        }
    }

    /// Sums the area of a heterogeneous shape list.
    pub fn total_area(shapes: &[&dyn Shape]) -> i64 {
        shapes
            .iter()
            .fold(0i64, |total, shape| total.wrapping_add(shape.compute_area()))
    }
}

#[cfg(test)]
mod tests {
    use super::bad::{self, RectangleLike};
    use super::good::{total_area, Rectangle, Shape, Square};

    #[test]
    fn area_queries_do_not_mutate() {
        let rectangle = Rectangle { height: 4, width: 5 };
        assert_eq!(rectangle.compute_area(), rectangle.compute_area());
        assert_eq!(rectangle, Rectangle { height: 4, width: 5 });
    }

    #[test]
    fn total_area_mixes_variants() {
        let rectangle = Rectangle { height: 4, width: 5 };
        let square = Square { side: 5 };
        assert_eq!(total_area(&[&rectangle, &square]), 45);
        assert_eq!(total_area(&[]), 0);
    }

    #[test]
    fn bad_square_setters_overwrite_each_other() {
        let mut square = bad::Square::new(3);
        square.set_width(5);
        square.set_height(4);
        assert_eq!(square.side(), 4);
        assert_eq!(square.area(), 16);
    }
}
