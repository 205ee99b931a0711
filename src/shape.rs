// =============================================================================
// Shape capability and its variants
// =============================================================================

use crate::error::ShapeError;
use serde::Deserialize;
use tracing::{debug, warn};

/// Anything with a computable area.
///
/// There is no default body: every variant supplies its own formula. The
/// trait is object safe, so callers may use `&dyn Shape` or a generic bound.
pub trait Shape {
    fn area(&self) -> f64;
}

impl<S: Shape + ?Sized> Shape for &S {
    fn area(&self) -> f64 {
        (**self).area()
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn area(&self) -> f64 {
        (**self).area()
    }
}

/// Which value of π a [`Circle`] multiplies by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PiConstant {
    /// 3.14, the two-digit approximation (Circle(5) has area 78.5).
    #[default]
    Classic,
    /// `std::f64::consts::PI`.
    Exact,
}

impl PiConstant {
    #[allow(clippy::approx_constant)]
    pub const CLASSIC: f64 = 3.14;

    pub fn value(self) -> f64 {
        match self {
            PiConstant::Classic => Self::CLASSIC,
            PiConstant::Exact => std::f64::consts::PI,
        }
    }
}

fn warn_if_negative(field: &'static str, value: f64) {
    if value < 0.0 {
        warn!(field, value, "storing negative dimension unchecked");
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
    pi: PiConstant,
}

impl Circle {
    /// Stores `radius` as given, using the classic π.
    pub fn new(radius: f64) -> Self {
        Self::with_pi(radius, PiConstant::Classic)
    }

    pub fn with_pi(radius: f64, pi: PiConstant) -> Self {
        warn_if_negative("radius", radius);
        debug!(radius, ?pi, "constructed circle");
        Circle { radius, pi }
    }

    /// Rejects negative or non-finite radii.
    pub fn try_new(radius: f64) -> Result<Self, ShapeError> {
        Self::try_with_pi(radius, PiConstant::Classic)
    }

    pub fn try_with_pi(radius: f64, pi: PiConstant) -> Result<Self, ShapeError> {
        let radius = ShapeError::check("radius", radius)?;
        Ok(Self::with_pi(radius, pi))
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn pi(&self) -> PiConstant {
        self.pi
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        self.pi.value() * self.radius.powi(2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Stores both dimensions as given.
    pub fn new(width: f64, height: f64) -> Self {
        warn_if_negative("width", width);
        warn_if_negative("height", height);
        debug!(width, height, "constructed rectangle");
        Rectangle { width, height }
    }

    pub fn try_new(width: f64, height: f64) -> Result<Self, ShapeError> {
        let width = ShapeError::check("width", width)?;
        let height = ShapeError::check("height", height)?;
        Ok(Self::new(width, height))
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Closed set of the known variants, for owned heterogeneous collections
/// without boxing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle(_) => "circle",
            ShapeKind::Rectangle(_) => "rectangle",
        }
    }
}

impl Shape for ShapeKind {
    fn area(&self) -> f64 {
        match self {
            ShapeKind::Circle(c) => c.area(),
            ShapeKind::Rectangle(r) => r.area(),
        }
    }
}

impl From<Circle> for ShapeKind {
    fn from(circle: Circle) -> Self {
        ShapeKind::Circle(circle)
    }
}

impl From<Rectangle> for ShapeKind {
    fn from(rectangle: Rectangle) -> Self {
        ShapeKind::Rectangle(rectangle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_circle_classic_area() {
        assert_eq!(Circle::new(5.0).area(), 78.5);
    }

    #[test]
    fn test_circle_exact_area() {
        let circle = Circle::with_pi(5.0, PiConstant::Exact);
        assert!((circle.area() - 78.539_816_339_744_83).abs() < 1e-9);
    }

    #[test]
    fn test_rectangle_area() {
        assert_eq!(Rectangle::new(4.0, 6.0).area(), 24.0);
    }

    #[test]
    fn test_zero_sized_shapes() {
        assert_eq!(Circle::new(0.0).area(), 0.0);
        assert_eq!(Rectangle::new(0.0, 10.0).area(), 0.0);
    }

    #[test]
    fn test_permissive_constructors_store_verbatim() {
        let circle = Circle::new(-2.0);
        assert_eq!(circle.radius(), -2.0);
        // Squared, so the sign disappears.
        assert_eq!(circle.area(), PiConstant::CLASSIC * 4.0);

        let rect = Rectangle::new(-3.0, 2.0);
        assert_eq!(rect.width(), -3.0);
        assert_eq!(rect.area(), -6.0);
    }

    #[test]
    fn test_strict_constructors() {
        assert!(Circle::try_new(1.5).is_ok());
        assert!(matches!(
            Circle::try_new(-1.0),
            Err(ShapeError::Negative { field: "radius", .. })
        ));
        assert!(matches!(
            Rectangle::try_new(2.0, -1.0),
            Err(ShapeError::Negative { field: "height", .. })
        ));
        assert!(matches!(
            Rectangle::try_new(f64::NAN, 1.0),
            Err(ShapeError::NonFinite { field: "width", .. })
        ));
    }

    #[test]
    fn test_dynamic_dispatch() {
        let shapes: Vec<Box<dyn Shape>> =
            vec![Box::new(Circle::new(5.0)), Box::new(Rectangle::new(4.0, 6.0))];
        let areas: Vec<f64> = shapes.iter().map(|s| s.area()).collect();
        assert_eq!(areas, vec![78.5, 24.0]);
    }

    #[test]
    fn test_shape_kind_dispatch() {
        let shapes: Vec<ShapeKind> = vec![Circle::new(5.0).into(), Rectangle::new(4.0, 6.0).into()];
        assert_eq!(shapes[0].name(), "circle");
        assert_eq!(shapes[1].name(), "rectangle");
        assert_eq!(shapes[0].area(), 78.5);
        assert_eq!(shapes[1].area(), 24.0);
    }

    #[test]
    fn test_references_satisfy_shape() {
        let rect = Rectangle::new(2.0, 3.0);
        fn area_of<S: Shape>(shape: S) -> f64 {
            shape.area()
        }
        assert_eq!(area_of(&rect), 6.0);
        assert_eq!(area_of(&&rect), 6.0);
    }

    proptest! {
        #[test]
        fn prop_rectangle_area_is_product(w in 0.0f64..1e6, h in 0.0f64..1e6) {
            prop_assert_eq!(Rectangle::new(w, h).area(), w * h);
        }

        #[test]
        fn prop_circle_area_matches_formula(r in 0.0f64..1e6) {
            let area = Circle::with_pi(r, PiConstant::Exact).area();
            prop_assert!(area >= 0.0);
            prop_assert_eq!(area, std::f64::consts::PI * r.powi(2));
        }

        #[test]
        fn prop_construction_is_repeatable(w in 0.0f64..1e3, h in 0.0f64..1e3) {
            let first = Rectangle::try_new(w, h).unwrap();
            let second = Rectangle::try_new(w, h).unwrap();
            prop_assert_eq!(first, second);
            prop_assert_eq!(first.area(), second.area());
        }
    }
}
