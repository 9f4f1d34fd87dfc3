//! Geometric primitives for bubble layout and outline construction.
//!
//! This module provides the fundamental geometric types used throughout Callout
//! for describing anchors, containers, bubble frames and their sub-regions.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangle defined by minimum and maximum coordinates
//! - [`Insets`] - Four-sided distances (margins, container insets)
//! - [`Side`] - One of the four rectangle edges
//! - [`Transform`] - An affine 2D map applied to a whole bubble
//!
//! # Coordinate System
//!
//! Callout uses a screen coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Angles are measured in degrees from +X toward +Y, so increasing angles
//! turn clockwise on screen.

use std::fmt;

use serde::Deserialize;

/// A 2D point.
///
/// # Examples
///
/// ```
/// # use callout_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns the point on a circle of `radius` around this point at `degrees`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use callout_core::geometry::Point;
    /// let center = Point::new(10.0, 10.0);
    /// let below = center.on_circle(5.0, 90.0);
    /// assert!((below.x() - 10.0).abs() < 1e-4);
    /// assert!((below.y() - 15.0).abs() < 1e-4);
    /// ```
    pub fn on_circle(self, radius: f32, degrees: f32) -> Self {
        let radians = degrees.to_radians();
        Self {
            x: radius.mul_add(radians.cos(), self.x),
            y: radius.mul_add(radians.sin(), self.y),
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns a new Size with padding added to both width and height
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Returns this size with negative (or NaN) dimensions replaced by zero.
    pub fn clamp_non_negative(self) -> Self {
        Self {
            width: non_negative(self.width),
            height: non_negative(self.height),
        }
    }

    /// Scales this size down, preserving aspect ratio, until it fits inside `limit`.
    ///
    /// Sizes that already fit are returned unchanged; sizes are never scaled up.
    ///
    /// # Examples
    ///
    /// ```
    /// # use callout_core::geometry::Size;
    /// let fitted = Size::new(100.0, 50.0).fit_within(Size::new(50.0, 50.0));
    /// assert_eq!(fitted, Size::new(50.0, 25.0));
    /// ```
    pub fn fit_within(self, limit: Size) -> Self {
        let size = self.clamp_non_negative();
        let limit = limit.clamp_non_negative();
        let mut factor: f32 = 1.0;
        if size.width > limit.width {
            factor = factor.min(limit.width / size.width);
        }
        if size.height > limit.height {
            factor = factor.min(limit.height / size.height);
        }
        size.scale(factor)
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from an origin and dimensions, the way hosts usually
    /// describe frames. Negative dimensions are clamped to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use callout_core::geometry::Bounds;
    /// let anchor = Bounds::new(100.0, 100.0, 50.0, 50.0);
    /// assert_eq!(anchor.max_x(), 150.0);
    /// assert_eq!(anchor.center().y(), 125.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new_from_top_left(Point::new(x, y), Size::new(width, height))
    }

    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        let size = size.clamp_non_negative();
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Creates a new bounds from its four edge coordinates.
    ///
    /// Inverted edges collapse to an empty rectangle at the minimum edge.
    pub fn from_edges(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x: max_x.max(min_x),
            max_y: max_y.max(min_y),
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Moves the bounds by the specified offset.
    ///
    /// # Examples
    ///
    /// ```
    /// # use callout_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::new(10.0, 20.0, 50.0, 30.0);
    ///
    /// let moved = bounds.translate(Point::new(100.0, 50.0));
    /// assert_eq!(moved.min_x(), 110.0);
    /// assert_eq!(moved.min_y(), 70.0);
    /// assert_eq!(moved.width(), 50.0);
    /// ```
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }

    /// Shrinks the bounds by the given insets.
    ///
    /// Negative inset values grow the bounds instead. If the insets overlap,
    /// the result collapses to an empty rectangle instead of inverting.
    pub fn inset_by(&self, insets: Insets) -> Self {
        Self::from_edges(
            self.min_x + insets.left(),
            self.min_y + insets.top(),
            self.max_x - insets.right(),
            self.max_y - insets.bottom(),
        )
    }

    /// Removes a strip of `amount` from the given side.
    pub fn shrink_side(&self, side: Side, amount: f32) -> Self {
        let insets = Insets::default().with_side(side, amount);
        self.inset_by(insets)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}×{})",
            self.min_x,
            self.min_y,
            self.width(),
            self.height()
        )
    }
}

/// Represents spacing around an element (padding, margin, container insets)
/// with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns a new Insets with the value for `side` replaced
    pub fn with_side(self, side: Side, value: f32) -> Self {
        match side {
            Side::Top => Self { top: value, ..self },
            Side::Right => Self {
                right: value,
                ..self
            },
            Side::Bottom => Self {
                bottom: value,
                ..self
            },
            Side::Left => Self {
                left: value,
                ..self
            },
        }
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

/// One of the four edges of a rectangle.
///
/// Used independently for the arrow attachment side and the image side.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl Side {
    /// All four sides, in a stable order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// Returns true for the sides that sit on the horizontal edges (top, bottom).
    pub fn is_vertical_axis(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    /// Returns true for the sides that sit on the vertical edges (left, right).
    pub fn is_horizontal_axis(self) -> bool {
        !self.is_vertical_axis()
    }

    /// Human-readable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An affine 2D transform.
///
/// Maps `(x, y)` to `(a·x + c·y + tx, b·x + d·y + ty)`, the same layout as an
/// SVG `matrix(a b c d tx ty)`. Transforms compose with [`Transform::then`].
///
/// Deserializes from a friendly form where every key is optional and the
/// parts are applied in the order scale, rotate, translate:
///
/// ```toml
/// scale = [0.5, 0.5]
/// rotate = 15.0
/// translate = [0.0, 20.0]
/// ```
///
/// # Examples
///
/// ```
/// # use callout_core::geometry::{Point, Transform};
/// let transform = Transform::scale(2.0, 2.0).then(Transform::translate(10.0, 0.0));
/// let mapped = transform.apply(Point::new(1.0, 1.0));
/// assert_eq!(mapped, Point::new(12.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "TransformParts")]
pub struct Transform {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    tx: f32,
    ty: f32,
}

impl Transform {
    /// The identity transform
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Creates a transform from its matrix components.
    pub fn new(a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    pub fn translate(tx: f32, ty: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Rotation by `degrees`, clockwise on screen.
    pub fn rotate(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Returns the transform that applies `self` first and `next` afterwards.
    pub fn then(self, next: Transform) -> Self {
        Self {
            a: next.a * self.a + next.c * self.b,
            b: next.b * self.a + next.d * self.b,
            c: next.a * self.c + next.c * self.d,
            d: next.b * self.c + next.d * self.d,
            tx: next.a * self.tx + next.c * self.ty + next.tx,
            ty: next.b * self.tx + next.d * self.ty + next.ty,
        }
    }

    /// Maps a point through this transform.
    pub fn apply(self, point: Point) -> Point {
        Point::new(
            self.a * point.x() + self.c * point.y() + self.tx,
            self.b * point.x() + self.d * point.y() + self.ty,
        )
    }

    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// Renders the transform as an SVG `transform` attribute value.
    pub fn to_svg_matrix(self) -> String {
        format!(
            "matrix({} {} {} {} {} {})",
            self.a, self.b, self.c, self.d, self.tx, self.ty
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Serialized form of a [`Transform`].
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TransformParts {
    scale: Option<[f32; 2]>,
    rotate: Option<f32>,
    translate: Option<[f32; 2]>,
}

impl From<TransformParts> for Transform {
    fn from(parts: TransformParts) -> Self {
        let mut transform = Transform::IDENTITY;
        if let Some([sx, sy]) = parts.scale {
            transform = transform.then(Transform::scale(sx, sy));
        }
        if let Some(degrees) = parts.rotate {
            transform = transform.then(Transform::rotate(degrees));
        }
        if let Some([tx, ty]) = parts.translate {
            transform = transform.then(Transform::translate(tx, ty));
        }
        transform
    }
}

/// Replaces negative and NaN values with zero.
pub fn non_negative(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(5.0, 8.0);
        let p2 = Point::new(2.0, 3.0);
        assert_eq!(p1.add_point(p2), Point::new(7.0, 11.0));
        assert_eq!(p1.sub_point(p2), Point::new(3.0, 5.0));
    }

    #[test]
    fn test_point_on_circle_cardinal_angles() {
        let center = Point::new(0.0, 0.0);
        let right = center.on_circle(10.0, 0.0);
        let down = center.on_circle(10.0, 90.0);
        let left = center.on_circle(10.0, 180.0);
        let up = center.on_circle(10.0, 270.0);

        assert_approx_eq!(f32, right.x(), 10.0, epsilon = 1e-4);
        assert_approx_eq!(f32, down.y(), 10.0, epsilon = 1e-4);
        assert_approx_eq!(f32, left.x(), -10.0, epsilon = 1e-4);
        assert_approx_eq!(f32, up.y(), -10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_size_clamp_non_negative() {
        let size = Size::new(-5.0, f32::NAN).clamp_non_negative();
        assert_eq!(size, Size::new(0.0, 0.0));
    }

    #[test]
    fn test_size_fit_within_keeps_small_sizes() {
        let size = Size::new(20.0, 10.0);
        assert_eq!(size.fit_within(Size::new(50.0, 50.0)), size);
    }

    #[test]
    fn test_size_fit_within_preserves_aspect() {
        let fitted = Size::new(200.0, 100.0).fit_within(Size::new(50.0, 50.0));
        assert_approx_eq!(f32, fitted.width(), 50.0);
        assert_approx_eq!(f32, fitted.height(), 25.0);

        let fitted = Size::new(10.0, 100.0).fit_within(Size::new(50.0, 50.0));
        assert_approx_eq!(f32, fitted.width(), 5.0);
        assert_approx_eq!(f32, fitted.height(), 50.0);
    }

    #[test]
    fn test_bounds_new_clamps_negative_dimensions() {
        let bounds = Bounds::new(10.0, 10.0, -4.0, 6.0);
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 6.0);
    }

    #[test]
    fn test_bounds_inset_by() {
        let bounds = Bounds::new(0.0, 0.0, 400.0, 800.0);
        let inner = bounds.inset_by(Insets::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(inner, Bounds::from_edges(40.0, 10.0, 380.0, 770.0));
    }

    #[test]
    fn test_bounds_inset_by_collapses_instead_of_inverting() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let inner = bounds.inset_by(Insets::uniform(8.0));
        assert_eq!(inner.width(), 0.0);
        assert_eq!(inner.height(), 0.0);
    }

    #[test]
    fn test_bounds_shrink_side() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 60.0);
        assert_eq!(
            bounds.shrink_side(Side::Top, 20.0),
            Bounds::new(0.0, 20.0, 100.0, 40.0)
        );
        assert_eq!(
            bounds.shrink_side(Side::Right, 20.0),
            Bounds::new(0.0, 0.0, 80.0, 60.0)
        );
    }

    #[test]
    fn test_insets_accessors() {
        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(insets.top(), 1.0);
        assert_eq!(insets.right(), 2.0);
        assert_eq!(insets.bottom(), 3.0);
        assert_eq!(insets.left(), 4.0);
        assert_eq!(insets.with_side(Side::Left, 9.0).left(), 9.0);
        assert_eq!(insets.horizontal_sum(), 6.0);
        assert_eq!(insets.vertical_sum(), 4.0);
    }

    #[test]
    fn test_side_axes() {
        assert!(Side::Top.is_vertical_axis());
        assert!(Side::Bottom.is_vertical_axis());
        assert!(Side::Left.is_horizontal_axis());
        assert_eq!(Side::default(), Side::Bottom);
    }

    #[test]
    fn test_transform_rotate_quarter_turn() {
        let mapped = Transform::rotate(90.0).apply(Point::new(1.0, 0.0));
        assert_approx_eq!(f32, mapped.x(), 0.0, epsilon = 1e-5);
        assert_approx_eq!(f32, mapped.y(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_transform_then_order() {
        let translate_then_scale = Transform::translate(10.0, 0.0).then(Transform::scale(2.0, 2.0));
        assert_eq!(
            translate_then_scale.apply(Point::new(1.0, 1.0)),
            Point::new(22.0, 2.0)
        );
    }

    #[test]
    fn test_transform_identity_default() {
        assert!(Transform::default().is_identity());
        assert_eq!(Transform::IDENTITY.to_svg_matrix(), "matrix(1 0 0 1 0 0)");
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            1.0f32..500.0,
            1.0f32..500.0,
        )
            .prop_map(|(x, y, w, h)| Bounds::new(x, y, w, h))
    }

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn insets_strategy() -> impl Strategy<Value = Insets> {
        (0.0f32..300.0, 0.0f32..300.0, 0.0f32..300.0, 0.0f32..300.0)
            .prop_map(|(t, r, b, l)| Insets::new(t, r, b, l))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Translating by an offset and back should return the original bounds.
    fn check_translate_inverse_roundtrip(
        bounds: Bounds,
        offset: Point,
    ) -> Result<(), TestCaseError> {
        let roundtrip = bounds
            .translate(offset)
            .translate(Point::new(-offset.x(), -offset.y()));

        prop_assert!(approx_eq!(f32, roundtrip.min_x(), bounds.min_x(), epsilon = 0.001));
        prop_assert!(approx_eq!(f32, roundtrip.min_y(), bounds.min_y(), epsilon = 0.001));
        prop_assert!(approx_eq!(f32, roundtrip.max_x(), bounds.max_x(), epsilon = 0.001));
        prop_assert!(approx_eq!(f32, roundtrip.max_y(), bounds.max_y(), epsilon = 0.001));
        Ok(())
    }

    /// Insetting never produces inverted bounds and stays inside the original.
    fn check_inset_stays_inside(bounds: Bounds, insets: Insets) -> Result<(), TestCaseError> {
        let inner = bounds.inset_by(insets);

        prop_assert!(inner.width() >= 0.0);
        prop_assert!(inner.height() >= 0.0);
        prop_assert!(inner.min_x() >= bounds.min_x() - 0.001);
        prop_assert!(inner.min_y() >= bounds.min_y() - 0.001);
        Ok(())
    }

    /// Composed transforms agree with applying each transform in sequence.
    fn check_then_matches_sequential_apply(
        p: Point,
        degrees: f32,
        offset: Point,
    ) -> Result<(), TestCaseError> {
        let first = Transform::rotate(degrees);
        let second = Transform::translate(offset.x(), offset.y());

        let composed = first.then(second).apply(p);
        let sequential = second.apply(first.apply(p));

        prop_assert!(approx_eq!(f32, composed.x(), sequential.x(), epsilon = 0.01));
        prop_assert!(approx_eq!(f32, composed.y(), sequential.y(), epsilon = 0.01));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn translate_inverse_roundtrip(bounds in bounds_strategy(), offset in point_strategy()) {
            check_translate_inverse_roundtrip(bounds, offset)?;
        }

        #[test]
        fn inset_stays_inside(bounds in bounds_strategy(), insets in insets_strategy()) {
            check_inset_stays_inside(bounds, insets)?;
        }

        #[test]
        fn then_matches_sequential_apply(p in point_strategy(), degrees in -360.0f32..360.0, offset in point_strategy()) {
            check_then_matches_sequential_apply(p, degrees, offset)?;
        }
    }
}
