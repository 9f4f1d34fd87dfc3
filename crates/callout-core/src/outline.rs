//! Closed bubble outlines with an arrow notch.
//!
//! An [`Outline`] is one closed contour: it starts at the arrow tip, runs
//! down one flank of the arrow, walks the rounded body rectangle and comes
//! back up the other flank. [`build_outline`] produces it for any arrow side.
//!
//! # Construction
//!
//! The contour is built once for an arrow on the bottom edge, in canonical
//! `(u, v)` coordinates where `u` runs along the arrow edge and `v` runs
//! from the far edge toward the arrow:
//!
//! ```text
//!  (0,0) ───────────────────── (L,0)
//!    │                           │
//!    │           body            │   D = depth - arrow height
//!    │                           │
//!    ╰──────────╮   ╭────────────╯  v = D
//!                ╲ ╱
//!                 V  tip (t, depth)
//! ```
//!
//! Each point and arc angle is then mapped onto the real arrow side:
//!
//! | Side   | point `(u, v)` maps to | angle `θ` maps to | sweep     |
//! |--------|------------------------|-------------------|-----------|
//! | bottom | `(u, v)`               | `θ`               | kept      |
//! | top    | `(u, H - v)`           | `-θ`              | flipped   |
//! | right  | `(v, u)`               | `90 - θ`          | flipped   |
//! | left   | `(W - v, u)`           | `θ + 90`          | kept      |
//!
//! Reflections reverse the winding, so they flip the sweep direction;
//! rotations keep it.

use std::fmt::Write as _;

use log::trace;
use svg::node::element::path::Data;

use crate::geometry::{Bounds, Point, Side, Size};

/// A circular arc around `center`, from `start_angle` to `end_angle`.
///
/// Angles are in degrees, measured from +X toward +Y (clockwise on screen),
/// and normalized to `0.0..360.0`. `clockwise` gives the sweep direction as
/// seen on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    center: Point,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    clockwise: bool,
}

impl ArcSegment {
    pub fn new(center: Point, radius: f32, start_angle: f32, end_angle: f32, clockwise: bool) -> Self {
        Self {
            center,
            radius,
            start_angle: normalize_degrees(start_angle),
            end_angle: normalize_degrees(end_angle),
            clockwise,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn start_angle(&self) -> f32 {
        self.start_angle
    }

    pub fn end_angle(&self) -> f32 {
        self.end_angle
    }

    pub fn clockwise(&self) -> bool {
        self.clockwise
    }

    pub fn start_point(&self) -> Point {
        self.center.on_circle(self.radius, self.start_angle)
    }

    pub fn end_point(&self) -> Point {
        self.center.on_circle(self.radius, self.end_angle)
    }

    /// Angular extent of the arc in degrees, always positive.
    pub fn sweep(&self) -> f32 {
        let delta = if self.clockwise {
            self.end_angle - self.start_angle
        } else {
            self.start_angle - self.end_angle
        };
        normalize_degrees(delta)
    }

    /// Returns the point `fraction` of the way along the arc.
    pub fn point_at(&self, fraction: f32) -> Point {
        let signed = if self.clockwise { 1.0 } else { -1.0 };
        let angle = self.start_angle + signed * self.sweep() * fraction;
        self.center.on_circle(self.radius, angle)
    }

    /// Returns true if the arc passes through `degrees`.
    fn contains_angle(&self, degrees: f32) -> bool {
        let from_start = if self.clockwise {
            normalize_degrees(degrees - self.start_angle)
        } else {
            normalize_degrees(self.start_angle - degrees)
        };
        from_start <= self.sweep()
    }

    fn translate(&self, offset: Point) -> Self {
        Self {
            center: self.center.add_point(offset),
            ..*self
        }
    }
}

/// One step of an outline contour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    LineTo(Point),
    ArcTo(ArcSegment),
}

impl PathSegment {
    /// Where the segment ends.
    pub fn end_point(&self) -> Point {
        match self {
            PathSegment::LineTo(point) => *point,
            PathSegment::ArcTo(arc) => arc.end_point(),
        }
    }
}

/// A closed contour starting at the arrow tip.
///
/// The last segment is implicitly joined back to [`Outline::start`].
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    start: Point,
    segments: Vec<PathSegment>,
}

impl Outline {
    pub fn new(start: Point, segments: Vec<PathSegment>) -> Self {
        Self { start, segments }
    }

    /// The contour's first point. For bubble outlines this is the arrow tip.
    pub fn start(&self) -> Point {
        self.start
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The arc segments of the contour, in drawing order.
    pub fn arcs(&self) -> impl Iterator<Item = &ArcSegment> {
        self.segments.iter().filter_map(|segment| match segment {
            PathSegment::ArcTo(arc) => Some(arc),
            PathSegment::LineTo(_) => None,
        })
    }

    /// Moves every point of the outline by `offset`.
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            start: self.start.add_point(offset),
            segments: self
                .segments
                .iter()
                .map(|segment| match segment {
                    PathSegment::LineTo(point) => PathSegment::LineTo(point.add_point(offset)),
                    PathSegment::ArcTo(arc) => PathSegment::ArcTo(arc.translate(offset)),
                })
                .collect(),
        }
    }

    /// Exact bounding box, including the extremes of every arc.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::new_from_top_left(self.start, Size::default());
        let mut include = |point: Point| {
            bounds = bounds.merge(&Bounds::new_from_top_left(point, Size::default()));
        };
        for segment in &self.segments {
            include(segment.end_point());
            if let PathSegment::ArcTo(arc) = segment {
                include(arc.start_point());
                for cardinal in [0.0, 90.0, 180.0, 270.0] {
                    if arc.contains_angle(cardinal) {
                        include(arc.center.on_circle(arc.radius, cardinal));
                    }
                }
            }
        }
        bounds
    }

    /// Flattens the contour into a polygon.
    ///
    /// Each arc is approximated by `steps_per_arc` chords. Consecutive
    /// duplicate points are dropped, so zero-radius corners collapse to one
    /// vertex.
    pub fn vertices(&self, steps_per_arc: usize) -> Vec<Point> {
        let steps = steps_per_arc.max(1);
        let mut points = vec![self.start];
        let mut push = |point: Point| {
            if points.last().is_none_or(|last| last.distance(point) > 1e-4) {
                points.push(point);
            }
        };
        for segment in &self.segments {
            match segment {
                PathSegment::LineTo(point) => push(*point),
                PathSegment::ArcTo(arc) => {
                    push(arc.start_point());
                    for step in 1..=steps {
                        push(arc.point_at(step as f32 / steps as f32));
                    }
                }
            }
        }
        if points.len() > 1
            && points
                .last()
                .is_some_and(|last| last.distance(self.start) <= 1e-4)
        {
            points.pop();
        }
        points
    }

    /// Converts the outline into SVG path data.
    ///
    /// Arcs become elliptical arc commands with equal radii; the sweep flag is
    /// set for clockwise arcs since SVG's y axis points down.
    pub fn to_svg_data(&self) -> Data {
        let mut data = Data::new().move_to((self.start.x(), self.start.y()));
        for segment in &self.segments {
            data = match segment {
                PathSegment::LineTo(point) => data.line_to((point.x(), point.y())),
                PathSegment::ArcTo(arc) => {
                    let end = arc.end_point();
                    let large_arc = if arc.sweep() > 180.0 { 1.0 } else { 0.0 };
                    let sweep = if arc.clockwise { 1.0 } else { 0.0 };
                    data.elliptical_arc_to(vec![
                        arc.radius,
                        arc.radius,
                        0.0,
                        large_arc,
                        sweep,
                        end.x(),
                        end.y(),
                    ])
                }
            };
        }
        data.close()
    }

    /// Renders the outline as an SVG path `d` attribute string.
    pub fn to_path_string(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "M{},{}", self.start.x(), self.start.y());
        for segment in &self.segments {
            match segment {
                PathSegment::LineTo(point) => {
                    let _ = write!(out, " L{},{}", point.x(), point.y());
                }
                PathSegment::ArcTo(arc) => {
                    let end = arc.end_point();
                    let _ = write!(
                        out,
                        " A{r},{r} 0 0 {} {},{}",
                        u8::from(arc.clockwise),
                        end.x(),
                        end.y(),
                        r = arc.radius
                    );
                }
            }
        }
        out.push_str(" Z");
        out
    }
}

/// Maps canonical arrow-on-bottom coordinates onto a real arrow side.
#[derive(Debug, Clone, Copy)]
struct SideMapping {
    side: Side,
    frame: Size,
}

impl SideMapping {
    fn new(side: Side, frame: Size) -> Self {
        Self { side, frame }
    }

    /// Length of the edge carrying the arrow.
    fn edge_length(&self) -> f32 {
        if self.side.is_vertical_axis() {
            self.frame.width()
        } else {
            self.frame.height()
        }
    }

    /// Extent of the frame perpendicular to the arrow edge.
    fn depth(&self) -> f32 {
        if self.side.is_vertical_axis() {
            self.frame.height()
        } else {
            self.frame.width()
        }
    }

    fn point(&self, u: f32, v: f32) -> Point {
        match self.side {
            Side::Bottom => Point::new(u, v),
            Side::Top => Point::new(u, self.frame.height() - v),
            Side::Right => Point::new(v, u),
            Side::Left => Point::new(self.frame.width() - v, u),
        }
    }

    fn angle(&self, degrees: f32) -> f32 {
        match self.side {
            Side::Bottom => degrees,
            Side::Top => -degrees,
            Side::Right => 90.0 - degrees,
            Side::Left => degrees + 90.0,
        }
    }

    fn clockwise(&self, canonical: bool) -> bool {
        match self.side {
            Side::Bottom | Side::Left => canonical,
            Side::Top | Side::Right => !canonical,
        }
    }

    fn arc(&self, center_u: f32, center_v: f32, radius: f32, start: f32, end: f32) -> PathSegment {
        PathSegment::ArcTo(ArcSegment::new(
            self.point(center_u, center_v),
            radius,
            self.angle(start),
            self.angle(end),
            self.clockwise(false),
        ))
    }

    fn line(&self, u: f32, v: f32) -> PathSegment {
        PathSegment::LineTo(self.point(u, v))
    }
}

/// Builds the closed outline of a bubble in bubble-local coordinates.
///
/// `frame_size` is the full bubble including the arrow protrusion. The tip
/// sits on the `arrow_side` edge at `anchor_center + longitudinal_offset`
/// along that edge (an x coordinate for top/bottom arrows, a y coordinate for
/// left/right arrows). The body is the frame minus `arrow_height` on the
/// arrow side; each of its corners is rounded by a quarter circle of
/// `corner_radius`.
///
/// Inputs are not validated: a radius larger than half the body or an arrow
/// base that overlaps a corner produces a self-intersecting contour.
///
/// # Examples
///
/// ```
/// # use callout_core::geometry::{Point, Side, Size};
/// # use callout_core::outline::build_outline;
/// let outline = build_outline(Size::new(100.0, 60.0), Side::Bottom, 20.0, 20.0, 10.0, 40.0, 0.0);
/// assert_eq!(outline.start(), Point::new(40.0, 60.0));
/// assert_eq!(outline.arcs().count(), 4);
/// ```
pub fn build_outline(
    frame_size: Size,
    arrow_side: Side,
    arrow_width: f32,
    arrow_height: f32,
    corner_radius: f32,
    anchor_center: f32,
    longitudinal_offset: f32,
) -> Outline {
    let map = SideMapping::new(arrow_side, frame_size);
    let length = map.edge_length();
    let depth = map.depth();
    let body = depth - arrow_height;
    let r = corner_radius;
    let tip = anchor_center + longitudinal_offset;
    let half = arrow_width / 2.0;

    trace!(side:% = arrow_side, length, depth, tip; "Building outline");

    let segments = vec![
        map.line(tip + half, body),
        map.line(length - r, body),
        map.arc(length - r, body - r, r, 90.0, 0.0),
        map.line(length, r),
        map.arc(length - r, r, r, 0.0, 270.0),
        map.line(r, 0.0),
        map.arc(r, r, r, 270.0, 180.0),
        map.line(0.0, body - r),
        map.arc(r, body - r, r, 180.0, 90.0),
        map.line(tip - half, body),
    ];

    Outline::new(map.point(tip, depth), segments)
}

fn normalize_degrees(degrees: f32) -> f32 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 { 0.0 } else { normalized }
}
