//! Image and text placement inside the bubble, in bubble-local coordinates.
//!
//! Everything is positioned relative to the body: the bubble frame minus the
//! arrow strip. Anchoring the image to a body edge accounts for an arrow on
//! that same side, and centering on the body nudges the image by half the
//! arrow height when the arrow sits at one end of the perpendicular axis.

use callout_core::{
    appearance::ImageSpec,
    geometry::{Bounds, Insets, Point, Side, Size},
};

/// Returns the body rectangle: the local frame without the arrow strip.
pub fn body_bounds(frame_size: Size, arrow_side: Side, arrow_height: f32) -> Bounds {
    Bounds::new_from_top_left(Point::default(), frame_size).shrink_side(arrow_side, arrow_height)
}

/// The slot reserved for the image: the image spec's full size, anchored to
/// the body edge on `spec.side` with `spec.offset` margin and centered on the
/// other axis.
pub fn image_slot(body: Bounds, spec: &ImageSpec) -> Bounds {
    let size = Size::new(spec.width, spec.height);
    let center = body.center();
    let centered_x = center.x() - size.width() / 2.0;
    let centered_y = center.y() - size.height() / 2.0;

    let (x, y) = match spec.side {
        Side::Left => (body.min_x() + spec.offset, centered_y),
        Side::Right => (body.max_x() - spec.offset - size.width(), centered_y),
        Side::Top => (centered_x, body.min_y() + spec.offset),
        Side::Bottom => (centered_x, body.max_y() - spec.offset - size.height()),
    };
    Bounds::new(x, y, size.width(), size.height())
}

/// Fits an image of `intrinsic` size into `slot`, preserving aspect ratio and
/// centering it.
pub fn fit_image(slot: Bounds, intrinsic: Size) -> Bounds {
    let fitted = intrinsic.fit_within(slot.to_size());
    let center = slot.center();
    Bounds::new(
        center.x() - fitted.width() / 2.0,
        center.y() - fitted.height() / 2.0,
        fitted.width(),
        fitted.height(),
    )
}

/// A header of `size` above `frame`, horizontally centered on it with
/// `spacing` between its bottom edge and the frame's top. Unlike the other
/// placements this works in the frame's own coordinate space.
pub fn header_bounds(frame: Bounds, size: Size, spacing: f32) -> Bounds {
    let width = size.width().max(0.0);
    let height = size.height().max(0.0);
    Bounds::new(
        frame.center().x() - width / 2.0,
        frame.min_y() - spacing - height,
        width,
        height,
    )
}

/// The text frame.
///
/// Without an image the text fills the body within the text insets. Beside
/// a left or right image it spans the image slot vertically and fills the
/// remaining width. Above or below a top or bottom image it spans the slot
/// horizontally and fills the space up to the far body edge.
pub fn text_frame(body: Bounds, image: Option<(Side, Bounds)>, insets: Insets) -> Bounds {
    match image {
        None => body.inset_by(insets),
        Some((Side::Left, slot)) => Bounds::from_edges(
            slot.max_x() + insets.left(),
            slot.min_y(),
            body.max_x() - insets.right(),
            slot.max_y(),
        ),
        Some((Side::Right, slot)) => Bounds::from_edges(
            body.min_x() + insets.left(),
            slot.min_y(),
            slot.min_x() - insets.right(),
            slot.max_y(),
        ),
        Some((Side::Top, slot)) => Bounds::from_edges(
            slot.min_x(),
            slot.max_y() + insets.top(),
            slot.max_x(),
            body.max_y() - insets.bottom(),
        ),
        Some((Side::Bottom, slot)) => Bounds::from_edges(
            slot.min_x(),
            body.min_y() + insets.top(),
            slot.max_x(),
            slot.min_y() - insets.bottom(),
        ),
    }
}
