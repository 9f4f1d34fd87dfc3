//! Anchor-relative placement and container-inset resolution.
//!
//! The bubble is first placed next to its anchor: flush against the anchor
//! along the arrow axis (separated by the arrow offset) and centered on the
//! anchor along the other axis. Container insets then move or stretch it.
//!
//! Three optional inset sets take part:
//!
//! - `exact` pins the frame to the container inset by those distances and
//!   overrides anchor placement entirely
//! - `min` keeps each edge at least that far inside the container
//! - `max` keeps each edge at most that far from the container, except the
//!   edge facing the anchor, which stays flush with it
//!
//! When bounds conflict, `min` wins over `max` and the leading (left or top)
//! edge wins over the trailing one. Width is fixed once clamped; height may
//! grow but never shrinks below the content height.

use log::{debug, trace};

use callout_core::{
    appearance::BoxStyle,
    geometry::{Bounds, Insets, Side, Size, non_negative},
};

/// How an axis may change size while resolving edge bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SizePolicy {
    /// Size is kept exactly.
    Fixed,
    /// Size may grow but not shrink.
    AtLeast,
}

/// One end of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisEnd {
    Leading,
    Trailing,
}

/// The end of the arrow axis that faces the anchor, if `arrow_side` lies on
/// the requested axis.
fn anchored_end(arrow_side: Side, horizontal: bool) -> Option<AxisEnd> {
    match (arrow_side, horizontal) {
        (Side::Left, true) | (Side::Top, false) => Some(AxisEnd::Leading),
        (Side::Right, true) | (Side::Bottom, false) => Some(AxisEnd::Trailing),
        _ => None,
    }
}

/// Lower and upper edge bounds on one axis, in absolute coordinates.
#[derive(Debug, Clone, Copy)]
struct AxisBounds {
    container_start: f32,
    container_end: f32,
    /// The end held against the anchor; `max` leaves it alone.
    anchored: Option<AxisEnd>,
    /// `(leading, trailing)` distances of the `min` insets.
    min: Option<(f32, f32)>,
    /// `(leading, trailing)` distances of the `max` insets.
    max: Option<(f32, f32)>,
}

impl AxisBounds {
    fn horizontal(container: Bounds, style: &BoxStyle, arrow_side: Side) -> Self {
        Self {
            container_start: container.min_x(),
            container_end: container.max_x(),
            anchored: anchored_end(arrow_side, true),
            min: style.min_insets.map(|i| (i.left(), i.right())),
            max: style.max_insets.map(|i| (i.left(), i.right())),
        }
    }

    fn vertical(container: Bounds, style: &BoxStyle, arrow_side: Side) -> Self {
        Self {
            container_start: container.min_y(),
            container_end: container.max_y(),
            anchored: anchored_end(arrow_side, false),
            min: style.min_insets.map(|i| (i.top(), i.bottom())),
            max: style.max_insets.map(|i| (i.top(), i.bottom())),
        }
    }

    /// Moves the span `start..start + len` to satisfy the edge bounds.
    ///
    /// Returns the new `(start, len)`.
    fn resolve(&self, start: f32, len: f32, policy: SizePolicy) -> (f32, f32) {
        let mut lead = start;
        let mut trail = start + len;

        if let Some((leading, trailing)) = self.max {
            if self.anchored != Some(AxisEnd::Leading) {
                lead = lead.min(self.container_start + leading);
            }
            if self.anchored != Some(AxisEnd::Trailing) {
                trail = trail.max(self.container_end - trailing);
            }
        }
        // Applied second so it wins over `max`
        let (mut lead_pinned, mut trail_pinned) = (false, false);
        if let Some((leading, trailing)) = self.min {
            let min_lead = self.container_start + leading;
            let min_trail = self.container_end - trailing;
            lead_pinned = lead < min_lead;
            trail_pinned = trail > min_trail;
            lead = lead.max(min_lead);
            trail = trail.min(min_trail);
        }

        let size = trail - lead;
        let needs_restore = match policy {
            SizePolicy::Fixed => size != len,
            SizePolicy::AtLeast => size < len,
        };
        if needs_restore {
            let keep_trail = if lead_pinned || trail_pinned {
                !lead_pinned
            } else if let Some(end) = self.anchored {
                end == AxisEnd::Trailing
            } else {
                trail != start + len && lead == start
            };
            if keep_trail {
                lead = trail - len;
            } else {
                trail = lead + len;
            }
        }

        trace!(start, len, lead, trail; "Resolved axis");
        (lead, trail - lead)
    }
}

/// Clamps the width to fit the container reduced by each present inset set.
pub fn clamp_width(width: f32, container: Bounds, style: &BoxStyle) -> f32 {
    let clamped = [style.exact_insets, style.min_insets, style.max_insets]
        .into_iter()
        .flatten()
        .fold(width, |width, insets| {
            width.min(container.width() - insets.horizontal_sum())
        });
    non_negative(clamped)
}

/// Places the bubble against its anchor, before any inset is applied.
pub fn anchor_frame(anchor: Bounds, size: Size, arrow_side: Side, arrow_offset: f32) -> Bounds {
    let center = anchor.center();
    let centered_x = center.x() - size.width() / 2.0;
    let centered_y = center.y() - size.height() / 2.0;

    let (x, y) = match arrow_side {
        Side::Left => (anchor.max_x() + arrow_offset, centered_y),
        Side::Right => (anchor.min_x() - arrow_offset - size.width(), centered_y),
        Side::Top => (centered_x, anchor.max_y() + arrow_offset),
        Side::Bottom => (centered_x, anchor.min_y() - arrow_offset - size.height()),
    };
    Bounds::new(x, y, size.width(), size.height())
}

/// Resolves the final bubble frame in container coordinates.
pub fn resolve_frame(
    anchor: Bounds,
    container: Bounds,
    size: Size,
    arrow_side: Side,
    arrow_offset: f32,
    style: &BoxStyle,
) -> Bounds {
    if let Some(exact) = style.exact_insets {
        let frame = container.inset_by(exact);
        debug!(frame:% = frame; "Frame pinned by exact insets");
        return frame;
    }

    let width = clamp_width(size.width(), container, style);
    let placed = anchor_frame(anchor, Size::new(width, size.height()), arrow_side, arrow_offset);

    if style.min_insets.is_none() && style.max_insets.is_none() {
        return placed;
    }

    let (x, width) = AxisBounds::horizontal(container, style, arrow_side).resolve(
        placed.min_x(),
        placed.width(),
        SizePolicy::Fixed,
    );
    let (y, height) = AxisBounds::vertical(container, style, arrow_side).resolve(
        placed.min_y(),
        placed.height(),
        SizePolicy::AtLeast,
    );

    let frame = Bounds::new(x, y, width, height);
    debug!(placed:% = placed, frame:% = frame; "Frame adjusted by container insets");
    frame
}

/// Distances from each frame edge to the matching container edge.
///
/// Positive values mean the edge lies inside the container.
pub fn effective_distances(frame: Bounds, container: Bounds) -> Insets {
    Insets::new(
        frame.min_y() - container.min_y(),
        container.max_x() - frame.max_x(),
        container.max_y() - frame.max_y(),
        frame.min_x() - container.min_x(),
    )
}
