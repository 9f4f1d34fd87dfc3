//! Bubble layout: sizing, placement and outline construction.
//!
//! [`LayoutEngine::compute_layout`] turns an anchor rectangle, a container
//! rectangle, the tooltip content and an [`Appearance`] into a
//! [`BubbleLayoutResult`]. The computation runs in four steps:
//!
//! 1. **Sizing** - the intrinsic bubble size from the measured text, the
//!    image spec and the arrow.
//! 2. **Placement** - the bubble is placed next to the anchor, then moved or
//!    stretched by the container insets.
//! 3. **Sub-placement** - body, image and text rectangles inside the bubble.
//! 4. **Outline** - the closed bubble-plus-arrow contour with the tip at the
//!    anchor's center.
//!
//! The engine is a pure function of its inputs. Malformed appearance values
//! and negative rectangle sizes are clamped, so it always produces a result.

mod constraints;
mod placement;
mod sizing;

use log::{debug, info};

use callout_core::{
    appearance::Appearance,
    geometry::{Bounds, Insets, Point, Side, Size},
    outline::{Outline, build_outline},
    text::TextMeasurer,
};

/// Default wrapping width for text, in layout units.
pub const DEFAULT_MAX_TEXT_WIDTH: f32 = 200.0;

/// Gap between a header's bottom edge and the bubble's top edge.
pub const HEADER_SPACING: f32 = 8.0;

/// What goes inside a bubble.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipContent<'a> {
    text: &'a str,
    image: Option<Size>,
    header: Option<Size>,
    anchor_offset: f32,
}

impl<'a> TooltipContent<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            image: None,
            header: None,
            anchor_offset: 0.0,
        }
    }

    /// Adds a header of the given size, pinned above the bubble.
    pub fn with_header(mut self, size: Size) -> Self {
        self.header = Some(size);
        self
    }

    /// Adds an image of the given intrinsic size.
    pub fn with_image(mut self, size: Size) -> Self {
        self.image = Some(size);
        self
    }

    /// Moves the arrow tip along the anchor edge, away from the anchor's center.
    pub fn with_anchor_offset(mut self, offset: f32) -> Self {
        self.anchor_offset = offset;
        self
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn image(&self) -> Option<Size> {
        self.image
    }

    pub fn header(&self) -> Option<Size> {
        self.header
    }

    pub fn anchor_offset(&self) -> f32 {
        self.anchor_offset
    }
}

/// Geometry of one laid-out bubble.
///
/// The frame and header are in container coordinates. Everything else is
/// local to the frame, with the origin at its top-left corner; the
/// `*_in_container` helpers translate them.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleLayoutResult {
    frame: Bounds,
    arrow_side: Side,
    body: Bounds,
    image_slot: Option<Bounds>,
    image: Option<Bounds>,
    text: Bounds,
    header: Option<Bounds>,
    outline: Outline,
}

impl BubbleLayoutResult {
    /// The bubble frame, arrow included, in container coordinates.
    pub fn frame(&self) -> Bounds {
        self.frame
    }

    pub fn arrow_side(&self) -> Side {
        self.arrow_side
    }

    /// The rounded body without the arrow strip.
    pub fn body(&self) -> Bounds {
        self.body
    }

    /// The space reserved for the image, sized by the image spec.
    pub fn image_slot(&self) -> Option<Bounds> {
        self.image_slot
    }

    /// The image itself, aspect-fitted and centered inside its slot.
    pub fn image(&self) -> Option<Bounds> {
        self.image
    }

    pub fn text(&self) -> Bounds {
        self.text
    }

    /// The header in container coordinates: horizontally centered on the
    /// frame, its bottom edge [`HEADER_SPACING`] above the frame's top.
    pub fn header(&self) -> Option<Bounds> {
        self.header
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// The arrow tip in local coordinates.
    pub fn tip(&self) -> Point {
        self.outline.start()
    }

    pub fn body_in_container(&self) -> Bounds {
        self.body.translate(self.frame.min_point())
    }

    pub fn image_in_container(&self) -> Option<Bounds> {
        self.image.map(|image| image.translate(self.frame.min_point()))
    }

    pub fn text_in_container(&self) -> Bounds {
        self.text.translate(self.frame.min_point())
    }

    pub fn outline_in_container(&self) -> Outline {
        self.outline.translate(self.frame.min_point())
    }

    /// Distances from each frame edge to the matching edge of `container`.
    pub fn container_distances(&self, container: Bounds) -> Insets {
        constraints::effective_distances(self.frame, container)
    }
}

/// Computes bubble layouts with a text measurer.
#[derive(Debug, Clone)]
pub struct LayoutEngine<M> {
    measurer: M,
    max_text_width: f32,
}

impl<M: TextMeasurer> LayoutEngine<M> {
    pub fn new(measurer: M) -> Self {
        Self {
            measurer,
            max_text_width: DEFAULT_MAX_TEXT_WIDTH,
        }
    }

    /// Sets the width text wraps at when it is not bounded by an image.
    pub fn with_max_text_width(mut self, width: f32) -> Self {
        self.max_text_width = width.max(0.0);
        self
    }

    pub fn max_text_width(&self) -> f32 {
        self.max_text_width
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Lays out one bubble.
    ///
    /// `anchor` and `container` share one coordinate space; the resulting
    /// frame is expressed in it too.
    pub fn compute_layout(
        &self,
        anchor: Bounds,
        container: Bounds,
        content: &TooltipContent<'_>,
        appearance: &Appearance,
    ) -> BubbleLayoutResult {
        let appearance = appearance.sanitized();
        let arrow = &appearance.arrow;
        info!(arrow_side:% = arrow.side, has_image = content.image.is_some(); "Computing bubble layout");

        let size = sizing::bubble_size(
            &self.measurer,
            content.text,
            content.image.is_some(),
            &appearance,
            self.max_text_width,
        );
        debug!(width = size.width(), height = size.height(); "Bubble size");

        let frame = constraints::resolve_frame(
            anchor,
            container,
            size,
            arrow.side,
            arrow.offset,
            &appearance.style,
        );

        let local_size = frame.to_size();
        let body = placement::body_bounds(local_size, arrow.side, arrow.height);
        let image_slot = content
            .image
            .map(|_| placement::image_slot(body, &appearance.image));
        let image = image_slot
            .zip(content.image)
            .map(|(slot, intrinsic)| placement::fit_image(slot, intrinsic));
        let text = placement::text_frame(
            body,
            image_slot.map(|slot| (appearance.image.side, slot)),
            appearance.style.text_insets,
        );

        let anchor_center = if arrow.side.is_vertical_axis() {
            anchor.center().x() - frame.min_x()
        } else {
            anchor.center().y() - frame.min_y()
        };
        let outline = build_outline(
            local_size,
            arrow.side,
            arrow.width,
            arrow.height,
            appearance.style.corner_radius,
            anchor_center,
            content.anchor_offset,
        );

        let header = content
            .header
            .map(|size| placement::header_bounds(frame, size, HEADER_SPACING));

        debug!(frame:% = frame, text:% = text; "Bubble layout computed");

        BubbleLayoutResult {
            frame,
            arrow_side: arrow.side,
            body,
            image_slot,
            image,
            text,
            header,
            outline,
        }
    }
}
