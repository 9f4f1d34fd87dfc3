//! Drawable pieces of a callout.
//!
//! Each piece knows its size and renders itself into a [`LayeredOutput`] at
//! a given top-left position:
//!
//! - [`BubbleShape`] - the filled outline and its drop shadow
//! - [`ImageBox`] - an image reference or a placeholder box
//! - [`Label`] - pre-wrapped text lines aligned inside a frame

mod bubble;
mod image;
mod label;
mod layer;

pub use bubble::BubbleShape;
pub use image::ImageBox;
pub use label::Label;
pub use layer::{LayeredOutput, RenderLayer, SvgNode};

use crate::geometry::{Point, Size};

/// Something that can render itself into layered SVG output.
pub trait Drawable {
    /// Renders the drawable with its top-left corner at `position`.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// The size the drawable occupies.
    fn size(&self) -> Size;
}
