use svg::node::element as svg_element;

use crate::{
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

const PLACEHOLDER_FILL: &str = "#e0e0e0";
const PLACEHOLDER_STROKE: &str = "#9e9e9e";

/// An image slot inside the bubble.
///
/// Renders an SVG `<image>` when a reference is known and a neutral
/// placeholder box otherwise. Images are never decoded; the caller supplies
/// the size.
#[derive(Debug, Clone)]
pub struct ImageBox<'a> {
    size: Size,
    href: Option<&'a str>,
}

impl<'a> ImageBox<'a> {
    pub fn new(size: Size) -> Self {
        Self { size, href: None }
    }

    pub fn with_href(mut self, href: Option<&'a str>) -> Self {
        self.href = href;
        self
    }
}

impl Drawable for ImageBox<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let node: Box<dyn svg::Node> = match self.href {
            Some(href) => Box::new(
                svg_element::Image::new()
                    .set("href", href)
                    .set("x", position.x())
                    .set("y", position.y())
                    .set("width", self.size.width())
                    .set("height", self.size.height())
                    .set("preserveAspectRatio", "xMidYMid meet"),
            ),
            None => Box::new(
                svg_element::Rectangle::new()
                    .set("x", position.x())
                    .set("y", position.y())
                    .set("width", self.size.width())
                    .set("height", self.size.height())
                    .set("fill", PLACEHOLDER_FILL)
                    .set("stroke", PLACEHOLDER_STROKE)
                    .set("rx", 4.0),
            ),
        };
        output.add_to_layer(RenderLayer::Image, node);
        output
    }

    fn size(&self) -> Size {
        self.size
    }
}
