use svg::node::element as svg_element;

use crate::{
    appearance::Shadow,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
    outline::Outline,
};

/// The filled bubble outline, arrow included, with an optional drop shadow.
///
/// The outline is expected in bubble-local coordinates.
#[derive(Debug, Clone)]
pub struct BubbleShape<'a> {
    outline: &'a Outline,
    size: Size,
    fill: Color,
    shadow: Option<&'a Shadow>,
}

impl<'a> BubbleShape<'a> {
    pub fn new(outline: &'a Outline, size: Size, fill: Color) -> Self {
        Self {
            outline,
            size,
            fill,
            shadow: None,
        }
    }

    /// Adds a drop shadow. Shadows with zero opacity are skipped when rendering.
    pub fn with_shadow(mut self, shadow: &'a Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }
}

impl Drawable for BubbleShape<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        if let Some(shadow) = self.shadow.filter(|shadow| shadow.opacity > 0.0) {
            let shadow_path = svg_element::Path::new()
                .set(
                    "d",
                    self.outline
                        .translate(position.add_point(shadow.offset))
                        .to_svg_data(),
                )
                .set("fill", &shadow.color.opaque())
                .set("fill-opacity", shadow.opacity * shadow.color.alpha());
            output.add_to_layer(RenderLayer::Shadow, Box::new(shadow_path));
        }

        let path = svg_element::Path::new()
            .set("d", self.outline.translate(position).to_svg_data())
            .set("fill", &self.fill.opaque())
            .set("fill-opacity", self.fill.alpha());
        output.add_to_layer(RenderLayer::Bubble, Box::new(path));

        output
    }

    fn size(&self) -> Size {
        self.size
    }
}
