use svg::node::element as svg_element;

use crate::{
    appearance::{Font, TextAlignment},
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// Pre-wrapped text lines laid out top to bottom inside a frame.
///
/// Lines are aligned horizontally within the frame width according to the
/// [`TextAlignment`]. Wrapping is the caller's job, typically through
/// [`TextMeasurer::wrap_lines`](crate::text::TextMeasurer::wrap_lines).
#[derive(Debug, Clone)]
pub struct Label<'a> {
    lines: Vec<String>,
    font: &'a Font,
    color: Color,
    alignment: TextAlignment,
    line_height: f32,
    size: Size,
}

impl<'a> Label<'a> {
    pub fn new(lines: Vec<String>, font: &'a Font, size: Size) -> Self {
        Self {
            lines,
            font,
            color: Color::default(),
            alignment: TextAlignment::default(),
            line_height: font.size * 1.2,
            size,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn anchor(&self, position: Point) -> (f32, &'static str) {
        match self.alignment {
            TextAlignment::Left => (position.x(), "start"),
            TextAlignment::Center => (position.x() + self.size.width() / 2.0, "middle"),
            TextAlignment::Right => (position.x() + self.size.width(), "end"),
        }
    }
}

impl Drawable for Label<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        if self.lines.is_empty() {
            return output;
        }

        let (x, text_anchor) = self.anchor(position);
        let mut text = svg_element::Text::new("")
            .set("x", x)
            .set("y", position.y())
            .set("text-anchor", text_anchor)
            .set("dominant-baseline", "central")
            .set("font-family", self.font.family.as_str())
            .set("font-size", self.font.size)
            .set("fill", &self.color.opaque())
            .set("fill-opacity", self.color.alpha());

        for (index, line) in self.lines.iter().enumerate() {
            // Each line is centered vertically in its own line box
            let y = position.y() + self.line_height * (index as f32 + 0.5);
            let tspan = svg_element::TSpan::new(line.as_str())
                .set("x", x)
                .set("y", y);
            text = text.add(tspan);
        }

        output.add_to_layer(RenderLayer::Text, Box::new(text));
        output
    }

    fn size(&self) -> Size {
        self.size
    }
}
