//! SVG export of a laid-out scene.
//!
//! The document's view box is the scene container. The backdrop (background
//! fill and anchor outline) renders first, then the bubble group: shadow,
//! body, image and text, each in its own `data-layer` group. A header renders
//! as a placeholder box on the image layer so it follows the bubble. The
//! bubble group carries the resting transform of the appearance, applied
//! around the frame center.

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use callout_core::{
    appearance::Appearance,
    draw::{BubbleShape, Drawable, ImageBox, Label, LayeredOutput, RenderLayer},
    geometry::{Bounds, Point, Transform},
    text::TextMeasurer,
};

use crate::{config::StyleConfig, export, layout::BubbleLayoutResult, scene::Scene};

/// Stroke color of the anchor outline.
const ANCHOR_STROKE: &str = "#4a90d9";

/// Slack added to the wrapping width so text measured at exactly the frame
/// width wraps the same way again.
const WRAP_SLACK: f32 = 0.5;

/// Renders scenes to SVG documents.
#[derive(Debug)]
pub struct SvgExporter<'a, M> {
    measurer: &'a M,
    style: &'a StyleConfig,
}

impl<'a, M: TextMeasurer> SvgExporter<'a, M> {
    pub fn new(measurer: &'a M, style: &'a StyleConfig) -> Self {
        Self { measurer, style }
    }

    /// Builds the SVG document for `scene` laid out as `layout`.
    pub fn render(
        &self,
        scene: &Scene,
        layout: &BubbleLayoutResult,
        appearance: &Appearance,
    ) -> Document {
        let container = scene.container();
        let mut doc = Document::new()
            .set(
                "viewBox",
                (
                    container.min_x(),
                    container.min_y(),
                    container.width(),
                    container.height(),
                ),
            )
            .set("width", container.width())
            .set("height", container.height());

        for node in self.render_backdrop(scene).render() {
            doc = doc.add(node);
        }

        let bubble = self.render_bubble(scene, layout, appearance);
        let transform = appearance.animation.final_transform;
        let mut group = svg_element::Group::new().set("class", "callout");
        if !transform.is_identity() {
            let centered = around_center(transform, layout.frame());
            group = group.set("transform", centered.to_svg_matrix());
        }
        for node in bubble.render() {
            group = group.add(node);
        }

        debug!(frame:% = layout.frame(); "SVG document rendered");
        doc.add(group)
    }

    /// Writes `doc` to `writer`.
    pub fn write_document(
        &self,
        doc: &Document,
        writer: impl std::io::Write,
    ) -> Result<(), export::Error> {
        svg::write(writer, doc)?;
        info!("SVG document written");
        Ok(())
    }

    fn render_backdrop(&self, scene: &Scene) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let container = scene.container();

        if let Some(background) = self.style.background_color() {
            let rect = svg_element::Rectangle::new()
                .set("x", container.min_x())
                .set("y", container.min_y())
                .set("width", container.width())
                .set("height", container.height())
                .set("fill", &background.opaque())
                .set("fill-opacity", background.alpha());
            output.add_to_layer(RenderLayer::Backdrop, Box::new(rect));
        }

        if self.style.show_anchor() {
            let anchor = scene.anchor();
            let rect = svg_element::Rectangle::new()
                .set("x", anchor.min_x())
                .set("y", anchor.min_y())
                .set("width", anchor.width())
                .set("height", anchor.height())
                .set("fill", "none")
                .set("stroke", ANCHOR_STROKE)
                .set("stroke-dasharray", "4 2");
            output.add_to_layer(RenderLayer::Backdrop, Box::new(rect));
        }

        output
    }

    fn render_bubble(
        &self,
        scene: &Scene,
        layout: &BubbleLayoutResult,
        appearance: &Appearance,
    ) -> LayeredOutput {
        let style = &appearance.style;
        let frame = layout.frame();
        let mut output = LayeredOutput::new();

        let shape = BubbleShape::new(layout.outline(), frame.to_size(), style.fill_color)
            .with_shadow(&style.shadow);
        output.merge(shape.render_to_layers(frame.min_point()));

        if let (Some(image), Some(bounds)) = (scene.image(), layout.image_in_container()) {
            let image_box = ImageBox::new(bounds.to_size()).with_href(image.href());
            output.merge(image_box.render_to_layers(bounds.min_point()));
        }

        if let Some(header) = layout.header() {
            output.merge(ImageBox::new(header.to_size()).render_to_layers(header.min_point()));
        }

        let text = layout.text_in_container();
        let lines = self.measurer.wrap_lines(
            scene.text(),
            &style.font,
            Some(text.width() + WRAP_SLACK),
        );
        let line_height = self.measurer.line_height(&style.font);
        let label = Label::new(lines, &style.font, text.to_size())
            .with_color(style.text_color)
            .with_alignment(style.alignment)
            .with_line_height(line_height);

        // Center the block of lines vertically in the text frame
        let block_height = label.lines().len() as f32 * line_height;
        let top = text
            .min_point()
            .add_point(Point::new(0.0, (text.height() - block_height) / 2.0));
        output.merge(label.render_to_layers(top));

        output
    }
}

/// Conjugates `transform` so it applies around the center of `frame`.
fn around_center(transform: Transform, frame: Bounds) -> Transform {
    let center = frame.center();
    Transform::translate(-center.x(), -center.y())
        .then(transform)
        .then(Transform::translate(center.x(), center.y()))
}
