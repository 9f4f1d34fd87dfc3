//! Layer-based rendering for SVG output.
//!
//! Drawables do not append to a document directly. They report which
//! [`RenderLayer`] each SVG node belongs to, and [`LayeredOutput::render`]
//! emits the nodes grouped and sorted bottom to top. This keeps a bubble's
//! shadow underneath every bubble body and every label above its image, no
//! matter in which order the pieces were drawn.
//!
//! # Example
//!
//! ```
//! # use callout_core::draw::{LayeredOutput, RenderLayer};
//! # use svg::node::element::{Path, Text};
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Text, Box::new(Text::new("Hi")));
//! output.add_to_layer(RenderLayer::Bubble, Box::new(Path::new()));
//!
//! // Bubble group first, then text
//! let groups = output.render();
//! assert_eq!(groups.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Z-order layers of a rendered callout.
///
/// Layers render in declaration order: the first variant is at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Anchor highlight and container guides drawn beneath everything
    Backdrop,
    /// Drop shadow of the bubble outline
    Shadow,
    /// Filled bubble outline including the arrow
    Bubble,
    /// Image or image placeholder
    Image,
    Text,
}

impl RenderLayer {
    /// Returns the value of the group's `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Backdrop => "backdrop",
            Self::Shadow => "shadow",
            Self::Bubble => "bubble",
            Self::Image => "image",
            Self::Text => "text",
        }
    }
}

/// SVG nodes tagged with the layer they render on.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to `layer`. Nodes keep their insertion order within a layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Moves every node of `other` into this output.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders the output as one `<g data-layer="...">` per non-empty layer,
    /// bottom layer first.
    pub fn render(mut self) -> Vec<SvgNode> {
        let mut result = Vec::new();
        // Stable, so insertion order survives within each layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut current: Option<(RenderLayer, svg_element::Group)> = None;
        for (layer, node) in self.items {
            current = match current {
                Some((current_layer, group)) if current_layer == layer => {
                    Some((current_layer, group.add(node)))
                }
                finished => {
                    if let Some((_, group)) = finished {
                        result.push(Box::new(group) as SvgNode);
                    }
                    let group = svg_element::Group::new().set("data-layer", layer.name());
                    Some((layer, group.add(node)))
                }
            };
        }
        if let Some((_, group)) = current {
            result.push(Box::new(group) as SvgNode);
        }

        result
    }
}
