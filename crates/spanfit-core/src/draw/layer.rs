//! Z-ordering of drawn nodes.
//!
//! Drawables do not render straight into the document. They tag each node
//! with a [`RenderLayer`] and hand back a [`LayeredOutput`]; the exporter
//! merges the outputs of all drawables and renders them once, so a hanger
//! line added after a board still ends up underneath it.
//!
//! ```
//! # use spanfit_core::draw::{LayeredOutput, RenderLayer};
//! # use svg::node::element::{Line, Rectangle};
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Element, Box::new(Rectangle::new()));
//! output.add_to_layer(RenderLayer::Hanger, Box::new(Line::new()));
//!
//! let groups = output.render();
//! assert!(groups[0].to_string().contains("data-layer=\"hanger\""));
//! ```

use svg::node::element as svg_element;

pub type SvgNode = Box<dyn svg::Node>;

/// Drawing layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Dash-dot platform axes, behind the platforms.
    Axis,
    Platform,
    Hanger,
    /// Ropes and board bodies.
    Element,
    Ruler,
    Text,
}

impl RenderLayer {
    /// Value of the group's `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Axis => "axis",
            Self::Platform => "platform",
            Self::Hanger => "hanger",
            Self::Element => "element",
            Self::Ruler => "ruler",
            Self::Text => "text",
        }
    }
}

/// Nodes tagged with their layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

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

    /// Number of nodes tagged with `layer`.
    pub fn layer_len(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(tag, _)| *tag == layer).count()
    }

    /// Groups the nodes into one `<g data-layer="...">` per non-empty layer.
    ///
    /// Groups come out bottom layer first. Inside a group nodes keep the
    /// order they were added in.
    pub fn render(mut self) -> Vec<SvgNode> {
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut layers: Vec<(RenderLayer, Vec<SvgNode>)> = Vec::new();
        for (layer, node) in self.items {
            match layers.last_mut() {
                Some((open, nodes)) if *open == layer => nodes.push(node),
                _ => layers.push((layer, vec![node])),
            }
        }

        layers
            .into_iter()
            .map(|(layer, nodes)| {
                let group = nodes.into_iter().fold(
                    svg_element::Group::new().set("data-layer", layer.name()),
                    |group, node| group.add(node),
                );
                Box::new(group) as SvgNode
            })
            .collect()
    }
}
