//! Drawable Components for Layout Rendering
//!
//! This module provides drawable abstractions for the pieces of a span
//! diagram. All drawables implement the [`Drawable`] trait, which provides a
//! consistent interface for rendering to layered SVG output and calculating
//! size.
//!
//! # Layer-Based Rendering
//!
//! Drawables render to one or more [`RenderLayer`]s, which are automatically
//! ordered during final SVG generation: platforms below the ruler, elements
//! above their hangers, labels on top.

mod element;
mod layer;
mod platform;
mod stroke;
mod text;
mod tick;

pub use element::{Board, Hanger, Rope};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use platform::{Facing, Platform};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{Label, TextDefinition};
pub use tick::{Side, Tick, TickDefinition};

use crate::geometry::{Bounds, Point, Size};

/// Trait for drawable diagram elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// Simple drawables emit to a single layer, while composite drawables
    /// emit different parts to different layers for proper z-ordering.
    ///
    /// # Arguments
    ///
    /// * `position` - The anchor point where this drawable should be rendered.
    ///   Each drawable documents what its anchor is.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the size of this drawable.
    fn size(&self) -> Size;

    /// Returns the bounds of this drawable when rendered at `position`.
    ///
    /// The default treats the anchor as the center of the drawable.
    fn bounds(&self, position: Point) -> Bounds {
        position.to_bounds(self.size())
    }
}
