//! Outline strokes and the [`apply_stroke!`](crate::apply_stroke!) macro.
//!
//! ```
//! use spanfit_core::{color::Color, draw::StrokeDefinition};
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::solid(Color::new("#2563eb").unwrap(), 2.0);
//! let edge = svg_element::Line::new().set("x1", 0).set("x2", 10);
//! let edge = spanfit_core::apply_stroke!(edge, &stroke);
//! assert!(edge.to_string().contains("stroke-width=\"2\""));
//! ```

use crate::color::Color;

/// Dash pattern of a stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    /// Long dash, dot. Drafting convention for the axis of a round part.
    CenterLine,
}

impl StrokeStyle {
    /// `stroke-dasharray` value, `None` for solid lines.
    pub fn dasharray(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::CenterLine => Some("12,4,2,4"),
        }
    }
}

/// Color, width and dash pattern of an outline.
#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Thin dash-dot stroke for platform axes.
    pub fn center_line(color: Color, width: f32) -> Self {
        Self {
            style: StrokeStyle::CenterLine,
            ..Self::solid(color, width)
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}

/// Sets `stroke`, `stroke-opacity`, `stroke-width` and, for patterned
/// strokes, `stroke-dasharray` on an SVG element.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let stroke = $stroke;
        let element = $element
            .set("stroke", stroke.color().to_string())
            .set("stroke-opacity", stroke.color().alpha())
            .set("stroke-width", stroke.width());

        match stroke.style().dasharray() {
            Some(pattern) => element.set("stroke-dasharray", pattern),
            None => element,
        }
    }};
}
