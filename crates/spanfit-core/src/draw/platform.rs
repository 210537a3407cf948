//! End platforms drawn as half discs.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Bounds, Point, Size},
};

/// Direction the curved face of a platform points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    /// Curved face toward decreasing x (right-hand platform).
    Left,
    /// Curved face toward increasing x (left-hand platform).
    Right,
}

/// A circular platform seen from the side of the span.
///
/// Only the half facing the span is drawn; the flat face lies on the platform
/// axis. The anchor passed to [`Drawable::render_to_layers`] is the center of
/// the platform (a point on its axis).
#[derive(Debug, Clone)]
pub struct Platform {
    radius: f32,
    facing: Facing,
    fill: Color,
    stroke: StrokeDefinition,
    axis_overhang: f32,
}

impl Platform {
    /// Creates a platform with the given radius in pixels.
    pub fn new(radius: f32, facing: Facing, fill: Color, stroke: StrokeDefinition) -> Self {
        Self {
            radius,
            facing,
            fill,
            stroke,
            axis_overhang: 12.0,
        }
    }

    /// SVG path data of the half disc.
    fn path_data(&self, center: Point) -> String {
        let (cx, cy, r) = (center.x(), center.y(), self.radius);
        let sweep = match self.facing {
            Facing::Right => 1,
            Facing::Left => 0,
        };
        format!(
            "M {cx} {} A {r} {r} 0 0 {sweep} {cx} {} L {cx} {} Z",
            cy - r,
            cy + r,
            cy - r
        )
    }
}

impl Drawable for Platform {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        if self.radius <= 0.0 {
            return output;
        }

        let body = svg_element::Path::new()
            .set("d", self.path_data(position))
            .set("class", "platform")
            .set("fill", self.fill.to_string())
            .set("fill-opacity", self.fill.alpha());
        let body = apply_stroke!(body, &self.stroke);
        output.add_to_layer(RenderLayer::Platform, Box::new(body));

        let axis_stroke = StrokeDefinition::center_line(self.stroke.color(), 1.0);
        let reach = self.radius + self.axis_overhang;
        let axis = svg_element::Line::new()
            .set("x1", position.x())
            .set("y1", position.y() - reach)
            .set("x2", position.x())
            .set("y2", position.y() + reach);
        let axis = apply_stroke!(axis, &axis_stroke);
        output.add_to_layer(RenderLayer::Axis, Box::new(axis));

        output
    }

    fn size(&self) -> Size {
        Size::new(self.radius, 2.0 * self.radius)
    }

    fn bounds(&self, position: Point) -> Bounds {
        let top_left = match self.facing {
            Facing::Right => Point::new(position.x(), position.y() - self.radius),
            Facing::Left => Point::new(position.x() - self.radius, position.y() - self.radius),
        };
        Bounds::new_from_top_left(top_left, self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(facing: Facing) -> Platform {
        Platform::new(
            50.0,
            facing,
            Color::new("#cfe2ff").unwrap(),
            StrokeDefinition::solid(Color::new("#2563eb").unwrap(), 2.0),
        )
    }

    #[test]
    fn test_path_sweep_follows_facing() {
        let center = Point::new(100.0, 200.0);
        assert_eq!(
            platform(Facing::Right).path_data(center),
            "M 100 150 A 50 50 0 0 1 100 250 L 100 150 Z"
        );
        assert!(platform(Facing::Left).path_data(center).contains("0 0 0 100 250"));
    }

    #[test]
    fn test_bounds_lie_on_the_facing_side() {
        let center = Point::new(100.0, 200.0);

        let right = platform(Facing::Right).bounds(center);
        assert_eq!(right.min_x(), 100.0);
        assert_eq!(right.max_x(), 150.0);

        let left = platform(Facing::Left).bounds(center);
        assert_eq!(left.min_x(), 50.0);
        assert_eq!(left.max_x(), 100.0);
    }

    #[test]
    fn test_render_emits_body_and_axis() {
        let output = platform(Facing::Right).render_to_layers(Point::new(0.0, 0.0));
        assert_eq!(output.layer_len(RenderLayer::Platform), 1);
        assert_eq!(output.layer_len(RenderLayer::Axis), 1);
    }

    #[test]
    fn test_zero_radius_renders_nothing() {
        let mut empty = platform(Facing::Left);
        empty.radius = 0.0;
        assert!(empty.render_to_layers(Point::default()).is_empty());
    }
}
