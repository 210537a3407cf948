//! Drawables for the placed elements: ropes, boards and board hangers.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Bounds, Point, Size},
};

/// A rope seen end-on, drawn as a filled dot anchored at its center.
#[derive(Debug, Clone)]
pub struct Rope {
    radius: f32,
    fill: Color,
}

impl Rope {
    pub fn new(radius: f32, fill: Color) -> Self {
        Self { radius, fill }
    }
}

impl Drawable for Rope {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let dot = svg_element::Circle::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("r", self.radius)
            .set("class", "rope")
            .set("fill", self.fill.to_string());
        output.add_to_layer(RenderLayer::Element, Box::new(dot));
        output
    }

    fn size(&self) -> Size {
        Size::new(2.0 * self.radius, 2.0 * self.radius)
    }
}

/// A board seen from the side, drawn as a rounded rectangle anchored at its
/// center.
#[derive(Debug, Clone)]
pub struct Board {
    size: Size,
    corner_radius: f32,
    fill: Color,
    stroke: StrokeDefinition,
}

impl Board {
    pub fn new(size: Size, fill: Color, stroke: StrokeDefinition) -> Self {
        Self {
            size,
            corner_radius: 4.0,
            fill,
            stroke,
        }
    }
}

impl Drawable for Board {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let bounds = self.bounds(position);
        let rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("rx", self.corner_radius)
            .set("class", "board")
            .set("fill", self.fill.to_string());
        let rect = apply_stroke!(rect, &self.stroke);
        output.add_to_layer(RenderLayer::Element, Box::new(rect));
        output
    }

    fn size(&self) -> Size {
        self.size
    }
}

/// A hanger rope of a suspended board.
///
/// Anchored at its lower end, where it meets the top of the board; the line
/// rises by `length` and ends in a small knot.
#[derive(Debug, Clone)]
pub struct Hanger {
    length: f32,
    knot_radius: f32,
    stroke: StrokeDefinition,
}

impl Hanger {
    pub fn new(length: f32, stroke: StrokeDefinition) -> Self {
        Self {
            length,
            knot_radius: 4.0,
            stroke,
        }
    }

    /// Returns the upper end of a hanger anchored at `position`.
    pub fn top(&self, position: Point) -> Point {
        position.with_y(position.y() - self.length)
    }
}

impl Drawable for Hanger {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let top = self.top(position);

        let line = svg_element::Line::new()
            .set("x1", top.x())
            .set("y1", top.y())
            .set("x2", position.x())
            .set("y2", position.y())
            .set("class", "hang");
        let line = apply_stroke!(line, &self.stroke);
        output.add_to_layer(RenderLayer::Hanger, Box::new(line));

        let knot = svg_element::Circle::new()
            .set("cx", top.x())
            .set("cy", top.y())
            .set("r", self.knot_radius)
            .set("fill", self.stroke.color().to_string());
        output.add_to_layer(RenderLayer::Hanger, Box::new(knot));

        output
    }

    fn size(&self) -> Size {
        Size::new(2.0 * self.knot_radius, self.length + self.knot_radius)
    }

    fn bounds(&self, position: Point) -> Bounds {
        let top = self.top(position);
        Bounds::new_from_top_left(
            Point::new(top.x() - self.knot_radius, top.y() - self.knot_radius),
            self.size(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wood() -> (Color, StrokeDefinition) {
        let edge = Color::new("#b36b00").unwrap();
        (Color::new("#ffd580").unwrap(), StrokeDefinition::solid(edge, 1.0))
    }

    #[test]
    fn test_board_rect_is_centered_on_anchor() {
        let (fill, stroke) = wood();
        let board = Board::new(Size::new(120.0, 24.0), fill, stroke);
        let svg: String = board
            .render_to_layers(Point::new(100.0, 200.0))
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect();

        assert!(svg.contains("x=\"40\""));
        assert!(svg.contains("y=\"188\""));
        assert!(svg.contains("width=\"120\""));
    }

    #[test]
    fn test_hanger_rises_from_anchor() {
        let (_, stroke) = wood();
        let hanger = Hanger::new(60.0, stroke);
        let anchor = Point::new(30.0, 188.0);

        assert_eq!(hanger.top(anchor), Point::new(30.0, 128.0));

        let bounds = hanger.bounds(anchor);
        assert_eq!(bounds.max_y(), 188.0);
        assert_eq!(bounds.min_y(), 124.0);
    }

    #[test]
    fn test_hanger_renders_line_and_knot() {
        let (_, stroke) = wood();
        let output = Hanger::new(60.0, stroke).render_to_layers(Point::default());
        assert_eq!(output.layer_len(RenderLayer::Hanger), 2);
    }

    #[test]
    fn test_rope_bounds_centered() {
        let rope = Rope::new(6.0, Color::new("#2b6b6b").unwrap());
        let bounds = rope.bounds(Point::new(10.0, 10.0));
        assert_eq!(bounds.min_x(), 4.0);
        assert_eq!(bounds.max_x(), 16.0);
    }
}
