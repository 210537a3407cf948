//! Dimension ruler ticks with their value labels.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, Label, LayeredOutput, RenderLayer, StrokeDefinition, TextDefinition},
    geometry::{Bounds, Point, Size},
};

/// Side of the ruler a tick points to and its label sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Above,
    Below,
}

/// Shared look of every tick on a ruler.
#[derive(Debug, Clone)]
pub struct TickDefinition {
    length: f32,
    label_offset_above: f32,
    label_offset_below: f32,
    level_step: f32,
    stroke: StrokeDefinition,
    text: TextDefinition,
}

impl TickDefinition {
    pub fn new(stroke: StrokeDefinition, text: TextDefinition) -> Self {
        Self {
            stroke,
            text,
            ..Self::default()
        }
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn level_step(&self) -> f32 {
        self.level_step
    }

    pub fn text(&self) -> &TextDefinition {
        &self.text
    }

    /// Sets the extra distance, in pixels, between consecutive label levels.
    pub fn set_level_step(&mut self, step: f32) {
        self.level_step = step;
    }

    /// Distance from the ruler line to the center of a level-`level` label.
    pub fn label_distance(&self, side: Side, level: usize) -> f32 {
        let base = match side {
            Side::Above => self.label_offset_above,
            Side::Below => self.label_offset_below,
        };
        base + level as f32 * self.level_step
    }
}

impl Default for TickDefinition {
    fn default() -> Self {
        Self {
            length: 10.0,
            label_offset_above: 20.0,
            label_offset_below: 28.0,
            level_step: 34.0,
            stroke: StrokeDefinition::solid(
                Color::new("#333333").expect("valid CSS color"),
                1.0,
            ),
            text: TextDefinition::default(),
        }
    }
}

/// A single tick on the ruler.
///
/// Anchored on the ruler line. The label is printed bottom-to-top and pushed
/// away from the ruler by `level` steps so that crowded labels do not overlap.
#[derive(Debug, Clone)]
pub struct Tick<'a> {
    definition: &'a TickDefinition,
    label: String,
    side: Side,
    level: usize,
}

impl<'a> Tick<'a> {
    pub fn new(definition: &'a TickDefinition, label: impl Into<String>, side: Side) -> Self {
        Self {
            definition,
            label: label.into(),
            side,
            level: 0,
        }
    }

    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    /// Signed direction away from the ruler in SVG y coordinates.
    fn direction(&self) -> f32 {
        match self.side {
            Side::Above => -1.0,
            Side::Below => 1.0,
        }
    }

    fn label_anchor(&self, position: Point) -> Point {
        let distance = self.definition.label_distance(self.side, self.level);
        position.with_y(position.y() + self.direction() * distance)
    }

    fn label(&self) -> Label {
        Label::new(self.definition.text(), self.label.as_str()).with_rotation(-90.0)
    }
}

impl Drawable for Tick<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let end_y = position.y() + self.direction() * self.definition.length();
        let line = svg_element::Line::new()
            .set("x1", position.x())
            .set("y1", position.y())
            .set("x2", position.x())
            .set("y2", end_y)
            .set("class", "tick");
        let line = apply_stroke!(line, &self.definition.stroke);
        output.add_to_layer(RenderLayer::Ruler, Box::new(line));

        output.merge(self.label().render_to_layers(self.label_anchor(position)));
        output
    }

    fn size(&self) -> Size {
        let label = self.label().size();
        let reach = self.definition.label_distance(self.side, self.level) + label.height() / 2.0;
        Size::new(label.width(), reach.max(self.definition.length()))
    }

    fn bounds(&self, position: Point) -> Bounds {
        let size = self.size();
        let top = match self.side {
            Side::Above => position.y() - size.height(),
            Side::Below => position.y(),
        };
        Bounds::new_from_top_left(Point::new(position.x() - size.width() / 2.0, top), size)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn render(tick: &Tick, position: Point) -> String {
        tick.render_to_layers(position)
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn test_label_distance_grows_with_level() {
        let definition = TickDefinition::default();
        assert_approx_eq!(f32, definition.label_distance(Side::Above, 0), 20.0);
        assert_approx_eq!(f32, definition.label_distance(Side::Below, 0), 28.0);
        assert_approx_eq!(f32, definition.label_distance(Side::Above, 2), 88.0);
    }

    #[test]
    fn test_tick_above_points_up() {
        let definition = TickDefinition::default();
        let tick = Tick::new(&definition, "300", Side::Above);
        let svg = render(&tick, Point::new(50.0, 320.0));

        assert!(svg.contains("y2=\"310\""));
        assert!(svg.contains("rotate(-90 50 300)"));
        assert!(svg.contains("class=\"tick\""));
    }

    #[test]
    fn test_tick_below_uses_level() {
        let mut definition = TickDefinition::default();
        definition.set_level_step(10.0);
        let tick = Tick::new(&definition, "75", Side::Below).with_level(1);
        let svg = render(&tick, Point::new(0.0, 100.0));

        assert!(svg.contains("y2=\"110\""));
        assert!(svg.contains("rotate(-90 0 138)"));
    }

    #[test]
    fn test_tick_bounds_extend_away_from_ruler() {
        let definition = TickDefinition::default();
        let above = Tick::new(&definition, "1", Side::Above).bounds(Point::new(0.0, 100.0));
        let below = Tick::new(&definition, "1", Side::Below).bounds(Point::new(0.0, 100.0));

        assert_approx_eq!(f32, above.max_y(), 100.0);
        assert!(above.min_y() < 100.0);
        assert_approx_eq!(f32, below.min_y(), 100.0);
        assert!(below.max_y() > 100.0);
    }
}
