//! SVG rendering of the dimension ruler.
//!
//! Ticks for ropes and hangers point up, ticks for boards point down, and
//! the inner edges are marked `0` and the span length. Label values are
//! millimeters from the left inner edge.

use svg::node::element as svg_element;

use spanfit_core::{
    apply_stroke,
    draw::{Drawable, LayeredOutput, RenderLayer, Side, Tick},
    geometry::Point,
    semantic::ElementKind,
};

use super::{Extent, Frame, Svg};
use crate::{
    layout::{
        Plan,
        projector::{PointRole, Projection, assign_levels},
    },
    summary::round_to,
};

fn side_of(role: PointRole) -> Side {
    match role {
        PointRole::Rope | PointRole::LeftHanger | PointRole::RightHanger => Side::Above,
        PointRole::BoardEdge => Side::Below,
    }
}

/// A tick waiting for its label level.
#[derive(Debug, Clone, PartialEq)]
struct Mark {
    x: f32,
    label: String,
    side: Side,
}

impl Svg {
    /// Draws the ruler line with all ticks and leveled labels.
    pub(super) fn render_ruler(
        &self,
        plan: &Plan,
        projection: &Projection,
        frame: &Frame,
        extent: &mut Extent,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let (start, end) = (frame.x(projection.inner_left()), frame.x(projection.inner_right()));

        let line = svg_element::Line::new()
            .set("x1", start)
            .set("y1", frame.ruler_y)
            .set("x2", end)
            .set("y2", frame.ruler_y);
        let line = apply_stroke!(line, &self.ruler_stroke);
        output.add_to_layer(RenderLayer::Ruler, Box::new(line));

        // Marks come out left to right and are leveled in that order
        let marks = self.collect_marks(plan, projection, frame);
        for side in [Side::Above, Side::Below] {
            let on_side: Vec<&Mark> = marks.iter().filter(|mark| mark.side == side).collect();

            let positions: Vec<f64> = on_side.iter().map(|mark| f64::from(mark.x)).collect();
            let levels = assign_levels(&positions, f64::from(self.label_spacing));

            for (mark, level) in on_side.into_iter().zip(levels) {
                let tick = Tick::new(&self.ticks, mark.label.as_str(), side).with_level(level);
                let anchor = Point::new(mark.x, frame.ruler_y);
                extent.include(tick.bounds(anchor));
                output.merge(tick.render_to_layers(anchor));
            }
        }

        output
    }

    fn collect_marks(&self, plan: &Plan, projection: &Projection, frame: &Frame) -> Vec<Mark> {
        let origin = projection.inner_left();
        let mark = |position: f64, side: Side| Mark {
            x: frame.x(position),
            label: self.format_length(position - origin),
            side,
        };

        let mut marks = vec![Mark {
            x: frame.x(origin),
            label: "0".to_string(),
            side: Side::Above,
        }];

        for placement in projection.placements() {
            if plan.element().kind() == ElementKind::Bar {
                // Plain boards are dimensioned at their center
                marks.push(mark(placement.center(), Side::Below));
                continue;
            }
            for point in placement.points() {
                marks.push(mark(point.position(), side_of(point.role())));
            }
        }
        marks.push(mark(projection.inner_right(), Side::Above));

        marks
    }

    fn format_length(&self, millimeters: f64) -> String {
        let precision = usize::from(self.precision);
        format!("{:.*}", precision, round_to(millimeters, self.precision))
    }
}
