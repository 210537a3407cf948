//! SVG rendering of ropes, boards and hangers.

use spanfit_core::{
    draw::{Board, Drawable, Hanger, LayeredOutput, Rope},
    geometry::{Point, Size},
    semantic::{ElementKind, ElementSpec},
};

use super::{BOARD_HEIGHT, Frame, HANG_HEIGHT, ROPE_RADIUS, Svg};
use crate::layout::projector::{PointRole, Projection};

impl Svg {
    /// Draws every placed element on the center line.
    pub(super) fn render_elements(
        &self,
        projection: &Projection,
        element: &ElementSpec,
        frame: &Frame,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let board = Board::new(
            Size::new(frame.length(element.width()), BOARD_HEIGHT),
            self.board_fill,
            self.board_stroke.clone(),
        );
        let rope = Rope::new(ROPE_RADIUS, self.rope_fill);
        // Hangers end on the top face of the board
        let hanger = Hanger::new(HANG_HEIGHT - BOARD_HEIGHT / 2.0, self.hanger_stroke.clone());
        let board_top = frame.y_center - BOARD_HEIGHT / 2.0;

        for placement in projection.placements() {
            match element.kind() {
                ElementKind::Point => {
                    let x = frame.x(placement.primary());
                    output.merge(rope.render_to_layers(Point::new(x, frame.y_center)));
                }
                ElementKind::Bar => {
                    let x = frame.x(placement.center());
                    output.merge(board.render_to_layers(Point::new(x, frame.y_center)));
                }
                ElementKind::SuspendedBar => {
                    let x = frame.x(placement.center());
                    output.merge(board.render_to_layers(Point::new(x, frame.y_center)));

                    for role in [PointRole::LeftHanger, PointRole::RightHanger] {
                        if let Some(position) = placement.point(role) {
                            let anchor = Point::new(frame.x(position), board_top);
                            output.merge(hanger.render_to_layers(anchor));
                        }
                    }
                }
            }
        }

        output
    }
}
