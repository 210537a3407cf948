//! Projection of a solved placement onto the span axis.
//!
//! [`project`] turns a [`Solution`] into absolute positions for every
//! element reference point, and [`assign_levels`] spreads crowded labels
//! over several rows.
//!
//! Positions are millimeters along the axis that runs from the left platform
//! to the right one. `axis_origin` is the coordinate given to the left
//! platform center, so the left inner edge sits at
//! `axis_origin + left_diameter / 2`:
//!
//! ```text
//!   axis_origin   inner_left                            inner_right
//!        |            |<-margin->[elem]<-gap->[elem]<-margin->|
//!   (  left  )                                            (  right  )
//! ```

use log::trace;

use spanfit_core::semantic::{ElementKind, ElementSpec, Platforms, Span};

use super::solver::Solution;

/// What a reference point marks on its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointRole {
    /// The rope itself.
    Rope,
    /// The leading (left) edge of a board.
    BoardEdge,
    /// The left suspension point of a suspended board.
    LeftHanger,
    /// The right suspension point of a suspended board.
    RightHanger,
}

/// A marked position on the span axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    role: PointRole,
    position: f64,
}

impl ReferencePoint {
    pub fn role(&self) -> PointRole {
        self.role
    }

    pub fn position(&self) -> f64 {
        self.position
    }
}

/// Reference points of one placed element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementPlacement {
    index: usize,
    primary: f64,
    extent: (f64, f64),
    points: Vec<ReferencePoint>,
}

impl ElementPlacement {
    /// Zero-based position of the element in the row.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Start of the element's footprint.
    pub fn primary(&self) -> f64 {
        self.primary
    }

    /// Physical extent of the element along the axis, `(start, end)`.
    ///
    /// For a suspended board this is the whole board, which reaches past
    /// its hangers by the sub offset on both sides.
    pub fn extent(&self) -> (f64, f64) {
        self.extent
    }

    /// Physical center of the element.
    pub fn center(&self) -> f64 {
        (self.extent.0 + self.extent.1) / 2.0
    }

    pub fn points(&self) -> &[ReferencePoint] {
        &self.points
    }

    /// Returns the position of the point with `role`, if the element has one.
    pub fn point(&self, role: PointRole) -> Option<f64> {
        self.points
            .iter()
            .find(|point| point.role == role)
            .map(|point| point.position)
    }
}

/// Absolute positions for a whole row.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    kind: ElementKind,
    axis_origin: f64,
    inner_left: f64,
    inner_right: f64,
    placements: Vec<ElementPlacement>,
}

impl Projection {
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Coordinate of the left platform center.
    pub fn axis_origin(&self) -> f64 {
        self.axis_origin
    }

    pub fn inner_left(&self) -> f64 {
        self.inner_left
    }

    pub fn inner_right(&self) -> f64 {
        self.inner_right
    }

    pub fn placements(&self) -> &[ElementPlacement] {
        &self.placements
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Iterates over every reference point of every element, in row order.
    pub fn reference_points(&self) -> impl Iterator<Item = &ReferencePoint> {
        self.placements
            .iter()
            .flat_map(|placement| placement.points.iter())
    }
}

/// Computes absolute positions for a solved row.
///
/// Element `i` starts its footprint at
/// `inner_left + margin + i * (footprint + gap)`. An empty solution projects
/// to a row without placements.
pub fn project(
    solution: &Solution,
    element: &ElementSpec,
    platforms: &Platforms,
    span: &Span,
    axis_origin: f64,
) -> Projection {
    let inner_left = axis_origin + platforms.left_radius();
    let inner_right = inner_left + span.edges();
    let pitch = solution.footprint() + solution.gap();

    let placements = (0..solution.count() as usize)
        .map(|index| {
            let primary = inner_left + solution.margin() + index as f64 * pitch;
            place(index, primary, solution.footprint(), element)
        })
        .collect::<Vec<_>>();

    trace!(count = placements.len(), inner_left = inner_left, inner_right = inner_right; "Projected row");

    Projection {
        kind: element.kind(),
        axis_origin,
        inner_left,
        inner_right,
        placements,
    }
}

/// Projects with the origin at the left inner edge.
///
/// This is the frame positions are reported in: the first rope of a row
/// sits exactly at the margin.
pub fn project_in_span_frame(
    solution: &Solution,
    element: &ElementSpec,
    platforms: &Platforms,
    span: &Span,
) -> Projection {
    project(solution, element, platforms, span, -platforms.left_radius())
}

fn place(index: usize, primary: f64, footprint: f64, element: &ElementSpec) -> ElementPlacement {
    let point = |role, position| ReferencePoint { role, position };

    let (extent, points) = match element.kind() {
        ElementKind::Point => ((primary, primary), vec![point(PointRole::Rope, primary)]),
        ElementKind::Bar => (
            (primary, primary + element.width()),
            vec![point(PointRole::BoardEdge, primary)],
        ),
        ElementKind::SuspendedBar => {
            let edge = primary - element.sub_offset();
            (
                (edge, edge + element.width()),
                vec![
                    point(PointRole::LeftHanger, primary),
                    point(PointRole::BoardEdge, edge),
                    point(PointRole::RightHanger, primary + footprint),
                ],
            )
        }
    };

    ElementPlacement {
        index,
        primary,
        extent,
        points,
    }
}

/// Assigns each position the lowest row on which it keeps at least
/// `min_spacing` from everything already placed on that row.
///
/// Positions are taken in input order, so the result depends on the order.
/// Two positions exactly `min_spacing` apart share a row.
///
/// # Examples
///
/// ```
/// # use spanfit::layout::projector::assign_levels;
/// let levels = assign_levels(&[0.0, 5.0, 20.0, 8.0], 10.0);
/// assert_eq!(levels, vec![0, 1, 0, 2]);
/// ```
pub fn assign_levels(positions: &[f64], min_spacing: f64) -> Vec<usize> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    positions
        .iter()
        .map(|&position| {
            let free = rows.iter().position(|row| {
                row.iter()
                    .all(|&taken| (taken - position).abs() >= min_spacing)
            });
            match free {
                Some(level) => {
                    rows[level].push(position);
                    level
                }
                None => {
                    rows.push(vec![position]);
                    rows.len() - 1
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use spanfit_core::semantic::{Constraints, SpanInput};

    use super::*;
    use crate::layout::solver::{Problem, Solver};

    fn solve(element: &ElementSpec, edges: f64, constraints: Constraints) -> (Solution, Span) {
        let platforms = Platforms::new(1500.0, 1500.0);
        let span = SpanInput::Edges(edges).resolve(&platforms);
        let problem = Problem::from_parts(&span, element, &constraints).unwrap();
        (Solver::default().autofit(&problem), span)
    }

    #[test]
    fn test_project_suspended_boards_in_span_frame() {
        let element = ElementSpec::suspended_bar(1240.0, 20.0);
        let (solution, span) = solve(&element, 10500.0, Constraints::new(150.0, 200.0, 600.0));
        let platforms = Platforms::new(1500.0, 1500.0);
        let projection = project_in_span_frame(&solution, &element, &platforms, &span);

        assert_eq!(projection.placements().len(), 6);
        assert_approx_eq!(f64, projection.inner_left(), 0.0);
        assert_approx_eq!(f64, projection.inner_right(), 10500.0);

        let first = &projection.placements()[0];
        assert_approx_eq!(f64, first.point(PointRole::LeftHanger).unwrap(), 150.0);
        assert_approx_eq!(f64, first.point(PointRole::BoardEdge).unwrap(), 130.0);
        assert_approx_eq!(f64, first.point(PointRole::RightHanger).unwrap(), 1350.0);

        let second = &projection.placements()[1];
        assert_approx_eq!(f64, second.primary(), 150.0 + 1200.0 + 600.0);
    }

    #[test]
    fn test_project_bars_mark_leading_edge() {
        let element = ElementSpec::bar(1200.0);
        let (solution, span) = solve(&element, 10500.0, Constraints::new(150.0, 200.0, 600.0));
        let platforms = Platforms::new(1500.0, 1500.0);
        let projection = project(&solution, &element, &platforms, &span, 0.0);

        assert_approx_eq!(f64, projection.inner_left(), 750.0);
        let first = &projection.placements()[0];
        assert_eq!(first.points().len(), 1);
        assert_approx_eq!(f64, first.point(PointRole::BoardEdge).unwrap(), 900.0);
        assert_approx_eq!(f64, first.center(), 1500.0);

        let last = projection.placements().last().unwrap();
        assert_approx_eq!(f64, last.extent().1 + solution.margin(), projection.inner_right());
    }

    #[test]
    fn test_project_ropes() {
        let element = ElementSpec::point();
        let (solution, span) = solve(&element, 1000.0, Constraints::new(100.0, 150.0, 200.0));
        let platforms = Platforms::new(1500.0, 1500.0);
        let projection = project_in_span_frame(&solution, &element, &platforms, &span);

        let ropes: Vec<f64> = projection
            .reference_points()
            .map(|point| point.position())
            .collect();
        assert_eq!(ropes, vec![100.0, 300.0, 500.0, 700.0, 900.0]);
        assert!(projection.reference_points().all(|p| p.role() == PointRole::Rope));
    }

    #[test]
    fn test_project_empty_solution() {
        let element = ElementSpec::bar(1200.0);
        let platforms = Platforms::new(1500.0, 1500.0);
        let span = SpanInput::Edges(500.0).resolve(&platforms);
        let projection =
            project_in_span_frame(&Solution::empty(1200.0), &element, &platforms, &span);

        assert!(projection.is_empty());
        assert_approx_eq!(f64, projection.inner_right(), 500.0);
    }

    #[test]
    fn test_assign_levels_greedy_first_fit() {
        assert_eq!(assign_levels(&[], 10.0), Vec::<usize>::new());
        assert_eq!(assign_levels(&[0.0, 20.0, 40.0], 10.0), vec![0, 0, 0]);
        assert_eq!(assign_levels(&[0.0, 1.0, 2.0, 30.0], 10.0), vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_assign_levels_exact_spacing_shares_level() {
        assert_eq!(assign_levels(&[0.0, 10.0], 10.0), vec![0, 0]);
        assert_eq!(assign_levels(&[0.0, 9.999], 10.0), vec![0, 1]);
    }

    #[test]
    fn test_assign_levels_depends_on_order() {
        assert_eq!(assign_levels(&[0.0, 12.0, 6.0], 10.0), vec![0, 0, 1]);
        assert_eq!(assign_levels(&[6.0, 0.0, 12.0], 10.0), vec![0, 1, 1]);
    }
}
