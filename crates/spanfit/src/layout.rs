//! Placement and projection of elements across a span.
//!
//! This module turns a parsed layout description into a [`Plan`]: how many
//! elements fit, with which margin and gap, and where each element's
//! reference points land along the span.
//!
//! # Pipeline Position
//!
//! ```text
//! LayoutInput
//!     ↓ footprint + Problem
//! solver (autofit or requested count, via Session)
//!     ↓ Solution
//! projector
//!     ↓ Projection
//! Plan → export / summary
//! ```
//!
//! # Submodules
//!
//! - [`solver`] - Feasibility arithmetic and the autofit policies
//! - [`session`] - Caller-owned memory of the last accepted count and the
//!   fallback for infeasible requests
//! - [`projector`] - Absolute reference points and label leveling

pub mod projector;
pub mod session;
pub mod solver;

use log::{debug, info};

use spanfit_core::{
    error::PlacementError,
    semantic::{Constraints, ElementSpec, Platforms, Span},
};

use crate::input::LayoutInput;
use projector::Projection;
use session::Session;
use solver::{Problem, Solution, Solver};

/// A solved layout, ready to be rendered or summarized.
///
/// Reference points are in the span frame: the left inner edge is 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    platforms: Platforms,
    span: Span,
    element: ElementSpec,
    constraints: Constraints,
    requested: Option<u32>,
    solution: Solution,
    projection: Projection,
}

impl Plan {
    /// Builds a plan for `input` around an already computed solution.
    pub fn new(input: &LayoutInput, solution: Solution) -> Self {
        let span = input.span();
        let projection = projector::project_in_span_frame(
            &solution,
            input.element(),
            input.platforms(),
            &span,
        );

        Self {
            platforms: *input.platforms(),
            span,
            element: *input.element(),
            constraints: *input.constraints(),
            requested: input.count(),
            solution,
            projection,
        }
    }

    pub fn platforms(&self) -> &Platforms {
        &self.platforms
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn element(&self) -> &ElementSpec {
        &self.element
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// The count asked for in the input, if any.
    pub fn requested(&self) -> Option<u32> {
        self.requested
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Returns `true` when no element could be placed.
    pub fn is_empty(&self) -> bool {
        !self.solution.is_feasible()
    }
}

/// Solves `input` and projects the result.
///
/// Without a requested count the solver's autofit policy picks one; with a
/// requested count the session's fallback policy decides what happens when
/// it does not fit. The session remembers the accepted count.
///
/// # Errors
///
/// Returns the fatal [`PlacementError`]s for invalid input, and
/// [`PlacementError::NoFeasiblePlacement`] or
/// [`PlacementError::RequestedCountInfeasible`] when nothing acceptable fits.
pub fn plan(
    input: &LayoutInput,
    solver: &Solver,
    session: &mut Session,
) -> Result<Plan, PlacementError> {
    let problem = Problem::from_parts(&input.span(), input.element(), input.constraints())?;
    debug!(
        edges = problem.edges(),
        footprint = problem.footprint(),
        target_gap = problem.target_gap();
        "Placement problem built"
    );

    let solution = match input.count() {
        Some(requested) => session.request(solver, &problem, requested)?,
        None => {
            let solution = session.autofit(solver, &problem);
            if !solution.is_feasible() {
                return Err(PlacementError::NoFeasiblePlacement);
            }
            solution
        }
    };

    info!(
        count = solution.count(),
        margin = solution.margin(),
        gap = solution.gap();
        "Placement solved"
    );

    Ok(Plan::new(input, solution))
}
