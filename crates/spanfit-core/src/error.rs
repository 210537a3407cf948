//! Placement error taxonomy.
//!
//! [`PlacementError`] covers both structurally invalid inputs, which make a
//! placement search meaningless, and the two expected "nothing fits" outcomes
//! that callers turn into a user-visible state instead of a failure.

use thiserror::Error;

/// Errors and non-fatal outcomes of a placement attempt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    /// The resolved element footprint is not positive.
    #[error("invalid element footprint {footprint} mm: must be greater than zero")]
    InvalidFootprint { footprint: f64 },

    /// The allowed margin range is empty, negative or not finite.
    #[error("invalid margin range {min}..{max} mm: expected 0 <= min <= max")]
    InvalidMarginRange { min: f64, max: f64 },

    /// The search finished without any count satisfying the constraints.
    #[error("no feasible placement for the given span and constraints")]
    NoFeasiblePlacement,

    /// An explicitly requested count violates the constraints.
    #[error("requested count {requested} cannot be placed within the constraints")]
    RequestedCountInfeasible { requested: u32 },
}

impl PlacementError {
    /// Returns `true` for errors that make any search meaningless.
    ///
    /// Fatal errors are reported before searching; the remaining variants
    /// are expected outcomes of a completed search.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::InvalidFootprint { .. } | Self::InvalidMarginRange { .. }
        )
    }
}
