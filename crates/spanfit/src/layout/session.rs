//! Caller-owned planning state.
//!
//! The only thing remembered between planning calls is the last accepted
//! count. It lives in a [`Session`] the caller holds and passes in, so two
//! sessions never influence each other.

use std::{fmt, str::FromStr};

use log::{debug, info, warn};
use serde::Deserialize;

use spanfit_core::error::PlacementError;

use super::solver::{Problem, Solution, Solver};

/// What to do when an explicitly requested count does not fit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Try successively smaller counts down to 1.
    #[default]
    Decrement,
    /// Re-solve the last accepted count.
    KeepPrevious,
    /// Let the autofit policy choose.
    Autofit,
    /// Report the failure unchanged.
    Reject,
}

impl FallbackPolicy {
    pub fn name(self) -> &'static str {
        match self {
            Self::Decrement => "decrement",
            Self::KeepPrevious => "keep_previous",
            Self::Autofit => "autofit",
            Self::Reject => "reject",
        }
    }
}

impl FromStr for FallbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "decrement" => Ok(Self::Decrement),
            "keep_previous" => Ok(Self::KeepPrevious),
            "autofit" => Ok(Self::Autofit),
            "reject" => Ok(Self::Reject),
            _ => Err(format!("unknown fallback policy `{s}`")),
        }
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Remembers the last accepted count across planning calls.
#[derive(Debug, Clone, Default)]
pub struct Session {
    last_count: Option<u32>,
    fallback: FallbackPolicy,
}

impl Session {
    pub fn new(fallback: FallbackPolicy) -> Self {
        Self {
            last_count: None,
            fallback,
        }
    }

    /// The count of the last successful plan, if any.
    pub fn last_count(&self) -> Option<u32> {
        self.last_count
    }

    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    /// Forgets the last accepted count.
    pub fn reset(&mut self) {
        self.last_count = None;
    }

    /// Runs autofit and remembers its count when something fits.
    pub fn autofit(&mut self, solver: &Solver, problem: &Problem) -> Solution {
        let solution = solver.autofit(problem);
        if solution.is_feasible() {
            self.accept(&solution);
        }
        solution
    }

    /// Solves for exactly `requested` elements, applying the fallback
    /// policy when that count does not fit.
    ///
    /// Requests below 1 are treated as 1.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::RequestedCountInfeasible`] under
    /// [`FallbackPolicy::Reject`], or when [`FallbackPolicy::KeepPrevious`]
    /// has nothing usable to keep. Returns
    /// [`PlacementError::NoFeasiblePlacement`] when the decrement walk or the
    /// autofit fallback finds nothing.
    pub fn request(
        &mut self,
        solver: &Solver,
        problem: &Problem,
        requested: u32,
    ) -> Result<Solution, PlacementError> {
        let requested = requested.max(1);

        let solution = match solver.solve_for_requested_count(problem, requested) {
            Ok(solution) => solution,
            Err(err) => {
                warn!(requested = requested, fallback = self.fallback.name(); "Requested count does not fit");
                self.fall_back(solver, problem, requested, err)?
            }
        };

        self.accept(&solution);
        Ok(solution)
    }

    /// Requests one element more than the last accepted count.
    ///
    /// Without a previous count this starts from autofit.
    pub fn step_up(&mut self, solver: &Solver, problem: &Problem) -> Result<Solution, PlacementError> {
        match self.last_count {
            Some(count) => self.request(solver, problem, count.saturating_add(1)),
            None => self.autofit_or_fail(solver, problem),
        }
    }

    /// Requests one element fewer than the last accepted count, never
    /// going below 1.
    ///
    /// Without a previous count this starts from autofit.
    pub fn step_down(
        &mut self,
        solver: &Solver,
        problem: &Problem,
    ) -> Result<Solution, PlacementError> {
        match self.last_count {
            Some(count) => self.request(solver, problem, count.saturating_sub(1)),
            None => self.autofit_or_fail(solver, problem),
        }
    }

    fn autofit_or_fail(
        &mut self,
        solver: &Solver,
        problem: &Problem,
    ) -> Result<Solution, PlacementError> {
        let solution = self.autofit(solver, problem);
        if solution.is_feasible() {
            Ok(solution)
        } else {
            Err(PlacementError::NoFeasiblePlacement)
        }
    }

    fn fall_back(
        &self,
        solver: &Solver,
        problem: &Problem,
        requested: u32,
        err: PlacementError,
    ) -> Result<Solution, PlacementError> {
        match self.fallback {
            FallbackPolicy::Decrement => {
                // Nothing above the autofit bound can fit
                let start = (requested - 1).min(problem.count_upper_bound());
                (1..=start)
                    .rev()
                    .find_map(|count| problem.solve_for_count(count))
                    .ok_or(PlacementError::NoFeasiblePlacement)
            }
            FallbackPolicy::KeepPrevious => self
                .last_count
                .and_then(|count| problem.solve_for_count(count))
                .ok_or(err),
            FallbackPolicy::Autofit => {
                let solution = solver.autofit(problem);
                if solution.is_feasible() {
                    Ok(solution)
                } else {
                    Err(PlacementError::NoFeasiblePlacement)
                }
            }
            FallbackPolicy::Reject => Err(err),
        }
    }

    fn accept(&mut self, solution: &Solution) {
        if self.last_count != Some(solution.count()) {
            info!(count = solution.count(), previous:? = self.last_count; "Accepted count");
        } else {
            debug!(count = solution.count(); "Count unchanged");
        }
        self.last_count = Some(solution.count());
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use spanfit_core::semantic::Constraints;

    use super::*;

    fn boards() -> Problem {
        Problem::new(10500.0, 1200.0, &Constraints::new(150.0, 200.0, 600.0)).unwrap()
    }

    fn too_narrow() -> Problem {
        Problem::new(500.0, 1200.0, &Constraints::new(150.0, 200.0, 600.0)).unwrap()
    }

    #[test]
    fn test_autofit_remembers_count() {
        let mut session = Session::default();
        let solution = session.autofit(&Solver::default(), &boards());

        assert_eq!(solution.count(), 6);
        assert_eq!(session.last_count(), Some(6));
    }

    #[test]
    fn test_failed_autofit_keeps_previous_count() {
        let mut session = Session::default();
        session.autofit(&Solver::default(), &boards());
        session.autofit(&Solver::default(), &too_narrow());

        assert_eq!(session.last_count(), Some(6));
    }

    #[test]
    fn test_decrement_walks_down_to_feasible_count() {
        let mut session = Session::new(FallbackPolicy::Decrement);
        let solution = session.request(&Solver::default(), &boards(), 9).unwrap();

        assert_eq!(solution.count(), 6);
        assert_approx_eq!(f64, solution.margin(), 150.0);
        assert_eq!(session.last_count(), Some(6));
    }

    #[test]
    fn test_decrement_reports_no_feasible_placement() {
        let mut session = Session::new(FallbackPolicy::Decrement);
        let err = session
            .request(&Solver::default(), &too_narrow(), 3)
            .unwrap_err();

        assert_eq!(err, PlacementError::NoFeasiblePlacement);
        assert_eq!(session.last_count(), None);
    }

    #[test]
    fn test_reject_returns_requested_error() {
        let mut session = Session::new(FallbackPolicy::Reject);
        let err = session.request(&Solver::default(), &boards(), 9).unwrap_err();

        assert_eq!(err, PlacementError::RequestedCountInfeasible { requested: 9 });
    }

    #[test]
    fn test_keep_previous_resolves_last_count() {
        let solver = Solver::default();
        let mut session = Session::new(FallbackPolicy::KeepPrevious);
        session.request(&solver, &boards(), 4).unwrap();

        let solution = session.request(&solver, &boards(), 9).unwrap();
        assert_eq!(solution.count(), 4);
    }

    #[test]
    fn test_keep_previous_without_history_fails() {
        let mut session = Session::new(FallbackPolicy::KeepPrevious);
        let err = session.request(&Solver::default(), &boards(), 9).unwrap_err();

        assert_eq!(err, PlacementError::RequestedCountInfeasible { requested: 9 });
    }

    #[test]
    fn test_autofit_fallback() {
        let mut session = Session::new(FallbackPolicy::Autofit);
        let solution = session.request(&Solver::default(), &boards(), 9).unwrap();

        assert_eq!(solution.count(), 6);
    }

    #[test]
    fn test_zero_request_is_clamped() {
        let problem = Problem::new(1000.0, 400.0, &Constraints::new(0.0, 500.0, 0.0)).unwrap();
        let mut session = Session::default();
        let solution = session.request(&Solver::default(), &problem, 0).unwrap();

        assert_eq!(solution.count(), 1);
        assert_approx_eq!(f64, solution.margin(), 300.0);
    }

    #[test]
    fn test_step_up_and_down() {
        let solver = Solver::default();
        let mut session = Session::default();

        // No history: starts from autofit
        assert_eq!(session.step_down(&solver, &boards()).unwrap().count(), 6);
        assert_eq!(session.step_down(&solver, &boards()).unwrap().count(), 5);
        assert_eq!(session.step_up(&solver, &boards()).unwrap().count(), 6);
        // Seven does not fit; decrement lands back on six
        assert_eq!(session.step_up(&solver, &boards()).unwrap().count(), 6);
    }

    #[test]
    fn test_step_down_stops_at_one() {
        let problem = Problem::new(1000.0, 400.0, &Constraints::new(0.0, 500.0, 0.0)).unwrap();
        let solver = Solver::default();
        let mut session = Session::default();

        session.request(&solver, &problem, 1).unwrap();
        assert_eq!(session.step_down(&solver, &problem).unwrap().count(), 1);
    }

    #[test]
    fn test_fallback_names_round_trip() {
        for policy in [
            FallbackPolicy::Decrement,
            FallbackPolicy::KeepPrevious,
            FallbackPolicy::Autofit,
            FallbackPolicy::Reject,
        ] {
            assert_eq!(policy.to_string().parse::<FallbackPolicy>(), Ok(policy));
        }
    }
}
