//! Placement solver.
//!
//! Given a usable span, an element footprint, a target gap and an allowed
//! margin range, the solver decides how many elements fit and which margin
//! and gap they end up with.
//!
//! Every feasible [`Solution`] satisfies
//!
//! ```text
//! edges = 2 * margin + count * footprint + (count - 1) * gap
//! ```
//!
//! with `margin_min <= margin <= margin_max` and `gap >= target_gap` for more
//! than one element. All arithmetic is `f64` and comparisons use unrounded
//! values; rounding for display happens elsewhere.

use std::{fmt, str::FromStr};

use log::{debug, trace};
use serde::Deserialize;

use spanfit_core::{
    error::PlacementError,
    semantic::{Constraints, ElementSpec, Span},
};

/// Upper limit on the number of counts any search will evaluate.
pub const MAX_CANDIDATES: u32 = 100_000;

/// Default weight of the margin term in the [`BestFit`] score.
pub const DEFAULT_TIE_BREAK: f64 = 0.001;

/// A validated placement problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Problem {
    edges: f64,
    footprint: f64,
    target_gap: f64,
    margin_min: f64,
    margin_max: f64,
}

impl Problem {
    /// Creates a problem from a usable span, a resolved footprint and the
    /// spacing constraints.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidFootprint`] for a negative or
    /// non-finite footprint and [`PlacementError::InvalidMarginRange`] for
    /// unusable constraints or a non-finite span.
    pub fn new(edges: f64, footprint: f64, constraints: &Constraints) -> Result<Self, PlacementError> {
        if !footprint.is_finite() || footprint < 0.0 {
            return Err(PlacementError::InvalidFootprint { footprint });
        }
        constraints.validate()?;
        if !edges.is_finite() {
            return Err(PlacementError::InvalidMarginRange {
                min: constraints.margin_min(),
                max: constraints.margin_max(),
            });
        }

        Ok(Self {
            edges: edges.max(0.0),
            footprint,
            target_gap: constraints.target_gap(),
            margin_min: constraints.margin_min(),
            margin_max: constraints.margin_max(),
        })
    }

    /// Resolves the element footprint and builds the problem for `span`.
    ///
    /// The footprint is checked before anything else.
    pub fn from_parts(
        span: &Span,
        element: &ElementSpec,
        constraints: &Constraints,
    ) -> Result<Self, PlacementError> {
        let footprint = element.footprint()?;
        Self::new(span.edges(), footprint, constraints)
    }

    pub fn edges(&self) -> f64 {
        self.edges
    }

    pub fn footprint(&self) -> f64 {
        self.footprint
    }

    pub fn target_gap(&self) -> f64 {
        self.target_gap
    }

    pub fn margin_min(&self) -> f64 {
        self.margin_min
    }

    pub fn margin_max(&self) -> f64 {
        self.margin_max
    }

    /// Middle of the allowed margin range.
    pub fn ideal_margin(&self) -> f64 {
        (self.margin_min + self.margin_max) / 2.0
    }

    /// Solves for exactly `count` elements.
    ///
    /// Returns `None` when `count` elements cannot satisfy the constraints.
    /// A zero count is never feasible.
    ///
    /// With more than one element the target gap is kept and the margin
    /// absorbs the slack, up to `margin_max`. Past that point the margin is
    /// pinned at `margin_max` and the gap grows instead.
    pub fn solve_for_count(&self, count: u32) -> Option<Solution> {
        if count == 0 {
            return None;
        }

        let footprint = self.footprint;
        if count == 1 {
            let margin = (self.edges - footprint) / 2.0;
            return (self.margin_min..=self.margin_max)
                .contains(&margin)
                .then(|| Solution::new(1, margin, 0.0, footprint));
        }

        let n = f64::from(count);
        let occupied = n * footprint;
        let margin_for_target = (self.edges - occupied - (n - 1.0) * self.target_gap) / 2.0;

        if margin_for_target < self.margin_min {
            return None;
        }

        if margin_for_target <= self.margin_max {
            let margin = margin_for_target.max(self.margin_min);
            return Some(Solution::new(count, margin, self.target_gap, footprint));
        }

        let gap = (self.edges - occupied - 2.0 * self.margin_max) / (n - 1.0);
        (gap >= self.target_gap).then(|| Solution::new(count, self.margin_max, gap, footprint))
    }

    /// Bound used by [`MaximizeCount`]: the most elements that could fit at
    /// `margin_min` with gaps of at least `target_gap`.
    ///
    /// Points are spaced by the target gap, counted as at least 1 mm so that
    /// a zero gap still gives a finite bound. Always at least 1 and never
    /// more than [`MAX_CANDIDATES`].
    pub fn count_upper_bound(&self) -> u32 {
        let usable = self.edges - 2.0 * self.margin_min;
        let pitch = self.footprint + self.target_gap;
        if self.footprint <= 0.0 || pitch <= 0.0 {
            return clamp_count((usable / self.target_gap.max(1.0)).floor() + 1.0, 1);
        }
        clamp_count(((usable + self.target_gap) / pitch).floor(), 1)
    }

    /// Bound used by [`BestFit`]: the most footprints that fit between the
    /// minimum margins with no gap at all.
    ///
    /// A zero footprint has no such bound; [`Problem::count_upper_bound`] is
    /// used instead. May be 0 when not even one element fits.
    pub fn count_capacity(&self) -> u32 {
        if self.footprint <= 0.0 {
            return self.count_upper_bound();
        }
        let usable = self.edges - 2.0 * self.margin_min;
        clamp_count((usable / self.footprint).floor(), 0)
    }
}

/// Converts a floating count bound into `min..=MAX_CANDIDATES`.
fn clamp_count(raw: f64, min: u32) -> u32 {
    if raw.is_nan() || raw < f64::from(min) {
        return min;
    }
    // Bounded by MAX_CANDIDATES, so the cast cannot truncate
    raw.min(f64::from(MAX_CANDIDATES)) as u32
}

/// Result of a placement search.
///
/// A `count` of 0 means nothing fits; margin and gap are then 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    count: u32,
    margin: f64,
    gap: f64,
    footprint: f64,
}

impl Solution {
    fn new(count: u32, margin: f64, gap: f64, footprint: f64) -> Self {
        Self {
            count,
            margin,
            gap,
            footprint,
        }
    }

    /// The "nothing fits" result for a given footprint.
    pub fn empty(footprint: f64) -> Self {
        Self::new(0, 0.0, 0.0, footprint)
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }

    pub fn footprint(&self) -> f64 {
        self.footprint
    }

    /// Returns `true` when at least one element is placed.
    pub fn is_feasible(&self) -> bool {
        self.count > 0
    }

    /// Length covered by margins, footprints and gaps.
    ///
    /// Equals the usable span for every feasible solution.
    pub fn covered_length(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let n = f64::from(self.count);
        2.0 * self.margin + n * self.footprint + (n - 1.0) * self.gap
    }
}

/// A strategy for choosing the element count automatically.
pub trait AutofitPolicy: fmt::Debug {
    /// Picks the best feasible solution, or [`Solution::empty`] when no count
    /// in the search range fits.
    fn autofit(&self, problem: &Problem) -> Solution;
}

/// Picks the largest count that fits.
///
/// Counts are tried from [`Problem::count_upper_bound`] downwards and the
/// first feasible one wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaximizeCount;

impl AutofitPolicy for MaximizeCount {
    fn autofit(&self, problem: &Problem) -> Solution {
        let upper = problem.count_upper_bound();
        trace!(upper = upper; "Scanning counts downwards");

        (1..=upper)
            .rev()
            .find_map(|count| problem.solve_for_count(count))
            .unwrap_or_else(|| Solution::empty(problem.footprint()))
    }
}

/// Picks the count whose gap is closest to the target.
///
/// Each feasible count is scored by `|gap - target_gap| + tie_break *
/// |margin - ideal_margin|`. The lowest score wins and equal scores keep the
/// smaller count.
#[derive(Debug, Clone, Copy)]
pub struct BestFit {
    tie_break: f64,
}

impl BestFit {
    pub fn new(tie_break: f64) -> Self {
        Self { tie_break }
    }

    fn score(&self, problem: &Problem, solution: &Solution) -> f64 {
        (solution.gap() - problem.target_gap()).abs()
            + self.tie_break * (solution.margin() - problem.ideal_margin()).abs()
    }
}

impl Default for BestFit {
    fn default() -> Self {
        Self::new(DEFAULT_TIE_BREAK)
    }
}

impl AutofitPolicy for BestFit {
    fn autofit(&self, problem: &Problem) -> Solution {
        let capacity = problem.count_capacity();
        trace!(capacity = capacity; "Scoring counts upwards");

        let mut best: Option<(f64, Solution)> = None;
        for solution in (1..=capacity).filter_map(|count| problem.solve_for_count(count)) {
            let score = self.score(problem, &solution);
            trace!(count = solution.count(), score = score; "Scored candidate");
            if best.is_none_or(|(best_score, _)| score < best_score) {
                best = Some((score, solution));
            }
        }

        best.map_or_else(|| Solution::empty(problem.footprint()), |(_, solution)| solution)
    }
}

/// Available autofit policies, selectable by name from configuration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutofitStrategy {
    /// Place as many elements as possible.
    #[default]
    MaximizeCount,
    /// Place the count whose gap best matches the target.
    BestFit,
}

impl AutofitStrategy {
    pub fn name(self) -> &'static str {
        match self {
            Self::MaximizeCount => "maximize_count",
            Self::BestFit => "best_fit",
        }
    }
}

impl FromStr for AutofitStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maximize_count" => Ok(Self::MaximizeCount),
            "best_fit" => Ok(Self::BestFit),
            _ => Err(format!("unknown autofit strategy `{s}`")),
        }
    }
}

impl fmt::Display for AutofitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Entry point for placement searches.
///
/// Holds the configured autofit policy; requested-count solving does not
/// depend on it.
#[derive(Debug)]
pub struct Solver {
    strategy: AutofitStrategy,
    policy: Box<dyn AutofitPolicy>,
}

impl Solver {
    /// Creates a solver with the default policy settings for `strategy`.
    pub fn new(strategy: AutofitStrategy) -> Self {
        Self::with_tie_break(strategy, DEFAULT_TIE_BREAK)
    }

    /// Creates a solver; `tie_break` only affects [`AutofitStrategy::BestFit`].
    pub fn with_tie_break(strategy: AutofitStrategy, tie_break: f64) -> Self {
        let policy: Box<dyn AutofitPolicy> = match strategy {
            AutofitStrategy::MaximizeCount => Box::new(MaximizeCount),
            AutofitStrategy::BestFit => Box::new(BestFit::new(tie_break)),
        };
        Self { strategy, policy }
    }

    pub fn strategy(&self) -> AutofitStrategy {
        self.strategy
    }

    /// Chooses the count automatically.
    ///
    /// Returns a solution with `count == 0` when nothing fits.
    pub fn autofit(&self, problem: &Problem) -> Solution {
        let solution = self.policy.autofit(problem);
        debug!(
            strategy = self.strategy.name(),
            count = solution.count(),
            margin = solution.margin(),
            gap = solution.gap();
            "Autofit finished"
        );
        solution
    }

    /// Solves for exactly `requested` elements.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::RequestedCountInfeasible`] when that count
    /// cannot be placed. A different count is never substituted.
    pub fn solve_for_requested_count(
        &self,
        problem: &Problem,
        requested: u32,
    ) -> Result<Solution, PlacementError> {
        problem
            .solve_for_count(requested)
            .ok_or(PlacementError::RequestedCountInfeasible { requested })
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(AutofitStrategy::default())
    }
}
