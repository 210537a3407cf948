//! Human-readable summary of a plan.
//!
//! Values are rounded for display only; the plan itself keeps full
//! precision.

use std::fmt;

use spanfit_core::semantic::ElementKind;

use crate::layout::Plan;

/// Rounds `value` to `precision` decimal places.
///
/// # Examples
///
/// ```
/// # use spanfit::summary::round_to;
/// assert_eq!(round_to(1024.6, 0), 1025.0);
/// assert_eq!(round_to(12.345, 1), 12.3);
/// ```
pub fn round_to(value: f64, precision: u8) -> f64 {
    let factor = 10f64.powi(i32::from(precision));
    (value * factor).round() / factor
}

/// One labelled line of a [`Summary`].
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    label: &'static str,
    value: String,
}

impl SummaryRow {
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Key values of a plan, formatted for people.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    rows: Vec<SummaryRow>,
}

impl Summary {
    /// Builds the summary rows for `plan`.
    ///
    /// Suspended boards get three extra rows: the sub offset, the distance
    /// between a board's own hangers and, with more than one board, the
    /// distance between the hangers of adjacent boards.
    pub fn from_plan(plan: &Plan, precision: u8) -> Self {
        let mm = |value: f64| format!("{:.*} mm", usize::from(precision), round_to(value, precision));
        let solution = plan.solution();
        let platforms = plan.platforms();
        let mut rows = Vec::new();
        let mut push = |label, value| rows.push(SummaryRow { label, value });

        push("Element", plan.element().kind().to_string());
        push("Span (axes)", mm(plan.span().axes()));
        push("Span (edges)", mm(plan.span().edges()));
        if let Some(requested) = plan.requested().filter(|&n| n != solution.count()) {
            push("Requested count", requested.to_string());
        }
        push("Count", solution.count().to_string());

        if !plan.is_empty() {
            push("Gap", mm(solution.gap()));
            push("Margin", mm(solution.margin()));
        }
        push(
            "Platform diameters (L / R)",
            format!(
                "{} / {}",
                mm(platforms.left_diameter()),
                mm(platforms.right_diameter())
            ),
        );

        if plan.element().kind() == ElementKind::SuspendedBar {
            let element = plan.element();
            let own_hangers = (element.width() - 2.0 * element.sub_offset()).max(0.0);
            push("Sub offset", mm(element.sub_offset()));
            push("Hanger spacing (same board)", mm(own_hangers));
            if solution.count() > 1 {
                push("Hanger spacing (adjacent boards)", mm(solution.gap() + own_hangers));
            }
        }

        Self { rows }
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    /// Returns the value of the row labelled `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(SummaryRow::value)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.rows.iter().map(|row| row.label.len()).max().unwrap_or(0);
        for row in &self.rows {
            writeln!(f, "{:<width$}  {}", row.label, row.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use spanfit_core::semantic::{Constraints, ElementSpec, Platforms, SpanInput};

    use super::*;
    use crate::{
        input::LayoutInput,
        layout::{self, session::Session, solver::Solver},
    };

    fn plan_for(element: ElementSpec, count: Option<u32>) -> Plan {
        let input = LayoutInput::new(
            Platforms::new(1500.0, 1500.0),
            SpanInput::Edges(10500.0),
            element,
            Constraints::new(150.0, 200.0, 600.0),
        )
        .with_count(count);
        layout::plan(&input, &Solver::default(), &mut Session::default()).unwrap()
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(149.5, 0), 150.0);
        assert_eq!(round_to(-0.04, 1), -0.0);
        assert_eq!(round_to(1.0 / 3.0, 2), 0.33);
    }

    #[test]
    fn test_suspended_rows() {
        let summary = Summary::from_plan(&plan_for(ElementSpec::suspended_bar(1240.0, 20.0), None), 0);

        assert_eq!(summary.get("Count"), Some("6"));
        assert_eq!(summary.get("Gap"), Some("600 mm"));
        assert_eq!(summary.get("Margin"), Some("150 mm"));
        assert_eq!(summary.get("Sub offset"), Some("20 mm"));
        assert_eq!(summary.get("Hanger spacing (same board)"), Some("1200 mm"));
        assert_eq!(summary.get("Hanger spacing (adjacent boards)"), Some("1800 mm"));
    }

    #[test]
    fn test_board_rows_skip_hanger_values() {
        let summary = Summary::from_plan(&plan_for(ElementSpec::bar(1200.0), Some(5)), 1);

        assert_eq!(summary.get("Count"), Some("5"));
        assert_eq!(summary.get("Gap"), Some("1025.0 mm"));
        assert_eq!(summary.get("Requested count"), None);
        assert_eq!(summary.get("Sub offset"), None);
    }

    #[test]
    fn test_requested_count_shown_when_replaced() {
        let summary = Summary::from_plan(&plan_for(ElementSpec::bar(1200.0), Some(9)), 0);

        assert_eq!(summary.get("Requested count"), Some("9"));
        assert_eq!(summary.get("Count"), Some("6"));
    }

    #[test]
    fn test_display_aligns_labels() {
        let summary = Summary::from_plan(&plan_for(ElementSpec::point(), None), 0);
        let text = summary.to_string();

        assert!(text.lines().any(|line| line.starts_with("Count ")));
        assert_eq!(text.lines().count(), summary.rows().len());
    }
}
