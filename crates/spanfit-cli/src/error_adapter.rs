//! Error adapter for converting SpanfitError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Input errors that
//! carry a source location are shown with a labelled snippet of the layout
//! file; everything else is rendered as a plain report with a code and, for
//! placement errors, a hint.

use std::{fmt, ops::Range};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use spanfit::{PlacementError, SpanfitError};

/// Adapter for [`SpanfitError`] values.
///
/// Wraps a borrowed error and implements [`MietteDiagnostic`] so that the
/// CLI can hand it to a miette report handler.
pub struct ErrorAdapter<'a>(pub &'a SpanfitError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            SpanfitError::Io(_) => "spanfit::io",
            SpanfitError::Input { .. } => "spanfit::input",
            SpanfitError::Placement(err) => placement_code(err),
            SpanfitError::Config(_) => "spanfit::config",
            SpanfitError::Export(_) => "spanfit::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            SpanfitError::Placement(err) => placement_help(err)?,
            SpanfitError::Config(_) => {
                "check the [solver] and [style] sections of the configuration file"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match &self.0 {
            SpanfitError::Input {
                span: Some(_), src, ..
            } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match &self.0 {
            SpanfitError::Input {
                span: Some(span), ..
            } => {
                let label = LabeledSpan::new_primary_with_span(
                    Some("here".to_string()),
                    span_to_miette(span),
                );
                Some(Box::new(std::iter::once(label)))
            }
            _ => None,
        }
    }
}

fn placement_code(err: &PlacementError) -> &'static str {
    match err {
        PlacementError::InvalidFootprint { .. } => "spanfit::placement::footprint",
        PlacementError::InvalidMarginRange { .. } => "spanfit::placement::margin_range",
        PlacementError::NoFeasiblePlacement => "spanfit::placement::infeasible",
        PlacementError::RequestedCountInfeasible { .. } => "spanfit::placement::requested_count",
    }
}

fn placement_help(err: &PlacementError) -> Option<&'static str> {
    match err {
        PlacementError::InvalidFootprint { .. } => {
            Some("a suspended board needs width greater than twice its sub_offset")
        }
        PlacementError::InvalidMarginRange { .. } => {
            Some("margin_min must not be negative and must not exceed margin_max")
        }
        PlacementError::RequestedCountInfeasible { .. } => Some(
            "lower the count, or set solver.fallback to \"decrement\" or \"autofit\"",
        ),
        PlacementError::NoFeasiblePlacement => None,
    }
}

/// Convert a byte range into a miette [`SourceSpan`].
fn span_to_miette(span: &Range<usize>) -> SourceSpan {
    SourceSpan::new(span.start.into(), span.len())
}
