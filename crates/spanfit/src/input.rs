//! Layout descriptions.
//!
//! A layout is described in TOML:
//!
//! ```toml
//! count = 6                 # optional, autofit when absent
//!
//! [platforms]
//! left_diameter = 1500
//! right_diameter = 1500
//!
//! [span]
//! edges = 10500             # or `axes`, never both
//!
//! [element]
//! kind = "suspended_bar"    # "point", "bar" or "suspended_bar"
//! width = 1200
//! sub_offset = 20
//!
//! [constraints]
//! margin_min = 150
//! margin_max = 200
//! target_gap = 600
//! ```
//!
//! Lengths are millimeters.

use std::ops::Range;

use log::debug;
use serde::Deserialize;
use toml::Spanned;

use spanfit_core::semantic::{Constraints, ElementKind, ElementSpec, Platforms, Span, SpanInput};

use crate::error::SpanfitError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLayout {
    #[serde(default)]
    count: Option<u32>,
    platforms: Spanned<Platforms>,
    span: Spanned<RawSpan>,
    element: Spanned<ElementSpec>,
    constraints: Constraints,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSpan {
    #[serde(default)]
    axes: Option<f64>,
    #[serde(default)]
    edges: Option<f64>,
}

/// A parsed and structurally checked layout description.
///
/// Placement constraints are checked later, when the problem is built, so
/// that a bad footprint is reported before a bad margin range.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutInput {
    count: Option<u32>,
    platforms: Platforms,
    span: SpanInput,
    element: ElementSpec,
    constraints: Constraints,
}

impl LayoutInput {
    pub fn new(
        platforms: Platforms,
        span: SpanInput,
        element: ElementSpec,
        constraints: Constraints,
    ) -> Self {
        Self {
            count: None,
            platforms,
            span,
            element,
            constraints,
        }
    }

    /// Requests an exact element count instead of autofit (builder style).
    pub fn with_count(mut self, count: Option<u32>) -> Self {
        self.count = count;
        self
    }

    /// Parses a TOML layout description.
    ///
    /// # Errors
    ///
    /// Returns [`SpanfitError::Input`] for malformed TOML, unknown keys,
    /// a `[span]` table without exactly one of `axes` and `edges`,
    /// non-positive platform diameters, or a negative sub offset.
    pub fn from_toml(source: &str) -> Result<Self, SpanfitError> {
        let raw: RawLayout = toml::from_str(source).map_err(|err| {
            SpanfitError::new_input_error(err.message().to_string(), err.span(), source)
        })?;

        let fail = |message: &str, span: Range<usize>| {
            SpanfitError::new_input_error(message, Some(span), source)
        };

        let span_range = raw.span.span();
        let span = match raw.span.into_inner() {
            RawSpan {
                axes: Some(axes),
                edges: None,
            } => SpanInput::Axes(axes),
            RawSpan {
                axes: None,
                edges: Some(edges),
            } => SpanInput::Edges(edges),
            RawSpan {
                axes: Some(_),
                edges: Some(_),
            } => return Err(fail("span sets both `axes` and `edges`; keep only one", span_range)),
            RawSpan {
                axes: None,
                edges: None,
            } => return Err(fail("span needs either `axes` or `edges`", span_range)),
        };
        if !span_value(span).is_finite() || span_value(span) < 0.0 {
            return Err(fail("span must be a non-negative length", span_range));
        }

        let platforms_range = raw.platforms.span();
        let platforms = raw.platforms.into_inner();
        let diameter_ok = |d: f64| d.is_finite() && d > 0.0;
        if !diameter_ok(platforms.left_diameter()) || !diameter_ok(platforms.right_diameter()) {
            return Err(fail("platform diameters must be greater than zero", platforms_range));
        }

        let element_range = raw.element.span();
        let element = raw.element.into_inner();
        if element.kind() == ElementKind::SuspendedBar && element.sub_offset() < 0.0 {
            return Err(fail("`sub_offset` must not be negative", element_range));
        }

        let input = Self {
            count: raw.count,
            platforms,
            span,
            element,
            constraints: raw.constraints,
        };
        debug!(
            kind = input.element.kind().to_string(),
            count:? = input.count;
            "Layout description parsed"
        );

        Ok(input)
    }

    /// The explicitly requested count, if any.
    pub fn count(&self) -> Option<u32> {
        self.count
    }

    pub fn platforms(&self) -> &Platforms {
        &self.platforms
    }

    /// The authoritative span value as given.
    pub fn span_input(&self) -> SpanInput {
        self.span
    }

    /// The span with both conventions resolved.
    pub fn span(&self) -> Span {
        self.span.resolve(&self.platforms)
    }

    pub fn element(&self) -> &ElementSpec {
        &self.element
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }
}

fn span_value(span: SpanInput) -> f64 {
    match span {
        SpanInput::Axes(value) | SpanInput::Edges(value) => value,
    }
}
