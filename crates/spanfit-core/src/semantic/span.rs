//! Platforms, spans and conversion between the two span conventions.
//!
//! A span is measured either between the platform axes (center to center) or
//! between the platform inner edges. The two differ by the platform radii:
//!
//! ```text
//!   axes  = edges + left_diameter/2 + right_diameter/2
//!   edges = max(0, axes - left_diameter/2 - right_diameter/2)
//! ```
//!
//! Only one of the two values is ever authoritative; [`SpanInput`] records
//! which one and [`SpanInput::resolve`] derives the other.

use serde::Deserialize;

/// The pair of circular end platforms.
///
/// Diameters are in millimeters. The solver only reads them.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Platforms {
    left_diameter: f64,
    right_diameter: f64,
}

impl Platforms {
    /// Creates a platform pair from the two diameters.
    pub fn new(left_diameter: f64, right_diameter: f64) -> Self {
        Self {
            left_diameter,
            right_diameter,
        }
    }

    /// Returns the diameter of the left platform.
    pub fn left_diameter(&self) -> f64 {
        self.left_diameter
    }

    /// Returns the diameter of the right platform.
    pub fn right_diameter(&self) -> f64 {
        self.right_diameter
    }

    /// Returns the radius of the left platform.
    pub fn left_radius(&self) -> f64 {
        self.left_diameter / 2.0
    }

    /// Returns the radius of the right platform.
    pub fn right_radius(&self) -> f64 {
        self.right_diameter / 2.0
    }
}

/// Converts a center-to-center span into the usable span between inner edges.
///
/// Negative results are clamped to zero.
///
/// # Examples
///
/// ```
/// # use spanfit_core::semantic::edges_from_axes;
/// assert_eq!(edges_from_axes(12000.0, 1500.0, 1500.0), 10500.0);
/// assert_eq!(edges_from_axes(1000.0, 1500.0, 1500.0), 0.0);
/// ```
pub fn edges_from_axes(axes: f64, left_diameter: f64, right_diameter: f64) -> f64 {
    (axes - (left_diameter / 2.0 + right_diameter / 2.0)).max(0.0)
}

/// Converts an inner-edge span into the center-to-center span.
///
/// Negative results are clamped to zero.
///
/// # Examples
///
/// ```
/// # use spanfit_core::semantic::axes_from_edges;
/// assert_eq!(axes_from_edges(10500.0, 1500.0, 1500.0), 12000.0);
/// ```
pub fn axes_from_edges(edges: f64, left_diameter: f64, right_diameter: f64) -> f64 {
    (edges + (left_diameter / 2.0 + right_diameter / 2.0)).max(0.0)
}

/// The authoritative span value, tagged with the convention it was given in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpanInput {
    /// Center-to-center distance between the platform axes.
    Axes(f64),
    /// Distance between the platform inner edges.
    Edges(f64),
}

impl SpanInput {
    /// Resolves the authoritative value into a [`Span`] holding both
    /// conventions.
    pub fn resolve(self, platforms: &Platforms) -> Span {
        let (left, right) = (platforms.left_diameter(), platforms.right_diameter());
        match self {
            Self::Axes(axes) => Span {
                axes: axes.max(0.0),
                edges: edges_from_axes(axes, left, right),
                source: self,
            },
            Self::Edges(edges) => Span {
                axes: axes_from_edges(edges, left, right),
                edges: edges.max(0.0),
                source: self,
            },
        }
    }
}

/// A resolved span with both conventions available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    axes: f64,
    edges: f64,
    source: SpanInput,
}

impl Span {
    /// Returns the center-to-center span.
    pub fn axes(&self) -> f64 {
        self.axes
    }

    /// Returns the usable span between the platform inner edges.
    pub fn edges(&self) -> f64 {
        self.edges
    }

    /// Returns the value this span was resolved from.
    pub fn source(&self) -> SpanInput {
        self.source
    }
}
