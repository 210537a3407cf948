//! Semantic layout model types.
//!
//! These types describe a placement problem after input has been read and
//! before it is solved: the two end platforms, the span between them, the
//! kind of element being placed and the spacing constraints.
//!
//! # Pipeline Position
//!
//! ```text
//! Layout description (TOML)
//!     ↓ input
//! Semantic Model (these types)
//!     ↓ unit conversion + footprint resolution
//! Placement Problem
//!     ↓ solver
//! Solution
//!     ↓ projector
//! Projected positions
//!     ↓ export
//! SVG
//! ```
//!
//! # Organization
//!
//! - [`span`] - [`Platforms`], [`SpanInput`] and [`Span`], plus unit conversion
//! - [`element`] - [`ElementKind`] and [`ElementSpec`], plus footprint resolution
//! - [`constraints`] - [`Constraints`] on margins and gaps

pub mod constraints;
pub mod element;
pub mod span;

pub use constraints::*;
pub use element::*;
pub use span::*;
