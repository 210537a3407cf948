//! Output backends for solved plans.
//!
//! A [`Plan`] is the last in-memory stage: parse, solve and project happen
//! before anything reaches an [`Exporter`]. Only SVG exists today, built with
//! [`svg::SvgBuilder`].
//!
//! Failures are reported as [`Error`], which the crate error wraps as
//! [`SpanfitError::Export`](crate::SpanfitError::Export).

pub mod svg;

use std::io;

use thiserror::Error;

use crate::layout::Plan;

/// Writes a plan in some output format.
pub trait Exporter {
    /// Encodes `plan` into `writer`.
    ///
    /// # Errors
    ///
    /// [`Error::Render`] when the backend cannot express the plan (for
    /// example a configured color it cannot parse), [`Error::Io`] when the
    /// writer fails.
    fn export_plan(&mut self, plan: &Plan, writer: &mut dyn io::Write) -> Result<(), Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot render plan: {0}")]
    Render(String),

    #[error("cannot write output: {0}")]
    Io(#[source] io::Error),
}
