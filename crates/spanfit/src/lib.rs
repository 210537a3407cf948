//! spanfit - Element placement between two circular platforms.
//!
//! Works out how many ropes, boards or suspended boards fit across a span
//! under margin and gap constraints, projects the result onto the span and
//! renders it as an annotated SVG diagram.

pub mod config;
pub mod input;
pub mod layout;
pub mod summary;

mod error;
mod export;

pub use spanfit_core::{color, draw, error::PlacementError, geometry, semantic};

pub use error::SpanfitError;

use log::{debug, info, trace, warn};

use config::AppConfig;
use export::Exporter;
use input::LayoutInput;
use layout::{
    Plan,
    session::Session,
    solver::{Solution, Solver},
};
use summary::Summary;

/// Builder for solving and rendering span layouts.
///
/// This provides an API for processing layout descriptions through the
/// parsing, placement and rendering stages.
///
/// # Examples
///
/// ```rust,no_run
/// use spanfit::{LayoutBuilder, config::AppConfig};
///
/// let source = r#"
///     [platforms]
///     left_diameter = 1500
///     right_diameter = 1500
///     [span]
///     edges = 10500
///     [element]
///     kind = "bar"
///     width = 1200
///     [constraints]
///     margin_min = 150
///     margin_max = 200
///     target_gap = 600
/// "#;
///
/// let builder = LayoutBuilder::new(AppConfig::default());
/// let mut session = builder.new_session();
///
/// let input = builder.parse(source).expect("Failed to parse");
/// let plan = builder.plan(&input, &mut session).expect("Failed to plan");
/// let svg = builder.render_svg(&plan).expect("Failed to render");
///
/// println!("{}", builder.summarize(&plan));
/// ```
#[derive(Debug, Default)]
pub struct LayoutBuilder {
    config: AppConfig,
    solver: Solver,
}

impl LayoutBuilder {
    /// Create a new layout builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including solver and style settings
    pub fn new(config: AppConfig) -> Self {
        let solver =
            Solver::with_tie_break(config.solver().autofit(), config.solver().tie_break());
        Self { config, solver }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Creates a session using the configured fallback policy.
    pub fn new_session(&self) -> Session {
        Session::new(self.config.solver().fallback())
    }

    /// Parse a TOML layout description.
    ///
    /// # Errors
    ///
    /// Returns `SpanfitError::Input` for malformed or structurally invalid
    /// descriptions.
    pub fn parse(&self, source: &str) -> Result<LayoutInput, SpanfitError> {
        info!("Parsing layout description");

        let input = LayoutInput::from_toml(source)?;

        debug!("Layout description parsed successfully");
        trace!(input:? = input; "Parsed layout");

        Ok(input)
    }

    /// Solve a layout and project its elements.
    ///
    /// When nothing fits, the result is an empty plan (platforms and ruler
    /// only) and a warning is logged; this is not an error.
    ///
    /// # Errors
    ///
    /// Returns `SpanfitError::Placement` for an invalid footprint or margin
    /// range, and for a requested count the session's fallback policy
    /// rejects.
    pub fn plan(&self, input: &LayoutInput, session: &mut Session) -> Result<Plan, SpanfitError> {
        info!(
            strategy = self.solver.strategy().name(),
            requested:? = input.count();
            "Planning layout"
        );

        match layout::plan(input, &self.solver, session) {
            Ok(plan) => Ok(plan),
            Err(PlacementError::NoFeasiblePlacement) => {
                warn!(
                    edges = input.span().edges(),
                    kind = input.element().kind().to_string();
                    "No feasible placement; rendering platforms only"
                );
                let footprint = input.element().footprint()?;
                Ok(Plan::new(input, Solution::empty(footprint)))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Render a plan to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `SpanfitError::Export` for invalid style colors or rendering
    /// failures.
    pub fn render_svg(&self, plan: &Plan) -> Result<String, SpanfitError> {
        info!(count = plan.solution().count(); "Rendering SVG");

        let mut svg_exporter = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .with_precision(self.config.solver().display_precision())
            .build()?;

        let mut buffer = Vec::new();
        svg_exporter.export_plan(plan, &mut buffer)?;

        let svg_string = String::from_utf8(buffer)
            .map_err(|err| export::Error::Render(err.to_string()))?;

        info!("SVG rendered successfully");
        Ok(svg_string)
    }

    /// Summarize a plan with the configured display precision.
    pub fn summarize(&self, plan: &Plan) -> Summary {
        Summary::from_plan(plan, self.config.solver().display_precision())
    }
}
