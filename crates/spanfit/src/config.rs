//! Configuration types for spanfit planning and rendering.
//!
//! This module provides configuration structures that control how counts
//! are chosen and how diagrams are styled. All types implement
//! [`serde::Deserialize`] for loading from external sources, and every field
//! has a default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining solver and style settings.
//! - [`SolverConfig`] - Autofit strategy, fallback policy and display rounding.
//! - [`StyleConfig`] - Colors, canvas size and label spacing of the SVG output.
//!
//! # Example
//!
//! ```
//! # use spanfit::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     [solver]
//!     autofit = "best_fit"
//!
//!     [style]
//!     platform_color = "lightsteelblue"
//! "#).unwrap();
//!
//! assert_eq!(config.solver().autofit().to_string(), "best_fit");
//! assert!(config.style().platform_color().unwrap().is_some());
//! ```

use serde::Deserialize;

use spanfit_core::color::Color;

use crate::layout::{session::FallbackPolicy, solver::AutofitStrategy, solver::DEFAULT_TIE_BREAK};

/// Top-level application configuration combining solver and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Solver configuration section.
    #[serde(default)]
    solver: SolverConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified solver and style configurations.
    pub fn new(solver: SolverConfig, style: StyleConfig) -> Self {
        Self { solver, style }
    }

    /// Returns the solver configuration.
    pub fn solver(&self) -> &SolverConfig {
        &self.solver
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// How the element count is chosen.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// [`AutofitStrategy`] used when no count is requested.
    autofit: AutofitStrategy,

    /// [`FallbackPolicy`] applied when a requested count does not fit.
    fallback: FallbackPolicy,

    /// Weight of the margin term when `best_fit` scores candidates.
    tie_break: f64,

    /// Decimal places shown in labels and the summary.
    display_precision: u8,
}

impl SolverConfig {
    pub fn new(autofit: AutofitStrategy, fallback: FallbackPolicy) -> Self {
        Self {
            autofit,
            fallback,
            ..Self::default()
        }
    }

    pub fn autofit(&self) -> AutofitStrategy {
        self.autofit
    }

    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    pub fn tie_break(&self) -> f64 {
        self.tie_break
    }

    pub fn display_precision(&self) -> u8 {
        self.display_precision
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            autofit: AutofitStrategy::default(),
            fallback: FallbackPolicy::default(),
            tie_break: DEFAULT_TIE_BREAK,
            display_precision: 0,
        }
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Colors are CSS color strings. Unset colors fall back to renderer
/// defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Option<String>,
    platform_color: Option<String>,
    element_color: Option<String>,
    /// Color of ruler labels and notes.
    label_color: Option<String>,
    font_family: String,
    /// Label font size in pixels.
    font_size: u16,
    canvas_width: f32,
    canvas_height: f32,
    /// Minimum horizontal distance, in pixels, between labels on one level.
    label_spacing: f32,
    /// Extra distance, in pixels, between consecutive label levels.
    level_step: f32,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        parse_color(self.background_color.as_deref(), "background")
    }

    /// Returns the parsed platform [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the color string is invalid.
    pub fn platform_color(&self) -> Result<Option<Color>, String> {
        parse_color(self.platform_color.as_deref(), "platform")
    }

    /// Returns the parsed element [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the color string is invalid.
    pub fn element_color(&self) -> Result<Option<Color>, String> {
        parse_color(self.element_color.as_deref(), "element")
    }

    /// Returns the parsed label [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the color string is invalid.
    pub fn label_color(&self) -> Result<Option<Color>, String> {
        parse_color(self.label_color.as_deref(), "label")
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn canvas_width(&self) -> f32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f32 {
        self.canvas_height
    }

    pub fn label_spacing(&self) -> f32 {
        self.label_spacing
    }

    pub fn level_step(&self) -> f32 {
        self.level_step
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            platform_color: None,
            element_color: None,
            label_color: None,
            font_family: "sans-serif".to_string(),
            font_size: 12,
            canvas_width: 1100.0,
            canvas_height: 400.0,
            label_spacing: 14.0,
            level_step: 34.0,
        }
    }
}

fn parse_color(value: Option<&str>, what: &str) -> Result<Option<Color>, String> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("Invalid {what} color in config: {err}"))
}
