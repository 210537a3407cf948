//! CSS colors for fills and strokes.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A parsed CSS color.
///
/// Named colors keep their name when displayed, so a configured `"teal"`
/// ends up as `fill="teal"` in the SVG output.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parses any CSS color syntax: hex, `rgb(...)`, `hsl(...)` or a name.
    ///
    /// ```
    /// use spanfit_core::color::Color;
    ///
    /// assert!(Color::new("#cfe2ff").is_ok());
    /// assert!(Color::new("rgba(43, 107, 107, 0.5)").is_ok());
    /// assert!(Color::new("plywood").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a message naming the rejected input.
    pub fn new(css: &str) -> Result<Self, String> {
        DynamicColor::from_str(css)
            .map(|color| Self { color })
            .map_err(|err| format!("invalid color `{css}`: {err}"))
    }

    /// Opacity between 0.0 and 1.0.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}
