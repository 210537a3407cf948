//! Text labels for dimension ticks and notes.
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Label`] - A renderable piece of text, optionally rotated about its anchor
//!
//! Text is not shaped; sizes are estimated from the character count, which
//! is adequate for the short numeric labels of a dimension ruler.

use svg::{self, node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// Average advance of a glyph relative to the font size.
const GLYPH_WIDTH_RATIO: f32 = 0.6;

/// Defines the visual style for text elements.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `12` |
/// | Text color | `#111111` |
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Color,
}

impl TextDefinition {
    /// Creates a text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the font family.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the font size in pixels.
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Returns the text color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the font family.
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the text color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 12,
            color: Color::new("#111111").expect("valid CSS color"),
        }
    }
}

/// A text label anchored at its center.
///
/// A rotation of `-90.0` turns the label to read bottom-to-top, which is how
/// ruler values are printed so that neighbouring values overlap less.
#[derive(Debug, Clone)]
pub struct Label {
    definition: TextDefinition,
    content: String,
    rotation: f32,
}

impl Label {
    /// Creates an unrotated label.
    pub fn new(definition: &TextDefinition, content: impl Into<String>) -> Self {
        Self {
            definition: definition.clone(),
            content: content.into(),
            rotation: 0.0,
        }
    }

    /// Sets the rotation in degrees around the anchor (builder style).
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Returns the label text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns `true` when the label is turned a quarter turn either way.
    fn is_vertical(&self) -> bool {
        (self.rotation.abs() - 90.0).abs() < f32::EPSILON
    }
}

impl Drawable for Label {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let mut text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("class", "label")
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size())
            .set("fill", self.definition.color().to_string())
            .add(SvgText::new(self.content.as_str()));

        if self.rotation != 0.0 {
            text = text.set(
                "transform",
                format!("rotate({} {} {})", self.rotation, position.x(), position.y()),
            );
        }

        output.add_to_layer(RenderLayer::Text, Box::new(text));
        output
    }

    fn size(&self) -> Size {
        let font_size = f32::from(self.definition.font_size());
        let advance = self.content.chars().count() as f32 * font_size * GLYPH_WIDTH_RATIO;

        if self.is_vertical() {
            Size::new(font_size, advance)
        } else {
            Size::new(advance, font_size)
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_text_definition_setters() {
        let mut definition = TextDefinition::new();
        definition.set_font_family("Helvetica");
        definition.set_font_size(14);
        definition.set_color(Color::new("navy").unwrap());

        assert_eq!(definition.font_family(), "Helvetica");
        assert_eq!(definition.font_size(), 14);
        assert_eq!(definition.color().to_string(), "navy");
    }

    #[test]
    fn test_label_size_swaps_when_vertical() {
        let definition = TextDefinition::default();
        let flat = Label::new(&definition, "1200");
        let upright = Label::new(&definition, "1200").with_rotation(-90.0);

        assert_approx_eq!(f32, flat.size().width(), upright.size().height());
        assert_approx_eq!(f32, flat.size().height(), upright.size().width());
        assert_approx_eq!(f32, upright.size().width(), 12.0);
    }

    #[test]
    fn test_label_renders_rotation_about_anchor() {
        let label = Label::new(&TextDefinition::default(), "450").with_rotation(-90.0);
        let nodes = label.render_to_layers(Point::new(10.0, 20.0)).render();
        let svg: String = nodes.iter().map(|n| n.to_string()).collect();

        assert!(svg.contains("rotate(-90 10 20)"));
        assert!(svg.contains("450"));
    }

    #[test]
    fn test_unrotated_label_has_no_transform() {
        let label = Label::new(&TextDefinition::default(), "note");
        let svg: String = label
            .render_to_layers(Point::default())
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect();

        assert!(!svg.contains("transform"));
        assert_eq!(label.content(), "note");
    }
}
