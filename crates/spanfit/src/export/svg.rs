//! SVG rendering of plans.
//!
//! The diagram shows the span from the side: both platforms as half discs
//! with their flat faces outward, the elements along the vertical center and
//! a dimension ruler below them.
//!
//! ```text
//!  (  |      o      o      o      |  )      elements at the center line
//!     |______|______|______|______|         ruler, 120 px lower
//!     0     150    ...           10500      labels rotated -90 degrees
//! ```
//!
//! Horizontal positions are scaled so that both platforms and the span fit
//! between the side paddings; vertical sizes are fixed in pixels.

mod elements;
mod ruler;

use std::io;

use log::{debug, info};
use svg::{self, node::element as svg_element};

use spanfit_core::{
    color::Color,
    draw::{
        Drawable, Facing, Label, LayeredOutput, Platform, StrokeDefinition, TextDefinition,
        TickDefinition,
    },
    geometry::{Bounds, Point, Size},
};

use super::{Error, Exporter};
use crate::{
    config::StyleConfig,
    layout::{Plan, projector},
};

const SIDE_PADDING: f32 = 60.0;
const RULER_DROP: f32 = 120.0;
const BOARD_HEIGHT: f32 = 24.0;
const HANG_HEIGHT: f32 = 60.0;
const ROPE_RADIUS: f32 = 6.0;
/// Room kept around content that spills past the configured canvas.
const OVERFLOW_PADDING: f32 = 8.0;

/// Maps millimeters along the span onto canvas pixels.
///
/// The millimeter origin is the outer edge of the left platform, so the
/// left platform center sits at `left_diameter / 2`.
#[derive(Debug, Clone, Copy)]
struct Frame {
    scale: f64,
    padding: f32,
    y_center: f32,
    ruler_y: f32,
}

impl Frame {
    fn new(plan: &Plan, canvas: Size) -> Self {
        let platforms = plan.platforms();
        let total = platforms.left_diameter() + plan.span().edges() + platforms.right_diameter();
        let drawable = f64::from(canvas.width() - 2.0 * SIDE_PADDING).max(0.0);
        let scale = if total > 0.0 { drawable / total } else { 0.0 };
        let y_center = canvas.height() / 2.0;

        Self {
            scale,
            padding: SIDE_PADDING,
            y_center,
            ruler_y: y_center + RULER_DROP,
        }
    }

    fn x(&self, millimeters: f64) -> f32 {
        self.padding + (millimeters * self.scale) as f32
    }

    fn length(&self, millimeters: f64) -> f32 {
        (millimeters * self.scale) as f32
    }
}

/// Vertical range the document must show.
///
/// Starts as the configured canvas and grows when platforms or stacked
/// ruler labels reach past it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Extent {
    top: f32,
    bottom: f32,
}

impl Extent {
    fn new(canvas: Size) -> Self {
        Self {
            top: 0.0,
            bottom: canvas.height(),
        }
    }

    fn include(&mut self, bounds: Bounds) {
        if bounds.min_y() < self.top {
            self.top = bounds.min_y() - OVERFLOW_PADDING;
        }
        if bounds.max_y() > self.bottom {
            self.bottom = bounds.max_y() + OVERFLOW_PADDING;
        }
    }

    fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Builder for [`Svg`] renderers.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
    precision: u8,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses colors and sizes from `style` instead of the defaults.
    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the decimal places shown in ruler labels.
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    /// Resolves the style into a renderer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] when a configured color is invalid.
    pub fn build(self) -> Result<Svg, Error> {
        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);

        let background = style.background_color().map_err(Error::Render)?;
        let platform_fill = style
            .platform_color()
            .map_err(Error::Render)?
            .map_or_else(|| color("#cfe2ff"), Ok)?;
        let element_color = style.element_color().map_err(Error::Render)?;
        let board_fill = element_color.map_or_else(|| color("#ffd580"), Ok)?;
        let rope_fill = element_color.map_or_else(|| color("#2b6b6b"), Ok)?;

        let wood = color("#b36b00")?;
        let ink = color("#333333")?;

        let mut text = TextDefinition::new();
        text.set_font_family(style.font_family());
        text.set_font_size(style.font_size());
        if let Some(label_color) = style.label_color().map_err(Error::Render)? {
            text.set_color(label_color);
        }

        let mut ticks = TickDefinition::new(StrokeDefinition::solid(ink, 1.0), text);
        ticks.set_level_step(style.level_step());

        Ok(Svg {
            canvas: Size::new(style.canvas_width(), style.canvas_height()),
            background,
            platform_fill,
            platform_stroke: StrokeDefinition::solid(color("#2563eb")?, 2.0),
            board_fill,
            board_stroke: StrokeDefinition::solid(wood, 1.0),
            rope_fill,
            hanger_stroke: StrokeDefinition::solid(wood, 3.0),
            ruler_stroke: StrokeDefinition::solid(ink, 2.0),
            ticks,
            label_spacing: style.label_spacing(),
            precision: self.precision,
        })
    }
}

fn color(css: &str) -> Result<Color, Error> {
    Color::new(css).map_err(Error::Render)
}

/// An SVG renderer with a resolved style.
#[derive(Debug)]
pub struct Svg {
    canvas: Size,
    background: Option<Color>,
    platform_fill: Color,
    platform_stroke: StrokeDefinition,
    board_fill: Color,
    board_stroke: StrokeDefinition,
    rope_fill: Color,
    hanger_stroke: StrokeDefinition,
    ruler_stroke: StrokeDefinition,
    ticks: TickDefinition,
    label_spacing: f32,
    precision: u8,
}

impl Svg {
    /// Renders a plan into a complete SVG document.
    pub fn render_plan(&self, plan: &Plan) -> svg::Document {
        let frame = Frame::new(plan, self.canvas);
        debug!(scale = frame.scale; "Canvas frame computed");

        // Re-project so that positions share the frame's origin
        let projection = projector::project(
            plan.solution(),
            plan.element(),
            plan.platforms(),
            plan.span(),
            plan.platforms().left_radius(),
        );

        let mut extent = Extent::new(self.canvas);
        let mut output = LayeredOutput::new();
        output.merge(self.render_platforms(plan, &frame, &mut extent));
        output.merge(self.render_elements(&projection, plan.element(), &frame));
        output.merge(self.render_ruler(plan, &projection, &frame, &mut extent));
        if plan.is_empty() {
            output.merge(self.render_empty_note(&frame));
        }
        if extent != Extent::new(self.canvas) {
            debug!(top = extent.top, bottom = extent.bottom; "Content exceeds canvas height");
        }

        let (width, top, height) = (self.canvas.width(), extent.top, extent.height());
        let doc = svg::Document::new()
            .set("viewBox", format!("0 {top} {width} {height}"))
            .set("width", width)
            .set("height", height)
            .add(self.style_block());

        output
            .render()
            .into_iter()
            .fold(self.add_background(doc, extent), |doc, node| doc.add(node))
    }

    fn add_background(&self, doc: svg::Document, extent: Extent) -> svg::Document {
        match self.background {
            Some(color) => doc.add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", extent.top)
                    .set("width", self.canvas.width())
                    .set("height", extent.height())
                    .set("fill", color.to_string())
                    .set("fill-opacity", color.alpha()),
            ),
            None => doc,
        }
    }

    /// Class rules mirroring the inline presentation attributes.
    fn style_block(&self) -> svg_element::Style {
        let text = self.ticks.text();
        let css = format!(
            ".tick{{stroke:{ink};stroke-width:1}}\n\
             .label{{font-size:{font}px;fill:{label}}}\n\
             .platform{{fill:{pf};stroke:{ps};stroke-width:{psw}}}\n\
             .board{{fill:{bf};stroke:{bs}}}\n\
             .rope{{fill:{rope}}}\n\
             .hang{{stroke:{hs};stroke-width:{hsw}}}\n",
            ink = self.ruler_stroke.color(),
            font = text.font_size(),
            label = text.color(),
            pf = self.platform_fill,
            ps = self.platform_stroke.color(),
            psw = self.platform_stroke.width(),
            bf = self.board_fill,
            bs = self.board_stroke.color(),
            rope = self.rope_fill,
            hs = self.hanger_stroke.color(),
            hsw = self.hanger_stroke.width(),
        );
        svg_element::Style::new(css)
    }

    fn render_platforms(&self, plan: &Plan, frame: &Frame, extent: &mut Extent) -> LayeredOutput {
        let platforms = plan.platforms();
        let mut output = LayeredOutput::new();

        let left = Platform::new(
            frame.length(platforms.left_radius()),
            Facing::Right,
            self.platform_fill,
            self.platform_stroke.clone(),
        );
        let left_center = Point::new(frame.x(platforms.left_radius()), frame.y_center);
        extent.include(left.bounds(left_center));
        output.merge(left.render_to_layers(left_center));

        let right_center = platforms.left_diameter() + plan.span().edges() + platforms.right_radius();
        let right = Platform::new(
            frame.length(platforms.right_radius()),
            Facing::Left,
            self.platform_fill,
            self.platform_stroke.clone(),
        );
        let right_center = Point::new(frame.x(right_center), frame.y_center);
        extent.include(right.bounds(right_center));
        output.merge(right.render_to_layers(right_center));

        output
    }

    fn render_empty_note(&self, frame: &Frame) -> LayeredOutput {
        let note = Label::new(self.ticks.text(), "No feasible placement for these constraints");
        note.render_to_layers(Point::new(self.canvas.width() / 2.0, frame.y_center - HANG_HEIGHT))
    }
}

impl Exporter for Svg {
    fn export_plan(&mut self, plan: &Plan, writer: &mut dyn io::Write) -> Result<(), Error> {
        let doc = self.render_plan(plan);
        svg::write(writer, &doc).map_err(Error::Io)?;
        info!(count = plan.solution().count(); "SVG written");
        Ok(())
    }
}
